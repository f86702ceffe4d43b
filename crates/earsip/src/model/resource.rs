//! Per-resource configuration of the generic list card.
//!
//! [`ListSource`] (from core) says where rows come from; [`Resource`] adds
//! how they are shown and which row actions write back to the service.

use std::future::Future;

use chrono::NaiveDate;
use earsip_api::{
    ApiClient, Attachment, InboxMail, LogbookEntry, MailKind, OutboxMail, Role, User, date_only,
};
use earsip_core::list::{
    DispositionQueue, InboxList, LogbookList, OutboxList, UserList, VerificationQueue,
};
use earsip_core::policy::{can_dispose, can_edit_mail, can_verify};
use earsip_core::{FormKind, FormState, ListSource};
use tracing::warn;

/// Buttons offered on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Open the detail dialog.
    Detail,
    /// Open the edit dialog.
    Edit,
    /// Ask to delete.
    Delete,
    /// Open the disposition dialog.
    Dispose,
    /// Ask to verify.
    Verify,
}

impl RowAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Detail => "Detail",
            Self::Edit => "Edit",
            Self::Delete => "Hapus",
            Self::Dispose => "Disposisi",
            Self::Verify => "Verifikasi",
        }
    }
}

/// A write issued from a list card.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Save an edit dialog.
    Update { id: String, form: FormState },
    /// Delete a record.
    Delete { id: String },
    /// Apply a disposition action.
    Dispose { id: String, action: String },
    /// Mark an outgoing letter verified.
    Verify { id: String },
}

impl Mutation {
    /// Success text and failure fallback.
    pub fn notices(&self) -> (&'static str, &'static str) {
        match self {
            Self::Update { form, .. } => (form.schema().success, form.schema().failure),
            Self::Delete { .. } => ("Data berhasil dihapus", "Gagal menghapus data"),
            Self::Dispose { .. } => {
                let schema = FormKind::Disposition.schema();
                (schema.success, schema.failure)
            }
            Self::Verify { .. } => ("Surat berhasil diverifikasi", "Gagal memverifikasi surat"),
        }
    }
}

/// Display and write-back behavior of a list source.
pub trait Resource: ListSource {
    /// Column headings after the row number.
    const COLUMNS: &'static [&'static str];

    /// Server id of a row.
    fn id(item: &Self::Item) -> &str;

    /// Cell texts, one per column.
    fn cells(item: &Self::Item) -> Vec<String>;

    /// Label/value pairs of the detail dialog.
    fn details(item: &Self::Item) -> Vec<(&'static str, String)>;

    /// Downloadable files of a row.
    fn attachments(_item: &Self::Item) -> Vec<Attachment> {
        Vec::new()
    }

    /// Long text shown under the details (letter content).
    fn body(_item: &Self::Item) -> Option<String> {
        None
    }

    /// Actions `role` may take on a row, in button order.
    fn actions(item: &Self::Item, role: Role) -> Vec<RowAction>;

    /// Edit dialog for a row.
    fn editor(_item: &Self::Item) -> Option<FormState> {
        None
    }

    /// Sends a mutation.
    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static;
}

/// `YYYY-MM-DD` or ISO timestamp as `DD-MM-YYYY`; anything else unchanged.
pub fn display_date(value: &str) -> String {
    NaiveDate::parse_from_str(date_only(value), "%Y-%m-%d")
        .map_or_else(|_| value.to_string(), |d| d.format("%d-%m-%Y").to_string())
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

fn unsupported<T: ListSource>(mutation: &Mutation) -> earsip_api::Error {
    warn!("{} does not support {:?}", T::TITLE, mutation);
    earsip_api::Error::InvalidResponse(format!("{} does not support this action", T::TITLE))
}

fn mail_actions(role: Role, extra: RowAction, allowed: bool) -> Vec<RowAction> {
    let mut actions = vec![RowAction::Detail];
    if allowed {
        actions.push(extra);
    }
    if can_edit_mail(role) {
        actions.extend([RowAction::Edit, RowAction::Delete]);
    }
    actions
}

fn inbox_cells(mail: &InboxMail) -> Vec<String> {
    vec![
        mail.number.clone(),
        mail.category.clone(),
        mail.origin.clone(),
        display_date(&mail.date),
        mail.status.label().to_string(),
    ]
}

fn inbox_details(mail: &InboxMail) -> Vec<(&'static str, String)> {
    vec![
        ("Nomor Surat", mail.number.clone()),
        ("Perihal", mail.category.clone()),
        ("Tanggal Surat", display_date(&mail.date)),
        (
            "Tanggal Diterima",
            mail.received_date
                .as_deref()
                .map_or_else(|| "-".to_string(), display_date),
        ),
        ("Asal Surat", mail.origin.clone()),
        ("Ringkasan", mail.summary.clone()),
        ("Status", mail.status.label().to_string()),
        ("Tindakan", or_dash(mail.action.as_deref())),
        (
            "Diinput oleh",
            mail.created_by
                .as_ref()
                .map_or("-", |c| c.display_name())
                .to_string(),
        ),
    ]
}

fn inbox_attachments(mail: &InboxMail) -> Vec<Attachment> {
    mail.mail_pic
        .iter()
        .map(|url| Attachment {
            url: url.clone(),
            name: Some("File Surat".to_string()),
        })
        .chain(mail.attachments.iter().cloned())
        .collect()
}

fn outbox_cells(mail: &OutboxMail) -> Vec<String> {
    vec![
        mail.number.clone(),
        mail.category.clone(),
        mail.destination.clone(),
        display_date(&mail.date),
        mail.status.label().to_string(),
    ]
}

fn outbox_details(mail: &OutboxMail) -> Vec<(&'static str, String)> {
    vec![
        ("Nomor Surat", mail.number.clone()),
        ("Kategori", mail.category.clone()),
        ("Tanggal Surat", display_date(&mail.date)),
        ("Tujuan", mail.destination.clone()),
        ("Ringkasan", mail.summary.clone()),
        ("Penanda Tangan", or_dash(mail.sign.as_deref())),
        ("Status", mail.status.label().to_string()),
        (
            "Dibuat oleh",
            mail.created_by
                .as_ref()
                .map_or("-", |c| c.display_name())
                .to_string(),
        ),
    ]
}

fn outbox_attachments(mail: &OutboxMail) -> Vec<Attachment> {
    mail.file
        .iter()
        .map(|url| Attachment {
            url: url.clone(),
            name: Some("File Surat".to_string()),
        })
        .chain(mail.attachments.iter().cloned())
        .collect()
}

/// Letter HTML as readable Markdown.
fn outbox_body(mail: &OutboxMail) -> Option<String> {
    let html = mail.content.as_deref().filter(|c| !c.trim().is_empty())?;
    Some(htmd::convert(html).unwrap_or_else(|_| html.to_string()))
}

async fn mutate_inbox(client: ApiClient, mutation: Mutation) -> earsip_api::Result<()> {
    match mutation {
        Mutation::Update { id, form } => client.update_inbox(&id, form.to_form_data()).await?,
        Mutation::Delete { id } => client.delete_inbox(&id).await?,
        Mutation::Dispose { id, action } => client.apply_disposition(&id, &action).await?,
        other @ Mutation::Verify { .. } => return Err(unsupported::<InboxList>(&other)),
    };
    Ok(())
}

async fn mutate_outbox(client: ApiClient, mutation: Mutation) -> earsip_api::Result<()> {
    match mutation {
        Mutation::Update { id, form } => {
            let org = client.get_organization().await?.unwrap_or_default();
            client.update_outbox(&id, form.to_outbox_form(&org)).await?
        }
        Mutation::Delete { id } => client.delete_outbox(&id).await?,
        Mutation::Verify { id } => client.verify_outbox(&id).await?,
        other @ Mutation::Dispose { .. } => return Err(unsupported::<OutboxList>(&other)),
    };
    Ok(())
}

impl Resource for InboxList {
    const COLUMNS: &'static [&'static str] = &["Nomor", "Perihal", "Asal", "Tanggal", "Status"];

    fn id(item: &InboxMail) -> &str {
        &item.id
    }

    fn cells(item: &InboxMail) -> Vec<String> {
        inbox_cells(item)
    }

    fn details(item: &InboxMail) -> Vec<(&'static str, String)> {
        inbox_details(item)
    }

    fn attachments(item: &InboxMail) -> Vec<Attachment> {
        inbox_attachments(item)
    }

    fn actions(item: &InboxMail, role: Role) -> Vec<RowAction> {
        mail_actions(role, RowAction::Dispose, can_dispose(role, &item.status))
    }

    fn editor(item: &InboxMail) -> Option<FormState> {
        Some(FormState::from_inbox(item))
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        mutate_inbox(client, mutation)
    }
}

impl Resource for DispositionQueue {
    const COLUMNS: &'static [&'static str] = InboxList::COLUMNS;

    fn id(item: &InboxMail) -> &str {
        &item.id
    }

    fn cells(item: &InboxMail) -> Vec<String> {
        inbox_cells(item)
    }

    fn details(item: &InboxMail) -> Vec<(&'static str, String)> {
        inbox_details(item)
    }

    fn attachments(item: &InboxMail) -> Vec<Attachment> {
        inbox_attachments(item)
    }

    fn actions(item: &InboxMail, role: Role) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Detail];
        if can_dispose(role, &item.status) {
            actions.push(RowAction::Dispose);
        }
        actions
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        mutate_inbox(client, mutation)
    }
}

impl Resource for OutboxList {
    const COLUMNS: &'static [&'static str] = &["Nomor", "Kategori", "Tujuan", "Tanggal", "Status"];

    fn id(item: &OutboxMail) -> &str {
        &item.id
    }

    fn cells(item: &OutboxMail) -> Vec<String> {
        outbox_cells(item)
    }

    fn details(item: &OutboxMail) -> Vec<(&'static str, String)> {
        outbox_details(item)
    }

    fn attachments(item: &OutboxMail) -> Vec<Attachment> {
        outbox_attachments(item)
    }

    fn body(item: &OutboxMail) -> Option<String> {
        outbox_body(item)
    }

    fn actions(item: &OutboxMail, role: Role) -> Vec<RowAction> {
        mail_actions(role, RowAction::Verify, can_verify(role, &item.status))
    }

    fn editor(item: &OutboxMail) -> Option<FormState> {
        Some(FormState::from_outbox(item))
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        mutate_outbox(client, mutation)
    }
}

impl Resource for VerificationQueue {
    const COLUMNS: &'static [&'static str] = OutboxList::COLUMNS;

    fn id(item: &OutboxMail) -> &str {
        &item.id
    }

    fn cells(item: &OutboxMail) -> Vec<String> {
        outbox_cells(item)
    }

    fn details(item: &OutboxMail) -> Vec<(&'static str, String)> {
        outbox_details(item)
    }

    fn attachments(item: &OutboxMail) -> Vec<Attachment> {
        outbox_attachments(item)
    }

    fn body(item: &OutboxMail) -> Option<String> {
        outbox_body(item)
    }

    fn actions(item: &OutboxMail, role: Role) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Detail];
        if can_verify(role, &item.status) {
            actions.push(RowAction::Verify);
        }
        actions
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        mutate_outbox(client, mutation)
    }
}

impl Resource for LogbookList {
    const COLUMNS: &'static [&'static str] =
        &["Jenis", "Nomor", "Perihal", "Asal/Tujuan", "Tanggal", "Status"];

    fn id(item: &LogbookEntry) -> &str {
        &item.id
    }

    fn cells(item: &LogbookEntry) -> Vec<String> {
        vec![
            item.kind.label().to_string(),
            item.number.clone(),
            item.category.clone(),
            item.counterpart().to_string(),
            display_date(&item.date),
            item.status.label().to_string(),
        ]
    }

    fn details(item: &LogbookEntry) -> Vec<(&'static str, String)> {
        let counterpart = match item.kind {
            MailKind::Inbox => "Asal Surat",
            MailKind::Outbox => "Tujuan",
        };
        vec![
            ("Jenis", item.kind.label().to_string()),
            ("Nomor Surat", item.number.clone()),
            ("Perihal", item.category.clone()),
            ("Tanggal Surat", display_date(&item.date)),
            (counterpart, item.counterpart().to_string()),
            ("Ringkasan", item.summary.clone()),
            ("Status", item.status.label().to_string()),
        ]
    }

    fn attachments(item: &LogbookEntry) -> Vec<Attachment> {
        item.attachments.clone()
    }

    fn actions(_item: &LogbookEntry, role: Role) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Detail];
        if can_edit_mail(role) {
            actions.push(RowAction::Delete);
        }
        actions
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        async move {
            match mutation {
                // Logbook ids are shared with the register the entry came from.
                Mutation::Delete { id } => match client.delete_inbox(&id).await {
                    Ok(_) => Ok(()),
                    Err(e) if e.status() == Some(404) => {
                        client.delete_outbox(&id).await.map(|_| ())
                    }
                    Err(e) => Err(e),
                },
                other => Err(unsupported::<Self>(&other)),
            }
        }
    }
}

impl Resource for UserList {
    const COLUMNS: &'static [&'static str] = &["Nama", "Username", "Jabatan", "Role", "Status"];

    fn id(item: &User) -> &str {
        &item.id
    }

    fn cells(item: &User) -> Vec<String> {
        vec![
            item.name.clone(),
            item.username.clone(),
            or_dash(item.position.as_deref()),
            item.role.to_string(),
            item.status.label().to_string(),
        ]
    }

    fn details(item: &User) -> Vec<(&'static str, String)> {
        vec![
            ("Nama", item.name.clone()),
            ("Username", item.username.clone()),
            ("Role", item.role.to_string()),
            ("Status", item.status.label().to_string()),
            ("Jabatan", or_dash(item.position.as_deref())),
            ("Nomor Telepon", or_dash(item.number.as_deref())),
            ("Alamat", or_dash(item.address.as_deref())),
            ("NBM", or_dash(item.nbm.as_deref())),
        ]
    }

    fn attachments(item: &User) -> Vec<Attachment> {
        item.picture
            .iter()
            .map(|url| Attachment {
                url: url.clone(),
                name: Some("Foto Profil".to_string()),
            })
            .collect()
    }

    fn actions(_item: &User, role: Role) -> Vec<RowAction> {
        if role == Role::Superadmin {
            vec![RowAction::Detail, RowAction::Edit]
        } else {
            vec![RowAction::Detail]
        }
    }

    fn editor(item: &User) -> Option<FormState> {
        Some(FormState::from_user(item))
    }

    fn mutate(
        client: ApiClient,
        mutation: Mutation,
    ) -> impl Future<Output = earsip_api::Result<()>> + Send + 'static {
        async move {
            match mutation {
                Mutation::Update { id, form } => {
                    client.manage_user(&id, &form.to_user_update()).await.map(|_| ())
                }
                other => Err(unsupported::<Self>(&other)),
            }
        }
    }
}
