//! Generic list card: one implementation for every register.

use std::marker::PhantomData;

use earsip_api::{ApiClient, Category, Page, Role};
use earsip_core::{FormKind, FormState, ListState, ListUpdate, Ticket};
use iced::Task;
use iced::task;
use tracing::debug;

use super::form::{FormEvent, FormMessage, FormModel};
use super::resource::{Mutation, Resource, RowAction};
use super::{Notice, open_link};

/// Messages of a list card over rows of type `T`.
#[derive(Debug, Clone)]
pub enum ListMessage<T> {
    /// A page fetch finished.
    Loaded(Ticket, Result<Page<T>, String>),
    /// Search box edited.
    SearchChanged(String),
    /// Search submitted.
    SearchSubmitted,
    /// Pagination button pressed.
    GoTo(u32),
    /// Refetch the current page.
    Refresh,
    /// Row button pressed.
    Action(usize, RowAction),
    /// Edit or disposition dialog input.
    Form(FormMessage),
    /// Category choices for the edit dialog.
    CategoriesLoaded(Result<Vec<Category>, String>),
    /// Confirm button of a delete or verify prompt.
    Confirm,
    /// Dialog dismissed.
    CloseDialog,
    /// A mutation finished with its notification text.
    Mutated(Result<&'static str, String>),
    /// Attachment link pressed.
    OpenLink(String),
}

/// Dialog open over the table.
///
/// Each dialog holds the record it was opened on, so a refetch while it is
/// open cannot retarget it to another row.
pub enum Dialog<T> {
    Detail(T),
    ConfirmDelete { id: String },
    ConfirmVerify { id: String },
    Edit { id: String, form: FormModel },
    Dispose { id: String, form: FormModel },
}

impl<T> Dialog<T> {
    fn form_mut(&mut self) -> Option<&mut FormModel> {
        match self {
            Self::Edit { form, .. } | Self::Dispose { form, .. } => Some(form),
            _ => None,
        }
    }
}

/// Rows, paging, search and the open dialog of one register.
pub struct ListCard<S: Resource> {
    list: ListState<S::Item>,
    dialog: Option<Dialog<S::Item>>,
    busy: bool,
    fetch: Option<task::Handle>,
    source: PhantomData<fn() -> S>,
}

impl<S: Resource> ListCard<S> {
    /// Creates the card and starts fetching page 1.
    pub fn new(client: &ApiClient, limit: u32) -> (Self, Task<ListMessage<S::Item>>) {
        let mut card = Self {
            list: ListState::new(limit),
            dialog: None,
            busy: false,
            fetch: None,
            source: PhantomData,
        };
        let task = card.list.request(1).map_or_else(Task::none, |r| card.fetch(client, r));
        (card, task)
    }

    pub const fn list(&self) -> &ListState<S::Item> {
        &self.list
    }

    pub const fn dialog(&self) -> Option<&Dialog<S::Item>> {
        self.dialog.as_ref()
    }

    /// Returns true while a mutation is in flight.
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Issues a fetch; a newer fetch aborts the previous one.
    fn fetch(
        &mut self,
        client: &ApiClient,
        (ticket, query): (Ticket, earsip_api::ListQuery),
    ) -> Task<ListMessage<S::Item>> {
        debug!("Fetching {} page {}", S::TITLE, query.page);
        let (task, handle) = Task::perform(S::fetch(client.clone(), query), move |result| {
            ListMessage::Loaded(ticket, result.map_err(|e| e.user_message(S::LOAD_ERROR)))
        })
        .abortable();
        self.fetch = Some(handle.abort_on_drop());
        task
    }

    /// Refetches the current page.
    pub fn refresh(&mut self, client: &ApiClient) -> Task<ListMessage<S::Item>> {
        self.list
            .refresh()
            .map_or_else(Task::none, |r| self.fetch(client, r))
    }

    /// Drops the in-flight fetch and ignores any late response.
    pub fn detach(&mut self) {
        self.list.detach();
        self.fetch = None;
    }

    /// Handles a message; `role` gates row actions.
    #[allow(clippy::too_many_lines)] // One arm per message
    pub fn update(
        &mut self,
        message: ListMessage<S::Item>,
        client: &ApiClient,
        role: Role,
    ) -> (Task<ListMessage<S::Item>>, Option<Notice>) {
        match message {
            ListMessage::Loaded(ticket, result) => {
                if let ListUpdate::Failed(message) = self.list.apply(ticket, result) {
                    return (Task::none(), Some(Notice::error(message)));
                }
            }
            ListMessage::SearchChanged(term) => self.list.set_search(term),
            ListMessage::SearchSubmitted => {
                if let Some(request) = self.list.submit_search() {
                    return (self.fetch(client, request), None);
                }
            }
            ListMessage::GoTo(page) => {
                if let Some(request) = self.list.request(page) {
                    return (self.fetch(client, request), None);
                }
            }
            ListMessage::Refresh => return (self.refresh(client), None),
            ListMessage::Action(index, action) => return self.open(index, action, client, role),
            ListMessage::Form(message) => {
                let Some(dialog) = self.dialog.as_mut() else {
                    return (Task::none(), None);
                };
                let Some(form) = dialog.form_mut() else {
                    return (Task::none(), None);
                };
                match form.update(message) {
                    Some(FormEvent::Submit) => return self.submit(client),
                    Some(FormEvent::Cancel) => self.close(),
                    None => {}
                }
            }
            ListMessage::CategoriesLoaded(result) => match result {
                Ok(categories) => {
                    if let Some(form) = self.dialog.as_mut().and_then(Dialog::form_mut) {
                        form.set_categories(categories);
                    }
                }
                Err(message) => return (Task::none(), Some(Notice::error(message))),
            },
            ListMessage::Confirm => {
                let mutation = match &self.dialog {
                    Some(Dialog::ConfirmDelete { id }) => Some(Mutation::Delete { id: id.clone() }),
                    Some(Dialog::ConfirmVerify { id }) => Some(Mutation::Verify { id: id.clone() }),
                    _ => None,
                };
                if let Some(mutation) = mutation {
                    return (self.mutate(client, mutation), None);
                }
            }
            ListMessage::CloseDialog => self.close(),
            ListMessage::Mutated(result) => {
                self.busy = false;
                return match result {
                    Ok(message) => {
                        self.dialog = None;
                        (self.refresh(client), Some(Notice::success(message)))
                    }
                    Err(message) => {
                        if let Some(form) = self.dialog.as_mut().and_then(Dialog::form_mut) {
                            form.state_mut().finish_submit();
                        }
                        (Task::none(), Some(Notice::error(message)))
                    }
                };
            }
            ListMessage::OpenLink(url) => return (Task::none(), open_link(client, &url)),
        }
        (Task::none(), None)
    }

    fn close(&mut self) {
        if self.busy {
            debug!("Dialog kept open while a request is in flight");
            return;
        }
        self.dialog = None;
    }

    fn open(
        &mut self,
        index: usize,
        action: RowAction,
        client: &ApiClient,
        role: Role,
    ) -> (Task<ListMessage<S::Item>>, Option<Notice>) {
        let Some(item) = self.list.items().get(index) else {
            return (Task::none(), None);
        };
        if !S::actions(item, role).contains(&action) {
            debug!("{:?} not offered to {} on {}", action, role, S::TITLE);
            return (Task::none(), None);
        }

        let id = S::id(item).to_string();
        let mut task = Task::none();
        self.dialog = match action {
            RowAction::Detail => Some(Dialog::Detail(item.clone())),
            RowAction::Delete => Some(Dialog::ConfirmDelete { id }),
            RowAction::Verify => Some(Dialog::ConfirmVerify { id }),
            RowAction::Dispose => Some(Dialog::Dispose {
                id,
                form: FormModel::new(FormState::new(FormKind::Disposition)),
            }),
            RowAction::Edit => S::editor(item).map(|state| {
                let form = FormModel::new(state);
                if form.needs_categories() {
                    let client = client.clone();
                    task = Task::perform(
                        async move { client.list_categories().await },
                        |result| {
                            ListMessage::CategoriesLoaded(
                                result.map_err(|e| e.user_message("Gagal memuat kategori")),
                            )
                        },
                    );
                }
                Dialog::Edit { id, form }
            }),
        };
        (task, None)
    }

    fn submit(&mut self, client: &ApiClient) -> (Task<ListMessage<S::Item>>, Option<Notice>) {
        let mutation = match self.dialog.as_mut() {
            Some(Dialog::Edit { id, form }) => {
                if let Err(summary) = form.state_mut().begin_submit() {
                    return (Task::none(), summary.map(Notice::error));
                }
                Some(Mutation::Update {
                    id: id.clone(),
                    form: form.state().clone(),
                })
            }
            Some(Dialog::Dispose { id, form }) => {
                if let Err(summary) = form.state_mut().begin_submit() {
                    return (Task::none(), summary.map(Notice::error));
                }
                let action = form.state().value("action").to_string();
                Some(Mutation::Dispose { id: id.clone(), action })
            }
            _ => None,
        };
        match mutation {
            Some(mutation) => (self.mutate(client, mutation), None),
            None => (Task::none(), None),
        }
    }

    fn mutate(&mut self, client: &ApiClient, mutation: Mutation) -> Task<ListMessage<S::Item>> {
        if self.busy {
            return Task::none();
        }
        self.busy = true;
        let (success, failure) = mutation.notices();
        debug!("{} mutation {:?}", S::TITLE, mutation);
        Task::perform(S::mutate(client.clone(), mutation), move |result| {
            ListMessage::Mutated(result.map(|()| success).map_err(|e| e.user_message(failure)))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use earsip_api::{InboxMail, MailStatus};
    use earsip_core::Level;
    use earsip_core::list::InboxList;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/api/").unwrap()
    }

    fn mail(id: &str) -> InboxMail {
        InboxMail {
            id: id.into(),
            number: "012/UND/IX/2025".into(),
            status: MailStatus::Wait,
            ..InboxMail::default()
        }
    }

    fn loaded_card() -> ListCard<InboxList> {
        let mut card = ListCard {
            list: ListState::new(10),
            dialog: None,
            busy: false,
            fetch: None,
            source: PhantomData,
        };
        let (ticket, _) = card.list.request(1).unwrap();
        card.update(
            ListMessage::Loaded(ticket, Ok(Page::new(vec![mail("a"), mail("b")], 1, 1))),
            &client(),
            Role::Superadmin,
        );
        card
    }

    #[test]
    fn test_stale_page_is_dropped() {
        let mut card = loaded_card();
        let (old, _) = card.list.refresh().unwrap();
        let (_current, _) = card.list.refresh().unwrap();
        let (_, notice) = card.update(
            ListMessage::Loaded(old, Ok(Page::empty())),
            &client(),
            Role::Superadmin,
        );
        assert!(notice.is_none());
        assert_eq!(card.list().items().len(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_rows_and_notifies() {
        let mut card = loaded_card();
        let (ticket, _) = card.list.refresh().unwrap();
        let (_, notice) = card.update(
            ListMessage::Loaded(ticket, Err("Gagal memuat surat masuk".into())),
            &client(),
            Role::Superadmin,
        );
        assert_eq!(notice.map(|n| n.level), Some(Level::Error));
        assert_eq!(card.list().items().len(), 2);
    }

    #[test]
    fn test_actions_not_offered_are_ignored() {
        let mut card = loaded_card();
        card.update(ListMessage::Action(0, RowAction::Delete), &client(), Role::User);
        assert!(card.dialog().is_none());
        card.update(ListMessage::Action(9, RowAction::Detail), &client(), Role::User);
        assert!(card.dialog().is_none());
        card.update(ListMessage::Action(1, RowAction::Detail), &client(), Role::User);
        assert!(matches!(card.dialog(), Some(Dialog::Detail(m)) if m.id == "b"));
    }

    #[test]
    fn test_delete_success_closes_dialog_and_refetches() {
        let mut card = loaded_card();
        card.update(ListMessage::Action(0, RowAction::Delete), &client(), Role::Superadmin);
        assert!(matches!(card.dialog(), Some(Dialog::ConfirmDelete { id }) if id == "a"));

        card.update(ListMessage::Confirm, &client(), Role::Superadmin);
        assert!(card.is_busy());
        // Busy dialogs stay open
        card.update(ListMessage::CloseDialog, &client(), Role::Superadmin);
        assert!(card.dialog().is_some());

        let (_, notice) = card.update(
            ListMessage::Mutated(Ok("Data berhasil dihapus")),
            &client(),
            Role::Superadmin,
        );
        assert_eq!(notice, Some(Notice::success("Data berhasil dihapus")));
        assert!(card.dialog().is_none());
        assert!(card.list().is_loading());
    }

    #[test]
    fn test_invalid_disposition_is_not_sent() {
        let mut card = loaded_card();
        card.update(ListMessage::Action(0, RowAction::Dispose), &client(), Role::Admin);
        assert!(matches!(card.dialog(), Some(Dialog::Dispose { .. })));

        let (_, notice) = card.update(
            ListMessage::Form(FormMessage::Submit),
            &client(),
            Role::Admin,
        );
        assert_eq!(notice, Some(Notice::error("Pilih tindakan terlebih dahulu")));
        assert!(!card.is_busy());
    }

    #[test]
    fn test_failed_edit_unlocks_form() {
        let mut card = loaded_card();
        card.update(ListMessage::Action(0, RowAction::Edit), &client(), Role::Superadmin);
        let Some(Dialog::Edit { form, .. }) = card.dialog.as_mut() else {
            panic!("edit dialog expected");
        };
        form.state_mut().begin_submit().ok();
        card.busy = true;

        let (_, notice) = card.update(
            ListMessage::Mutated(Err("Nomor surat sudah ada".into())),
            &client(),
            Role::Superadmin,
        );
        assert_eq!(notice, Some(Notice::error("Nomor surat sudah ada")));
        match card.dialog() {
            Some(Dialog::Edit { form, .. }) => assert!(!form.state().is_submitting()),
            _ => panic!("edit dialog should stay open"),
        }
    }

    #[test]
    fn test_dialog_keeps_its_record_across_page_change() {
        let mut card = ListCard::<InboxList> {
            list: ListState::new(1),
            dialog: None,
            busy: false,
            fetch: None,
            source: PhantomData,
        };
        let (ticket, _) = card.list.request(1).unwrap();
        card.update(
            ListMessage::Loaded(ticket, Ok(Page::new(vec![mail("page1-a")], 1, 2))),
            &client(),
            Role::Superadmin,
        );
        card.update(ListMessage::Action(0, RowAction::Delete), &client(), Role::Superadmin);

        let (ticket, _) = card.list.request(2).unwrap();
        card.update(
            ListMessage::Loaded(ticket, Ok(Page::new(vec![mail("page2-z")], 2, 2))),
            &client(),
            Role::Superadmin,
        );
        assert_eq!(card.list().items()[0].id, "page2-z");
        assert!(matches!(card.dialog(), Some(Dialog::ConfirmDelete { id }) if id == "page1-a"));
    }

    #[test]
    fn test_edit_targets_record_it_was_opened_on() {
        let mut card = loaded_card();
        card.update(ListMessage::Action(1, RowAction::Edit), &client(), Role::Superadmin);
        let (ticket, _) = card.list.refresh().unwrap();
        card.update(
            ListMessage::Loaded(ticket, Ok(Page::new(vec![mail("c")], 1, 1))),
            &client(),
            Role::Superadmin,
        );
        assert!(matches!(card.dialog(), Some(Dialog::Edit { id, .. }) if id == "b"));
    }
}
