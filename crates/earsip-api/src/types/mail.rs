//! Incoming and outgoing letter records.

use serde::{Deserialize, Serialize};

/// Workflow status of a letter.
///
/// Letters start as `wait` and move once, through a disposition (inbox) or a
/// verification (outbox), to a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MailStatus {
    /// Waiting for disposition or verification.
    #[default]
    Wait,
    /// Outbox letter verified.
    Verified,
    /// Any other terminal status reported by the service.
    Other(String),
}

impl MailStatus {
    /// Returns true while the letter still awaits an action.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        matches!(self, Self::Wait)
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Wait => "Menunggu",
            Self::Verified => "Terverifikasi",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for MailStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "wait" => Self::Wait,
            "verified" => Self::Verified,
            _ => Self::Other(value),
        }
    }
}

impl From<MailStatus> for String {
    fn from(status: MailStatus) -> Self {
        match status {
            MailStatus::Wait => "wait".to_string(),
            MailStatus::Verified => "verified".to_string(),
            MailStatus::Other(s) => s,
        }
    }
}

/// Which register a letter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailKind {
    /// Incoming letter (surat masuk).
    #[serde(alias = "Inbox", alias = "INBOX")]
    Inbox,
    /// Outgoing letter (surat keluar).
    #[serde(alias = "Outbox", alias = "OUTBOX")]
    Outbox,
}

impl MailKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Surat Masuk",
            Self::Outbox => "Surat Keluar",
        }
    }
}

/// Reference to an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "AttachmentRepr")]
pub struct Attachment {
    /// Download URL.
    pub url: String,
    /// Original file name, if the service kept it.
    pub name: Option<String>,
}

impl Attachment {
    /// Name to display: the original name or the last URL segment.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| {
            self.url
                .rsplit('/')
                .find(|s| !s.is_empty())
                .unwrap_or(&self.url)
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentRepr {
    Url(String),
    Object {
        #[serde(alias = "path", alias = "secure_url")]
        url: String,
        #[serde(default, alias = "originalName", alias = "filename")]
        name: Option<String>,
    },
}

impl From<AttachmentRepr> for Attachment {
    fn from(repr: AttachmentRepr) -> Self {
        match repr {
            AttachmentRepr::Url(url) => Self { url, name: None },
            AttachmentRepr::Object { url, name } => Self { url, name },
        }
    }
}

/// Who entered a letter; either a bare id or a populated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CreatorRepr")]
pub struct Creator {
    /// User id, if known.
    pub id: Option<String>,
    /// User name, if populated.
    pub name: Option<String>,
}

impl Creator {
    /// Name to display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("-")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CreatorRepr {
    Id(String),
    User {
        #[serde(default, rename = "_id", alias = "id")]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<CreatorRepr> for Creator {
    fn from(repr: CreatorRepr) -> Self {
        match repr {
            CreatorRepr::Id(id) => Self {
                id: Some(id),
                name: None,
            },
            CreatorRepr::User { id, name } => Self { id, name },
        }
    }
}

/// Returns the `YYYY-MM-DD` part of an ISO timestamp.
#[must_use]
pub fn date_only(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}

/// An incoming letter (surat masuk).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InboxMail {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Letter number.
    #[serde(default)]
    pub number: String,
    /// Subject / category (perihal).
    #[serde(default)]
    pub category: String,
    /// Letter date.
    #[serde(default)]
    pub date: String,
    /// Date received (the service spells it `recievedDate`).
    #[serde(default, rename = "recievedDate", alias = "receivedDate")]
    pub received_date: Option<String>,
    /// Sender.
    #[serde(default)]
    pub origin: String,
    /// Summary.
    #[serde(default)]
    pub summary: String,
    /// Scan of the letter.
    #[serde(default, rename = "mailPic")]
    pub mail_pic: Option<String>,
    /// Extra attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Workflow status.
    #[serde(default)]
    pub status: MailStatus,
    /// Disposition action applied, once any.
    #[serde(default)]
    pub action: Option<String>,
    /// Who entered the letter.
    #[serde(default, rename = "createdBy")]
    pub created_by: Option<Creator>,
}

/// An outgoing letter (surat keluar).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutboxMail {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Letter number.
    #[serde(default)]
    pub number: String,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Letter date.
    #[serde(default)]
    pub date: String,
    /// Recipient.
    #[serde(default)]
    pub destination: String,
    /// Summary.
    #[serde(default)]
    pub summary: String,
    /// Letter body (HTML).
    #[serde(default)]
    pub content: Option<String>,
    /// Signatory.
    #[serde(default)]
    pub sign: Option<String>,
    /// Generated document, if any.
    #[serde(default, alias = "pdf", alias = "fileUrl")]
    pub file: Option<String>,
    /// Extra attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Workflow status.
    #[serde(default)]
    pub status: MailStatus,
    /// Who entered the letter.
    #[serde(default, rename = "createdBy")]
    pub created_by: Option<Creator>,
}

/// A row of the combined logbook (both registers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookEntry {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Register the letter belongs to.
    #[serde(rename = "type")]
    pub kind: MailKind,
    /// Letter number.
    #[serde(default)]
    pub number: String,
    /// Category / subject.
    #[serde(default)]
    pub category: String,
    /// Letter date.
    #[serde(default)]
    pub date: String,
    /// Sender (inbox only).
    #[serde(default)]
    pub origin: Option<String>,
    /// Recipient (outbox only).
    #[serde(default)]
    pub destination: Option<String>,
    /// Summary.
    #[serde(default)]
    pub summary: String,
    /// Attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Workflow status.
    #[serde(default)]
    pub status: MailStatus,
}

impl LogbookEntry {
    /// Sender for inbox letters, recipient for outbox letters.
    #[must_use]
    pub fn counterpart(&self) -> &str {
        match self.kind {
            MailKind::Inbox => self.origin.as_deref(),
            MailKind::Outbox => self.destination.as_deref(),
        }
        .unwrap_or("-")
    }
}

/// `{ "inbox": ... }` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxEnvelope {
    /// The wrapped letter.
    #[serde(alias = "data")]
    pub inbox: InboxMail,
}

/// `{ "outbox": ... }` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct OutboxEnvelope {
    /// The wrapped letter.
    #[serde(alias = "data")]
    pub outbox: OutboxMail,
}

/// Body for applying a disposition action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispositionAction {
    /// Chosen action label.
    pub action: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_inbox_from_service_shape() {
        let json = r#"{
            "_id": "a1",
            "number": "012/UND/IX/2025",
            "category": "Undangan",
            "date": "2025-09-01T00:00:00.000Z",
            "recievedDate": "2025-09-02T00:00:00.000Z",
            "origin": "Dinas Pendidikan",
            "summary": "Undangan rapat",
            "attachments": ["https://files.example/a.pdf", {"url": "https://files.example/b.pdf", "originalName": "lampiran.pdf"}],
            "status": "wait",
            "createdBy": {"_id": "u1", "name": "Budi"}
        }"#;
        let mail: InboxMail = serde_json::from_str(json).unwrap();
        assert_eq!(mail.id, "a1");
        assert!(mail.status.is_waiting());
        assert_eq!(date_only(&mail.date), "2025-09-01");
        assert_eq!(mail.attachments[0].display_name(), "a.pdf");
        assert_eq!(mail.attachments[1].display_name(), "lampiran.pdf");
        assert_eq!(mail.created_by.unwrap().display_name(), "Budi");
    }

    #[test]
    fn test_status_round_trip_keeps_unknown_values() {
        let status: MailStatus = serde_json::from_str(r#""Setuju""#).unwrap();
        assert_eq!(status, MailStatus::Other("Setuju".to_string()));
        assert_eq!(status.label(), "Setuju");
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""Setuju""#);

        let verified: MailStatus = serde_json::from_str(r#""verified""#).unwrap();
        assert_eq!(verified, MailStatus::Verified);
        assert!(!verified.is_waiting());
    }

    #[test]
    fn test_logbook_kind_is_case_insensitive() {
        let json = r#"{"_id": "x", "type": "Inbox", "origin": "Kecamatan"}"#;
        let entry: LogbookEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, MailKind::Inbox);
        assert_eq!(entry.counterpart(), "Kecamatan");
    }

    #[test]
    fn test_creator_as_bare_id() {
        let creator: Creator = serde_json::from_str(r#""u9""#).unwrap();
        assert_eq!(creator.display_name(), "u9");
    }

    #[test]
    fn test_date_only_short_input() {
        assert_eq!(date_only("2025"), "2025");
    }
}
