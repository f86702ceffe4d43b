//! Wire types exchanged with the E-ARSIP service.

mod auth;
mod category;
mod mail;
mod organization;
mod page;
mod stats;
mod user;

pub use auth::{Ack, Credentials, LoginResponse, SessionCheck};
pub use category::{Category, CategoryBody};
pub(crate) use category::CategoryList;
pub use mail::{
    Attachment, Creator, DispositionAction, InboxEnvelope, InboxMail, LogbookEntry, MailKind,
    MailStatus, OutboxEnvelope, OutboxMail, date_only,
};
pub use organization::Organization;
pub(crate) use organization::OrganizationReply;
pub use page::{ListQuery, Page};
pub(crate) use stats::CategoryCounts;
pub use stats::{CategoryCount, MonthlyPoint, MonthlyStats, TotalMail, WaitingDispositions};
pub use user::{NewUser, PasswordChange, Role, User, UserEnvelope, UserStatus, UserUpdate};
