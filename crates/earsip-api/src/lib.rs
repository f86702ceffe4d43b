//! # earsip-api
//!
//! Typed async client for the E-ARSIP letter archive REST service.
//!
//! ## Features
//!
//! - **Cookie session**: `auth/login` sets a session cookie that every clone of
//!   [`ApiClient`] sends on later calls
//! - **Resources**: incoming and outgoing letters, dispositions, verification,
//!   logbook, categories, organization profile, users and dashboard stats
//! - **Uploads**: letter scans, attachments, logos and profile pictures sent as
//!   `multipart/form-data` through [`FormData`]
//! - **Pagination**: every list endpoint normalizes to [`Page`]
//!
//! ## Example
//!
//! ```ignore
//! use earsip_api::{ApiClient, ListQuery};
//!
//! let client = ApiClient::new("http://localhost:5000/api/")?;
//! client.login("admin", "secret").await?;
//! let page = client.list_inbox(&ListQuery::new(1, 10)).await?;
//! for mail in &page.items {
//!     println!("{} {}", mail.number, mail.origin);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod endpoints;
mod error;
pub mod form;
pub mod types;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use form::{FormData, FormPart};
pub use types::{
    Ack, Attachment, Category, CategoryCount, Creator, InboxMail, ListQuery, LogbookEntry,
    MailKind, MailStatus, MonthlyPoint, MonthlyStats, NewUser, Organization, OutboxMail, Page,
    Role, SessionCheck, TotalMail, User, UserStatus, UserUpdate, WaitingDispositions, date_only,
};
