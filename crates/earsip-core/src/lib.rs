//! # earsip-core
//!
//! UI-independent logic of the E-ARSIP desktop client.
//!
//! This crate provides:
//! - Session store with the startup probe, login and logout
//! - Route table and the role-based route guard
//! - Paginated list state with stale-response protection
//! - Form schemas and client-side validation
//! - Transient notifications
//! - Dashboard counters
//! - Persisted settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod form;
pub mod list;
pub mod notify;
pub mod policy;
pub mod routes;
pub mod session;
pub mod stats;

pub use config::{AppSettings, ThemeMode};
pub use error::{Error, Result};
pub use form::{FieldKind, FieldSpec, FormKind, FormSchema, FormState, ValidationErrors};
pub use list::{ListSource, ListState, ListUpdate, Ticket};
pub use notify::{Level, Notification, Notifications};
pub use routes::{GuardDecision, Route, guard, resolve};
pub use session::{AuthBackend, Authenticator, Session, SessionState};
pub use stats::DashboardStats;
