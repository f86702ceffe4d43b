//! Client-side routes and the guard that gates them.

mod guard;
mod route;

pub use guard::{GuardDecision, guard, resolve};
pub use route::{AksiView, LogbookView, MailView, ProfileView, Route, UsersView};
