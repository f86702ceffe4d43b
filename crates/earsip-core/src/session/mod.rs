//! Who is signed in.
//!
//! [`Session`] is the single owner of the signed-in user. It starts in
//! [`SessionState::Loading`] until the startup probe resolves, then moves
//! between [`SessionState::Unauthenticated`] and
//! [`SessionState::Authenticated`] through login and logout. The network side
//! of those transitions lives in [`Authenticator`].

mod auth;
mod state;

pub use auth::{AuthBackend, Authenticator};
pub use state::{Session, SessionState};
