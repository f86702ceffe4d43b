//! Session state machine.

use earsip_api::{Role, User};
use tracing::{debug, info};

/// Lifecycle state of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Startup probe still in flight.
    #[default]
    Loading,
    /// Nobody is signed in.
    Unauthenticated,
    /// A user is signed in.
    Authenticated(User),
}

impl SessionState {
    /// Returns true while the startup probe is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

/// Process-wide session store.
///
/// Only the owner mutates it; views read it by reference.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    probe_started: bool,
}

impl Session {
    /// Creates a session in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.state.role()
    }

    /// Claims the startup probe. Returns true exactly once per session.
    pub fn begin_probe(&mut self) -> bool {
        if self.probe_started {
            return false;
        }
        self.probe_started = true;
        true
    }

    /// Resolves the loading phase with the probe result.
    ///
    /// Ignored once the session has left [`SessionState::Loading`].
    pub fn finish_probe(&mut self, user: Option<User>) {
        if !self.state.is_loading() {
            debug!("Late session probe result ignored");
            return;
        }
        self.state = match user {
            Some(user) => {
                info!("Restored session for {}", user.username);
                SessionState::Authenticated(user)
            }
            None => {
                info!("No existing session");
                SessionState::Unauthenticated
            }
        };
    }

    /// Stores the user returned by a successful login.
    pub fn apply_login(&mut self, user: User) {
        info!("Signed in as {} ({})", user.username, user.role);
        self.state = SessionState::Authenticated(user);
    }

    /// Replaces the stored user after a profile update.
    ///
    /// Does nothing unless someone is signed in.
    pub fn refresh_user(&mut self, user: User) {
        if self.state.is_authenticated() {
            self.state = SessionState::Authenticated(user);
        }
    }

    /// Signs out locally.
    pub fn clear(&mut self) {
        info!("Session cleared");
        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            username: "budi".to_string(),
            role,
            ..User::default()
        }
    }

    #[test]
    fn test_starts_loading() {
        let session = Session::new();
        assert!(session.state().is_loading());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_probe_claimed_once() {
        let mut session = Session::new();
        assert!(session.begin_probe());
        assert!(!session.begin_probe());
        assert!(!session.begin_probe());
    }

    #[test]
    fn test_probe_success_and_failure() {
        let mut ok = Session::new();
        ok.finish_probe(Some(user(Role::Admin)));
        assert_eq!(ok.role(), Some(Role::Admin));

        let mut failed = Session::new();
        failed.finish_probe(None);
        assert_eq!(failed.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_late_probe_does_not_override_login() {
        let mut session = Session::new();
        session.apply_login(user(Role::User));
        session.finish_probe(None);
        assert!(session.state().is_authenticated());
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut session = Session::new();
        session.finish_probe(None);
        session.apply_login(user(Role::Superadmin));
        assert_eq!(session.role(), Some(Role::Superadmin));
        session.clear();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        session.refresh_user(user(Role::User));
        assert!(session.user().is_none());
    }
}
