//! Network side of the session lifecycle.

use std::future::Future;

use earsip_api::{ApiClient, User};
use tracing::{info, warn};

use crate::error::Result;

/// Operations the session needs from the service.
pub trait AuthBackend: Send + Sync {
    /// Returns the user of a still-valid session, or `None`.
    fn probe(&self) -> impl Future<Output = earsip_api::Result<Option<User>>> + Send;

    /// Authenticates; the reply may omit the user.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = earsip_api::Result<Option<User>>> + Send;

    /// Fetches the user of the current session.
    fn current_user(&self) -> impl Future<Output = earsip_api::Result<User>> + Send;

    /// Ends the session on the server.
    fn logout(&self) -> impl Future<Output = earsip_api::Result<()>> + Send;
}

impl AuthBackend for ApiClient {
    async fn probe(&self) -> earsip_api::Result<Option<User>> {
        let check = self.check_session().await?;
        if !check.is_valid() {
            return Ok(None);
        }
        match check.user {
            Some(user) => Ok(Some(user)),
            None => self.current_user().await.map(Some),
        }
    }

    async fn login(&self, username: &str, password: &str) -> earsip_api::Result<Option<User>> {
        Ok(ApiClient::login(self, username, password).await?.user)
    }

    async fn current_user(&self) -> earsip_api::Result<User> {
        ApiClient::current_user(self).await
    }

    async fn logout(&self) -> earsip_api::Result<()> {
        ApiClient::logout(self).await.map(|_| ())
    }
}

/// Runs the probe, login and logout calls for a [`super::Session`].
///
/// The results are applied by the session's owner, so nothing here holds
/// the session across an await.
#[derive(Debug, Clone)]
pub struct Authenticator<B> {
    backend: B,
}

impl<B: AuthBackend> Authenticator<B> {
    /// Wraps a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The wrapped backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Startup probe. Any failure means "not signed in".
    pub async fn initialize(&self) -> Option<User> {
        match self.backend.probe().await {
            Ok(user) => user,
            Err(e) => {
                info!("Session probe failed, treating as signed out: {}", e);
                None
            }
        }
    }

    /// Authenticates and returns the signed-in user.
    ///
    /// Falls back to fetching the current user when the login reply has none.
    ///
    /// # Errors
    ///
    /// Returns the service error (carrying its message) if the credentials are
    /// rejected or the follow-up fetch fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = match self.backend.login(username, password).await? {
            Some(user) => user,
            None => self.backend.current_user().await?,
        };
        info!("Login succeeded for {}", user.username);
        Ok(user)
    }

    /// Ends the session on the server, best effort.
    ///
    /// The caller clears the local session whatever happens here.
    pub async fn logout(&self) {
        if let Err(e) = self.backend.logout().await {
            warn!("Logout request failed: {}", e);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use earsip_api::{Error as ApiError, Role};

    use super::*;
    use crate::session::{Session, SessionState};

    fn unauthorized(message: &str) -> ApiError {
        ApiError::Unauthorized {
            status: 401,
            message: Some(message.to_string()),
        }
    }

    #[derive(Default)]
    struct FakeBackend {
        probe_user: Option<User>,
        probe_fails: bool,
        password: String,
        login_returns_user: bool,
        logout_fails: bool,
        probes: AtomicUsize,
        current_user_calls: AtomicUsize,
        logouts: AtomicUsize,
        signed_in: Mutex<Option<User>>,
    }

    fn staff(role: Role) -> User {
        User {
            id: "u7".to_string(),
            name: "Siti".to_string(),
            username: "siti".to_string(),
            role,
            ..User::default()
        }
    }

    impl AuthBackend for FakeBackend {
        async fn probe(&self) -> earsip_api::Result<Option<User>> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            if self.probe_fails {
                return Err(unauthorized("Sesi berakhir"));
            }
            Ok(self.probe_user.clone())
        }

        async fn login(&self, username: &str, password: &str) -> earsip_api::Result<Option<User>> {
            if username != "siti" || password != self.password {
                return Err(unauthorized("Username atau password salah"));
            }
            let user = staff(Role::Admin);
            *self.signed_in.lock().unwrap() = Some(user.clone());
            Ok(self.login_returns_user.then_some(user))
        }

        async fn current_user(&self) -> earsip_api::Result<User> {
            self.current_user_calls.fetch_add(1, Ordering::SeqCst);
            self.signed_in
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| unauthorized("Sesi tidak valid"))
        }

        async fn logout(&self) -> earsip_api::Result<()> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            if self.logout_fails {
                return Err(ApiError::InvalidResponse("connection reset".to_string()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_initialize_restores_user() {
        let auth = Authenticator::new(FakeBackend {
            probe_user: Some(staff(Role::User)),
            ..FakeBackend::default()
        });
        let mut session = Session::new();
        assert!(session.begin_probe());
        session.finish_probe(auth.initialize().await);
        assert_eq!(session.role(), Some(Role::User));
        assert_eq!(auth.backend().probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_initialize_failure_is_signed_out() {
        let auth = Authenticator::new(FakeBackend {
            probe_fails: true,
            ..FakeBackend::default()
        });
        let mut session = Session::new();
        session.finish_probe(auth.initialize().await);
        assert_eq!(session.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_with_user_in_reply() {
        let auth = Authenticator::new(FakeBackend {
            password: "rahasia".to_string(),
            login_returns_user: true,
            ..FakeBackend::default()
        });
        let user = auth.login("siti", "rahasia").await.unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(auth.backend().current_user_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_login_falls_back_to_current_user() {
        let auth = Authenticator::new(FakeBackend {
            password: "rahasia".to_string(),
            ..FakeBackend::default()
        });
        let user = auth.login("siti", "rahasia").await.unwrap();
        assert_eq!(user.username, "siti");
        assert_eq!(auth.backend().current_user_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_session_signed_out() {
        let auth = Authenticator::new(FakeBackend {
            password: "rahasia".to_string(),
            ..FakeBackend::default()
        });
        let mut session = Session::new();
        session.finish_probe(None);

        let err = auth.login("siti", "keliru").await.unwrap_err();
        assert_eq!(err.user_message("Login gagal"), "Username atau password salah");
        assert_eq!(session.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_request_fails() {
        let auth = Authenticator::new(FakeBackend {
            logout_fails: true,
            ..FakeBackend::default()
        });
        let mut session = Session::new();
        session.apply_login(staff(Role::User));

        auth.logout().await;
        session.clear();

        assert_eq!(auth.backend().logouts.load(Ordering::SeqCst), 1);
        assert_eq!(session.state(), &SessionState::Unauthenticated);
    }
}
