use reqwest::Method;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, Credentials, LoginResponse, SessionCheck, User, UserEnvelope};

impl ApiClient {
    /// Authenticates and stores the session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Unauthorized`] or [`crate::Error::Api`] carrying
    /// the server's message when the credentials are rejected.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        info!("Logging in as {}", username);
        let body = Credentials { username, password };
        self.send_json(Method::POST, "auth/login", &body).await
    }

    /// Fetches the user owning the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no valid session.
    pub async fn current_user(&self) -> Result<User> {
        let envelope: UserEnvelope = self.get("auth/user").await?;
        Ok(envelope.user)
    }

    /// Ends the session on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn logout(&self) -> Result<Ack> {
        info!("Logging out");
        self.send_ack(Method::POST, "auth/logout").await
    }

    /// Probes whether the session cookie is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the session or is unreachable.
    pub async fn check_session(&self) -> Result<SessionCheck> {
        let check: Option<SessionCheck> = self.get("check").await?;
        let check = check.unwrap_or_default();
        debug!("Session probe: valid={}", check.is_valid());
        Ok(check)
    }
}
