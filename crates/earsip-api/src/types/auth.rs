//! Login and session probe payloads.

use serde::{Deserialize, Serialize};

use super::User;

/// Body for `auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    /// Login name.
    pub username: &'a str,
    /// Password.
    pub password: &'a str,
}

/// Reply to `auth/login`. Some deployments omit the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user, if included.
    #[serde(default)]
    pub user: Option<User>,
    /// Informational message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to the `check` session probe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionCheck {
    /// Explicit verdict, when the service sends one.
    #[serde(default, alias = "loggedIn", alias = "isAuthenticated")]
    pub authenticated: Option<bool>,
    /// The session's user, if the probe returns it.
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionCheck {
    /// A probe counts as valid unless the service explicitly says otherwise.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.authenticated.unwrap_or(true)
    }
}

/// Informational reply from mutating calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    /// Server message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// The server message or `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
