use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::form::FormData;
use crate::types::{
    Ack, ListQuery, NewUser, Page, PasswordChange, User, UserEnvelope, UserUpdate,
};

impl ApiClient {
    /// Updates the signed-in user's own profile and picture.
    ///
    /// # Errors
    ///
    /// Returns an error if the picture cannot be read or the server rejects the form.
    pub async fn update_me(&self, form: FormData) -> Result<User> {
        info!("Updating own profile");
        let envelope: UserEnvelope = self.send_form(Method::PUT, "user/me", form).await?;
        Ok(envelope.user)
    }

    /// Changes the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the current password is wrong or the request fails.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<Ack> {
        info!("Changing password");
        let body = PasswordChange {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.send_json_ack(Method::PUT, "user/password", &body)
            .await
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the account (e.g. duplicate username).
    pub async fn register_user(&self, user: &NewUser) -> Result<Ack> {
        info!("Registering user {}", user.username);
        self.send_json_ack(Method::POST, "user/add", user).await
    }

    /// Lists accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_users(&self, query: &ListQuery) -> Result<Page<User>> {
        self.get_query("user/list", query).await
    }

    /// Edits another account (role, status, profile fields).
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the update.
    pub async fn manage_user(&self, id: &str, update: &UserUpdate) -> Result<Ack> {
        info!("Managing user {}: role={} status={}", id, update.role, update.status);
        self.send_json_ack(Method::PUT, &format!("user/manage/{id}"), update)
            .await
    }

    /// Fetches one account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or the request fails.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let envelope: UserEnvelope = self.get(&format!("user/{id}")).await?;
        Ok(envelope.user)
    }
}
