use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::form::FormData;
use crate::types::{Ack, Organization, OrganizationReply};

impl ApiClient {
    /// Fetches the organization profile; `None` before it is first created.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. A 404 is reported as `Ok(None)`.
    pub async fn get_organization(&self) -> Result<Option<Organization>> {
        match self.get::<Option<OrganizationReply>>("organization").await {
            Ok(reply) => Ok(reply.and_then(OrganizationReply::into_option)),
            Err(err) if err.status() == Some(404) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Creates the organization profile (name, address, number, email, logo).
    ///
    /// # Errors
    ///
    /// Returns an error if the logo cannot be read or the server rejects the form.
    pub async fn create_organization(&self, form: FormData) -> Result<Ack> {
        info!("Creating organization profile");
        self.send_form_ack(Method::POST, "organization", form).await
    }

    /// Updates the organization profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the logo cannot be read or the server rejects the form.
    pub async fn update_organization(&self, form: FormData) -> Result<Ack> {
        info!("Updating organization profile");
        self.send_form_ack(Method::PUT, "organization", form).await
    }
}
