use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::form::FormData;
use crate::types::{Ack, ListQuery, OutboxEnvelope, OutboxMail, Page};

impl ApiClient {
    /// Lists outgoing letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_outbox(&self, query: &ListQuery) -> Result<Page<OutboxMail>> {
        self.get_query("outbox", query).await
    }

    /// Fetches one outgoing letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the letter does not exist or the request fails.
    pub async fn get_outbox(&self, id: &str) -> Result<OutboxMail> {
        let envelope: OutboxEnvelope = self.get(&format!("outbox/{id}")).await?;
        Ok(envelope.outbox)
    }

    /// Drafts a new outgoing letter.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the server rejects the form.
    pub async fn create_outbox(&self, form: FormData) -> Result<Ack> {
        info!("Creating outbox letter {:?}", form.text_value("number"));
        self.send_form_ack(Method::POST, "outbox", form).await
    }

    /// Replaces the fields of an outgoing letter.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the server rejects the form.
    pub async fn update_outbox(&self, id: &str, form: FormData) -> Result<Ack> {
        info!("Updating outbox letter {}", id);
        self.send_form_ack(Method::PUT, &format!("outbox/{id}"), form)
            .await
    }

    /// Deletes an outgoing letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_outbox(&self, id: &str) -> Result<Ack> {
        info!("Deleting outbox letter {}", id);
        self.send_ack(Method::DELETE, &format!("outbox/{id}")).await
    }

    /// Lists outgoing letters in the verification queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_outbox_verifications(&self, query: &ListQuery) -> Result<Page<OutboxMail>> {
        self.get_query("outbox/verifikasi", query).await
    }

    /// Marks an outgoing letter as verified.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the verification.
    pub async fn verify_outbox(&self, id: &str) -> Result<Ack> {
        info!("Verifying outbox letter {}", id);
        self.send_ack(Method::PUT, &format!("outbox/verifikasi/{id}"))
            .await
    }
}
