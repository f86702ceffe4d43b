use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::form::FormData;
use crate::types::{Ack, DispositionAction, InboxEnvelope, InboxMail, ListQuery, Page};

impl ApiClient {
    /// Lists incoming letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_inbox(&self, query: &ListQuery) -> Result<Page<InboxMail>> {
        self.get_query("inbox", query).await
    }

    /// Fetches one incoming letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the letter does not exist or the request fails.
    pub async fn get_inbox(&self, id: &str) -> Result<InboxMail> {
        let envelope: InboxEnvelope = self.get(&format!("inbox/{id}")).await?;
        Ok(envelope.inbox)
    }

    /// Records a new incoming letter with its scan and attachments.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the server rejects the form.
    pub async fn create_inbox(&self, form: FormData) -> Result<Ack> {
        info!("Creating inbox letter {:?}", form.text_value("number"));
        self.send_form_ack(Method::POST, "inbox", form).await
    }

    /// Replaces the fields of an incoming letter.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the server rejects the form.
    pub async fn update_inbox(&self, id: &str, form: FormData) -> Result<Ack> {
        info!("Updating inbox letter {}", id);
        self.send_form_ack(Method::PUT, &format!("inbox/{id}"), form)
            .await
    }

    /// Deletes an incoming letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_inbox(&self, id: &str) -> Result<Ack> {
        info!("Deleting inbox letter {}", id);
        self.send_ack(Method::DELETE, &format!("inbox/{id}")).await
    }

    /// Lists incoming letters awaiting or holding a disposition.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_inbox_dispositions(&self, query: &ListQuery) -> Result<Page<InboxMail>> {
        self.get_query("inbox/disposisi", query).await
    }

    /// Applies a disposition action to a waiting letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the action.
    pub async fn apply_disposition(&self, id: &str, action: &str) -> Result<Ack> {
        info!("Disposition {} -> {}", id, action);
        let body = DispositionAction {
            action: action.to_string(),
        };
        self.send_json_ack(Method::PUT, &format!("inbox/disposisi/{id}"), &body)
            .await
    }
}
