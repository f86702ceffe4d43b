use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ListQuery, LogbookEntry, Page};

impl ApiClient {
    /// Lists both registers together, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn list_logbook(&self, query: &ListQuery) -> Result<Page<LogbookEntry>> {
        self.get_query("logbook/all", query).await
    }
}
