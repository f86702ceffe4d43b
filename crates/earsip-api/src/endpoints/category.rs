use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Ack, Category, CategoryBody, CategoryList};

impl ApiClient {
    /// Lists every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let list: Option<CategoryList> = self.get("category").await?;
        Ok(list.map(CategoryList::into_vec).unwrap_or_default())
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the name.
    pub async fn create_category(&self, name: &str) -> Result<Ack> {
        info!("Creating category {}", name);
        self.send_json_ack(Method::POST, "category", &CategoryBody { name })
            .await
    }

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the name.
    pub async fn update_category(&self, id: &str, name: &str) -> Result<Ack> {
        info!("Renaming category {} to {}", id, name);
        self.send_json_ack(Method::PUT, &format!("category/{id}"), &CategoryBody { name })
            .await
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_category(&self, id: &str) -> Result<Ack> {
        info!("Deleting category {}", id);
        self.send_ack(Method::DELETE, &format!("category/{id}"))
            .await
    }
}
