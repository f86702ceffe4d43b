use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{CategoryCount, CategoryCounts, MonthlyStats, TotalMail, WaitingDispositions};

impl ApiClient {
    /// Total number of letters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn total_mail(&self) -> Result<TotalMail> {
        self.get("stats/total").await
    }

    /// Number of inbox letters waiting for a disposition.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn waiting_dispositions(&self) -> Result<WaitingDispositions> {
        self.get("stats/disposisi").await
    }

    /// Monthly letter counts for `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn monthly(&self, year: i32) -> Result<MonthlyStats> {
        self.get(&format!("stats/bulanan/{year}")).await
    }

    /// Letter counts per category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn by_category(&self) -> Result<Vec<CategoryCount>> {
        let counts: CategoryCounts = self.get("stats/kategori").await?;
        Ok(counts.data)
    }
}
