//! Dashboard counters.

use chrono::Datelike;
use earsip_api::{ApiClient, CategoryCount, MonthlyPoint, Role};
use tracing::warn;

use crate::policy::sees_waiting_counter;

/// Everything the dashboard shows. Counters that failed to load are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Year of the monthly series.
    pub year: i32,
    /// Letters in both registers.
    pub total_mail: Option<u64>,
    /// Inbox letters waiting for a disposition (administrators only).
    pub waiting_dispositions: Option<u64>,
    /// Monthly series.
    pub monthly: Vec<MonthlyPoint>,
    /// Letters per category, largest first.
    pub by_category: Vec<CategoryCount>,
    /// True if any request failed.
    pub partial: bool,
}

impl DashboardStats {
    /// Highest monthly total (inbox + outbox), for scaling bars.
    #[must_use]
    pub fn monthly_peak(&self) -> u64 {
        self.monthly
            .iter()
            .map(|m| m.inbox + m.outbox)
            .max()
            .unwrap_or(0)
    }
}

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Loads every counter concurrently. Individual failures are logged and
/// leave that counter empty.
pub async fn load(client: &ApiClient, role: Role, year: i32) -> DashboardStats {
    let waiting = async {
        if sees_waiting_counter(role) {
            Some(client.waiting_dispositions().await)
        } else {
            None
        }
    };
    let (total, waiting, monthly, by_category) = tokio::join!(
        client.total_mail(),
        waiting,
        client.monthly(year),
        client.by_category()
    );

    let mut stats = DashboardStats {
        year,
        ..DashboardStats::default()
    };

    match total {
        Ok(t) => stats.total_mail = Some(t.total),
        Err(e) => {
            warn!("Failed to load total mail: {}", e);
            stats.partial = true;
        }
    }
    match waiting {
        Some(Ok(w)) => stats.waiting_dispositions = Some(w.total),
        Some(Err(e)) => {
            warn!("Failed to load waiting dispositions: {}", e);
            stats.partial = true;
        }
        None => {}
    }
    match monthly {
        Ok(m) => stats.monthly = m.data,
        Err(e) => {
            warn!("Failed to load monthly stats: {}", e);
            stats.partial = true;
        }
    }
    match by_category {
        Ok(mut counts) => {
            counts.sort_by(|a, b| b.count.cmp(&a.count));
            stats.by_category = counts;
        }
        Err(e) => {
            warn!("Failed to load category stats: {}", e);
            stats.partial = true;
        }
    }
    stats
}
