//! Dashboard counters for one year.

use earsip_api::{ApiClient, Role};
use earsip_core::{DashboardStats, stats};
use iced::Task;

use super::Notice;

const PARTIAL: &str = "Sebagian data statistik gagal dimuat";

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Loaded(DashboardStats),
    PrevYear,
    NextYear,
    Refresh,
}

pub struct DashboardCard {
    year: i32,
    stats: Option<DashboardStats>,
    loading: bool,
}

impl DashboardCard {
    pub fn new(client: &ApiClient, role: Role) -> (Self, Task<DashboardMessage>) {
        let year = stats::current_year();
        let card = Self {
            year,
            stats: None,
            loading: true,
        };
        (card, load(client, role, year))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The series never goes past the current year.
    pub fn has_next_year(&self) -> bool {
        self.year < stats::current_year()
    }

    pub fn update(
        &mut self,
        message: DashboardMessage,
        client: &ApiClient,
        role: Role,
    ) -> (Task<DashboardMessage>, Option<Notice>) {
        let year = match message {
            DashboardMessage::Loaded(stats) => {
                // A late answer for a year we already left
                if stats.year != self.year {
                    return (Task::none(), None);
                }
                self.loading = false;
                let notice = stats.partial.then(|| Notice::error(PARTIAL));
                self.stats = Some(stats);
                return (Task::none(), notice);
            }
            DashboardMessage::PrevYear => self.year - 1,
            DashboardMessage::NextYear if self.has_next_year() => self.year + 1,
            DashboardMessage::NextYear => return (Task::none(), None),
            DashboardMessage::Refresh => self.year,
        };
        self.year = year;
        self.loading = true;
        (load(client, role, year), None)
    }
}

fn load(client: &ApiClient, role: Role, year: i32) -> Task<DashboardMessage> {
    let client = client.clone();
    Task::perform(
        async move { stats::load(&client, role, year).await },
        DashboardMessage::Loaded,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card(year: i32) -> DashboardCard {
        DashboardCard {
            year,
            stats: None,
            loading: true,
        }
    }

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/api/").unwrap()
    }

    #[test]
    fn test_stale_year_is_ignored() {
        let mut card = card(2025);
        let stale = DashboardStats {
            year: 2024,
            ..DashboardStats::default()
        };
        card.update(DashboardMessage::Loaded(stale), &client(), Role::User);
        assert!(card.stats().is_none());
        assert!(card.is_loading());
    }

    #[test]
    fn test_partial_load_warns() {
        let mut card = card(2025);
        let stats = DashboardStats {
            year: 2025,
            partial: true,
            ..DashboardStats::default()
        };
        let (_, notice) = card.update(DashboardMessage::Loaded(stats), &client(), Role::Admin);
        assert_eq!(notice, Some(Notice::error(PARTIAL)));
        assert!(!card.is_loading());
    }

    #[test]
    fn test_next_year_stops_at_current() {
        let current = stats::current_year();
        let mut card = card(current);
        card.loading = false;
        card.update(DashboardMessage::NextYear, &client(), Role::User);
        assert_eq!(card.year(), current);
        assert!(!card.is_loading());
    }
}
