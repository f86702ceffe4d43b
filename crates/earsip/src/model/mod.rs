//! Page state behind the views.

pub mod category;
pub mod dashboard;
pub mod form;
pub mod list_card;
pub mod organization;
pub mod resource;
pub mod screen;

use earsip_api::ApiClient;
use earsip_core::Level;
use tracing::{debug, warn};

pub use category::{CategoryCard, CategoryMessage};
pub use dashboard::{DashboardCard, DashboardMessage};
pub use form::{FormMessage, FormModel};
pub use list_card::{Dialog, ListCard, ListMessage};
pub use organization::{OrganizationCard, OrganizationMessage};
pub use resource::{Resource, RowAction};
pub use screen::{Context, Effect, Screen, ScreenMessage};

/// A notification a card asks the app to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Opens an attachment in the system viewer. Relative URLs resolve against
/// the service base URL.
pub fn open_link(client: &ApiClient, url: &str) -> Option<Notice> {
    let resolved = match client.base_url().join(url) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("Bad attachment URL {}: {}", url, e);
            return Some(Notice::error("Tautan lampiran tidak valid"));
        }
    };
    debug!("Opening {}", resolved);
    match opener::open(resolved.as_str()) {
        Ok(()) => None,
        Err(e) => {
            warn!("Failed to open {}: {}", resolved, e);
            Some(Notice::error("Gagal membuka lampiran"))
        }
    }
}
