//! Shared application state

use tokio::sync::RwLock;

use crate::application::services::ListingFacade;
use crate::infrastructure::config::AppConfig;

/// Shared application state
///
/// The facade runs synchronously behind a single lock: queries take a read
/// guard, mutations a write guard, so every operation (cascade deletes
/// included) is atomic with respect to every other.
pub struct AppState {
    pub config: AppConfig,
    pub facade: RwLock<ListingFacade>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            facade: RwLock::new(ListingFacade::new()),
        }
    }
}
