//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardConfig;
use crate::cache::BoardCache;
use crate::schedules::ScheduleStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Loaded station schedules
    pub schedules: ScheduleStore,

    /// Computed boards
    pub cache: Arc<BoardCache>,

    /// Board parameters
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedules: ScheduleStore, cache: BoardCache, config: BoardConfig) -> Self {
        Self {
            schedules,
            cache: Arc::new(cache),
            config: Arc::new(config),
        }
    }
}
