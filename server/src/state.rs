//! Application state for the axum server.

use simlib::SimulationHandle;
use std::sync::Arc;

/// Shared application state accessible from all page handlers.
pub struct AppState {
    /// Handle to the simulation coordinator. Cloning is cheap; all
    /// synchronization lives behind the handle's message channel.
    pub sim: SimulationHandle,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(sim: SimulationHandle) -> Arc<Self> {
        Arc::new(Self { sim })
    }
}
