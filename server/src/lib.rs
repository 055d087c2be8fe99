mod routes;
mod state;

pub use state::AppState;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the page router on top of shared state. Exposed so the binary and
/// the route tests serve the exact same app.
pub fn create_app(state: Arc<AppState>) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
