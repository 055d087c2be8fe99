//! The three user-facing pages: landing, trigger, and result view.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / - landing page. No state dependency.
async fn index() -> Html<&'static str> {
    Html(concat!(
        "<!DOCTYPE html>\n",
        "<html>\n<head><title>100 prisoners simulation</title></head>\n",
        "<body>\n",
        "<h1>100 prisoners simulation</h1>\n",
        "<p><a href=\"/start_thread\">Start simulation</a></p>\n",
        "</body>\n</html>\n",
    ))
}

/// GET /start_thread - trigger a background run and send the browser to the
/// result page. The run keeps going long after this handler returns; a
/// failure surfaces on the result page, never here.
async fn start_thread(State(state): State<Arc<AppState>>) -> Redirect {
    state.sim.start().await;
    Redirect::to("/simulation_page")
}

/// GET /simulation_page - render whatever the latest completed run produced.
/// Empty until the first run finishes, possibly stale while one is in
/// flight; a failed run shows its diagnostic text.
async fn simulation_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let output = state.sim.latest_output().await;
    Html(render_result_page(&output))
}

fn render_result_page(output: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n<head><title>Simulation results</title></head>\n",
            "<body>\n",
            "<h1>Simulation results</h1>\n",
            "<p><a href=\"/start_thread\">Run again</a></p>\n",
            "<div id=\"output\">{}</div>\n",
            "</body>\n</html>\n",
        ),
        render_output(output)
    )
}

/// Escape the raw process output, then turn newlines into `<br>` so the page
/// keeps the executable's line structure.
fn render_output(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Create the page router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/start_thread", get(start_thread))
        .route("/simulation_page", get(simulation_page))
}
