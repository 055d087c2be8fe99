//! Simulation front-end server binary.
//!
//! Serves the landing page, the trigger, and the result page; the external
//! simulation executable is fixed and located relative to the server's
//! working directory.

use std::sync::Arc;

use anyhow::Result;
use server::{create_app, AppState};
use simlib::runner::CommandRunner;
use simlib::SimulationHandle;
use tracing_subscriber::EnvFilter;

const LISTEN_ADDR: &str = "127.0.0.1:5000";

const SIMULATION_PROGRAM: &str = "../100prisoners";
const SIMULATION_ARGS: [&str; 3] = ["83000000", "p", "4"];

/// Capacity for the coordinator's message queue.
const MESSAGE_CAPACITY: usize = 32;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let runner = Arc::new(CommandRunner::new(SIMULATION_PROGRAM, SIMULATION_ARGS));
    let state = AppState::new(SimulationHandle::spawn(runner, MESSAGE_CAPACITY));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    tracing::info!(addr = LISTEN_ADDR, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
