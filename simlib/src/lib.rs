mod actors;
pub mod error;
pub mod runner;
mod store;
pub mod types;

// re-export the coordinator handle as if it is the coordinator itself.
pub use actors::coordinator::SimulationHandle;
