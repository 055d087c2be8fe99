use super::messages::CoordinatorMessage;
use crate::runner::ProcessRunner;
use crate::store::ResultSlot;
use crate::types::OutputText;

use std::sync::Arc;
use tokio::select;
use tokio::sync::mpsc;

pub struct SimulationCoordinator {
    inbox: mpsc::Receiver<CoordinatorMessage>,
    runner: Arc<dyn ProcessRunner>,
    slot: ResultSlot,
    // run tasks post their finished text here
    results_tx: mpsc::UnboundedSender<OutputText>,
    results_rx: mpsc::UnboundedReceiver<OutputText>,
}

impl SimulationCoordinator {
    pub fn spawn(inbox: mpsc::Receiver<CoordinatorMessage>, runner: Arc<dyn ProcessRunner>) {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let actor = Self {
            inbox,
            runner,
            slot: ResultSlot::new(),
            results_tx,
            results_rx,
        };
        tokio::spawn(async move { actor.run().await });
    }

    async fn run(mut self) {
        use self::CoordinatorMessage::*;
        loop {
            select! {
                maybe_msg = self.inbox.recv() => {
                    match maybe_msg {
                        Some(StartRun { response }) => {
                            self.start_run();
                            let _ = response.send(());
                        }
                        Some(GetOutput { response }) => {
                            let _ = response.send(self.slot.snapshot());
                        }
                        // all handles dropped, nothing left to serve
                        None => return,
                    }
                }
                Some(text) = self.results_rx.recv() => {
                    self.slot.publish(text);
                }
            }
        }
    }

    /// Fire and forget: the spawned task posts text back on the results
    /// channel whether the run succeeds or fails, so a failed run replaces
    /// stale output with its diagnostic instead of leaving it in place.
    fn start_run(&self) {
        let runner = Arc::clone(&self.runner);
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let text = match runner.run().await {
                Ok(text) => {
                    tracing::info!(bytes = text.len(), "simulation run finished");
                    text
                }
                Err(err) => {
                    tracing::warn!(error = %err, "simulation run failed");
                    err.to_string()
                }
            };
            let _ = results_tx.send(text);
        });
    }
}
