mod actor;
mod messages;

use self::actor::SimulationCoordinator;
use self::messages::CoordinatorMessage::{self, GetOutput, StartRun};
use crate::runner::ProcessRunner;
use crate::types::OutputText;

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// A `SimulationHandle` triggers background simulation runs and serves the
/// latest completed run's output.
///
/// This struct is actually an actor handle, the real work is done in the
/// actor spawned by `SimulationHandle::spawn`. The actor owns the result
/// slot, so the handle can be cloned freely into request handlers without an
/// `Arc<Mutex>` or any other shared-state synchronization.
#[derive(Clone)]
pub struct SimulationHandle {
    sender: mpsc::Sender<CoordinatorMessage>,
}

impl SimulationHandle {
    /// Spawn a new coordinator around the given runner.
    ///
    /// Specify the capacity for the coordinator's message queue. This limits
    /// the build-up of inbound messages.
    pub fn spawn(runner: Arc<dyn ProcessRunner>, message_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(message_capacity);
        SimulationCoordinator::spawn(receiver, runner);
        Self { sender }
    }

    /// Trigger a fresh background run. Resolves as soon as the trigger is
    /// accepted, never waits for the run itself. A second call while a run
    /// is still in flight starts a second concurrent run; whichever finishes
    /// last wins the slot.
    pub async fn start(&self) {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(StartRun { response: tx })
            .await
            .expect("SimulationCoordinator exited");
        rx.await.expect("SimulationCoordinator exited")
    }

    /// Snapshot of the most recently completed run's output text; the empty
    /// string until the first run completes. Never blocks on an in-flight
    /// run.
    pub async fn latest_output(&self) -> OutputText {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(GetOutput { response: tx })
            .await
            .expect("SimulationCoordinator exited");
        rx.await.expect("SimulationCoordinator exited")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, RunError};

    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    /// Returns the same text on every run, after an optional delay.
    struct CannedRunner {
        text: &'static str,
        delay: Duration,
    }

    impl ProcessRunner for CannedRunner {
        fn run(&self) -> BoxFuture<'static, Result<OutputText>> {
            let text = self.text;
            let delay = self.delay;
            async move {
                sleep(delay).await;
                Ok(text.to_string())
            }
            .boxed()
        }
    }

    /// Fails every run the way a missing executable would.
    struct FailingRunner;

    impl ProcessRunner for FailingRunner {
        fn run(&self) -> BoxFuture<'static, Result<OutputText>> {
            async {
                Err(RunError::Launch {
                    program: "../missing-simulation".into(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
                })
            }
            .boxed()
        }
    }

    /// Pops one scripted (delay, text) pair per run.
    struct SequenceRunner {
        script: Mutex<VecDeque<(Duration, &'static str)>>,
    }

    impl SequenceRunner {
        fn new(script: impl IntoIterator<Item = (Duration, &'static str)>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
            }
        }
    }

    impl ProcessRunner for SequenceRunner {
        fn run(&self) -> BoxFuture<'static, Result<OutputText>> {
            let (delay, text) = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("more runs started than scripted");
            async move {
                sleep(delay).await;
                Ok(text.to_string())
            }
            .boxed()
        }
    }

    /// Poll the slot until `pred` holds or five seconds pass.
    async fn wait_for_output(
        handle: &SimulationHandle,
        pred: impl Fn(&str) -> bool,
    ) -> OutputText {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let output = handle.latest_output().await;
            if pred(&output) {
                return output;
            }
            assert!(Instant::now() < deadline, "slot never reached expected state");
            sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn output_is_empty_before_any_run_completes() {
        let runner = Arc::new(CannedRunner {
            text: "unseen",
            delay: Duration::from_secs(60),
        });
        let handle = SimulationHandle::spawn(runner, 32);
        assert_eq!(handle.latest_output().await, "");

        // still empty while the (very slow) run is in flight
        handle.start().await;
        assert_eq!(handle.latest_output().await, "");
    }

    #[tokio::test]
    async fn completed_run_publishes_its_full_output() {
        let runner = Arc::new(CannedRunner {
            text: "line1\nline2",
            delay: Duration::ZERO,
        });
        let handle = SimulationHandle::spawn(runner, 32);
        handle.start().await;
        let output = wait_for_output(&handle, |out| !out.is_empty()).await;
        assert_eq!(output, "line1\nline2");
    }

    #[tokio::test]
    async fn failed_run_publishes_its_diagnostic() {
        let handle = SimulationHandle::spawn(Arc::new(FailingRunner), 32);
        handle.start().await;
        let output = wait_for_output(&handle, |out| !out.is_empty()).await;
        assert!(
            output.contains("could not launch ../missing-simulation"),
            "unexpected diagnostic: {output}"
        );
    }

    #[tokio::test]
    async fn start_returns_before_the_run_finishes() {
        let runner = Arc::new(CannedRunner {
            text: "slow",
            delay: Duration::from_secs(2),
        });
        let handle = SimulationHandle::spawn(runner, 32);

        let before = Instant::now();
        handle.start().await;
        assert!(
            before.elapsed() < Duration::from_millis(500),
            "start() blocked for {:?}",
            before.elapsed()
        );
    }

    #[tokio::test]
    async fn last_finisher_wins_regardless_of_start_order() {
        let runner = Arc::new(SequenceRunner::new([
            (Duration::from_millis(600), "started first, finished last"),
            (Duration::from_millis(50), "started last, finished first"),
        ]));
        let handle = SimulationHandle::spawn(runner, 32);
        handle.start().await;
        handle.start().await;

        let first = wait_for_output(&handle, |out| !out.is_empty()).await;
        assert_eq!(first, "started last, finished first");

        let last = wait_for_output(&handle, |out| out.contains("finished last")).await;
        assert_eq!(last, "started first, finished last");
        // nothing overwrites it afterwards
        sleep(Duration::from_millis(100)).await;
        assert_eq!(handle.latest_output().await, "started first, finished last");
    }
}
