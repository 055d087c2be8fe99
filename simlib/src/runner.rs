use crate::error::{Result, RunError};
use crate::types::{Args, OutputText, Program};

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::process::Command;

/// Capability interface for running the external simulation to completion.
///
/// The coordinator only cares that a run eventually produces stdout text or
/// fails; tests substitute a double returning canned text or errors without
/// spawning real OS processes.
pub trait ProcessRunner: Send + Sync + 'static {
    fn run(&self) -> BoxFuture<'static, Result<OutputText>>;
}

/// Runs a fixed program with a fixed, ordered argument list and captures its
/// complete standard output.
pub struct CommandRunner {
    program: Program,
    args: Args,
}

impl CommandRunner {
    pub fn new(
        program: impl Into<Program>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProcessRunner for CommandRunner {
    fn run(&self) -> BoxFuture<'static, Result<OutputText>> {
        let program = self.program.clone();
        let args = self.args.clone();
        async move {
            // blocks this task for the full process lifetime; the trigger
            // path never awaits it directly
            let output = Command::new(&program)
                .args(&args)
                .output()
                .await
                .map_err(|source| RunError::Launch {
                    program: program.clone(),
                    source,
                })?;
            if !output.status.success() {
                return Err(RunError::Exited {
                    program,
                    status: output.status,
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                });
            }
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        .boxed()
    }
}
