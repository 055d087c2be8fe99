use std::io;
use std::process::ExitStatus;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("could not launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited abnormally ({status}): {stderr}")]
    Exited {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

pub type Result<T> = result::Result<T, RunError>;
