use crate::types::OutputText;
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum CoordinatorMessage {
    StartRun {
        response: oneshot::Sender<()>,
    },
    GetOutput {
        response: oneshot::Sender<OutputText>,
    },
}
