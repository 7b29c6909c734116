//! Commands queued from the UI to the draw worker.

use shared::domain::FormInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Submit(FormInput),
    Clear,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Submit(_) => "submit",
            BackendCommand::Clear => "clear",
        }
    }
}
