//! Events emitted by the draw worker for the UI thread.

use shared::domain::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    WorkerFailed(String),
    ClearError,
    ShowError(String),
    ClearResults,
    PushTile(Tile),
    DrawFinished(DrawFinish),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawFinish {
    Rejected,
    Revealed { shown: usize, overflow: usize },
    Cleared,
}
