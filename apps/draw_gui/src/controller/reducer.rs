//! Applies worker events to the screen state the UI renders.

use shared::domain::Tile;

use super::events::{DrawFinish, UiEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawScreenState {
    pub error: Option<String>,
    pub tiles: Vec<Tile>,
    pub status: String,
    /// Commands queued to the worker and not yet finished.
    pub in_flight: usize,
}

impl DrawScreenState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn mark_queued(&mut self) {
        self.in_flight += 1;
    }
}

pub fn apply_event(state: &mut DrawScreenState, event: UiEvent) {
    match event {
        UiEvent::Info(message) => state.status = message,
        UiEvent::WorkerFailed(message) => {
            state.status = message;
            state.in_flight = 0;
        }
        UiEvent::ClearError => state.error = None,
        UiEvent::ShowError(message) => state.error = Some(message),
        UiEvent::ClearResults => state.tiles.clear(),
        UiEvent::PushTile(tile) => state.tiles.push(tile),
        UiEvent::DrawFinished(finish) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.status = match finish {
                DrawFinish::Rejected => "Input rejected; see the error above".to_string(),
                DrawFinish::Revealed { shown, overflow: 0 } => format!("Drew {shown} number(s)"),
                DrawFinish::Revealed { shown, overflow } => {
                    format!("Drew {} number(s), showing {shown}", shown + overflow)
                }
                DrawFinish::Cleared => String::new(),
            };
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
