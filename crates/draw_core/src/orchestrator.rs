//! Submit/clear pipeline wiring the validator, drawer and presenter to a view.

use shared::{
    domain::{DrawResult, FormInput, Tile},
    error::InputValidationError,
};

use crate::{
    config::DrawSettings,
    drawer::draw,
    presenter::{render_ghost, reveal, ResultsSurface, RevealSummary},
    rng::UnitRandom,
    validator::validate_text,
};

/// The results grid plus the error banner.
pub trait DrawView: ResultsSurface {
    fn clear_error(&mut self);
    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(InputValidationError),
    Revealed {
        result: DrawResult,
        summary: RevealSummary,
    },
}

pub struct DrawOrchestrator<R> {
    settings: DrawSettings,
    rng: R,
}

impl<R: UnitRandom> DrawOrchestrator<R> {
    pub fn new(settings: DrawSettings, rng: R) -> Self {
        Self { settings, rng }
    }

    pub fn initial_load<V: DrawView + ?Sized>(&self, view: &mut V) {
        render_ghost(view, self.settings.idle_ghosts, self.settings.ghost_limit);
    }

    pub fn clear<V: DrawView + ?Sized>(&self, view: &mut V) {
        view.clear_error();
        view.clear_results();
    }

    /// Runs one submission to completion, including the whole reveal.
    pub async fn submit<V: DrawView + ?Sized>(
        &mut self,
        form: &FormInput,
        view: &mut V,
    ) -> SubmitOutcome {
        view.clear_error();

        let request = match validate_text(&form.count, &form.min, &form.max, form.no_repeat) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(code = ?err.code(), "draw: rejected input: {err}");
                view.show_error(&err.to_string());
                render_ghost(view, self.settings.idle_ghosts, self.settings.ghost_limit);
                return SubmitOutcome::Rejected(err);
            }
        };

        tracing::info!(
            count = request.count,
            min = request.min,
            max = request.max,
            no_repeat = request.no_repeat,
            "draw: submit"
        );

        let pending = (request.count as usize).min(self.settings.pending_ghost_cap);
        render_ghost(view, pending, self.settings.ghost_limit);
        tokio::time::sleep(self.settings.prepare_delay()).await;

        let mut result = draw(&request, &mut self.rng);
        if request.no_repeat {
            result.numbers.sort_unstable();
        }

        let summary = reveal(view, &result.numbers, &self.settings).await;
        SubmitOutcome::Revealed { result, summary }
    }
}

/// In-memory view: the last error message and the current tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridView {
    pub error: Option<String>,
    pub tiles: Vec<Tile>,
}

impl ResultsSurface for GridView {
    fn clear_results(&mut self) {
        self.tiles.clear();
    }

    fn push_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }
}

impl DrawView for GridView {
    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
