//! Results-grid presentation: ghost placeholders and the timed reveal.

use std::time::Duration;

use shared::domain::Tile;

use crate::config::DrawSettings;

/// The grid the presenter writes into.
pub trait ResultsSurface {
    fn clear_results(&mut self);
    fn push_tile(&mut self, tile: Tile);
}

impl ResultsSurface for Vec<Tile> {
    fn clear_results(&mut self) {
        self.clear();
    }

    fn push_tile(&mut self, tile: Tile) {
        self.push(tile);
    }
}

/// Replaces the grid with `min(count, limit)` ghost tiles, no delay.
pub fn render_ghost<S: ResultsSurface + ?Sized>(surface: &mut S, count: usize, limit: usize) {
    surface.clear_results();
    for _ in 0..count.min(limit) {
        surface.push_tile(Tile::Ghost);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Clear,
    Show(Tile),
    Pause(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Revealing { index: usize, pause_pending: bool },
    Summary,
    Done,
}

/// Step generator for one reveal: clear, then each shown number followed by
/// a pause, then the `+N` tile when numbers were cut off.
#[derive(Debug, Clone)]
pub struct RevealPlan<'a> {
    numbers: &'a [i64],
    limited: usize,
    delay: Duration,
    phase: RevealPhase,
}

impl<'a> RevealPlan<'a> {
    pub fn new(numbers: &'a [i64], max_revealed: usize, delay: Duration) -> Self {
        Self {
            numbers,
            limited: numbers.len().min(max_revealed),
            delay,
            phase: RevealPhase::Idle,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn shown(&self) -> usize {
        self.limited
    }

    pub fn overflow(&self) -> usize {
        self.numbers.len() - self.limited
    }
}

impl Iterator for RevealPlan<'_> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        match self.phase {
            RevealPhase::Idle => {
                self.phase = RevealPhase::Revealing {
                    index: 0,
                    pause_pending: false,
                };
                Some(RevealStep::Clear)
            }
            RevealPhase::Revealing {
                index,
                pause_pending: true,
            } => {
                self.phase = RevealPhase::Revealing {
                    index: index + 1,
                    pause_pending: false,
                };
                Some(RevealStep::Pause(self.delay))
            }
            RevealPhase::Revealing { index, .. } if index < self.limited => {
                self.phase = RevealPhase::Revealing {
                    index,
                    pause_pending: true,
                };
                Some(RevealStep::Show(Tile::Number(self.numbers[index])))
            }
            RevealPhase::Revealing { .. } => {
                self.phase = RevealPhase::Summary;
                self.next()
            }
            RevealPhase::Summary => {
                self.phase = RevealPhase::Done;
                (self.overflow() > 0).then(|| RevealStep::Show(Tile::Overflow(self.overflow())))
            }
            RevealPhase::Done => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSummary {
    pub shown: usize,
    pub overflow: usize,
}

/// Plays the reveal into `surface`, sleeping on every pause step.
pub async fn reveal<S: ResultsSurface + ?Sized>(
    surface: &mut S,
    numbers: &[i64],
    settings: &DrawSettings,
) -> RevealSummary {
    let mut plan = RevealPlan::new(numbers, settings.max_revealed, settings.reveal_delay());
    let summary = RevealSummary {
        shown: plan.shown(),
        overflow: plan.overflow(),
    };

    for step in plan.by_ref() {
        match step {
            RevealStep::Clear => surface.clear_results(),
            RevealStep::Show(tile) => surface.push_tile(tile),
            RevealStep::Pause(delay) => tokio::time::sleep(delay).await,
        }
    }
    debug_assert_eq!(plan.phase(), RevealPhase::Done);

    tracing::debug!(shown = summary.shown, overflow = summary.overflow, "reveal finished");
    summary
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
