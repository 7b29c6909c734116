//! Draw worker: owns the orchestrator and a tokio runtime on its own thread,
//! turning queued commands into UI events one at a time.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use draw_core::{
    DrawOrchestrator, DrawSettings, DrawView, ResultsSurface, StdUnitRandom, SubmitOutcome,
};
use shared::domain::Tile;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{DrawFinish, UiEvent};

struct ChannelView<'a> {
    ui_tx: &'a Sender<UiEvent>,
}

impl ChannelView<'_> {
    fn send(&self, event: UiEvent) {
        if self.ui_tx.send(event).is_err() {
            tracing::warn!("ui event channel closed; dropping event");
        }
    }
}

impl ResultsSurface for ChannelView<'_> {
    fn clear_results(&mut self) {
        self.send(UiEvent::ClearResults);
    }

    fn push_tile(&mut self, tile: Tile) {
        self.send(UiEvent::PushTile(tile));
    }
}

impl DrawView for ChannelView<'_> {
    fn clear_error(&mut self) {
        self.send(UiEvent::ClearError);
    }

    fn show_error(&mut self, message: &str) {
        self.send(UiEvent::ShowError(message.to_string()));
    }
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: DrawSettings,
    seed: Option<u64>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "draw worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build draw runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut orchestrator =
                DrawOrchestrator::new(settings, StdUnitRandom::from_seed_option(seed));
            let mut view = ChannelView { ui_tx: &ui_tx };
            orchestrator.initial_load(&mut view);
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

            // Commands run strictly in order; a submit during a reveal waits for it.
            while let Ok(cmd) = cmd_rx.recv() {
                let finish = match cmd {
                    BackendCommand::Submit(form) => {
                        match orchestrator.submit(&form, &mut view).await {
                            SubmitOutcome::Rejected(_) => DrawFinish::Rejected,
                            SubmitOutcome::Revealed { summary, .. } => DrawFinish::Revealed {
                                shown: summary.shown,
                                overflow: summary.overflow,
                            },
                        }
                    }
                    BackendCommand::Clear => {
                        tracing::info!("draw: clear");
                        orchestrator.clear(&mut view);
                        DrawFinish::Cleared
                    }
                };
                view.send(UiEvent::DrawFinished(finish));
            }
            tracing::info!("draw worker stopping: command queue closed");
        });
    })
}
