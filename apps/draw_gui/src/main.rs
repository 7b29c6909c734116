use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use draw_core::{load_settings, DrawSettings};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DrawApp;

#[derive(Parser, Debug)]
struct Args {
    /// Fixed RNG seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file; defaults to ./draw.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref()).unwrap_or_else(|err| {
        tracing::error!("{err:#}; using default settings");
        DrawSettings::default()
    });

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings, args.seed);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Number Draw")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Number Draw",
        options,
        Box::new(|_cc| Ok(Box::new(DrawApp::new(cmd_tx, ui_rx)))),
    )
}
