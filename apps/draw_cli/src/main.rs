use std::{
    io::{self, IsTerminal, Stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use draw_core::{
    load_settings, DrawOrchestrator, DrawView, GridView, ResultsSurface, StdUnitRandom,
    SubmitOutcome,
};
use shared::{
    domain::{FormInput, Tile},
    error::ErrorReport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Draw random numbers from a range")]
struct Args {
    /// How many numbers to draw (1-200).
    #[arg(long, allow_hyphen_values = true)]
    count: String,
    #[arg(long, allow_hyphen_values = true)]
    min: String,
    #[arg(long, allow_hyphen_values = true)]
    max: String,
    /// Draw distinct numbers only.
    #[arg(long)]
    no_repeat: bool,
    /// Fixed RNG seed for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file; defaults to ./draw.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the result as JSON instead of animating it.
    #[arg(long)]
    json: bool,
}

/// Prints tiles onto a single terminal line, redrawing it on every clear.
struct TerminalView {
    out: Stdout,
    interactive: bool,
    line_open: bool,
}

impl TerminalView {
    fn new() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self {
            out,
            interactive,
            line_open: false,
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.line_open {
            writeln!(self.out)?;
            self.line_open = false;
        }
        self.out.flush()
    }
}

impl ResultsSurface for TerminalView {
    fn clear_results(&mut self) {
        if self.interactive && self.line_open {
            let _ = write!(self.out, "\r\x1b[2K");
            let _ = self.out.flush();
            self.line_open = false;
        }
    }

    fn push_tile(&mut self, tile: Tile) {
        if tile.is_ghost() && !self.interactive {
            return;
        }
        let separator = if self.line_open { " " } else { "" };
        let _ = write!(self.out, "{separator}{tile}");
        let _ = self.out.flush();
        self.line_open = true;
    }
}

impl DrawView for TerminalView {
    fn clear_error(&mut self) {}

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.json {
        settings.prepare_delay_ms = 0;
        settings.reveal_delay_ms = 0;
    }
    let mut orchestrator =
        DrawOrchestrator::new(settings, StdUnitRandom::from_seed_option(args.seed));
    let form = FormInput::new(args.count, args.min, args.max, args.no_repeat);

    if args.json {
        let mut view = GridView::default();
        let outcome = orchestrator.submit(&form, &mut view).await;
        let (json, code) = match &outcome {
            SubmitOutcome::Rejected(err) => {
                (serde_json::to_string(&ErrorReport::from(err))?, ExitCode::from(2))
            }
            SubmitOutcome::Revealed { result, .. } => {
                (serde_json::to_string(result)?, ExitCode::SUCCESS)
            }
        };
        println!("{json}");
        return Ok(code);
    }

    let mut view = TerminalView::new();
    orchestrator.initial_load(&mut view);
    let outcome = orchestrator.submit(&form, &mut view).await;
    view.finish().context("failed to write results")?;

    Ok(match outcome {
        SubmitOutcome::Rejected(_) => ExitCode::from(2),
        SubmitOutcome::Revealed { .. } => ExitCode::SUCCESS,
    })
}
