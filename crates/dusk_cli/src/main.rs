//! Dusk CLI
//!
//! Drives the theme toggle screen without a window:
//! - `run`: execute a JSON scenario and print its report
//! - `simulate`: step the screen frame by frame and print the colors
//! - `palette`: print both palettes

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::DuskConfig;
use dusk_app::{run_loaded_scenario, HeadlessScenario, SwitchEvent, ThemeScreen};
use dusk_theme::{Palette, Theme};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Animated light/dark theme toggle, headless
#[derive(Parser, Debug)]
#[command(name = "dusk")]
#[command(about = "Run and inspect the dusk theme toggle headlessly")]
#[command(version)]
struct Cli {
    /// Configuration file (dusk.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON scenario and print the report
    Run {
        /// Scenario file
        scenario: PathBuf,

        /// Also write the report to this relative path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Step the screen and print one line per frame
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "240")]
        frames: u32,

        /// Flip the switch before this frame (repeatable)
        #[arg(short, long = "toggle-at")]
        toggle_at: Vec<u32>,

        /// Print every frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the light and dark palettes
    Palette,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DuskConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Run { scenario, report } => run(&config, scenario, report),
        Command::Simulate {
            frames,
            toggle_at,
            json,
        } => simulate(&config, frames, &toggle_at, json),
        Command::Palette => {
            print_palette();
            Ok(())
        }
    }
}

fn run(config: &DuskConfig, scenario_path: PathBuf, report_path: Option<PathBuf>) -> Result<()> {
    tracing::info!("Running scenario: {}", scenario_path.display());

    let scenario = HeadlessScenario::from_path(&scenario_path)
        .with_context(|| format!("Failed to load scenario: {}", scenario_path.display()))?;
    let mut screen = ThemeScreen::new(config.viewport()?, config.animation.animator());

    let outcome = run_loaded_scenario(&scenario, config.headless(), &mut screen)?;
    let report = outcome.report();

    report.write_to_writer(&mut std::io::stdout().lock())?;
    if let Some(path) = report_path {
        report
            .write_to_path(&path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    if outcome.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}

/// One simulated frame, as printed by `dusk simulate`
#[derive(Debug, Clone, PartialEq, Serialize)]
struct FrameRow {
    frame: u32,
    theme: Theme,
    label: &'static str,
    progress: f32,
    background: String,
    circle: String,
    text: String,
}

impl FrameRow {
    fn capture(frame: u32, screen: &ThemeScreen) -> Self {
        let animator = screen.animator();
        let colors = animator.current_colors();
        Self {
            frame,
            theme: animator.theme(),
            label: animator.label(),
            progress: animator.progress(),
            background: colors.background.to_hex_string(),
            circle: colors.circle.to_hex_string(),
            text: colors.text.to_hex_string(),
        }
    }
}

impl fmt::Display for FrameRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5}  {:<5}  {:.4}  {}  {}  {}",
            self.frame, self.label, self.progress, self.background, self.circle, self.text
        )
    }
}

/// Step a fresh screen for `frames` frames, flipping the switch before every
/// frame listed in `toggle_at`.
fn simulate_frames(config: &DuskConfig, frames: u32, toggle_at: &[u32]) -> Result<Vec<FrameRow>> {
    let mut screen = ThemeScreen::new(config.viewport()?, config.animation.animator());
    let toggles: BTreeSet<u32> = toggle_at.iter().copied().collect();
    let dt = config.headless().tick_secs();

    tracing::info!(frames, toggles = toggles.len(), "Simulating");

    let mut rows = Vec::with_capacity(frames as usize);
    for frame in 0..frames {
        if toggles.contains(&frame) {
            let on = !screen.animator().switch_value();
            screen.handle(SwitchEvent::ValueChanged(on));
        }
        screen.frame(dt);
        rows.push(FrameRow::capture(frame, &screen));
    }

    Ok(rows)
}

fn simulate(config: &DuskConfig, frames: u32, toggle_at: &[u32], json: bool) -> Result<()> {
    for row in simulate_frames(config, frames, toggle_at)? {
        if json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{row}");
        }
    }
    Ok(())
}

fn print_palette() {
    for theme in Theme::ALL {
        let entry = Palette::for_theme(theme);
        println!(
            "{:<5}  background {}  circle {}  text {}",
            theme, entry.background, entry.circle, entry.text
        );
    }
}
