//! chestgrid - headless driver for the chest inventory grid
//!
//! Loads a seed, replays scripted drag/drop gestures through the move history,
//! and prints the resulting chest screen as text.

mod config;
mod move_script;
mod render;

use anyhow::{Context, Result};
use chestgrid_core::SectionName;
use chestgrid_inventory::{InventoryHistory, InventorySeed, InventoryState};
use chestgrid_testkit::JsonlSink;
use clap::Parser;
use config::{ChestgridConfig, DEFAULT_CONFIG_PATH};
use move_script::MoveScript;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "chestgrid", version, about = "Replay drag/drop moves on a chest inventory")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// JSON seed describing the initial slot contents (overrides the config).
    #[arg(long)]
    seed: Option<PathBuf>,
    /// JSON move script to replay.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Append one JSON line per script step to this file.
    #[arg(long)]
    event_log: Option<PathBuf>,
    /// Write the final state as a seed to this file.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Sections to print (storage, inventory, hotbar). Defaults to all three.
    #[arg(long = "section")]
    sections: Vec<SectionName>,
    /// Write the effective configuration to `--config` and exit.
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting chestgrid v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = ChestgridConfig::load_from_path(&cli.config);
    if cli.init_config {
        config.save_to_path(&cli.config)?;
        info!("Wrote configuration to {}", cli.config.display());
        return Ok(());
    }

    let state = initial_state(&cli, &config)?;
    info!(items = state.item_count(), "loaded inventory");
    let mut history = InventoryHistory::new(state, config.history_limit);

    if let Some(path) = &cli.script {
        let script = MoveScript::from_path(path)?;
        let mut sink = cli.event_log.as_ref().map(JsonlSink::create).transpose()?;
        let summary = script.run(&mut history, sink.as_mut())?;
        info!(
            moved = summary.moved,
            ignored = summary.ignored,
            undone = summary.undone,
            redone = summary.redone,
            "script finished"
        );
    }

    let sections = if cli.sections.is_empty() {
        SectionName::ALL.to_vec()
    } else {
        cli.sections.clone()
    };
    print!(
        "{}",
        render::render_state(history.current(), &sections, &config.empty_slot_glyph)
    );

    if let Some(path) = &cli.save {
        let json = history.current().to_seed().to_json_string()?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved final state to {}", path.display());
    }

    Ok(())
}

fn initial_state(cli: &Cli, config: &ChestgridConfig) -> Result<InventoryState> {
    let seed = match cli.seed.as_ref().or(config.seed_path.as_ref()) {
        Some(path) => InventorySeed::from_path(path)
            .with_context(|| format!("failed to load seed {}", path.display()))?,
        None => InventorySeed::demo(),
    };
    InventoryState::from_seed(&seed).context("seed does not describe a valid chest")
}
