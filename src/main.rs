use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use inkbro::config::{ConfigStore, SettingsDocument};
use inkbro::logging::init_tracing;
use inkbro::ui::app::LaunchScreen;
use inkbro::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "inkbro", version, about = "Browser settings screens in the terminal")]
struct Cli {
    /// Settings file (default: the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Force the catalog grid to this many columns
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=2))]
    grid: u16,

    #[command(subcommand)]
    screen: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Settings catalog (default)
    Catalog,
    /// Quick-toggle panel
    Toggles,
    /// Text-selection menu
    Selection {
        /// Text treated as selected
        #[arg(long, default_value = "lazy dog")]
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(SettingsDocument::default_path);
    let store = ConfigStore::from_file(path.clone())
        .with_context(|| format!("loading settings from {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings loaded");

    let screen = match cli.screen.unwrap_or(Command::Catalog) {
        Command::Catalog => LaunchScreen::Catalog,
        Command::Toggles => LaunchScreen::Toggles,
        Command::Selection { text } => LaunchScreen::Selection { text },
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(runtime::run(store, screen, cli.grid))
}
