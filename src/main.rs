//! smartchunk-demo CLI entry point.
//!
//! With no subcommand the interactive demo terminal starts; subcommands
//! cover non-interactive playback, the static docs text, config handling
//! and shell completions.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use smartchunk_demo::{tui, Config};

mod commands;

#[derive(Parser)]
#[command(
    name = "smartchunk-demo",
    about = "Interactive terminal demo for SmartChunk",
    version = smartchunk_demo::version_string()
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one scripted scenario straight to stdout
    Play {
        /// Script name: install, chunk or compare
        script: String,
        /// Skip the per-frame delay
        #[arg(long)]
        instant: bool,
    },
    /// List the scripted demo commands
    Scripts,
    /// Print the SmartChunk quick-start docs
    Docs,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load()?;
            tui::run(&config)
        }
        Some(Commands::Play { script, instant }) => commands::play::handle_play(&script, instant),
        Some(Commands::Scripts) => commands::scripts::handle_scripts(),
        Some(Commands::Docs) => commands::docs::handle_docs(),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "smartchunk-demo", &mut io::stdout());
            Ok(())
        }
    }
}
