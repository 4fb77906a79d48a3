use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use credline::cli::{handle_items_command, handle_simulate_command, SimulateArgs};
use credline::config::{CredlinePaths, Settings};
use credline::logging::{self, LogTarget};
use credline::provider::ItemsSource;

#[derive(Parser)]
#[command(
    name = "credline",
    version,
    about = "Terminal credit-line wizard",
    long_about = "credline walks through a personal credit line in three steps: \
                  pick an amount on a dial, choose a repayment plan and pick the \
                  bank account the money is sent to. Any committed step can be \
                  reopened and revised."
)]
struct Cli {
    /// Fetch step contents from this URL instead of the configured one
    #[arg(long, global = true, env = "CREDLINE_ITEMS_URL")]
    items_url: Option<String>,

    /// Read step contents from a JSON file; takes precedence over --items-url
    #[arg(long, global = true)]
    items_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard (default)
    #[command(alias = "ui")]
    Tui,

    /// Fetch the step contents once and print them
    Items,

    /// Run the wizard without a terminal UI and print the selection
    Simulate(SimulateArgs),

    /// Show current configuration and paths
    Config,

    /// Write the default configuration
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CredlinePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) {
        paths.ensure_directories()?;
        logging::init(LogTarget::File(&paths.log_file()), &settings.log_level)?;
    } else {
        logging::init(LogTarget::Stderr, &settings.log_level)?;
    }

    let source = ItemsSource::resolve(cli.items_url, cli.items_file, &settings);

    match command {
        Commands::Tui => {
            let provider = source.into_provider()?;
            credline::tui::run_tui(&settings, provider)?;
        }
        Commands::Items => {
            let provider = source.into_provider()?;
            handle_items_command(provider.as_ref(), &settings)
                .context("Failed to fetch step contents")?;
        }
        Commands::Simulate(args) => {
            let provider = source.into_provider()?;
            handle_simulate_command(provider.as_ref(), &settings, args)
                .context("Simulation failed")?;
        }
        Commands::Config => {
            println!("credline Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized credline at: {}", paths.base_dir().display());
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Run 'credline' to start the wizard.");
        }
    }

    Ok(())
}
