//! # Phone Finder CLI (`phonefinder`)
//!
//! The `phonefinder` binary serves the chat API and offers one-shot access
//! to the same engine from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! phonefinder --config ./config/phonefinder.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `phonefinder serve` | Start the HTTP chat server |
//! | `phonefinder ask "<message>"` | Answer one message and print the reply with cards |
//! | `phonefinder catalog` | List every phone in the catalog |
//!
//! ## Examples
//!
//! ```bash
//! # Ask for a budget phone
//! phonefinder ask "samsung phone under 20000"
//!
//! # Same, as the JSON payload the HTTP API returns
//! phonefinder ask "gaming phone with 5g" --json
//!
//! # Start the server for the browser UI
//! phonefinder serve --config ./config/phonefinder.toml
//! ```

use clap::{Parser, Subcommand};
use phone_finder::{catalog, chat, config, server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Phone Finder CLI — a conversational phone-finder over a static catalog.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/phonefinder.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "phonefinder",
    about = "Phone Finder — ask for phones in plain language",
    version,
    long_about = "Phone Finder interprets free-text shopping queries (brand, budget, features, \
    RAM and storage) with fixed heuristics, filters a static phone catalog, and replies in \
    natural language, over HTTP or from the command line."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/phonefinder.toml`. Catalog, server, response,
    /// and logging settings are read from this file.
    #[arg(long, global = true, default_value = "./config/phonefinder.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP chat server.
    ///
    /// Loads the catalog once, then binds to `[server].bind` and serves
    /// `POST /api/chat`, `GET /api/phones`, and `GET /health`.
    Serve,

    /// Answer a single chat message.
    ///
    /// Prints the reply text followed by a card for every attached phone.
    Ask {
        /// The message, exactly as a user would type it.
        message: String,

        /// Print the JSON payload instead of text and cards.
        #[arg(long)]
        json: bool,
    },

    /// List every phone in the catalog.
    Catalog,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    init_logging(&cfg.logging.filter);

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Ask { message, json } => {
            chat::run_ask(&cfg, &message, json)?;
        }
        Commands::Catalog => {
            catalog::list_catalog(&cfg)?;
        }
    }

    Ok(())
}
