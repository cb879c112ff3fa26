//! Emerald Table CLI - menu inspection and demo session tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the menu with assigned images
//! emerald-cli menu
//!
//! # Print a menu loaded from a JSON file
//! emerald-cli menu --menu-file ./menu.json
//!
//! # Run a scripted diner session against mock collaborators
//! emerald-cli demo
//! ```
//!
//! # Commands
//!
//! - `menu` - Print the menu, including each item's resolved image
//! - `demo` - Run a scripted session (table, cart, signup, checkout)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "emerald-cli")]
#[command(author, version, about = "Emerald Table CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu with resolved images
    Menu {
        /// JSON menu file to load instead of the configured/sample menu
        #[arg(short, long)]
        menu_file: Option<PathBuf>,
    },
    /// Run a scripted diner session against mock collaborators
    Demo,
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment, RUST_LOG included
    dotenvy::dotenv().ok();

    // Initialize tracing; default to info for our crates
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "emerald_table_cli=info,emerald_table_session=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Menu { menu_file } => commands::menu::print(menu_file)?,
        Commands::Demo => commands::demo::run().await?,
    }
    Ok(())
}
