//! Pokedex - interactive CLI for the PokeAPI location-area catalog
//!
//! Main entry point for the CLI application.

use clap::Parser;
use pokedex::{Config, Repl};

/// Pokedex - browse the PokeAPI location-area catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override the catalog root URL
    #[arg(long)]
    base_url: Option<String>,

    /// Single command mode (non-interactive): run one command line and exit
    #[arg(long, short = 'c')]
    command: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    let mut repl = Repl::with_config(config)?;

    // Single command mode
    if let Some(line) = args.command {
        let mut stdout = std::io::stdout();
        repl.dispatch_line(&line, &mut stdout).await?;
        return Ok(());
    }

    // Interactive REPL mode
    repl.run().await?;

    Ok(())
}
