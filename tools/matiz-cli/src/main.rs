//! Matiz CLI - Command line tool for the shipping-zone engine.
//!
//! Commands:
//! - `matiz validate` - Check a zone-catalog file for errors and warnings
//! - `matiz zones` - List configured zones in effective priority order
//! - `matiz quote` - Compute a shipping quote for a postal code and subtotal

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{QuoteArgs, ValidateArgs, ZonesArgs};

/// Matiz CLI - Inspect zone catalogs and compute shipping quotes
#[derive(Parser)]
#[command(name = "matiz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a zone-catalog file
    Validate(ValidateArgs),

    /// List configured zones in effective priority order
    Zones(ZonesArgs),

    /// Compute a shipping quote for a postal code and subtotal
    Quote(QuoteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load the catalog
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Zones(args) => commands::zones::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
