//! Feria CLI - Command line tool for the storefront catalog and cart.
//!
//! Commands:
//! - `feria preview` - Decode and normalize a catalog sheet export
//! - `feria order` - Build a cart and print the checkout link
//! - `feria inquiry` - Print an inquiry link for a single product

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{InquiryArgs, OrderArgs, PreviewArgs};

/// Feria CLI - Preview catalog sheets and build WhatsApp orders
#[derive(Parser)]
#[command(name = "feria")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and normalize a catalog sheet export
    Preview(PreviewArgs),

    /// Build a cart from catalog items and print the checkout link
    Order(OrderArgs),

    /// Print an inquiry link for a single product
    Inquiry(InquiryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Preview(args) => commands::preview::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Inquiry(args) => commands::inquiry::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
