//! Vitrina CLI - inspect and exercise the storefront core from a terminal.
//!
//! Commands:
//! - `vitrina list` - Show and edit the file-backed shopping list
//! - `vitrina price` - Resolve the price a shopper sees for a product
//! - `vitrina catalog` - Browse a catalog source
//! - `vitrina theme` - Render the theme stylesheet from the site configuration
//! - `vitrina proxy` - Check and fetch image proxy URLs
//! - `vitrina config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, ListArgs, PriceArgs, ProxyArgs, ThemeArgs};

/// Vitrina CLI - Work with the storefront shopping list, catalog and theme
#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the shopping list
    List(ListArgs),

    /// Resolve offer and promotion pricing for a product
    Price(PriceArgs),

    /// Browse products from the catalog source
    Catalog(CatalogArgs),

    /// Render the theme stylesheet
    Theme(ThemeArgs),

    /// Check or fetch image proxy URLs
    Proxy(ProxyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn setup_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose, cli.json);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Price(args) => commands::price::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Theme(args) => commands::theme::run(args, &ctx).await,
        Commands::Proxy(args) => commands::proxy::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
