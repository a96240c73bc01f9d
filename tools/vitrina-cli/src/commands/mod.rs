//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod list;
pub mod price;
pub mod proxy;
pub mod theme;

use anyhow::{bail, Context as _, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use vitrina_commerce::catalog::Product;
use vitrina_commerce::ProductId;

use crate::context::Context;

/// Where a single product comes from.
#[derive(Args, Clone)]
pub struct ProductSource {
    /// Product ID to look up in the catalog.
    pub id: Option<i64>,

    /// Read the product from a JSON file in the remote record shape.
    #[arg(short, long, conflicts_with = "id")]
    pub file: Option<String>,

    /// Catalog snapshot file to use instead of the remote service.
    #[arg(short, long)]
    pub snapshot: Option<String>,
}

impl ProductSource {
    /// Resolve the product from a file or the catalog.
    pub async fn resolve(&self, ctx: &Context) -> Result<Product> {
        if let Some(path) = &self.file {
            let path = ctx.resolve_path(path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read product: {}", path.display()))?;
            return Product::from_json(&json)
                .with_context(|| format!("Failed to parse product: {}", path.display()));
        }

        let Some(id) = self.id else {
            bail!("Pass a product ID or --file");
        };
        let id = ProductId::new(id);

        let source = ctx.catalog_source(self.snapshot.as_deref())?;
        let products = source
            .products()
            .await
            .context("Failed to fetch products")?;
        products
            .into_iter()
            .find(|p| p.id == id)
            .with_context(|| format!("Product {} not found", id))
    }
}

/// Parse a `--date` flag, defaulting to today.
pub fn date_or_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommand,
}

#[derive(Subcommand)]
pub enum ListCommand {
    /// Show the items in the list.
    Show,
    /// Add a product to the list.
    Add(ProductSource),
    /// Add the product if absent, remove it otherwise.
    Toggle(ProductSource),
    /// Remove a product from the list.
    Remove {
        /// Product ID.
        id: i64,
    },
    /// Remove every item.
    Clear,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub product: ProductSource,

    /// Day to resolve the price for (YYYY-MM-DD, default: today).
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog snapshot file to use instead of the remote service.
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,

    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products with their resolved prices.
    Browse {
        /// Only products in this category.
        #[arg(long, conflicts_with = "brand")]
        category: Option<i64>,

        /// Only products of this brand.
        #[arg(long)]
        brand: Option<i64>,

        /// Only featured products.
        #[arg(long)]
        featured: bool,

        /// Day to resolve prices for (YYYY-MM-DD, default: today).
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the navigation: lines with their categories.
    Nav,
    /// Show the home page sections and banners.
    Home,
}

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    /// Catalog snapshot file to use instead of the remote service.
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Print the configuration panel lines instead of the stylesheet.
    #[arg(long)]
    pub debug: bool,

    /// Report the panel as seen on a mobile viewport.
    #[arg(long, requires = "debug")]
    pub mobile: bool,
}

/// Arguments for the proxy command.
#[derive(Args)]
pub struct ProxyArgs {
    #[command(subcommand)]
    pub command: ProxyCommand,
}

#[derive(Subcommand)]
pub enum ProxyCommand {
    /// Check whether the proxy would fetch a URL.
    Check {
        /// Upstream image URL.
        url: String,
    },
    /// Fetch an image through the proxy handler.
    Fetch {
        /// Upstream image URL.
        url: String,

        /// Write the image body to this file.
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_or_today() {
        assert_eq!(
            date_or_today(Some("2026-10-19")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
        );
        assert!(date_or_today(Some("19/10/2026")).is_err());
        assert!(date_or_today(None).is_ok());
    }
}
