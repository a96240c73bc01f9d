//! Output formatting for the CLI.

use console::style;
use vitrina_commerce::pricing::{PriceDisplay, PriceResolution};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Stock badge for a product's stock flag.
pub fn stock_badge(in_stock: Option<bool>) -> String {
    match in_stock {
        Some(true) => style("en stock").green().to_string(),
        Some(false) => style("sin stock").red().to_string(),
        None => style("sin datos").dim().to_string(),
    }
}

/// One-line summary of a resolved price.
pub fn price_summary(resolution: &PriceResolution) -> String {
    match &resolution.display {
        PriceDisplay::Regular { price } => price.display(),
        PriceDisplay::Discounted {
            original,
            price,
            percent,
        } => format!(
            "{} {} {}",
            style(original.display()).dim(),
            style(price.display()).green().bold(),
            style(format!("-{percent}%")).yellow()
        ),
        PriceDisplay::Stacked {
            original,
            offer_price,
            offer_percent,
            promo_price,
            promo_percent,
            promo_name,
        } => format!(
            "{} {} {} | {}: {} {}",
            style(original.display()).dim(),
            style(offer_price.display()).green().bold(),
            style(format!("-{offer_percent}%")).yellow(),
            promo_name,
            style(promo_price.display()).green(),
            style(format!("-{promo_percent}%")).yellow()
        ),
    }
}
