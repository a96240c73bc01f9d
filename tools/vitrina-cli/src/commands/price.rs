//! Price resolution command.

use anyhow::Result;
use vitrina_commerce::pricing::resolve_pricing;
use vitrina_ui::{format_percent, ProductCard};

use super::{date_or_today, PriceArgs};
use crate::context::Context;
use crate::output::{price_summary, stock_badge};

/// Run the price command.
pub async fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    let product = args.product.resolve(ctx).await?;
    let today = date_or_today(args.date.as_deref())?;
    let resolution = resolve_pricing(&product, today);

    if ctx.output.is_json() {
        ctx.output.json(&resolution);
        return Ok(());
    }

    let card = ProductCard::new(&product, today);

    ctx.output.header(&format!("[{}] {}", product.id, card.title));
    ctx.output.kv("marca", &card.brand);
    ctx.output.kv("stock", &stock_badge(product.in_stock));
    ctx.output.kv("precio", &price_summary(&resolution));
    ctx.output.kv("financiación", &resolution.financing_price.display());
    if resolution.has_discount {
        ctx.output.kv(
            "descuento",
            &format!("{}%", format_percent(resolution.discount_percentage)),
        );
    }
    if let Some(badge) = &card.badge {
        ctx.output.kv("badge", &badge.text());
    }
    if let Some(info) = &card.promo_info {
        ctx.output.kv("promoción", &info.name);
        if let Some(validity) = &info.validity {
            ctx.output.kv("vigencia", validity);
        }
    }
    ctx.output.kv("url", &card.href);

    Ok(())
}
