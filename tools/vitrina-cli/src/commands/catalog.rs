//! Catalog browsing commands.

use anyhow::{bail, Result};
use serde_json::json;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::pricing::resolve_pricing;
use vitrina_commerce::{BrandId, CategoryId};
use vitrina_data::{CatalogLoader, CatalogSource};
use vitrina_ui::{
    category_href, BannerCarousel, CategoriesDropdown, DropdownMode, HomePage, ProductLinesStrip,
};

use super::{date_or_today, CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{price_summary, stock_badge};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let source = ctx.catalog_source(args.snapshot.as_deref())?;

    match args.command {
        CatalogCommand::Browse {
            category,
            brand,
            featured,
            date,
        } => {
            browse(
                source.as_ref(),
                category.map(CategoryId::new),
                brand.map(BrandId::new),
                featured,
                date.as_deref(),
                ctx,
            )
            .await
        }
        CatalogCommand::Nav => show_nav(source.as_ref(), ctx).await,
        CatalogCommand::Home => show_home(source.as_ref(), ctx).await,
    }
}

async fn browse(
    source: &dyn CatalogSource,
    category: Option<CategoryId>,
    brand: Option<BrandId>,
    featured: bool,
    date: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let today = date_or_today(date)?;

    let mut loader = CatalogLoader::new();
    loader.load(source).await;
    if let Some(error) = loader.error() {
        bail!("{}", error);
    }

    if category.is_some() {
        loader.filter_by_category(category);
    } else if brand.is_some() {
        loader.filter_by_brand(brand);
    }

    let products: Vec<&Product> = if featured {
        loader.featured_products().iter().collect()
    } else {
        loader.products()
    };

    if ctx.output.is_json() {
        let rows: Vec<_> = products
            .iter()
            .map(|p| json!({ "product": p, "pricing": resolve_pricing(p, today) }))
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Productos ({})", products.len()));
    let widths = [6, 40, 20, 10];
    ctx.output.table_row(&["ID", "DESCRIPCIÓN", "MARCA", "STOCK"], &widths);
    for product in products {
        let id = product.id.to_string();
        let stock = stock_badge(product.in_stock);
        ctx.output.table_row(
            &[id.as_str(), product.description.as_str(), product.brand_label(), stock.as_str()],
            &widths,
        );
        ctx.output.kv("precio", &price_summary(&resolve_pricing(product, today)));
    }

    Ok(())
}

async fn show_nav(source: &dyn CatalogSource, ctx: &Context) -> Result<()> {
    let mut dropdown = CategoriesDropdown::new(DropdownMode::Desktop);
    dropdown.load(source).await;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "lines": dropdown.lines(),
            "categories": dropdown.loose_categories(),
        }));
        return Ok(());
    }

    ctx.output.header("Categorías");
    for line in dropdown.lines() {
        ctx.output.info(&line.line.description);
        for category in &line.categories {
            ctx.output
                .list_item(&format!("{} {}", category.description, category_href(category)));
        }
    }
    if dropdown.shows_separator() {
        ctx.output.info("Otras");
    }
    for category in dropdown.loose_categories() {
        ctx.output
            .list_item(&format!("{} {}", category.description, category_href(category)));
    }

    Ok(())
}

async fn show_home(source: &dyn CatalogSource, ctx: &Context) -> Result<()> {
    let home = HomePage::load(source).await;

    let mut carousel = BannerCarousel::new();
    carousel.load(source).await;

    let mut strip = ProductLinesStrip::new();
    strip.load(source).await;

    if ctx.output.is_json() {
        let sections: Vec<String> = home.sections().iter().map(|s| format!("{s:?}")).collect();
        let lines: Vec<_> = strip
            .links()
            .iter()
            .map(|l| json!({ "label": l.label, "href": l.href, "image": l.image }))
            .collect();
        ctx.output.json(&json!({
            "sections": sections,
            "banners": carousel.banners(),
            "lines": lines,
        }));
        return Ok(());
    }

    ctx.output.header("Inicio");
    for section in home.sections() {
        ctx.output.list_item(&format!("{section:?}"));
    }

    ctx.output.header(&format!("Banners ({})", carousel.len()));
    for banner in carousel.banners() {
        ctx.output.list_item(&banner);
    }

    if strip.is_visible() {
        ctx.output.header("Líneas");
        for link in strip.links() {
            ctx.output.kv(&link.label, &link.href);
        }
    }

    Ok(())
}
