//! Shopping list commands.

use anyhow::{bail, Result};
use vitrina_commerce::ProductId;
use vitrina_ui::{AddToListButton, ButtonVariant, ClickOutcome};

use super::{ListArgs, ListCommand, ProductSource};
use crate::context::Context;
use crate::output::stock_badge;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ListCommand::Show => show_list(ctx),
        ListCommand::Add(source) => add_item(&source, ctx).await,
        ListCommand::Toggle(source) => toggle_item(&source, ctx).await,
        ListCommand::Remove { id } => remove_item(ProductId::new(id), ctx),
        ListCommand::Clear => clear_list(ctx),
    }
}

fn show_list(ctx: &Context) -> Result<()> {
    let store = ctx.open_list()?;

    if ctx.output.is_json() {
        ctx.output.json(&store.items());
        return Ok(());
    }

    ctx.output.header("Lista de compra");

    if store.is_empty() {
        ctx.output.info("La lista está vacía");
        return Ok(());
    }

    for item in store.items() {
        ctx.output.list_item(&format!(
            "[{}] {} - {} ({})",
            item.id,
            item.description(),
            item.product.price,
            stock_badge(item.product.in_stock)
        ));
    }
    ctx.output.kv("items", &store.len().to_string());

    Ok(())
}

async fn add_item(source: &ProductSource, ctx: &Context) -> Result<()> {
    let product = source.resolve(ctx).await?;
    if !product.is_addable() {
        bail!("Product {} has no stock and cannot be added", product.id);
    }

    let mut store = ctx.open_list()?;
    let id = product.id;
    let description = product.description.clone();

    if store.add_item(product) {
        ctx.output.success(&format!("Added [{}] {}", id, description));
    } else {
        ctx.output.info(&format!("[{}] {} is already in the list", id, description));
    }

    Ok(())
}

async fn toggle_item(source: &ProductSource, ctx: &Context) -> Result<()> {
    let product = source.resolve(ctx).await?;
    let mut store = ctx.open_list()?;
    let mut button = AddToListButton::new(product, ButtonVariant::Page);

    match button.click(&mut store) {
        ClickOutcome::Rejected => bail!("{}", button.label(&store)),
        ClickOutcome::Added => ctx.output.success(&format!("Added [{}]", button.product().id)),
        ClickOutcome::Removed => ctx.output.success(&format!("Removed [{}]", button.product().id)),
    }

    Ok(())
}

fn remove_item(id: ProductId, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_list()?;

    if store.remove_item(id) {
        ctx.output.success(&format!("Removed [{}]", id));
    } else {
        ctx.output.warn(&format!("Product {} is not in the list", id));
    }

    Ok(())
}

fn clear_list(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_list()?;
    let count = store.len();
    store.clear();
    ctx.output.success(&format!("Removed {} item(s)", count));
    Ok(())
}
