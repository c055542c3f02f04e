//! Order command - build a cart and print the checkout link.

use anyhow::{bail, Result};

use feria_commerce::cart::Cart;

use crate::commands::OrderArgs;
use crate::context::Context;

pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    if args.add.is_empty() {
        bail!("Nothing to order; pass at least one --add ITEM");
    }

    let products = ctx.load_catalog(&args.file)?;

    let mut cart = Cart::new();
    for item in &args.add {
        let (name, quantity) = parse_item(item);
        let Some(product) = products.iter().find(|p| p.name == name) else {
            bail!("Unknown product: {}", name);
        };
        let resulting = cart.add_product(product, quantity);
        ctx.output
            .debug(&format!("cart holds {} x{}", product.name, resulting));
    }

    let config = ctx.checkout_config(args.number.as_deref())?;
    let link = config.order_link(&cart)?;

    ctx.output.header("Order");
    for line in cart.lines() {
        ctx.output.list_item(&format!(
            "{} x{} - {}",
            line.name,
            line.quantity,
            line.line_total().display()
        ));
    }
    ctx.output.kv("Total", &cart.total().display());
    ctx.output.kv("Link", &link);
    ctx.output
        .success(&format!("Order ready: {} items", cart.item_count()));

    Ok(())
}

/// Split an `--add` value into name and quantity.
///
/// `NAME:QTY` adds QTY of NAME; a bare `NAME` adds one. A name containing
/// a colon still works when the trailing segment is not a number.
fn parse_item(item: &str) -> (&str, i64) {
    if let Some((name, qty)) = item.rsplit_once(':') {
        if let Ok(quantity) = qty.trim().parse::<i64>() {
            return (name, quantity);
        }
    }
    (item, 1)
}
