//! Preview command - decode and normalize a sheet export.

use anyhow::{Context as _, Result};

use feria_commerce::sheet;

use crate::commands::PreviewArgs;
use crate::context::Context;

pub fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    ctx.output.info(&format!("Reading {}", args.file));
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read sheet file: {}", args.file))?;

    let rows = sheet::decode(&text);
    let products = ctx.normalizer().normalize(&rows);

    ctx.output.header("Products");
    for product in &products {
        ctx.output
            .list_item(&format!("{} - {}", product.name, product.price.display()));
        if !product.description.is_empty() {
            ctx.output.kv("description", &product.description);
        }
        ctx.output.kv("image", &product.image_ref);
    }

    let dropped = rows.len() - products.len();
    if dropped > 0 {
        ctx.output
            .warn(&format!("{} rows hidden or missing a name", dropped));
    }
    ctx.output
        .success(&format!("{} products available", products.len()));

    Ok(())
}
