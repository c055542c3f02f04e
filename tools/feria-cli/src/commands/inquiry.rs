//! Inquiry command - print a link asking about one product.

use anyhow::{bail, Result};

use crate::commands::InquiryArgs;
use crate::context::Context;

pub fn run(args: InquiryArgs, ctx: &Context) -> Result<()> {
    let products = ctx.load_catalog(&args.file)?;
    let Some(product) = products.iter().find(|p| p.name == args.product) else {
        bail!("Unknown product: {}", args.product);
    };

    let config = ctx.checkout_config(args.number.as_deref())?;
    let link = config.inquiry_link(product);

    ctx.output.header(&product.name);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Link", &link);

    Ok(())
}
