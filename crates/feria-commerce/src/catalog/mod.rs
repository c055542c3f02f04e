//! Catalog: products and sheet-row normalization.

mod normalize;
mod product;
#[cfg(feature = "fetch")]
mod source;

pub use normalize::{
    Normalizer, COL_AVAILABLE, COL_DESCRIPTION, COL_IMAGE_URL, COL_NAME, COL_PRICE,
    DEFAULT_IMAGE_PLACEHOLDER,
};
pub use product::Product;
#[cfg(feature = "fetch")]
pub use source::CatalogSource;
