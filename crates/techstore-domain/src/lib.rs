//! TechStore Domain Layer
//!
//! Contains the catalog entities and the rules the storefront derives its
//! views from: filter evaluation, facet selection, cart aggregation.
//! This layer has NO UI dependencies (only serde and the log facade).

mod error;
mod product;
mod catalog;
mod selection;
mod filter;
mod cart;
mod price;

pub use error::{DomainError, DomainResult};
pub use product::{Product, CPU_NOT_APPLICABLE, RAM_NOT_APPLICABLE};
pub use catalog::{seed_catalog, find_product};
pub use selection::Selection;
pub use filter::{
    evaluate, filter_products, FilterState, PriceRange, CPU_OPTIONS, PRICE_MAX, PRICE_MIN,
    RAM_OPTIONS,
};
pub use cart::{Cart, CartState};
pub use price::{format_price, parse_price, GROUP_SEPARATOR};
