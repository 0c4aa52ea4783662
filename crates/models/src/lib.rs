//! Domain types for the product catalogue.
//!
//! - `ProductDetails` is the creation payload and owns the business rules.
//! - `Product` is the validated, immutable record kept by the store.

pub mod errors;
pub mod product;

pub use errors::ValidationError;
pub use product::{Product, ProductDetails, ProductId, ProductType, ValidProduct};
