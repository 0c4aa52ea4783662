//! Service layer for the product catalogue.
//! - Applies the business rules defined in `models` before anything is stored.
//! - Hides the storage behind `ProductRepository` so handlers only see the service.

pub mod errors;
pub mod products;
pub mod storage;
