use thiserror::Error;

/// A failed business rule. `Display` is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name cannot be blank or contain numbers")]
    InvalidName,
    #[error("Invalid product type: {0}")]
    InvalidType(String),
    #[error("Inventory must be between 1 and 9999")]
    InventoryOutOfRange,
    #[error("Cost must be provided")]
    CostMissing,
    #[error("Cost must be non-negative")]
    NegativeCost,
}
