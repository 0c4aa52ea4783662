use std::sync::Arc;

use models::{Product, ProductDetails, ProductId, ProductType, ValidationError};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::products::repository::ProductRepository;
use crate::storage::InMemoryProductStore;

/// Application service encapsulating the product business rules.
/// Validation always runs before the repository is touched.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Service backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    /// Validate and store a product, returning its new identifier.
    #[instrument(skip(self, details), fields(product_type = %details.product_type))]
    pub async fn create(&self, details: &ProductDetails) -> Result<ProductId, ServiceError> {
        let valid = details.validate()?;
        let product = self.repo.insert(valid).await;
        info!(id = product.id, event = "product_created", "product stored");
        Ok(ProductId { id: product.id })
    }

    /// List products, optionally narrowed to one type.
    ///
    /// The filter is matched case-insensitively, unlike the exact match
    /// applied when products are created.
    #[instrument(skip(self))]
    pub async fn list(&self, type_filter: Option<&str>) -> Result<Vec<Product>, ServiceError> {
        let wanted = match type_filter {
            Some(raw) => Some(
                ProductType::parse_ignore_case(raw)
                    .ok_or_else(|| ValidationError::InvalidType(raw.to_string()))?,
            ),
            None => None,
        };

        let products = self.repo.list().await;
        let result: Vec<Product> = match wanted {
            Some(ty) => products.into_iter().filter(|p| p.product_type == ty).collect(),
            None => products,
        };
        debug!(count = result.len(), "products listed");
        Ok(result)
    }
}
