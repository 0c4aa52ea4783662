use async_trait::async_trait;
use models::{Product, ValidProduct};

/// Trait abstraction for product storage.
/// Implementations own identifier allocation; callers pass only validated data.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: ValidProduct) -> Product;
    async fn list(&self) -> Vec<Product>;
}
