use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use models::{Product, ValidProduct};

use crate::products::ProductRepository;

/// Identifier handed to the first stored product.
pub const FIRST_ID: u64 = 1;

/// Concurrent in-memory product map.
///
/// Identifiers come from an atomic counter and are taken only once a product
/// is ready to insert, so they are unique, strictly increasing and gap-free.
/// Entries are fully built before insertion; readers never see a partial one.
#[derive(Debug)]
pub struct InMemoryProductStore {
    products: DashMap<u64, Product>,
    next_id: AtomicU64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            next_id: AtomicU64::new(FIRST_ID),
        }
    }

    /// Assign the next identifier and store the product under it.
    pub fn insert(&self, valid: ValidProduct) -> Product {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::new(id, valid);
        self.products.insert(id, product.clone());
        product
    }

    /// Snapshot of every stored product, ordered by identifier.
    pub fn list(&self) -> Vec<Product> {
        let mut items: Vec<Product> = self.products.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|p| p.id);
        items
    }

    #[cfg(test)]
    fn get(&self, id: u64) -> Option<Product> {
        self.products.get(&id).map(|e| e.value().clone())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.products.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn insert(&self, product: ValidProduct) -> Product {
        InMemoryProductStore::insert(self, product)
    }

    async fn list(&self) -> Vec<Product> {
        InMemoryProductStore::list(self)
    }
}
