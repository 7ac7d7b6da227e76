//! # Product Repository
//!
//! Persistence for the product catalog collection.
//!
//! ## Key Operations
//! - `list`: the whole catalog in insertion order
//! - `save`: rewrite the whole collection (no partial-update API)
//!
//! Products are append-only at the business level - no update, no delete -
//! so the repository intentionally exposes nothing finer than the whole
//! collection.

use tracing::debug;

use crate::error::StoreResult;
use crate::store::{Store, PRODUCTS_KEY};
use billbook_core::Product;

/// Repository for catalog persistence.
#[derive(Debug)]
pub struct ProductRepository<'a, S: Store> {
    store: &'a mut S,
}

impl<'a, S: Store> ProductRepository<'a, S> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a mut S) -> Self {
        ProductRepository { store }
    }

    /// Lists all products in insertion order.
    ///
    /// A missing collection reads as empty (first run).
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        Ok(self.store.get_doc(PRODUCTS_KEY)?.unwrap_or_default())
    }

    /// Persists the whole catalog.
    ///
    /// The caller appends in memory first and rolls back on failure, so
    /// the persisted collection and the in-memory cache stay in step.
    pub fn save(&mut self, products: &[Product]) -> StoreResult<()> {
        debug!(count = products.len(), "Saving product catalog");
        self.store.set_doc(PRODUCTS_KEY, &products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use billbook_core::Money;
    use chrono::Utc;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_major_minor(10, 0),
            unit: "Pcs".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_collection_reads_empty() {
        let mut store = MemoryStore::new();
        assert!(ProductRepository::new(&mut store).list().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_keeps_insertion_order() {
        let mut store = MemoryStore::new();
        let catalog = vec![
            product("1", "Rice"),
            product("2", "Oil"),
            product("3", "Rice"), // duplicate names are allowed
        ];

        ProductRepository::new(&mut store).save(&catalog).unwrap();
        let listed = ProductRepository::new(&mut store).list().unwrap();

        assert_eq!(listed, catalog);
    }
}
