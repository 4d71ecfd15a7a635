//! # Catalog Store
//!
//! Read-only product and category listings. The mock backend has no
//! catalog mutation operations - the collections are fixed at seed time.

use std::sync::Arc;

use tracing::debug;

use atlas_core::{Category, CategoryFilter, Product};

use crate::error::StoreResult;
use crate::latency::LatencyProfile;
use crate::store::{lock, Shared};

/// Store for product and category listings.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    latency: Arc<LatencyProfile>,
    products: Shared<Product>,
    categories: Shared<Category>,
}

impl CatalogStore {
    pub(crate) fn new(
        latency: Arc<LatencyProfile>,
        products: Shared<Product>,
        categories: Shared<Category>,
    ) -> Self {
        CatalogStore {
            latency,
            products,
            categories,
        }
    }

    /// Lists products, optionally filtered by exact category match.
    ///
    /// ## Behavior
    /// - `CategoryFilter::All` bypasses filtering entirely
    /// - Returns a snapshot copy; mutating it never affects the store
    pub async fn list_products(&self, filter: &CategoryFilter) -> StoreResult<Vec<Product>> {
        self.latency.simulate(self.latency.list).await;

        let products = lock(&self.products);
        let snapshot: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        debug!(count = snapshot.len(), ?filter, "Listing products");
        Ok(snapshot)
    }

    /// Lists all categories (snapshot copy).
    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.latency.simulate(self.latency.lookup).await;

        let categories = lock(&self.categories);
        debug!(count = categories.len(), "Listing categories");
        Ok(categories.clone())
    }
}
