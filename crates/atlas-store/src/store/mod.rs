//! # Store Module
//!
//! The mock backend's operation surface, split by entity family.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Mock Store Pattern                              │
//! │                                                                     │
//! │  Caller                                                             │
//! │    │  backend.sessions().open_session(1000).await?                  │
//! │    ▼                                                                │
//! │  SessionStore                                                       │
//! │    │  1. suspend for the latency window (simulated round-trip)      │
//! │    │  2. validate input (atlas-core rules)                          │
//! │    │  3. lock the collection, mutate, clone the result              │
//! │    ▼                                                                │
//! │  Arc<Mutex<Vec<Session>>>  (store-owned, never shared out)          │
//! │                                                                     │
//! │  The lock is NEVER held across an await point: latency elapses      │
//! │  first, then the mutation runs to completion, so every operation    │
//! │  is serializable even under concurrent callers.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`catalog::CatalogStore`] - Product and category listings
//! - [`customer::CustomerStore`] - Customer listing and creation
//! - [`session::SessionStore`] - Cash drawer session lifecycle
//! - [`sale::SaleStore`] - Sale processing and order history
//! - [`role::RoleStore`] - Role definitions and permission assignment

pub mod catalog;
pub mod customer;
pub mod role;
pub mod sale;
pub mod session;

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

/// A store-owned collection. Every read hands out clones; the `Arc` is
/// only ever shared between sub-stores of the same backend instance.
pub(crate) type Shared<T> = Arc<Mutex<Vec<T>>>;

/// Creates an empty shared collection.
pub(crate) fn shared<T>() -> Shared<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Creates a pre-populated shared collection.
pub(crate) fn shared_from<T>(items: Vec<T>) -> Shared<T> {
    Arc::new(Mutex::new(items))
}

/// Locks a collection for the duration of one mutation or snapshot.
pub(crate) fn lock<T>(collection: &Shared<T>) -> MutexGuard<'_, Vec<T>> {
    collection.lock().expect("store mutex poisoned")
}

/// Generates a prefixed entity id (e.g., `CLT-4f9c...`).
///
/// UUID v4 suffix: globally unique without coordination, collision-safe
/// under load.
pub(crate) fn entity_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entity_ids_are_prefixed_and_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| entity_id("CLT")).collect();
        assert_eq!(ids.len(), 10_000);
        assert!(ids.iter().all(|id| id.starts_with("CLT-")));
    }
}
