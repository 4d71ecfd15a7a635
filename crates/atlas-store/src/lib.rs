//! # atlas-store: Mock Transactional Backend for Atlas ERP
//!
//! This crate emulates a remote transactional API surface entirely in
//! process memory. Every operation is asynchronous: the caller suspends
//! for a simulated latency window before the operation touches any
//! state, modeling a network round-trip without any actual I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Atlas ERP Data Flow                           │
//! │                                                                     │
//! │  Caller (UI layer, tests)                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   atlas-store (THIS CRATE)                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────────┐  ┌──────────────────────┐  ┌─────────────┐ │ │
//! │  │  │ MockBackend │  │        Stores        │  │    Seed     │ │ │
//! │  │  │  (facade)   │  │ catalog  customers   │  │ demo data   │ │ │
//! │  │  │             │◄─│ sessions sales roles │  │             │ │ │
//! │  │  └─────────────┘  └──────────────────────┘  └─────────────┘ │ │
//! │  │                                                               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  In-memory collections (process lifetime, reset on restart)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Construction-time configuration (latency, policy, operator)
//! - [`latency`] - Injectable simulated-latency profile
//! - [`error`] - Store error types
//! - [`store`] - Store implementations (catalog, customer, session, sale, role)
//! - [`seed`] - Demo data
//!
//! ## Usage
//!
//! ```rust
//! use atlas_store::{MockBackend, StoreConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), atlas_store::StoreError> {
//! // Zero-latency instance with demo data (tests/demos)
//! let backend = MockBackend::with_seed_data(StoreConfig::for_tests());
//!
//! let session = backend.sessions().open_session(10_000).await?;
//! let orders = backend.sales().list_orders().await?;
//! assert!(orders.is_empty());
//!
//! backend.sessions().close_session(&session.id, 10_000).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Backends are explicitly constructed, never ambient: each
//! `MockBackend` owns an isolated set of collections, so tests can spin
//! up as many independent instances as they need.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod latency;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Operator, SessionPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use latency::LatencyProfile;

// Store re-exports for convenience
pub use store::catalog::CatalogStore;
pub use store::customer::CustomerStore;
pub use store::role::RoleStore;
pub use store::sale::SaleStore;
pub use store::session::SessionStore;

use std::sync::Arc;

use tracing::info;

use crate::store::{shared, shared_from};

/// The mock backend facade.
///
/// Owns every collection and hands out per-entity stores that share
/// them. Construct one per process (or per test) and pass it by
/// reference to consumers.
#[derive(Debug, Clone)]
pub struct MockBackend {
    catalog: CatalogStore,
    customers: CustomerStore,
    sessions: SessionStore,
    sales: SaleStore,
    roles: RoleStore,
}

impl MockBackend {
    /// Creates a backend with empty collections.
    pub fn new(config: StoreConfig) -> Self {
        Self::build(config, Seeded::No)
    }

    /// Creates a backend pre-populated with the demo data from [`seed`].
    pub fn with_seed_data(config: StoreConfig) -> Self {
        Self::build(config, Seeded::Yes)
    }

    fn build(config: StoreConfig, seeded: Seeded) -> Self {
        let latency = Arc::new(config.latency);

        let (products, categories, customers, sessions, roles) = match seeded {
            Seeded::Yes => (
                shared_from(seed::seed_products()),
                shared_from(seed::seed_categories()),
                shared_from(seed::seed_customers()),
                shared_from(seed::seed_sessions()),
                shared_from(seed::seed_roles()),
            ),
            Seeded::No => (shared(), shared(), shared(), shared(), shared()),
        };
        let invoices = shared();

        info!(
            policy = ?config.session_policy,
            seeded = matches!(seeded, Seeded::Yes),
            "Mock backend ready"
        );

        MockBackend {
            catalog: CatalogStore::new(latency.clone(), products, categories),
            customers: CustomerStore::new(latency.clone(), customers),
            sessions: SessionStore::new(
                latency.clone(),
                config.session_policy,
                config.operator,
                sessions.clone(),
            ),
            sales: SaleStore::new(latency.clone(), invoices, sessions),
            roles: RoleStore::new(latency, roles),
        }
    }

    /// Returns the catalog store.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = backend.catalog().list_products(&filter).await?;
    /// ```
    pub fn catalog(&self) -> CatalogStore {
        self.catalog.clone()
    }

    /// Returns the customer store.
    pub fn customers(&self) -> CustomerStore {
        self.customers.clone()
    }

    /// Returns the session store.
    pub fn sessions(&self) -> SessionStore {
        self.sessions.clone()
    }

    /// Returns the sale store.
    pub fn sales(&self) -> SaleStore {
        self.sales.clone()
    }

    /// Returns the role store.
    pub fn roles(&self) -> RoleStore {
        self.roles.clone()
    }
}

/// Whether a backend starts from the demo fixtures or empty.
#[derive(Debug, Clone, Copy)]
enum Seeded {
    Yes,
    No,
}

// =============================================================================
// Unit Tests
// =============================================================================
