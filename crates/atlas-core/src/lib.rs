//! # atlas-core: Pure Business Logic for Atlas ERP
//!
//! This crate is the **heart** of Atlas ERP. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Atlas ERP Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     UI / Caller Layer                         │ │
//! │  │   guards, dashboards, billing screens, admin pages            │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                ★ atlas-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌──────────┐ ┌──────────┐ ┌─────────────┐ ┌────────────┐   │ │
//! │  │  │  access  │ │  types   │ │ permissions │ │ validation │   │ │
//! │  │  │ classify │ │ Session  │ │ can/canAny  │ │   rules    │   │ │
//! │  │  │ routes   │ │ Invoice  │ │ canAll      │ │   checks   │   │ │
//! │  │  └──────────┘ └──────────┘ └─────────────┘ └────────────┘   │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                atlas-store (Mock Backend Layer)               │ │
//! │  │        in-memory collections, simulated latency               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`access`] - Role classification and section access resolution
//! - [`permissions`] - Permission sets and per-role presets
//! - [`types`] - Domain types (Product, Customer, Session, Invoice, Role)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::access::{classify, Section, UserRecord};
//!
//! let user = UserRecord {
//!     employee_id: Some("EMP-004".to_string()),
//!     role: Some("hr".to_string()),
//!     ..UserRecord::default()
//! };
//!
//! let class = classify(Some(&user));
//!
//! // The "hr" role grants both the manager and HR admin tiers.
//! assert!(class.is_manager);
//! assert!(class.is_hr_admin);
//! assert!(class.has_access(Section::Admin));
//! assert_eq!(class.default_route(), "/erp/hrms/dashboard");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod permissions;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::PermissionSet` instead of
// `use atlas_core::permissions::PermissionSet`

pub use access::{classify, RoleClassification, Section, UserRecord};
pub use error::{CoreResult, ValidationError};
pub use permissions::{permissions_for_role, PermissionSet};
pub use types::*;
