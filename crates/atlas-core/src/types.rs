//! # Domain Types
//!
//! Core domain types used throughout Atlas ERP.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────┐         │
//! │  │   Product     │  │    Session     │  │    Invoice     │         │
//! │  │ ───────────── │  │ ────────────── │  │ ────────────── │         │
//! │  │ id            │  │ id             │  │ id             │         │
//! │  │ sku           │  │ opening_cash   │  │ invoice_number │         │
//! │  │ category      │  │ expected_cash  │  │ status         │         │
//! │  │ price_cents   │  │ variance       │  │ total_cents    │         │
//! │  └───────────────┘  └────────────────┘  └────────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────┐         │
//! │  │   Customer    │  │ SessionStatus  │  │ InvoiceStatus  │         │
//! │  │ ───────────── │  │ ────────────── │  │ ────────────── │         │
//! │  │ balance       │  │ Open           │  │ Pending        │         │
//! │  │ total_spent   │  │ Closed         │  │ Paid / Voided  │         │
//! │  └───────────────┘  └────────────────┘  └────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary fields are integer cents (i64) - never floats.
//! Serde renames to camelCase so serialized records match the JSON
//! shapes web clients consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A product category for catalog filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the category picker.
    pub name: String,
}

/// A product (or billable service) available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown on the billing screen and receipt.
    pub name: String,

    /// Category id this product belongs to.
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the product is offered for sale (soft delete).
    pub active: bool,
}

/// Category filter for product listings.
///
/// `All` bypasses filtering entirely; `Only` matches the category field
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Return every product.
    #[default]
    All,
    /// Return only products in the named category.
    Only(String),
}

impl CategoryFilter {
    /// Checks whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record.
///
/// `balance_cents` and `total_spent_cents` always start at zero; no
/// operation in the mock backend mutates them after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (CLT- prefixed).
    pub id: String,

    /// Customer display name.
    pub name: String,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Contact email address.
    pub email: Option<String>,

    /// Outstanding balance in cents.
    pub balance_cents: i64,

    /// Lifetime spend in cents.
    pub total_spent_cents: i64,
}

/// Caller-supplied fields for creating a customer.
///
/// The store assigns the id and defaults balance and total spent to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Session (cash drawer)
// =============================================================================

/// The status of a cash drawer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Drawer is open and accepting sales.
    Open,
    /// Drawer has been counted and closed.
    Closed,
}

/// A cash drawer shift bounded by open/close operations.
///
/// ## Lifecycle
/// ```text
/// open_session(opening_cash)          close_session(id, closing_cash)
///        │                                        │
///        ▼                                        ▼
/// Session { status: Open,     ──────►  Session { status: Closed,
///           closed_at: None }                    expected_cash, variance }
/// ```
///
/// ## Close Math
/// - `expected_cash = opening_cash + total_sales`
/// - `variance = closing_cash - expected_cash`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier (SES- prefixed).
    pub id: String,

    /// Operator id that opened the drawer.
    pub user_id: String,

    /// Operator display name.
    pub user_name: String,

    /// When the drawer was opened.
    pub opened_at: DateTime<Utc>,

    /// When the drawer was closed. None while open.
    pub closed_at: Option<DateTime<Utc>>,

    /// Cash counted into the drawer at open.
    pub opening_cash_cents: i64,

    /// Cash counted out of the drawer at close. None while open.
    pub closing_cash_cents: Option<i64>,

    /// opening_cash + total_sales, computed at close. None while open.
    pub expected_cash_cents: Option<i64>,

    /// closing_cash - expected_cash, computed at close. None while open.
    pub variance_cents: Option<i64>,

    /// Current lifecycle status.
    pub status: SessionStatus,

    /// Number of invoices posted against this session.
    pub invoice_count: i64,

    /// Sum of invoice totals posted against this session, in cents.
    pub total_sales_cents: i64,
}

impl Session {
    /// Checks whether the drawer is still open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    /// Expected cash for this session if it were closed now.
    #[inline]
    pub fn expected_cash_now(&self) -> i64 {
        self.opening_cash_cents + self.total_sales_cents
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// The status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Paid in full. Every invoice created through `process_sale` posts
    /// as Paid regardless of the status the caller supplies.
    Paid,
    /// Cancelled/refunded.
    Voided,
}

/// How an invoice was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
}

/// A line item on an invoice.
///
/// Uses the snapshot pattern: product name and unit price are frozen at
/// sale time so the invoice stays stable if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// Product reference.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold.
    pub quantity: i64,
}

impl InvoiceLine {
    /// Line total before discount (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

/// A finalized sale. Immutable once created - the mock backend has no
/// update or delete operation for invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier (INV- prefixed).
    pub id: String,

    /// Human-readable invoice number (date-stamped).
    pub invoice_number: String,

    /// When the sale was processed.
    pub date: DateTime<Utc>,

    /// Always `Paid` for invoices created through `process_sale`.
    pub status: InvoiceStatus,

    /// Customer reference, if the sale was attached to a customer.
    pub customer_id: Option<String>,

    /// Customer name snapshot at time of sale.
    pub customer_name: Option<String>,

    /// Line items.
    pub lines: Vec<InvoiceLine>,

    /// Sum of line totals, in cents.
    pub subtotal_cents: i64,

    /// Discount applied across the invoice, in cents.
    pub discount_cents: i64,

    /// Amount charged (subtotal - discount), in cents.
    pub total_cents: i64,

    /// How the invoice was paid.
    pub payment_method: PaymentMethod,

    /// Drawer session the sale was posted against, if one was open.
    pub session_id: Option<String>,
}

/// Caller-supplied fields for processing a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub lines: Vec<InvoiceLine>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,

    /// Ignored by the store: sales always post as `Paid`. Accepted on
    /// the wire so callers may supply it without error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}

// =============================================================================
// Role
// =============================================================================

/// An administrative role definition with its granted permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Monotonic numeric identifier.
    pub id: u32,

    /// Role name (e.g., "cashier").
    pub name: String,

    /// Optional human description.
    pub description: Option<String>,

    /// Dotted permission strings granted to this role
    /// (e.g., "invoices.view").
    pub permissions: Vec<String>,
}

/// Caller-supplied fields for creating a role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

/// Partial update for a role. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
