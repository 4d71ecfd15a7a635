//! # Sale Store
//!
//! Sale processing and order history.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         process_sale                                │
//! │                                                                     │
//! │  1. validate input (amounts, line quantities)                       │
//! │  2. post against the open drawer session, if one exists             │
//! │     └── invoice_count += 1, total_sales += total                    │
//! │  3. build the invoice                                               │
//! │     └── fresh INV- id, date-stamped invoice number                  │
//! │     └── status forced to Paid (caller-supplied status is ignored)   │
//! │  4. insert at the head of the invoice collection                    │
//! │                                                                     │
//! │  Invoices are immutable once created: there is no update or         │
//! │  delete operation for them.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use atlas_core::validation::validate_new_invoice;
use atlas_core::{Invoice, InvoiceStatus, NewInvoice, Session};

use crate::error::StoreResult;
use crate::latency::LatencyProfile;
use crate::store::{entity_id, lock, Shared};

/// Store for invoices. Shares the session collection with
/// [`SessionStore`](crate::store::session::SessionStore) so sales accrue
/// onto the open drawer.
#[derive(Debug, Clone)]
pub struct SaleStore {
    latency: Arc<LatencyProfile>,
    invoices: Shared<Invoice>,
    sessions: Shared<Session>,
    invoice_seq: Arc<AtomicU32>,
}

impl SaleStore {
    pub(crate) fn new(
        latency: Arc<LatencyProfile>,
        invoices: Shared<Invoice>,
        sessions: Shared<Session>,
    ) -> Self {
        SaleStore {
            latency,
            invoices,
            sessions,
            invoice_seq: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Processes a sale into a paid invoice.
    ///
    /// ## Behavior
    /// - Assigns a fresh id and a human-readable invoice number
    /// - Stamps `date = now` and forces `status = Paid` regardless of
    ///   any status the caller supplies
    /// - Posts the total against the open session (count + sales); a
    ///   sale with no open session still succeeds, it just goes
    ///   unattributed
    /// - Inserts at the head of the invoice collection and returns an
    ///   owned copy
    ///
    /// ## Errors
    /// - `Validation` for negative amounts or non-positive quantities
    pub async fn process_sale(&self, data: NewInvoice) -> StoreResult<Invoice> {
        self.latency.simulate(self.latency.checkout).await;

        validate_new_invoice(&data)?;

        // Post against the open drawer first; the session lock is
        // released before the invoice lock is taken.
        let session_id = {
            let mut sessions = lock(&self.sessions);
            match sessions.iter_mut().find(|s| s.is_open()) {
                Some(session) => {
                    session.invoice_count += 1;
                    session.total_sales_cents += data.total_cents;
                    Some(session.id.clone())
                }
                None => None,
            }
        };

        let invoice = Invoice {
            id: entity_id("INV"),
            invoice_number: self.next_invoice_number(),
            date: Utc::now(),
            status: InvoiceStatus::Paid,
            customer_id: data.customer_id,
            customer_name: data.customer_name,
            lines: data.lines,
            subtotal_cents: data.subtotal_cents,
            discount_cents: data.discount_cents,
            total_cents: data.total_cents,
            payment_method: data.payment_method,
            session_id,
        };

        debug!(
            id = %invoice.id,
            invoice_number = %invoice.invoice_number,
            total = invoice.total_cents,
            "Processing sale"
        );

        let mut invoices = lock(&self.invoices);
        invoices.insert(0, invoice.clone());
        Ok(invoice)
    }

    /// Lists all invoices (snapshot copy, most-recent-first).
    pub async fn list_orders(&self) -> StoreResult<Vec<Invoice>> {
        self.latency.simulate(self.latency.history).await;

        let invoices = lock(&self.invoices);
        debug!(count = invoices.len(), "Listing orders");
        Ok(invoices.clone())
    }

    /// Generates the next invoice number in format: INV-YYYYMMDD-NNNN
    ///
    /// ## Format
    /// - YYYYMMDD: Date
    /// - NNNN: Per-store sequence (padded to 4 digits)
    ///
    /// The sequence is an atomic counter shared by all clones of this
    /// store, so two sales in the same millisecond still get distinct
    /// numbers.
    ///
    /// ## Example
    /// `INV-20260825-0041`
    fn next_invoice_number(&self) -> String {
        let seq = self.invoice_seq.fetch_add(1, Ordering::SeqCst) + 1;
        format!("INV-{}-{:04}", Utc::now().format("%Y%m%d"), seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::shared;
    use atlas_core::{InvoiceLine, PaymentMethod, SessionStatus};
    use chrono::Utc;

    fn open_session(id: &str, opening_cash_cents: i64) -> Session {
        Session {
            id: id.to_string(),
            user_id: "admin".to_string(),
            user_name: "Current User".to_string(),
            opened_at: Utc::now(),
            closed_at: None,
            opening_cash_cents,
            closing_cash_cents: None,
            expected_cash_cents: None,
            variance_cents: None,
            status: SessionStatus::Open,
            invoice_count: 0,
            total_sales_cents: 0,
        }
    }

    fn sale(total_cents: i64) -> NewInvoice {
        NewInvoice {
            customer_id: Some("CLT-1".to_string()),
            customer_name: Some("Acme".to_string()),
            lines: vec![InvoiceLine {
                product_id: "PRD-1".to_string(),
                name: "Haircut".to_string(),
                unit_price_cents: total_cents,
                quantity: 1,
            }],
            subtotal_cents: total_cents,
            discount_cents: 0,
            total_cents,
            payment_method: PaymentMethod::Cash,
            status: None,
        }
    }

    fn store_with_sessions(sessions: Vec<Session>) -> SaleStore {
        SaleStore::new(
            Arc::new(LatencyProfile::zero()),
            shared(),
            crate::store::shared_from(sessions),
        )
    }

    #[tokio::test]
    async fn test_process_sale_stamps_and_pays() {
        let store = store_with_sessions(vec![]);
        let invoice = store.process_sale(sale(2500)).await.unwrap();

        assert!(invoice.id.starts_with("INV-"));
        assert!(invoice.invoice_number.starts_with("INV-"));
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.total_cents, 2500);
        assert_eq!(invoice.session_id, None);
    }

    #[tokio::test]
    async fn test_caller_supplied_status_is_ignored() {
        let store = store_with_sessions(vec![]);
        let mut data = sale(2500);
        data.status = Some(InvoiceStatus::Pending);

        let invoice = store.process_sale(data).await.unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
    }

    #[tokio::test]
    async fn test_sale_posts_to_open_session() {
        let store = store_with_sessions(vec![open_session("SES-1", 1000)]);

        let invoice = store.process_sale(sale(500)).await.unwrap();
        assert_eq!(invoice.session_id.as_deref(), Some("SES-1"));

        let sessions = lock(&store.sessions);
        assert_eq!(sessions[0].invoice_count, 1);
        assert_eq!(sessions[0].total_sales_cents, 500);
    }

    #[tokio::test]
    async fn test_orders_are_most_recent_first() {
        let store = store_with_sessions(vec![]);
        store.process_sale(sale(100)).await.unwrap();
        store.process_sale(sale(200)).await.unwrap();

        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].total_cents, 200);
        assert_eq!(orders[1].total_cents, 100);
    }

    #[tokio::test]
    async fn test_invalid_sale_rejected_before_mutation() {
        let store = store_with_sessions(vec![open_session("SES-1", 1000)]);

        let mut data = sale(500);
        data.total_cents = -500;
        assert!(store.process_sale(data).await.is_err());

        // Neither collection was touched.
        assert!(store.list_orders().await.unwrap().is_empty());
        let sessions = lock(&store.sessions);
        assert_eq!(sessions[0].invoice_count, 0);
    }

    #[test]
    fn test_invoice_number_format() {
        let store = store_with_sessions(vec![]);
        let number = store.next_invoice_number();
        // INV-YYYYMMDD-NNNN
        assert_eq!(number.len(), 4 + 8 + 1 + 4);
        assert!(number.starts_with("INV-"));
        assert_eq!(number.matches('-').count(), 2);
    }

    #[tokio::test]
    async fn test_invoice_numbers_are_sequential_per_store() {
        let store = store_with_sessions(vec![]);

        let first = store.process_sale(sale(100)).await.unwrap();
        let second = store.process_sale(sale(200)).await.unwrap();

        // Back-to-back sales (same millisecond or not) never share a
        // number: the sequence advances per sale.
        assert_ne!(first.invoice_number, second.invoice_number);
        assert!(first.invoice_number.ends_with("-0001"));
        assert!(second.invoice_number.ends_with("-0002"));

        // Clones share the counter, like the rest of the store state.
        let third = store.clone().process_sale(sale(300)).await.unwrap();
        assert!(third.invoice_number.ends_with("-0003"));
    }
}
