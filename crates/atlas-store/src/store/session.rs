//! # Session Store
//!
//! Cash drawer session lifecycle.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Drawer Session Lifecycle                       │
//! │                                                                     │
//! │  1. OPEN                                                            │
//! │     └── open_session(opening_cash)                                  │
//! │         └── policy check: SingleDrawer rejects a second open        │
//! │         └── Session { status: Open } inserted at the head           │
//! │                                                                     │
//! │  2. ACCRUE                                                          │
//! │     └── SaleStore posts invoices against the open session           │
//! │         (invoice_count, total_sales)                                │
//! │                                                                     │
//! │  3. CLOSE                                                           │
//! │     └── close_session(id, closing_cash)                             │
//! │         └── expected_cash = opening_cash + total_sales              │
//! │         └── variance    = closing_cash - expected_cash              │
//! │         └── Session { status: Closed }                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions are kept most-recent-first: opens insert at the head, which
//! is the display convention the listing relies on.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use atlas_core::validation::validate_cash_amount;
use atlas_core::{Session, SessionStatus};

use crate::config::{Operator, SessionPolicy};
use crate::error::{StoreError, StoreResult};
use crate::latency::LatencyProfile;
use crate::store::{entity_id, lock, Shared};

/// Store for cash drawer sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    latency: Arc<LatencyProfile>,
    policy: SessionPolicy,
    operator: Operator,
    sessions: Shared<Session>,
}

impl SessionStore {
    pub(crate) fn new(
        latency: Arc<LatencyProfile>,
        policy: SessionPolicy,
        operator: Operator,
        sessions: Shared<Session>,
    ) -> Self {
        SessionStore {
            latency,
            policy,
            operator,
            sessions,
        }
    }

    /// Returns the first open session, if any.
    ///
    /// Linear scan; the collection stays small enough that an index
    /// would be overkill.
    pub async fn active_session(&self) -> StoreResult<Option<Session>> {
        self.latency.simulate(self.latency.lookup).await;

        let sessions = lock(&self.sessions);
        Ok(sessions.iter().find(|s| s.is_open()).cloned())
    }

    /// Lists all sessions (snapshot copy, most-recent-first).
    pub async fn list_sessions(&self) -> StoreResult<Vec<Session>> {
        self.latency.simulate(self.latency.history).await;

        let sessions = lock(&self.sessions);
        debug!(count = sessions.len(), "Listing sessions");
        Ok(sessions.clone())
    }

    /// Opens a new drawer session.
    ///
    /// ## Behavior
    /// - Stamps the configured operator and `opened_at = now`
    /// - Starts with zero invoices and zero sales
    /// - Inserts at the head of the collection
    ///
    /// ## Errors
    /// - `Validation` if the opening cash is negative
    /// - `SessionAlreadyOpen` under `SessionPolicy::SingleDrawer` when a
    ///   session is already open (`MultiDrawer` skips the check)
    pub async fn open_session(&self, opening_cash_cents: i64) -> StoreResult<Session> {
        self.latency.simulate(self.latency.session).await;

        validate_cash_amount("openingCash", opening_cash_cents)?;

        let mut sessions = lock(&self.sessions);

        if self.policy == SessionPolicy::SingleDrawer {
            if let Some(open) = sessions.iter().find(|s| s.is_open()) {
                return Err(StoreError::SessionAlreadyOpen {
                    id: open.id.clone(),
                });
            }
        }

        let session = Session {
            id: entity_id("SES"),
            user_id: self.operator.user_id.clone(),
            user_name: self.operator.user_name.clone(),
            opened_at: Utc::now(),
            closed_at: None,
            opening_cash_cents,
            closing_cash_cents: None,
            expected_cash_cents: None,
            variance_cents: None,
            status: SessionStatus::Open,
            invoice_count: 0,
            total_sales_cents: 0,
        };

        debug!(id = %session.id, opening_cash = opening_cash_cents, "Opening session");

        sessions.insert(0, session.clone());
        Ok(session)
    }

    /// Closes a drawer session and computes the cash reconciliation.
    ///
    /// ## Close Math
    /// - `expected_cash = opening_cash + total_sales`
    /// - `variance = closing_cash - expected_cash`
    ///
    /// ## Errors
    /// - `Validation` if the closing cash is negative
    /// - `NotFound` if the id is unknown or the session is already
    ///   closed; the collection is left untouched either way
    pub async fn close_session(
        &self,
        session_id: &str,
        closing_cash_cents: i64,
    ) -> StoreResult<Session> {
        self.latency.simulate(self.latency.session).await;

        validate_cash_amount("closingCash", closing_cash_cents)?;

        let mut sessions = lock(&self.sessions);

        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| StoreError::not_found("Session", session_id))?;

        if !session.is_open() {
            return Err(StoreError::not_found("Session (open)", session_id));
        }

        let expected = session.expected_cash_now();
        session.closed_at = Some(Utc::now());
        session.closing_cash_cents = Some(closing_cash_cents);
        session.expected_cash_cents = Some(expected);
        session.variance_cents = Some(closing_cash_cents - expected);
        session.status = SessionStatus::Closed;

        debug!(
            id = %session.id,
            expected_cash = expected,
            variance = closing_cash_cents - expected,
            "Closing session"
        );

        Ok(session.clone())
    }
}
