//! # Simulated Latency
//!
//! The mock backend models every operation as a network round-trip: the
//! caller suspends for a latency window before the operation touches any
//! state. The window is injectable so tests run deterministically at
//! zero delay while demos keep the realistic feel.
//!
//! ## Latency Classes
//! ```text
//! lookup    200ms   active session, category list, role lookup
//! list      300ms   product / customer listings
//! history   400ms   session / order history, customer create
//! session   500ms   drawer open / close
//! checkout  800ms   sale processing
//! ```
//! Heavier operations get longer windows, so a demo feels like it is
//! talking to a real backend under load.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-operation-class latency windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyProfile {
    /// Small point lookups.
    pub lookup: Duration,

    /// Collection listings.
    pub list: Duration,

    /// History queries and record creation.
    pub history: Duration,

    /// Drawer session open/close.
    pub session: Duration,

    /// Sale processing (the slowest simulated round-trip).
    pub checkout: Duration,
}

impl LatencyProfile {
    /// Demo-grade delays (200-800ms per operation class).
    pub fn realistic() -> Self {
        LatencyProfile {
            lookup: Duration::from_millis(200),
            list: Duration::from_millis(300),
            history: Duration::from_millis(400),
            session: Duration::from_millis(500),
            checkout: Duration::from_millis(800),
        }
    }

    /// No simulated latency. Use in tests.
    pub fn zero() -> Self {
        LatencyProfile {
            lookup: Duration::ZERO,
            list: Duration::ZERO,
            history: Duration::ZERO,
            session: Duration::ZERO,
            checkout: Duration::ZERO,
        }
    }

    /// Suspends the caller for one latency window.
    ///
    /// Zero windows return immediately without yielding to the runtime
    /// timer, so zero-latency tests never need a clock.
    pub async fn simulate(&self, window: Duration) {
        if !window.is_zero() {
            tokio::time::sleep(window).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        LatencyProfile::realistic()
    }
}
