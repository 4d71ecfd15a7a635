//! # Store Configuration
//!
//! Configuration for the mock backend, fixed at construction time.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit `StoreConfig` passed to `MockBackend::new`
//! 2. Environment variables (`ATLAS_*`) via `from_env`
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after construction, so no mutex is needed.

use serde::{Deserialize, Serialize};

use crate::latency::LatencyProfile;

/// Policy for concurrent drawer sessions.
///
/// Whether a second `open_session` while a drawer is already open is a
/// conflict or a parallel shift is an explicit configuration choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// At most one open session; a second open fails with
    /// `StoreError::SessionAlreadyOpen`.
    #[default]
    SingleDrawer,

    /// Multiple concurrent open sessions allowed, for shops running
    /// several physical drawers.
    MultiDrawer,
}

/// The operator identity stamped onto drawer sessions.
///
/// A real backend would take these from the authenticated user; here
/// they are fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    /// Operator id recorded as `user_id` on sessions.
    pub user_id: String,

    /// Operator display name recorded as `user_name` on sessions.
    pub user_name: String,
}

impl Default for Operator {
    fn default() -> Self {
        Operator {
            user_id: "admin".to_string(),
            user_name: "Current User".to_string(),
        }
    }
}

/// Mock backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Simulated latency windows. Defaults to the realistic profile.
    pub latency: LatencyProfile,

    /// Concurrent-session policy. Defaults to a single drawer.
    pub session_policy: SessionPolicy,

    /// Operator identity for drawer sessions.
    pub operator: Operator,
}

impl StoreConfig {
    /// Configuration for tests: zero latency, defaults otherwise.
    pub fn for_tests() -> Self {
        StoreConfig {
            latency: LatencyProfile::zero(),
            ..StoreConfig::default()
        }
    }

    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ATLAS_SESSION_POLICY`: "single" or "multi"
    /// - `ATLAS_ZERO_LATENCY`: "1" disables simulated latency
    /// - `ATLAS_OPERATOR_ID`: override operator id
    /// - `ATLAS_OPERATOR_NAME`: override operator display name
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(policy) = std::env::var("ATLAS_SESSION_POLICY") {
            match policy.as_str() {
                "single" => config.session_policy = SessionPolicy::SingleDrawer,
                "multi" => config.session_policy = SessionPolicy::MultiDrawer,
                _ => {}
            }
        }

        if let Ok(flag) = std::env::var("ATLAS_ZERO_LATENCY") {
            if flag == "1" {
                config.latency = LatencyProfile::zero();
            }
        }

        if let Ok(user_id) = std::env::var("ATLAS_OPERATOR_ID") {
            config.operator.user_id = user_id;
        }

        if let Ok(user_name) = std::env::var("ATLAS_OPERATOR_NAME") {
            config.operator.user_name = user_name;
        }

        config
    }
}
