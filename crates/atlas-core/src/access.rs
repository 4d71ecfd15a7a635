//! # Access Resolution
//!
//! Classifies a loosely-shaped user record into role flags and answers
//! section access and landing-route queries.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Access Resolution                              │
//! │                                                                     │
//! │  UserRecord (from auth)        RoleClassification (derived)         │
//! │  ─────────────────────         ────────────────────────────         │
//! │  employee_id: Option    ──┐                                         │
//! │  role: Option           ──┤──► classify() ──► is_manager            │
//! │  roles: Vec             ──┤                   is_hr_admin            │
//! │  is_manager: bool       ──┘                   is_employee            │
//! │                                               employee_id            │
//! │                                    │                                 │
//! │                                    ├──► default_route()              │
//! │                                    └──► has_access(Section)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Open Defaulting
//! Classification is total: every field of the user record is optional
//! and absent fields default to false/empty, so an empty record resolves
//! to a guest with no access. Callers that need fail-closed behavior must
//! check that a user is actually present before trusting `has_access`.
//!
//! The classification is a pure projection - it is recomputed from the
//! current user snapshot on every call and never cached or mutated.

use serde::{Deserialize, Serialize};

use crate::permissions::PermissionSet;

// =============================================================================
// Routes
// =============================================================================

/// Landing route for HR admins.
pub const HR_ADMIN_ROUTE: &str = "/erp/hrms/dashboard";

/// Landing route for managers.
pub const MANAGER_ROUTE: &str = "/erp/hrms/manager/dashboard";

/// Landing route for regular employees (personal dashboard).
pub const EMPLOYEE_ROUTE: &str = "/erp/hrms/me/dashboard";

// =============================================================================
// User Record
// =============================================================================

/// The user record supplied by the auth collaborator.
///
/// Every field is optional - auth payloads in the wild arrive with any
/// subset of these set. All defaulting lives in [`classify`]; callers
/// should never scatter their own fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    /// Employee id, if this user maps to an employee record.
    pub employee_id: Option<String>,

    /// Single role tag (e.g., "hr", "cashier").
    pub role: Option<String>,

    /// Direct manager flag, set by some auth payloads instead of a role.
    pub is_manager: bool,

    /// Multi-role tags (e.g., ["hr_admin", "manager"]).
    pub roles: Vec<String>,

    /// Permissions attached at login.
    pub permissions: PermissionSet,
}

impl UserRecord {
    fn has_role_tag(&self, tag: &str) -> bool {
        self.roles.iter().any(|r| r == tag)
    }

    fn role_is(&self, tag: &str) -> bool {
        self.role.as_deref() == Some(tag)
    }
}

// =============================================================================
// Role Classification
// =============================================================================

/// Derived role flags for a user snapshot.
///
/// ## Invariant
/// `is_employee` via the fallback path is true only when neither
/// `is_manager` nor `is_hr_admin` is set and an employee id is present.
/// The flags are NOT mutually exclusive otherwise: the "hr" role holds
/// both the manager and HR admin tiers at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleClassification {
    /// Employee id carried through from the user record.
    pub employee_id: Option<String>,

    /// Can manage a team (manager sections).
    pub is_manager: bool,

    /// Full HRMS access (admin sections).
    pub is_hr_admin: bool,

    /// Personal-access-only employee.
    pub is_employee: bool,
}

/// Classifies a user record into role flags.
///
/// ## Rule Set (evaluated in this precedence)
/// 1. `employee_id` is carried through as-is
/// 2. manager: explicit flag, "manager" in roles, or role "manager"/"hr"
/// 3. hr admin: "hr_admin" in roles, or role "hr"/"admin"
/// 4. employee: role "employee", or no higher tier but an employee id
///
/// `None` (no authenticated user) classifies as a guest: all flags
/// false, no employee id.
pub fn classify(user: Option<&UserRecord>) -> RoleClassification {
    let Some(user) = user else {
        return RoleClassification::default();
    };

    let employee_id = user.employee_id.clone();

    let is_manager = user.is_manager
        || user.has_role_tag("manager")
        || user.role_is("manager")
        || user.role_is("hr");

    let is_hr_admin = user.has_role_tag("hr_admin") || user.role_is("hr") || user.role_is("admin");

    let is_employee =
        user.role_is("employee") || (!is_manager && !is_hr_admin && employee_id.is_some());

    RoleClassification {
        employee_id,
        is_manager,
        is_hr_admin,
        is_employee,
    }
}

impl RoleClassification {
    /// Resolves the default landing route for this classification.
    ///
    /// ## Priority
    /// HR admin > manager > employee > admin dashboard fallback.
    /// Always returns a route - an unclassified guest lands on the admin
    /// dashboard, where the admin guard takes over.
    pub fn default_route(&self) -> &'static str {
        if self.is_hr_admin {
            return HR_ADMIN_ROUTE;
        }
        if self.is_manager {
            return MANAGER_ROUTE;
        }
        if self.is_employee {
            return EMPLOYEE_ROUTE;
        }
        HR_ADMIN_ROUTE
    }

    /// Checks access to an HRMS section.
    ///
    /// Higher tiers satisfy lower checks: admins pass manager checks,
    /// and both pass employee-level checks.
    pub fn has_access(&self, section: Section) -> bool {
        match section {
            Section::Admin => self.is_hr_admin,
            Section::Manager => self.is_manager || self.is_hr_admin,
            Section::Employee => self.is_employee || self.is_manager || self.is_hr_admin,
        }
    }

    /// String-keyed variant of [`has_access`](Self::has_access) for
    /// callers holding section names. Unknown section names resolve to
    /// no access.
    pub fn has_access_named(&self, section: &str) -> bool {
        match section.parse::<Section>() {
            Ok(section) => self.has_access(section),
            Err(_) => false,
        }
    }
}

// =============================================================================
// Section
// =============================================================================

/// HRMS section tiers gated by [`RoleClassification::has_access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Full-HRMS admin surface.
    Admin,
    /// Team management surface.
    Manager,
    /// Personal (self-service) surface.
    Employee,
}

impl Section {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Admin => "admin",
            Section::Manager => "manager",
            Section::Employee => "employee",
        }
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl std::fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl std::str::FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Section::Admin),
            "manager" => Ok(Section::Manager),
            "employee" => Ok(Section::Employee),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> UserRecord {
        UserRecord {
            role: Some(role.to_string()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_empty_record_classifies_as_guest() {
        let class = classify(Some(&UserRecord::default()));

        assert_eq!(class.employee_id, None);
        assert!(!class.is_manager);
        assert!(!class.is_hr_admin);
        assert!(!class.is_employee);

        assert!(!class.has_access(Section::Admin));
        assert!(!class.has_access(Section::Manager));
        assert!(!class.has_access(Section::Employee));
    }

    #[test]
    fn test_no_user_classifies_as_guest() {
        let class = classify(None);
        assert_eq!(class, RoleClassification::default());
    }

    #[test]
    fn test_hr_role_holds_both_tiers() {
        // "hr" satisfies manager AND hr admin simultaneously; overlapping
        // tiers are allowed, not a conflict.
        let class = classify(Some(&user_with_role("hr")));

        assert!(class.is_manager);
        assert!(class.is_hr_admin);
        assert!(!class.is_employee);
    }

    #[test]
    fn test_admin_role() {
        let class = classify(Some(&user_with_role("admin")));

        assert!(class.is_hr_admin);
        assert!(!class.is_manager);
        assert!(class.has_access(Section::Admin));
    }

    #[test]
    fn test_manager_via_roles_list() {
        let user = UserRecord {
            roles: vec!["manager".to_string()],
            ..UserRecord::default()
        };
        let class = classify(Some(&user));

        assert!(class.is_manager);
        assert!(!class.is_hr_admin);
    }

    #[test]
    fn test_manager_via_flag() {
        let user = UserRecord {
            is_manager: true,
            ..UserRecord::default()
        };
        assert!(classify(Some(&user)).is_manager);
    }

    #[test]
    fn test_employee_id_alone_makes_employee() {
        let user = UserRecord {
            employee_id: Some("E1".to_string()),
            ..UserRecord::default()
        };
        let class = classify(Some(&user));

        assert!(class.is_employee);
        assert!(!class.is_manager);
        assert!(!class.is_hr_admin);
        assert_eq!(class.employee_id.as_deref(), Some("E1"));
    }

    #[test]
    fn test_employee_fallback_suppressed_by_higher_tier() {
        // A manager with an employee id is NOT classified as employee
        // via the fallback path.
        let user = UserRecord {
            employee_id: Some("EMP-002".to_string()),
            role: Some("manager".to_string()),
            ..UserRecord::default()
        };
        let class = classify(Some(&user));

        assert!(class.is_manager);
        assert!(!class.is_employee);
    }

    #[test]
    fn test_explicit_employee_role_wins_regardless() {
        // role "employee" sets the flag even when a manager tag is also
        // present - the explicit role is rule 4's first arm.
        let user = UserRecord {
            role: Some("employee".to_string()),
            roles: vec!["manager".to_string()],
            ..UserRecord::default()
        };
        let class = classify(Some(&user));

        assert!(class.is_employee);
        assert!(class.is_manager);
    }

    #[test]
    fn test_default_route_priority() {
        assert_eq!(classify(Some(&user_with_role("hr"))).default_route(), HR_ADMIN_ROUTE);
        assert_eq!(
            classify(Some(&user_with_role("manager"))).default_route(),
            MANAGER_ROUTE
        );

        let employee = UserRecord {
            employee_id: Some("E1".to_string()),
            ..UserRecord::default()
        };
        assert_eq!(classify(Some(&employee)).default_route(), EMPLOYEE_ROUTE);

        // Guests still get a route (the admin dashboard fallback).
        assert_eq!(classify(None).default_route(), HR_ADMIN_ROUTE);
    }

    #[test]
    fn test_section_implication_chain() {
        let manager = classify(Some(&user_with_role("manager")));
        assert!(!manager.has_access(Section::Admin));
        assert!(manager.has_access(Section::Manager));
        assert!(manager.has_access(Section::Employee));

        let admin = classify(Some(&user_with_role("admin")));
        assert!(admin.has_access(Section::Admin));
        assert!(admin.has_access(Section::Manager));
        assert!(admin.has_access(Section::Employee));

        let employee = UserRecord {
            employee_id: Some("E1".to_string()),
            ..UserRecord::default()
        };
        let employee = classify(Some(&employee));
        assert!(!employee.has_access(Section::Admin));
        assert!(!employee.has_access(Section::Manager));
        assert!(employee.has_access(Section::Employee));
    }

    #[test]
    fn test_unknown_section_name_denied() {
        let admin = classify(Some(&user_with_role("admin")));
        assert!(admin.has_access_named("admin"));
        assert!(!admin.has_access_named("payroll"));
        assert!(!admin.has_access_named(""));
    }

    #[test]
    fn test_user_record_deserializes_partial_payload() {
        // Auth payloads arrive with any subset of fields set.
        let user: UserRecord = serde_json::from_str(r#"{"role":"cashier"}"#).unwrap();
        assert_eq!(user.role.as_deref(), Some("cashier"));
        assert_eq!(user.employee_id, None);
        assert!(user.roles.is_empty());
        assert!(user.permissions.is_empty());
    }
}
