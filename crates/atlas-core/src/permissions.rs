//! # Permissions
//!
//! Permission sets and per-role permission presets.
//!
//! A permission is a dotted string in the form `area.action`
//! (e.g., `invoices.view`, `sessions.edit`). A [`PermissionSet`] is the
//! set of permissions attached to a user at login, answered through the
//! capability queries `can` / `can_any` / `can_all`.
//!
//! ## Capability Queries
//! ```text
//! can("invoices.view")                 membership test
//! can_any(["a.view", "b.view"])        at least one present ([] → false)
//! can_all(["a.view", "b.view"])        every one present    ([] → true)
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// Permission Set
// =============================================================================

/// A set of dotted permission strings.
///
/// Serializes as a plain JSON array, the shape auth payloads carry for
/// their `permissions` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    /// Creates an empty permission set.
    pub fn new() -> Self {
        PermissionSet(HashSet::new())
    }

    /// Grants a permission.
    pub fn insert(&mut self, permission: impl Into<String>) {
        self.0.insert(permission.into());
    }

    /// Membership test: does this set grant `permission`?
    pub fn can(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    /// True iff at least one of the requested permissions is granted.
    ///
    /// An empty request is vacuously false: asking for "any of nothing"
    /// grants nothing.
    pub fn can_any<'a>(&self, permissions: impl IntoIterator<Item = &'a str>) -> bool {
        permissions.into_iter().any(|p| self.can(p))
    }

    /// True iff every requested permission is granted.
    ///
    /// An empty request is vacuously true.
    pub fn can_all<'a>(&self, permissions: impl IntoIterator<Item = &'a str>) -> bool {
        permissions.into_iter().all(|p| self.can(p))
    }

    /// Number of granted permissions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether no permissions are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the granted permissions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        PermissionSet(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        PermissionSet(iter.into_iter().map(str::to_string).collect())
    }
}

// =============================================================================
// Role Presets
// =============================================================================
// The permission lists the auth layer attaches to a user at login, keyed
// by the user's single role tag. Unknown roles resolve to the empty set.

const ADMIN_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "accounting.view", "accounting.create", "accounting.edit", "accounting.delete",
    "invoices.view", "invoices.create", "invoices.edit", "invoices.delete",
    "payments.view", "payments.create", "payments.edit",
    "ledgers.view", "ledgers.create",
    "expenses.view", "expenses.create", "expenses.edit", "expenses.delete",
    "reports.view",
    "crm.view", "crm.create", "crm.edit", "crm.delete",
    "customers.view", "customers.create", "customers.edit", "customers.delete",
    "leads.view", "leads.create", "leads.edit", "leads.delete",
    "hrms.view", "hrms.create", "hrms.edit", "hrms.delete",
    "employees.view", "employees.create", "employees.edit", "employees.delete",
    "attendance.view", "attendance.create", "attendance.edit",
    "leaves.view", "leaves.create", "leaves.edit",
    "payroll.view", "payroll.create", "payroll.edit",
    "performance.view", "performance.create", "performance.edit",
    "hrms_reports.view",
    "pos.view", "pos.create",
    "billing.view", "billing.create",
    "products.view", "products.create", "products.edit", "products.delete",
    "sessions.view", "sessions.edit",
    "returns.view", "returns.create",
    "pos_reports.view",
    "admin.view", "admin.create", "admin.edit", "admin.delete",
    "users.view", "users.create", "users.edit", "users.delete",
    "roles.view", "roles.create", "roles.edit", "roles.delete",
    "permissions.view", "permissions.edit",
    "settings.view", "settings.edit",
];

const MANAGER_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "accounting.view", "accounting.create", "accounting.edit",
    "invoices.view", "invoices.create", "invoices.edit",
    "payments.view", "payments.create",
    "ledgers.view",
    "expenses.view", "expenses.create", "expenses.edit",
    "reports.view",
    "crm.view", "crm.create", "crm.edit",
    "customers.view", "customers.create", "customers.edit",
    "leads.view", "leads.create", "leads.edit",
    "hrms.view",
    "employees.view",
    "attendance.view",
    "leaves.view",
    "payroll.view",
    "performance.view",
    "hrms_reports.view",
    "pos.view",
    "billing.view",
];

const ACCOUNTANT_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "accounting.view", "accounting.create", "accounting.edit",
    "invoices.view", "invoices.create", "invoices.edit",
    "payments.view", "payments.create", "payments.edit",
    "ledgers.view", "ledgers.create",
    "expenses.view", "expenses.create", "expenses.edit",
    "reports.view",
];

const HR_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "hrms.view", "hrms.create", "hrms.edit",
    "employees.view", "employees.create", "employees.edit",
    "attendance.view", "attendance.create", "attendance.edit",
    "leaves.view", "leaves.create", "leaves.edit",
    "payroll.view", "payroll.create", "payroll.edit",
    "performance.view", "performance.create", "performance.edit",
    "hrms_reports.view",
];

const SALES_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "crm.view", "crm.create", "crm.edit",
    "customers.view", "customers.create", "customers.edit",
    "leads.view", "leads.create", "leads.edit",
    "invoices.view", "invoices.create",
    "reports.view",
];

const CASHIER_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "pos.view", "pos.create",
    "billing.view", "billing.create",
    "customers.view", "customers.create",
    "invoices.view", "invoices.edit", "invoices.delete",
    "payments.view", "payments.create",
    "sessions.view",
    "returns.view",
];

const VIEWER_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "accounting.view",
    "invoices.view",
    "payments.view",
    "ledgers.view",
    "expenses.view",
    "reports.view",
    "crm.view",
    "customers.view",
    "leads.view",
    "hrms.view",
    "employees.view",
    "attendance.view",
    "payroll.view",
    "leaves.view",
    "performance.view",
    "hrms_reports.view",
    "pos.view",
    "billing.view",
];

const EMPLOYEE_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "hrms.view",
    "attendance.view",
    "leaves.view", "leaves.create",
    "payroll.view",
    "performance.view",
];

/// Resolves the preset permission set for a role tag.
///
/// ## Behavior
/// - Known roles get their preset grant list
/// - Unknown roles get the empty set (fail-open-to-guest: the user can
///   still log in, they just cannot do anything)
pub fn permissions_for_role(role: &str) -> PermissionSet {
    let preset: &[&str] = match role {
        "admin" => ADMIN_PERMISSIONS,
        "manager" => MANAGER_PERMISSIONS,
        "accountant" => ACCOUNTANT_PERMISSIONS,
        "hr" => HR_PERMISSIONS,
        "sales" => SALES_PERMISSIONS,
        "cashier" => CASHIER_PERMISSIONS,
        "viewer" => VIEWER_PERMISSIONS,
        "employee" => EMPLOYEE_PERMISSIONS,
        _ => &[],
    };

    preset.iter().copied().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
