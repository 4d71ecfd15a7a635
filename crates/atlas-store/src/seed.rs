//! # Seed Data
//!
//! Demo records for running the backend without a real data source: a
//! small service catalog, a few customers, one closed historical drawer
//! session, and the standard role definitions.

use chrono::{Duration, Utc};

use atlas_core::permissions_for_role;
use atlas_core::{Category, Customer, Product, Role, Session, SessionStatus};

/// Seed categories for the service catalog.
pub fn seed_categories() -> Vec<Category> {
    [
        ("grooming", "Grooming"),
        ("spa", "Spa & Wellness"),
        ("retail", "Retail"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Seed products.
pub fn seed_products() -> Vec<Product> {
    [
        ("PRD-001", "CUT-01", "Haircut", "grooming", 2500),
        ("PRD-002", "CUT-02", "Beard Trim", "grooming", 1200),
        ("PRD-003", "SPA-01", "Deep Tissue Massage", "spa", 7500),
        ("PRD-004", "SPA-02", "Facial", "spa", 5500),
        ("PRD-005", "RTL-01", "Styling Pomade", "retail", 1800),
        ("PRD-006", "RTL-02", "Shampoo 250ml", "retail", 1400),
    ]
    .into_iter()
    .map(|(id, sku, name, category, price_cents)| Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        active: true,
    })
    .collect()
}

/// Seed customers.
pub fn seed_customers() -> Vec<Customer> {
    [
        ("CLT-001", "Walk-in Customer", None),
        ("CLT-002", "Jane Smith", Some("555-0102")),
        ("CLT-003", "Robert Chen", Some("555-0103")),
    ]
    .into_iter()
    .map(|(id, name, phone)| Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.map(str::to_string),
        email: None,
        balance_cents: 0,
        total_spent_cents: 0,
    })
    .collect()
}

/// Seed sessions: one closed shift from yesterday that reconciled with a
/// small overage, so history screens have something to show.
pub fn seed_sessions() -> Vec<Session> {
    let opened = Utc::now() - Duration::days(1);
    vec![Session {
        id: "SES-0001".to_string(),
        user_id: "admin".to_string(),
        user_name: "Current User".to_string(),
        opened_at: opened,
        closed_at: Some(opened + Duration::hours(9)),
        opening_cash_cents: 10_000,
        closing_cash_cents: Some(42_700),
        expected_cash_cents: Some(42_500),
        variance_cents: Some(200),
        status: SessionStatus::Closed,
        invoice_count: 14,
        total_sales_cents: 32_500,
    }]
}

/// Seed roles: the standard role set with its preset permission grants.
pub fn seed_roles() -> Vec<Role> {
    [
        (1, "admin", "Full system access"),
        (2, "manager", "Operational management"),
        (3, "accountant", "Accounting and reporting"),
        (4, "hr", "HR administration"),
        (5, "sales", "CRM and sales"),
        (6, "cashier", "POS and billing"),
        (7, "viewer", "Read-only access"),
        (8, "employee", "Self-service"),
    ]
    .into_iter()
    .map(|(id, name, description)| Role {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        permissions: permissions_for_role(name).iter().map(str::to_string).collect(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_reference_seed_categories() {
        let categories: Vec<String> = seed_categories().into_iter().map(|c| c.id).collect();
        for product in seed_products() {
            assert!(
                categories.contains(&product.category),
                "product {} has unknown category {}",
                product.id,
                product.category
            );
        }
    }

    #[test]
    fn test_seed_session_reconciles() {
        let session = &seed_sessions()[0];
        assert_eq!(
            session.expected_cash_cents,
            Some(session.opening_cash_cents + session.total_sales_cents)
        );
        assert_eq!(
            session.variance_cents,
            Some(session.closing_cash_cents.unwrap() - session.expected_cash_cents.unwrap())
        );
        assert_eq!(session.status, SessionStatus::Closed);
    }

    #[test]
    fn test_seed_roles_carry_presets() {
        let roles = seed_roles();
        assert_eq!(roles.len(), 8);

        let cashier = roles.iter().find(|r| r.name == "cashier").unwrap();
        assert!(cashier.permissions.contains(&"pos.view".to_string()));
    }
}
