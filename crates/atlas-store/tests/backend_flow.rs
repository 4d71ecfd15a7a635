//! End-to-end drawer flow against a seeded backend: open a session,
//! ring up sales, and close with a reconciled count.

use atlas_core::{CategoryFilter, InvoiceLine, InvoiceStatus, NewCustomer, NewInvoice, PaymentMethod};
use atlas_store::{MockBackend, SessionPolicy, StoreConfig, StoreError};

/// Run with `RUST_LOG=atlas_store=debug` to watch the store operations.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sale_for(product_name: &str, product_id: &str, total_cents: i64) -> NewInvoice {
    NewInvoice {
        customer_id: None,
        customer_name: Some("Walk-in Customer".to_string()),
        lines: vec![InvoiceLine {
            product_id: product_id.to_string(),
            name: product_name.to_string(),
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

#[tokio::test]
async fn full_drawer_cycle_reconciles() {
    init_tracing();
    let backend = MockBackend::with_seed_data(StoreConfig::for_tests());

    // Pick real products from the seeded catalog.
    let products = backend
        .catalog()
        .list_products(&CategoryFilter::Only("grooming".to_string()))
        .await
        .unwrap();
    assert!(!products.is_empty());

    // Open the drawer with a float of $10.00.
    let session = backend.sessions().open_session(1_000).await.unwrap();

    // Ring up two sales.
    let haircut = &products[0];
    backend
        .sales()
        .process_sale(sale_for(&haircut.name, &haircut.id, 300))
        .await
        .unwrap();
    let second = backend
        .sales()
        .process_sale(sale_for(&haircut.name, &haircut.id, 200))
        .await
        .unwrap();

    assert_eq!(second.status, InvoiceStatus::Paid);
    assert_eq!(second.session_id.as_deref(), Some(session.id.as_str()));

    // The active session accrued both sales.
    let active = backend.sessions().active_session().await.unwrap().unwrap();
    assert_eq!(active.invoice_count, 2);
    assert_eq!(active.total_sales_cents, 500);

    // Close with exactly float + sales: zero variance.
    let closed = backend
        .sessions()
        .close_session(&session.id, 1_500)
        .await
        .unwrap();
    assert_eq!(closed.expected_cash_cents, Some(1_500));
    assert_eq!(closed.variance_cents, Some(0));

    // Orders list is most-recent-first.
    let orders = backend.sales().list_orders().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, second.id);

    // Drawer is free again: a new session can open.
    backend.sessions().open_session(2_000).await.unwrap();
}

#[tokio::test]
async fn single_drawer_policy_guards_the_seeded_backend() {
    let backend = MockBackend::with_seed_data(StoreConfig::for_tests());

    backend.sessions().open_session(1_000).await.unwrap();
    let err = backend.sessions().open_session(1_000).await.unwrap_err();
    assert!(matches!(err, StoreError::SessionAlreadyOpen { .. }));
}

#[tokio::test]
async fn multi_drawer_config_allows_parallel_shifts() {
    init_tracing();
    let config = StoreConfig {
        session_policy: SessionPolicy::MultiDrawer,
        ..StoreConfig::for_tests()
    };
    let backend = MockBackend::new(config);

    backend.sessions().open_session(1_000).await.unwrap();
    backend.sessions().open_session(2_000).await.unwrap();

    let open: Vec<_> = backend
        .sessions()
        .list_sessions()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.is_open())
        .collect();
    assert_eq!(open.len(), 2);

    // Sales attribute to the first open session found (head of the
    // list, i.e. the most recently opened drawer).
    let invoice = backend
        .sales()
        .process_sale(sale_for("Haircut", "PRD-001", 500))
        .await
        .unwrap();
    assert_eq!(invoice.session_id, Some(open[0].id.clone()));
}

#[tokio::test]
async fn new_customers_join_the_seeded_roster() {
    let backend = MockBackend::with_seed_data(StoreConfig::for_tests());

    let before = backend.customers().list_customers().await.unwrap().len();
    let customer = backend
        .customers()
        .create_customer(NewCustomer {
            name: "Acme".to_string(),
            phone: None,
            email: None,
        })
        .await
        .unwrap();

    assert_eq!(customer.balance_cents, 0);
    assert_eq!(customer.total_spent_cents, 0);

    let after = backend.customers().list_customers().await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|c| c.id == customer.id));
}
