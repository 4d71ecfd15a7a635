//! # Customer Store
//!
//! Customer listing and creation.
//!
//! Created customers start with zero balance and zero lifetime spend;
//! no operation in the mock backend mutates either afterwards.

use std::sync::Arc;

use tracing::debug;

use atlas_core::validation::validate_new_customer;
use atlas_core::{Customer, NewCustomer};

use crate::error::StoreResult;
use crate::latency::LatencyProfile;
use crate::store::{entity_id, lock, Shared};

/// Store for customer records.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    latency: Arc<LatencyProfile>,
    customers: Shared<Customer>,
}

impl CustomerStore {
    pub(crate) fn new(latency: Arc<LatencyProfile>, customers: Shared<Customer>) -> Self {
        CustomerStore { latency, customers }
    }

    /// Lists all customers (snapshot copy, insertion order).
    pub async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        self.latency.simulate(self.latency.list).await;

        let customers = lock(&self.customers);
        debug!(count = customers.len(), "Listing customers");
        Ok(customers.clone())
    }

    /// Creates a customer.
    ///
    /// ## Behavior
    /// - Assigns a fresh `CLT-` prefixed id
    /// - Defaults `balance_cents` and `total_spent_cents` to 0
    /// - Appends to the collection and returns an owned copy
    ///
    /// ## Errors
    /// - `Validation` if the name is empty or too long
    pub async fn create_customer(&self, data: NewCustomer) -> StoreResult<Customer> {
        self.latency.simulate(self.latency.history).await;

        validate_new_customer(&data)?;

        let customer = Customer {
            id: entity_id("CLT"),
            name: data.name,
            phone: data.phone,
            email: data.email,
            balance_cents: 0,
            total_spent_cents: 0,
        };

        debug!(id = %customer.id, name = %customer.name, "Creating customer");

        let mut customers = lock(&self.customers);
        customers.push(customer.clone());
        Ok(customer)
    }
}
