use async_trait::async_trait;

use super::domain::Customer;
use crate::errors::ServiceError;

/// Storage capability for customers.
///
/// `save` assigns a fresh id when the customer has none, otherwise it
/// overwrites the stored entry with the same id.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, ServiceError>;
    async fn save(&self, customer: Customer) -> Result<Customer, ServiceError>;
    async fn delete(&self, customer: &Customer) -> Result<(), ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn delete_all(&self) -> Result<(), ServiceError>;
}

/// New id for a customer saved without one.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn require_id(customer: &Customer) -> Result<&str, ServiceError> {
    customer
        .id()
        .ok_or_else(|| ServiceError::Validation("customer id is required".into()))
}

/// In-memory repository for tests and the `memory` backend.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryCustomerRepository {
        customers: RwLock<HashMap<String, Customer>>,
    }

    impl InMemoryCustomerRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
            let customers = self.customers.read().await;
            Ok(customers.values().cloned().collect())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, ServiceError> {
            let customers = self.customers.read().await;
            Ok(customers.get(id).cloned())
        }

        async fn save(&self, mut customer: Customer) -> Result<Customer, ServiceError> {
            let id = customer.id().map(str::to_string).unwrap_or_else(generate_id);
            customer.id = Some(id.clone());
            let mut customers = self.customers.write().await;
            customers.insert(id, customer.clone());
            Ok(customer)
        }

        async fn delete(&self, customer: &Customer) -> Result<(), ServiceError> {
            let id = require_id(customer)?;
            let mut customers = self.customers.write().await;
            customers.remove(id);
            Ok(())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            let customers = self.customers.read().await;
            Ok(customers.len() as u64)
        }

        async fn delete_all(&self) -> Result<(), ServiceError> {
            self.customers.write().await.clear();
            Ok(())
        }
    }
}
