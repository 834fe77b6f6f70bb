use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Customer, CustomerInput};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Request-facing operations over a `CustomerRepository`.
///
/// Update and delete look the customer up first and act second; the two
/// storage calls are not isolated from concurrent requests.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    pub fn repository(&self) -> Arc<dyn CustomerRepository> { Arc::clone(&self.repo) }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let customers = self.repo.find_all().await?;
        let total = self.repo.count().await?;
        info!(count = total, "list customers");
        Ok(customers)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<Customer>, ServiceError> {
        let found = self.repo.find_by_id(id).await?;
        info!(customer_id = %id, found = found.is_some(), "get customer");
        Ok(found)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        let created = self.repo.save(input.into()).await?;
        info!(customer_id = created.id().unwrap_or_default(), "created customer");
        Ok(created)
    }

    /// Overwrites both `name` and `address`; `None` when the id is unknown.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: CustomerInput) -> Result<Option<Customer>, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            info!(customer_id = %id, "update skipped: customer not found");
            return Ok(None);
        };
        existing.name = input.name;
        existing.address = input.address;
        let updated = self.repo.save(existing).await?;
        info!(customer_id = %id, "updated customer");
        Ok(Some(updated))
    }

    /// Returns whether the customer existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            info!(customer_id = %id, "delete skipped: customer not found");
            return Ok(false);
        };
        self.repo.delete(&existing).await?;
        info!(customer_id = %id, "deleted customer");
        Ok(true)
    }
}
