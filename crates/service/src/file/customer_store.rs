use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::domain::Customer;
use crate::customer::repository::{generate_id, require_id, CustomerRepository};
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Customers persisted as a JSON map `id -> Customer`.
#[derive(Clone)]
pub struct FileCustomerRepository {
    store: Arc<JsonMapStore<String, Customer>>,
}

impl FileCustomerRepository {
    /// Open (or create) the store file at `path`.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, Customer>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl CustomerRepository for FileCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.store.values().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, ServiceError> {
        let id = customer.id().map(str::to_string).unwrap_or_else(generate_id);
        customer.id = Some(id.clone());
        self.store.insert(id, customer.clone()).await?;
        Ok(customer)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), ServiceError> {
        let id = require_id(customer)?;
        self.store.remove(&id.to_string()).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.store.len().await as u64)
    }

    async fn delete_all(&self) -> Result<(), ServiceError> {
        self.store
            .update_map(|m| {
                m.clear();
                Ok(())
            })
            .await
    }
}
