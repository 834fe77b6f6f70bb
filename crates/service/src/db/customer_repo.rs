use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::customer::domain::Customer;
use crate::customer::repository::{generate_id, require_id, CustomerRepository};
use crate::errors::ServiceError;
use models::customer;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = customer::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(customer::find_by_id(&self.db, id).await?.map(Customer::from))
    }

    async fn save(&self, record: Customer) -> Result<Customer, ServiceError> {
        let id = record.id().map(str::to_string).unwrap_or_else(generate_id);
        let row = customer::upsert(&self.db, &id, &record.name, &record.address).await?;
        Ok(row.into())
    }

    async fn delete(&self, record: &Customer) -> Result<(), ServiceError> {
        let id = require_id(record)?;
        customer::delete(&self.db, id).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(customer::count(&self.db).await?)
    }

    async fn delete_all(&self) -> Result<(), ServiceError> {
        customer::delete_all(&self.db).await?;
        Ok(())
    }
}
