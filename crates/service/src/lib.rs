//! Service layer for the customer resource.
//! - `customer` holds the domain type, the storage capability trait and the service.
//! - `file`, `db` and `customer::repository::memory` provide the storage backends.

pub mod errors;
pub mod runtime;
pub mod customer;
pub mod storage;
pub mod file;
pub mod db;
#[cfg(test)]
pub mod test_support;

pub use customer::{Customer, CustomerInput, CustomerRepository, CustomerService};
