//! Customer resource: domain (`domain`), storage capability (`repository`)
//! and the request-facing service (`service`).

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Customer, CustomerInput};
pub use repository::CustomerRepository;
pub use service::CustomerService;
