use std::sync::Arc;

use service::{CustomerRepository, CustomerService};

/// Shared router state; the storage handle comes in through the constructor.
#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: CustomerService::new(repo) }
    }
}
