/// CRUD tests for the customer entity against a live database
pub mod customer_tests;
