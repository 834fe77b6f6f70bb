//! File-backed repository implementations.

pub mod customer_store;
