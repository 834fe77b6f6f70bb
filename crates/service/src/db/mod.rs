//! Database-backed repository implementations (SeaORM / PostgreSQL).

pub mod customer_repo;
