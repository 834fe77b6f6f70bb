//! Storage building blocks shared by the file-backed repositories.

pub mod json_map_store;
