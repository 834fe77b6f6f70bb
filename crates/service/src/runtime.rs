//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate only talks to `service`.

/// Ensure the directory holding the customer data file exists.
pub async fn ensure_env(data_file: &str) -> anyhow::Result<()> {
    common::env::ensure_data_dir(data_file).await
}
