use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{
    customer::repository::memory::InMemoryCustomerRepository,
    db::customer_repo::SeaOrmCustomerRepository,
    file::customer_store::FileCustomerRepository,
    runtime, CustomerRepository,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Open the storage backend named in `[storage]`.
pub async fn build_repository(cfg: &AppConfig) -> Result<Arc<dyn CustomerRepository>, StartupError> {
    let repo: Arc<dyn CustomerRepository> = match cfg.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryCustomerRepository::new()),
        StorageBackend::File => {
            runtime::ensure_env(&cfg.storage.path).await?;
            FileCustomerRepository::new(&cfg.storage.path).await? as Arc<dyn CustomerRepository>
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            Arc::new(SeaOrmCustomerRepository::new(db))
        }
    };
    info!(backend = ?cfg.storage.backend, "customer storage ready");
    Ok(repo)
}

/// Build the application router for a given config.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repo = build_repository(cfg).await?;
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting customer service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_bad_host() {
        let server = ServerConfig { host: "not a host".into(), port: 80, worker_threads: None };
        assert!(matches!(bind_addr(&server), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn memory_backend_builds() -> anyhow::Result<()> {
        let repo = build_repository(&AppConfig::default()).await?;
        assert_eq!(repo.count().await?, 0);
        Ok(())
    }
}
