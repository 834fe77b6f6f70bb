use std::net::SocketAddr;

use configs::{AppConfig, StorageBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

async fn start_server(cfg: AppConfig) -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn file_backed_config() -> (AppConfig, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("e2e_customers_{}.json", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::File;
    cfg.storage.path = path.to_string_lossy().into_owned();
    (cfg, path)
}

#[tokio::test]
async fn e2e_customer_lifecycle_over_http() -> anyhow::Result<()> {
    let (cfg, path) = file_backed_config();
    let app = start_server(cfg).await?;
    let c = reqwest::Client::new();
    let resource = format!("{}/customers", app.base_url);

    let res = c.post(&resource).json(&json!({"name": "name1", "address": "address1"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["id"].as_str().expect("id").to_string();
    let item = format!("{resource}/{id}");

    let res = c.get(&item).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.put(&item).json(&json!({"name": "nameEdited", "address": "addressEdited"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let listed: Value = c.get(&resource).send().await?.json().await?;
    assert_eq!(listed, json!([{"id": id, "name": "nameEdited", "address": "addressEdited"}]));

    // the file backend wrote through to disk
    let on_disk: Value = serde_json::from_slice(&tokio::fs::read(&path).await?)?;
    assert_eq!(on_disk[&id]["name"], "nameEdited");

    let res = c.delete(&item).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(&item).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(&item).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn e2e_create_without_body_is_bad_request() -> anyhow::Result<()> {
    let app = start_server(AppConfig::default()).await?;
    let c = reqwest::Client::new();
    let res = c
        .post(format!("{}/customers", app.base_url))
        .header("content-type", "application/json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let listed: Value = c.get(format!("{}/customers", app.base_url)).send().await?.json().await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(AppConfig::default()).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
