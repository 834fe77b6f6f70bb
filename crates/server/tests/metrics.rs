// Kept in its own test binary: the Prometheus registry is process-global,
// so exact counter deltas need no other requests in flight.
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use service::customer::repository::memory::InMemoryCustomerRepository;
use tower::ServiceExt;

use server::metrics::{REQUESTS_TOTAL, REQUEST_DURATION};
use server::{routes, ServerState};

fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn requests(method: &str, route: &str, status: &str) -> u64 {
    REQUESTS_TOTAL.with_label_values(&[method, route, status]).get()
}

#[tokio::test]
async fn each_customer_request_increments_its_counter() {
    let app = routes::build_router(
        ServerState::new(Arc::new(InMemoryCustomerRepository::new())),
        tower_http::cors::CorsLayer::very_permissive(),
    );

    let before = requests("GET", "/customers", "200");
    let resp = app.clone().oneshot(request("GET", "/customers", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(requests("GET", "/customers", "200"), before + 1);

    let before = requests("POST", "/customers", "200");
    let resp = app
        .clone()
        .oneshot(request("POST", "/customers", Some(json!({"name": "name1", "address": "address1"}))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(requests("POST", "/customers", "200"), before + 1);

    let not_found = requests("GET", "/customers/:id", "404");
    let bad_request = requests("DELETE", "/customers/:id", "400");
    let resp = app.clone().oneshot(request("GET", "/customers/nonExistingId", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app.clone().oneshot(request("DELETE", "/customers/nonExistingId", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(requests("GET", "/customers/:id", "404"), not_found + 1);
    assert_eq!(requests("DELETE", "/customers/:id", "400"), bad_request + 1);

    // the matched route template is the label, never the concrete id
    assert_eq!(requests("GET", "/customers/nonExistingId", "404"), 0);
    assert!(REQUEST_DURATION.with_label_values(&["DELETE", "/customers/:id"]).get_sample_count() >= 1);

    // non-customer routes are outside the metrics layer
    let resp = app.oneshot(request("GET", "/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(requests("GET", "/health", "200"), 0);
}
