//! `/customers` handlers.
//!
//! An unknown id is 404 on GET but 400 on PUT and DELETE; clients of the
//! existing service depend on that split.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::{Customer, CustomerInput};
use tracing::debug;

use crate::{errors::ApiError, state::ServerState};

fn parse_body(payload: Result<Json<CustomerInput>, JsonRejection>) -> Result<CustomerInput, ApiError> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(rejection) => {
            debug!(%rejection, "rejected customer body");
            Err(ApiError::BadRequest)
        }
    }
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses((status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.customers.list().await?))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    state.customers.get(&id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Missing or malformed body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let input = parse_body(payload)?;
    Ok(Json(state.customers.create(input).await?))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Unknown id or malformed body")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let input = parse_body(payload)?;
    state.customers.update(&id, input).await?.map(Json).ok_or(ApiError::BadRequest)
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Unknown id")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.customers.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::BadRequest)
    }
}
