//! Client CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::cliente::DadosCliente;
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, ok};
use crate::models::Cliente;

/// List all clients
///
/// GET /api/v1/clientes
#[utoipa::path(
    get,
    path = "/api/v1/clientes",
    responses(
        (status = 200, description = "All registered clients", body = ApiResponse<Vec<Cliente>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Clientes"
)]
pub async fn get_clientes(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Cliente>> {
    match state.clientes.get_clientes().await {
        Ok(clientes) => ok(clientes),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Fetch one client
///
/// GET /api/v1/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/v1/clientes/{id}",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "The client", body = ApiResponse<Cliente>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Clientes"
)]
pub async fn get_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Cliente> {
    match state.clientes.get_cliente_by_id(id).await {
        Ok(Some(cliente)) => ok(cliente),
        Ok(None) => ApiError::not_found(format!("cliente {} not found", id)).into_err(),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Register a client
///
/// POST /api/v1/clientes
#[utoipa::path(
    post,
    path = "/api/v1/clientes",
    request_body = DadosCliente,
    responses(
        (status = 200, description = "Created client", body = ApiResponse<Cliente>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Clientes"
)]
pub async fn create_cliente(
    State(state): State<Arc<AppState>>,
    Json(dados): Json<DadosCliente>,
) -> ApiResult<Cliente> {
    match state.clientes.create_cliente(dados).await {
        Ok(cliente) => ok(cliente),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Replace a client's fields
///
/// PUT /api/v1/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/v1/clientes/{id}",
    params(("id" = i32, Path, description = "Client id")),
    request_body = DadosCliente,
    responses(
        (status = 200, description = "Updated client", body = ApiResponse<Cliente>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Concurrent modification")
    ),
    security(("bearer_auth" = [])),
    tag = "Clientes"
)]
pub async fn update_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(dados): Json<DadosCliente>,
) -> ApiResult<Cliente> {
    match state.clientes.update_cliente(id, dados).await {
        Ok(cliente) => ok(cliente),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Remove a client
///
/// DELETE /api/v1/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/clientes/{id}",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Concurrent modification")
    ),
    security(("bearer_auth" = [])),
    tag = "Clientes"
)]
pub async fn delete_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    match state.clientes.delete_cliente(id).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
