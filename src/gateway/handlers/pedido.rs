//! Order handlers: CRUD, the recent-activity listing and status transitions.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, StatusUpdateRequest, ok};
use crate::models::Pedido;
use crate::pedido::{NovoPedidoRequest, RotaPedido};

/// List the ten most recent orders
///
/// GET /api/v1/pedidos
#[utoipa::path(
    get,
    path = "/api/v1/pedidos",
    responses(
        (status = 200, description = "Most recent orders, newest first", body = ApiResponse<Vec<Pedido>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn get_pedidos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Pedido>> {
    match state.pedidos.get_pedidos().await {
        Ok(pedidos) => ok(pedidos),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Fetch one order
///
/// GET /api/v1/pedidos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/pedidos/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = ApiResponse<Pedido>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn get_pedido(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Pedido> {
    match state.pedidos.get_pedido_by_id(id).await {
        Ok(Some(pedido)) => ok(pedido),
        Ok(None) => ApiError::not_found(format!("pedido {} not found", id)).into_err(),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// List a client's orders
///
/// GET /api/v1/pedidos/{id}/cliente
#[utoipa::path(
    get,
    path = "/api/v1/pedidos/{id}/cliente",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "All orders placed by the client", body = ApiResponse<Vec<Pedido>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn get_pedidos_by_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Vec<Pedido>> {
    match state.clientes.get_cliente_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ApiError::not_found(format!("cliente {} not found", id)).into_err(),
        Err(e) => return ApiError::from(e).into_err(),
    }

    match state.pedidos.get_pedidos_by_cliente_id(id).await {
        Ok(pedidos) => ok(pedidos),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Place an order
///
/// POST /api/v1/pedidos
#[utoipa::path(
    post,
    path = "/api/v1/pedidos",
    request_body = NovoPedidoRequest,
    responses(
        (status = 200, description = "Created order with its freight price", body = ApiResponse<Pedido>),
        (status = 400, description = "Invalid postal codes"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
        (status = 500, description = "Freight quote failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn create_pedido(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NovoPedidoRequest>,
) -> ApiResult<Pedido> {
    match state.pedidos.create_pedido(request).await {
        Ok(pedido) => ok(pedido),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Change an order's route
///
/// PUT /api/v1/pedidos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/pedidos/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = RotaPedido,
    responses(
        (status = 200, description = "Order with the requoted freight price", body = ApiResponse<Pedido>),
        (status = 400, description = "Invalid postal codes"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Concurrent modification"),
        (status = 500, description = "Freight quote failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn update_pedido(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(rota): Json<RotaPedido>,
) -> ApiResult<Pedido> {
    match state.pedidos.update_pedido(id, rota).await {
        Ok(pedido) => ok(pedido),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Move an order through its lifecycle
///
/// PUT /api/v1/pedidos/{id}/status
#[utoipa::path(
    put,
    path = "/api/v1/pedidos/{id}/status",
    params(("id" = i32, Path, description = "Order id")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Order with the new status", body = ApiResponse<Pedido>),
        (status = 400, description = "Transition not allowed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Concurrent modification")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<StatusUpdateRequest>,
) -> ApiResult<Pedido> {
    match state.pedidos.update_status(id, request.status).await {
        Ok(pedido) => ok(pedido),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Remove an order
///
/// DELETE /api/v1/pedidos/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/pedidos/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Concurrent modification")
    ),
    security(("bearer_auth" = [])),
    tag = "Pedidos"
)]
pub async fn delete_pedido(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    match state.pedidos.delete_pedido(id).await {
        Ok(()) => ok(()),
        Err(e) => ApiError::from(e).into_err(),
    }
}
