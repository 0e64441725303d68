//! HTTP gateway: router assembly and serving.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::user_auth::middleware::jwt_auth_middleware;
use handlers::{cliente, pedido, shipping};
use state::AppState;

/// Assemble the full application router. Everything except health, Swagger
/// and the auth endpoints sits behind the JWT middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(crate::user_auth::handlers::register))
        .route("/login", post(crate::user_auth::handlers::login));

    let protected_routes = Router::new()
        .route(
            "/clientes",
            get(cliente::get_clientes).post(cliente::create_cliente),
        )
        .route(
            "/clientes/{id}",
            get(cliente::get_cliente)
                .put(cliente::update_cliente)
                .delete(cliente::delete_cliente),
        )
        .route(
            "/pedidos",
            get(pedido::get_pedidos).post(pedido::create_pedido),
        )
        .route(
            "/pedidos/{id}",
            get(pedido::get_pedido)
                .put(pedido::update_pedido)
                .delete(pedido::delete_pedido),
        )
        .route("/pedidos/{id}/cliente", get(pedido::get_pedidos_by_cliente))
        .route("/pedidos/{id}/status", put(pedido::update_status))
        .route("/shipping/calcular", post(shipping::calcular_frete))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    Router::new()
        .nest("/api/v1", api)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &GatewayConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("swagger ui available at http://{}/docs", addr);

    axum::serve(listener, build_router(state)).await
}
