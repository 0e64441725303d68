//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::cliente::DadosCliente;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::StatusUpdateRequest;
use crate::models::{Cliente, Pedido};
use crate::pedido::{NovoPedidoRequest, RotaPedido};
use crate::shipping::{CotacaoFrete, Simulacao};
use crate::user_auth::{AuthResponse, LoginRequest, RegisterRequest};

/// Bearer JWT security scheme, issued by the login endpoint.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shipdesk API",
        version = "0.1.0",
        description = "Order and shipment management: client/order CRUD with freight quoting against a third-party shipping-rate API.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        // Auth
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        // Clientes
        crate::gateway::handlers::cliente::get_clientes,
        crate::gateway::handlers::cliente::get_cliente,
        crate::gateway::handlers::cliente::create_cliente,
        crate::gateway::handlers::cliente::update_cliente,
        crate::gateway::handlers::cliente::delete_cliente,
        // Pedidos
        crate::gateway::handlers::pedido::get_pedidos,
        crate::gateway::handlers::pedido::get_pedido,
        crate::gateway::handlers::pedido::get_pedidos_by_cliente,
        crate::gateway::handlers::pedido::create_pedido,
        crate::gateway::handlers::pedido::update_pedido,
        crate::gateway::handlers::pedido::update_status,
        crate::gateway::handlers::pedido::delete_pedido,
        // Shipping
        crate::gateway::handlers::shipping::calcular_frete,
    ),
    components(
        schemas(
            HealthResponse,
            Cliente,
            Pedido,
            DadosCliente,
            NovoPedidoRequest,
            RotaPedido,
            StatusUpdateRequest,
            Simulacao,
            CotacaoFrete,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login (no auth required)"),
        (name = "Clientes", description = "Client management (auth required)"),
        (name = "Pedidos", description = "Order lifecycle and listings (auth required)"),
        (name = "Shipping", description = "Freight simulation (auth required)"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Shipdesk API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Shipdesk API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/auth/login"));
        assert!(paths.paths.contains_key("/api/v1/clientes/{id}"));
        assert!(paths.paths.contains_key("/api/v1/pedidos/{id}/status"));
        assert!(paths.paths.contains_key("/api/v1/shipping/calcular"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
