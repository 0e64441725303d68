//! Shipdesk - order and shipment management backend.
//!
//! Clients ("Cliente") place shipment orders ("Pedido") that are priced by an
//! external freight quote API and tracked through a lifecycle
//! (Processamento, Enviado, Entregue, Cancelado).
//!
//! # Modules
//!
//! - [`cep`] - Postal code validation
//! - [`result`] - Success/failure outcome for the freight-quote boundary
//! - [`shipping`] - Freight quote client for the external shipping-rate API
//! - [`cliente`] - Client CRUD (store contract, Postgres repository, service)
//! - [`pedido`] - Order lifecycle orchestration and persistence
//! - [`user_auth`] - Registration, login and JWT verification
//! - [`gateway`] - Axum HTTP surface with Swagger docs

pub mod cep;
pub mod cliente;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod pedido;
pub mod result;
pub mod shipping;
pub mod user_auth;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::{Database, StoreError};
pub use models::{Cliente, Pedido, Status};
pub use result::ServiceResult;
pub use shipping::{CotacaoFrete, FreightQuoter, ShippingService, Simulacao};
