//! Shipment orders: persistence contract, orchestration and errors.

pub mod repository;
pub mod service;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::StoreError;
use crate::models::{Pedido, Status};

pub use repository::PgPedidoRepository;
pub use service::PedidoService;

/// Request to place a new order.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovoPedidoRequest {
    #[schema(example = 1)]
    pub cliente_id: i32,
    #[schema(example = "01310100")]
    pub origem: String,
    #[schema(example = "20040020")]
    pub destino: String,
}

/// Request to change an order's route. The freight price is recomputed for
/// the new pair; status and creation date are untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotaPedido {
    #[schema(example = "01310100")]
    pub origem: String,
    #[schema(example = "20040020")]
    pub destino: String,
}

/// Field set handed to the store when persisting a new order. The store
/// assigns id, creation timestamp and the initial row version.
#[derive(Debug, Clone)]
pub struct NovoPedido {
    pub cliente_id: i32,
    pub origem: String,
    pub destino: String,
    pub status: Status,
    pub valor_frete: Decimal,
}

/// Persistence contract for orders.
///
/// Lookups report absent ids as `None`, never as errors. Writes are
/// conditioned on the `row_version` the caller read: a write against a row
/// that moved since then matches nothing, which the service maps to a
/// conflict. Update operations write only the named fields.
#[async_trait]
pub trait PedidoStore: Send + Sync {
    async fn create(&self, novo: NovoPedido) -> Result<Pedido, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Pedido>, StoreError>;

    /// Most recent orders first, capped at `limit`.
    async fn get_recent(&self, limit: i64) -> Result<Vec<Pedido>, StoreError>;

    async fn get_by_cliente_id(&self, cliente_id: i32) -> Result<Vec<Pedido>, StoreError>;

    async fn update_route(
        &self,
        id: i32,
        version: i32,
        origem: &str,
        destino: &str,
        valor_frete: Decimal,
    ) -> Result<Option<Pedido>, StoreError>;

    async fn update_status(
        &self,
        id: i32,
        version: i32,
        status: Status,
    ) -> Result<Option<Pedido>, StoreError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i32, version: i32) -> Result<u64, StoreError>;
}

/// Errors from order operations. Each recoverable condition is its own
/// variant so the gateway can map not-found to 404, conflicts to 409, failed
/// recomputations to the quote's own status, and bad transitions to 400.
#[derive(Debug, thiserror::Error)]
pub enum PedidoError {
    #[error("pedido {0} not found")]
    NotFound(i32),
    #[error("cliente {0} not found")]
    ClienteNotFound(i32),
    #[error("freight quote failed ({status_code}): {message}")]
    QuoteFailed { status_code: u16, message: String },
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: Status, to: Status },
    #[error("pedido was modified concurrently, retry with fresh data")]
    Conflict,
    #[error(transparent)]
    Store(#[from] StoreError),
}
