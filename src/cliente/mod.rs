//! Client management: the customers that place shipment orders.

pub mod repository;
pub mod service;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::db::StoreError;
use crate::models::Cliente;

pub use repository::PgClienteRepository;
pub use service::ClienteService;

/// Full field set for creating or replacing a client.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosCliente {
    #[schema(example = "Maria Souza")]
    pub nome: String,
    #[schema(example = "Av. Paulista 1000, São Paulo")]
    pub endereco: String,
    #[schema(example = "+55 11 98765-4321")]
    pub telefone: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
}

/// Persistence contract for clients. Absent ids come back as `None` or zero
/// rows affected; writes are conditioned on the caller's `row_version` so a
/// stale write affects nothing.
#[async_trait]
pub trait ClienteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Cliente>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Cliente>, StoreError>;

    async fn create(&self, dados: DadosCliente) -> Result<Cliente, StoreError>;

    async fn update(
        &self,
        id: i32,
        version: i32,
        dados: DadosCliente,
    ) -> Result<Option<Cliente>, StoreError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i32, version: i32) -> Result<u64, StoreError>;
}

/// Errors from client operations, distinguishable so the gateway can map
/// not-found to 404 and lost concurrent writes to 409.
#[derive(Debug, thiserror::Error)]
pub enum ClienteError {
    #[error("cliente {0} not found")]
    NotFound(i32),
    #[error("cliente was modified concurrently, retry with fresh data")]
    Conflict,
    #[error(transparent)]
    Store(#[from] StoreError),
}
