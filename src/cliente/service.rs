//! Client CRUD orchestration.

use std::sync::Arc;

use super::{ClienteError, ClienteStore, DadosCliente};
use crate::models::Cliente;

pub struct ClienteService {
    store: Arc<dyn ClienteStore>,
}

impl ClienteService {
    pub fn new(store: Arc<dyn ClienteStore>) -> Self {
        Self { store }
    }

    pub async fn get_clientes(&self) -> Result<Vec<Cliente>, ClienteError> {
        Ok(self.store.list().await?)
    }

    pub async fn get_cliente_by_id(&self, id: i32) -> Result<Option<Cliente>, ClienteError> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn create_cliente(&self, dados: DadosCliente) -> Result<Cliente, ClienteError> {
        let cliente = self.store.create(dados).await?;
        tracing::info!(cliente_id = cliente.id, "cliente created");
        Ok(cliente)
    }

    /// Full-field update. Not-found is reported loudly; a write that lost a
    /// concurrent race comes back as [`ClienteError::Conflict`].
    pub async fn update_cliente(
        &self,
        id: i32,
        dados: DadosCliente,
    ) -> Result<Cliente, ClienteError> {
        let existente = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(ClienteError::NotFound(id))?;

        let atualizado = self
            .store
            .update(id, existente.row_version, dados)
            .await?
            .ok_or(ClienteError::Conflict)?;

        tracing::info!(cliente_id = id, "cliente updated");
        Ok(atualizado)
    }

    pub async fn delete_cliente(&self, id: i32) -> Result<(), ClienteError> {
        let existente = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(ClienteError::NotFound(id))?;

        let removed = self.store.delete(id, existente.row_version).await?;
        if removed == 0 {
            tracing::warn!(cliente_id = id, "cliente delete lost a concurrent race");
            return Err(ClienteError::Conflict);
        }

        tracing::info!(cliente_id = id, "cliente deleted");
        Ok(())
    }
}
