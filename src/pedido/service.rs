//! Order lifecycle orchestration.
//!
//! Freight pricing always happens here, never in the store: creating or
//! re-routing an order quotes the route first and persists only on a
//! successful quote, so `valor_frete` can never drift from the order's
//! current origem/destino pair.

use std::sync::Arc;

use super::{NovoPedido, NovoPedidoRequest, PedidoError, PedidoStore, RotaPedido};
use crate::cliente::ClienteStore;
use crate::models::{Pedido, Status};
use crate::result::ServiceResult;
use crate::shipping::{CotacaoFrete, FreightQuoter, Simulacao};

/// The recent-activity view is capped; full listings go through
/// [`PedidoService::get_pedidos_by_cliente_id`].
const RECENT_PEDIDOS_LIMIT: i64 = 10;

pub struct PedidoService {
    store: Arc<dyn PedidoStore>,
    clientes: Arc<dyn ClienteStore>,
    frete: Arc<dyn FreightQuoter>,
}

impl PedidoService {
    pub fn new(
        store: Arc<dyn PedidoStore>,
        clientes: Arc<dyn ClienteStore>,
        frete: Arc<dyn FreightQuoter>,
    ) -> Self {
        Self {
            store,
            clientes,
            frete,
        }
    }

    async fn quote_route(&self, origem: &str, destino: &str) -> Result<CotacaoFrete, PedidoError> {
        let cotacao = Simulacao {
            origem: origem.to_string(),
            destino: destino.to_string(),
        };

        match self.frete.calcular_frete(&cotacao).await {
            ServiceResult::Success(quote) => Ok(quote),
            ServiceResult::Failure {
                status_code,
                error_message,
            } => {
                tracing::warn!(
                    origem,
                    destino,
                    status_code,
                    message = %error_message,
                    "freight quote failed"
                );
                Err(PedidoError::QuoteFailed {
                    status_code,
                    message: error_message,
                })
            }
        }
    }

    /// Create an order: the referenced cliente must exist and the route must
    /// quote successfully before anything is persisted.
    pub async fn create_pedido(&self, request: NovoPedidoRequest) -> Result<Pedido, PedidoError> {
        if self.clientes.get_by_id(request.cliente_id).await?.is_none() {
            return Err(PedidoError::ClienteNotFound(request.cliente_id));
        }

        let quote = self.quote_route(&request.origem, &request.destino).await?;

        let pedido = self
            .store
            .create(NovoPedido {
                cliente_id: request.cliente_id,
                origem: request.origem,
                destino: request.destino,
                status: Status::Processamento,
                valor_frete: quote.shipping_price,
            })
            .await?;

        tracing::info!(
            pedido_id = pedido.id,
            cliente_id = pedido.cliente_id,
            valor_frete = %pedido.valor_frete,
            "pedido created"
        );
        Ok(pedido)
    }

    /// The ten most recent orders, newest first.
    pub async fn get_pedidos(&self) -> Result<Vec<Pedido>, PedidoError> {
        Ok(self.store.get_recent(RECENT_PEDIDOS_LIMIT).await?)
    }

    pub async fn get_pedido_by_id(&self, id: i32) -> Result<Option<Pedido>, PedidoError> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn get_pedidos_by_cliente_id(
        &self,
        cliente_id: i32,
    ) -> Result<Vec<Pedido>, PedidoError> {
        Ok(self.store.get_by_cliente_id(cliente_id).await?)
    }

    /// Change an order's route, recomputing the freight price for the new
    /// pair. Status and creation date are untouched. A failed quote aborts
    /// the update; the stored price is never stale relative to the route.
    pub async fn update_pedido(&self, id: i32, rota: RotaPedido) -> Result<Pedido, PedidoError> {
        let existente = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(PedidoError::NotFound(id))?;

        let quote = self.quote_route(&rota.origem, &rota.destino).await?;

        let atualizado = self
            .store
            .update_route(
                id,
                existente.row_version,
                &rota.origem,
                &rota.destino,
                quote.shipping_price,
            )
            .await?
            .ok_or(PedidoError::Conflict)?;

        tracing::info!(
            pedido_id = id,
            valor_frete = %atualizado.valor_frete,
            "pedido route updated"
        );
        Ok(atualizado)
    }

    /// Move an order through its lifecycle. Only the status field is
    /// written; transitions run forward one step at a time, with
    /// cancellation allowed from any non-terminal state.
    pub async fn update_status(&self, id: i32, status: Status) -> Result<Pedido, PedidoError> {
        let existente = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(PedidoError::NotFound(id))?;

        if !existente.status.can_transition_to(status) {
            return Err(PedidoError::InvalidTransition {
                from: existente.status,
                to: status,
            });
        }

        let atualizado = self
            .store
            .update_status(id, existente.row_version, status)
            .await?
            .ok_or(PedidoError::Conflict)?;

        tracing::info!(pedido_id = id, status = %atualizado.status, "pedido status updated");
        Ok(atualizado)
    }

    pub async fn delete_pedido(&self, id: i32) -> Result<(), PedidoError> {
        let existente = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(PedidoError::NotFound(id))?;

        let removed = self.store.delete(id, existente.row_version).await?;
        if removed == 0 {
            tracing::warn!(pedido_id = id, "pedido delete lost a concurrent race");
            return Err(PedidoError::Conflict);
        }

        tracing::info!(pedido_id = id, "pedido deleted");
        Ok(())
    }
}
