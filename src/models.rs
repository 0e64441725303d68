//! Domain model: clients ("Cliente") and shipment orders ("Pedido").
//!
//! Orders carry an 8-digit origin/destination CEP pair, the freight price
//! quoted for that exact pair, and a lifecycle status. `row_version` is the
//! storage concurrency token: every write bumps it, and a write conditioned
//! on a stale version affects no rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle state. Ordinal values 1-4 on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Status {
    Processamento = 1,
    Enviado = 2,
    Entregue = 3,
    Cancelado = 4,
}

impl Status {
    /// Terminal states accept no further transitions, not even cancellation.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Entregue | Status::Cancelado)
    }

    /// Transition policy: forward one step at a time
    /// (Processamento -> Enviado -> Entregue), plus Cancelado from any
    /// non-terminal state.
    pub fn can_transition_to(self, next: Status) -> bool {
        match (self, next) {
            (Status::Processamento, Status::Enviado) => true,
            (Status::Enviado, Status::Entregue) => true,
            (from, Status::Cancelado) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl TryFrom<i16> for Status {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Status::Processamento),
            2 => Ok(Status::Enviado),
            3 => Ok(Status::Entregue),
            4 => Ok(Status::Cancelado),
            other => Err(format!("invalid order status: {}", other)),
        }
    }
}

impl From<Status> for i16 {
    fn from(status: Status) -> i16 {
        status as i16
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Processamento => "Processamento",
            Status::Enviado => "Enviado",
            Status::Entregue => "Entregue",
            Status::Cancelado => "Cancelado",
        };
        write!(f, "{}", name)
    }
}

/// A customer that places shipment orders.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub endereco: String,
    pub telefone: String,
    pub email: String,
    /// Storage concurrency token, not part of the API surface.
    #[serde(skip)]
    pub row_version: i32,
}

/// A shipment order with route, freight price and lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: i32,
    pub cliente_id: i32,
    /// Origin CEP, 8 digits.
    #[schema(example = "01310100")]
    pub origem: String,
    /// Destination CEP, 8 digits.
    #[schema(example = "20040020")]
    pub destino: String,
    #[schema(value_type = i16, example = 1)]
    pub status: Status,
    /// Freight price quoted for the current origem/destino pair.
    #[schema(value_type = String, example = "42.90")]
    pub valor_frete: Decimal,
    pub data_criacao: DateTime<Utc>,
    /// Storage concurrency token, not part of the API surface.
    #[serde(skip)]
    pub row_version: i32,
}
