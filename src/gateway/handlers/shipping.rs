//! Freight simulation handler.

use axum::{Json, extract::State};
use std::sync::Arc;

use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResponse, ApiResult, error_codes, ok};
use crate::result::ServiceResult;
use crate::shipping::{CotacaoFrete, Simulacao};

/// Quote freight for a route
///
/// POST /api/v1/shipping/calcular
#[utoipa::path(
    post,
    path = "/api/v1/shipping/calcular",
    request_body = Simulacao,
    responses(
        (status = 200, description = "Freight price and delivery time", body = ApiResponse<CotacaoFrete>),
        (status = 400, description = "Invalid postal codes"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Freight API unavailable or returned no services")
    ),
    security(("bearer_auth" = [])),
    tag = "Shipping"
)]
pub async fn calcular_frete(
    State(state): State<Arc<AppState>>,
    Json(cotacao): Json<Simulacao>,
) -> ApiResult<CotacaoFrete> {
    match state.frete.calcular_frete(&cotacao).await {
        ServiceResult::Success(quote) => ok(quote),
        ServiceResult::Failure {
            status_code,
            error_message,
        } => {
            ApiError::with_status(status_code, error_codes::QUOTE_FAILED, error_message).into_err()
        }
    }
}
