//! API response envelope, error codes and request DTOs shared by handlers.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cliente::ClienteError;
use crate::models::Status;
use crate::pedido::PedidoError;

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_TRANSITION: i32 = 1002;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4001;
    pub const CONFLICT: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const QUOTE_FAILED: i32 = 5002;
}

/// Handler result: success tuple or an error tuple with an empty envelope.
pub type ApiResult<T> =
    Result<(StatusCode, Json<ApiResponse<T>>), (StatusCode, Json<ApiResponse<()>>)>;

/// 200 response with a success envelope.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// An error about to become an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: i32,
    msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, error_codes::CONFLICT, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    /// Passthrough of an upstream status code, e.g. a failed freight quote.
    pub fn with_status(status_code: u16, code: i32, msg: impl Into<String>) -> Self {
        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, code, msg)
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err((
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        ))
    }
}

impl From<PedidoError> for ApiError {
    fn from(err: PedidoError) -> Self {
        match err {
            PedidoError::NotFound(_) | PedidoError::ClienteNotFound(_) => {
                ApiError::not_found(err.to_string())
            }
            PedidoError::QuoteFailed {
                status_code,
                ref message,
            } => ApiError::with_status(status_code, error_codes::QUOTE_FAILED, message.clone()),
            PedidoError::InvalidTransition { .. } => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_TRANSITION,
                err.to_string(),
            ),
            PedidoError::Conflict => ApiError::conflict(err.to_string()),
            PedidoError::Store(e) => {
                tracing::error!(error = %e, "pedido store failure");
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<ClienteError> for ApiError {
    fn from(err: ClienteError) -> Self {
        match err {
            ClienteError::NotFound(_) => ApiError::not_found(err.to_string()),
            ClienteError::Conflict => ApiError::conflict(err.to_string()),
            ClienteError::Store(e) => {
                tracing::error!(error = %e, "cliente store failure");
                ApiError::internal("Internal server error")
            }
        }
    }
}

/// Body for the status transition endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    /// Target status, ordinal 1-4.
    #[schema(value_type = i16, example = 2)]
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_data() {
        let response = ApiResponse::success(5);
        assert_eq!(response.code, 0);
        assert_eq!(response.msg, "ok");
        assert_eq!(response.data, Some(5));
    }

    #[test]
    fn error_envelope_omits_data_field() {
        let response = ApiResponse::<()>::error(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], error_codes::NOT_FOUND);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn quote_failure_status_passes_through() {
        let err = ApiError::from(PedidoError::QuoteFailed {
            status_code: 400,
            message: "The provided postal codes are invalid".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::QUOTE_FAILED);
    }

    #[test]
    fn out_of_range_status_code_falls_back_to_500() {
        let err = ApiError::with_status(99, error_codes::QUOTE_FAILED, "weird upstream");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::from(PedidoError::Conflict);
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, error_codes::CONFLICT);
    }
}
