//! Success/failure outcome for calls that can fail without being a bug.
//!
//! The freight-quote boundary reports expected failures (invalid input,
//! upstream rejection, transport trouble) as values instead of errors, so a
//! failed quote carries the HTTP-ish status code and message the caller
//! should surface. Exactly one of value/error exists by construction.

/// Outcome of a service call: a value, or a status code plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResult<T> {
    Success(T),
    Failure { status_code: u16, error_message: String },
}

impl<T> ServiceResult<T> {
    /// Successful outcome. Implies status code 200 and an empty error message.
    pub fn success(value: T) -> Self {
        ServiceResult::Success(value)
    }

    /// Failed outcome with the status code the caller should map to.
    pub fn failure(status_code: u16, error_message: impl Into<String>) -> Self {
        ServiceResult::Failure {
            status_code,
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResult::Success(_))
    }

    /// 200 for a success, the recorded code otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceResult::Success(_) => 200,
            ServiceResult::Failure { status_code, .. } => *status_code,
        }
    }

    /// Empty for a success, the recorded message otherwise.
    pub fn error_message(&self) -> &str {
        match self {
            ServiceResult::Success(_) => "",
            ServiceResult::Failure { error_message, .. } => error_message,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ServiceResult::Success(value) => Some(value),
            ServiceResult::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ServiceResult::Success(value) => Some(value),
            ServiceResult::Failure { .. } => None,
        }
    }
}
