use crate::api::ApiError;

/// Lifecycle of one remote request.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResult<T> {
    /// Issued, not settled yet.
    Pending,
    /// Settled with data.
    Resolved(T),
    /// Settled with a failure.
    Rejected(ApiError),
}

impl<T> AsyncResult<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncResult::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, AsyncResult::Resolved(_))
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            AsyncResult::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for AsyncResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => AsyncResult::Resolved(data),
            Err(err) => AsyncResult::Rejected(err),
        }
    }
}
