use thiserror::Error;

/// A failed call to the Faltadas service.
///
/// The variants only exist to make log lines useful; callers treat every
/// variant the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
