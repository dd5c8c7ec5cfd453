// errors.rs
use astra::Response;
use thiserror::Error;

use crate::clients::ClientError;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (upstream APIs).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// An upstream API call failed. The text is shown to the visitor as-is.
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<ClientError> for ServerError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Config(msg) => ServerError::Config(msg),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
