use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status; carries its message.
    #[error("{0}")]
    Status(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::JsonParse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
