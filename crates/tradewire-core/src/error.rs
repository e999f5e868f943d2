use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("outbound dispatch error: {0}")]
    Outbound(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
