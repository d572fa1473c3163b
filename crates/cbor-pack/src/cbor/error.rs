use thiserror::Error;

/// Error type for CBOR encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("unsupported cbor value: {0}")]
    Unsupported(&'static str),
}
