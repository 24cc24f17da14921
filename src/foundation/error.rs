/// Convenience result type used across arxmix.
pub type ArxResult<T> = Result<T, ArxError>;

/// Top-level error taxonomy used by the codec, renderer and path sharder.
///
/// None of these are transient: callers surface them instead of retrying.
#[derive(thiserror::Error, Debug)]
pub enum ArxError {
    /// Mix type identifier is not in the registry (schema mismatch with the producer).
    #[error("unknown mix type: {0}")]
    UnknownType(String),

    /// Image reference could not be parsed as an unsigned 64-bit hex value.
    #[error("invalid hex image reference: {0}")]
    InvalidHexFormat(String),

    /// Invalid caller-provided data (operation lists, evaluator state, config).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing records and config.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArxError {
    /// Build an [`ArxError::UnknownType`] value.
    pub fn unknown_type(type_id: impl Into<String>) -> Self {
        Self::UnknownType(type_id.into())
    }

    /// Build an [`ArxError::InvalidHexFormat`] value.
    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        Self::InvalidHexFormat(msg.into())
    }

    /// Build an [`ArxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
