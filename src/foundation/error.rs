/// Convenience result type used across gridish.
pub type GridishResult<T> = Result<T, GridishError>;

/// Top-level error taxonomy used by compiler and overlay APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridishError {
    /// Invalid user-provided grid configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Overlay operation called in a state that does not allow it.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Stale or unknown element handle passed to a document.
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridishError {
    /// Build a [`GridishError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridishError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`GridishError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`GridishError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridishError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
