/// Convenience result type used across trailfx.
pub type TrailResult<T> = Result<T, TrailError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The trail engine itself is infallible; every variant here originates at a boundary
/// (configuration files, presentation surfaces, position sources).
#[derive(thiserror::Error, Debug)]
pub enum TrailError {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A presentation surface failed to accept a frame.
    #[error("surface error: {0}")]
    Surface(String),

    /// A position source could not deliver samples.
    #[error("position source error: {0}")]
    Source(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrailError {
    /// Build a [`TrailError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TrailError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`TrailError::Source`] value.
    pub fn position_source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`TrailError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
