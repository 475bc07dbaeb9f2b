/// Convenience result type used across svgline.
pub type SvgLineResult<T> = Result<T, SvgLineError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SvgLineError {
    /// The input markup is not a well-formed document tree.
    #[error("markup error: {0}")]
    Markup(String),

    /// Path data was rejected by the path-length oracle or could not be built.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Animation parameters violate their invariants.
    #[error("config error: {0}")]
    Config(String),

    /// The transformed document could not be written back to markup.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SvgLineError {
    /// Build a [`SvgLineError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }

    /// Build a [`SvgLineError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`SvgLineError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SvgLineError::Serialize`] value.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
