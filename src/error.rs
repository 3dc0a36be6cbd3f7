use thiserror::Error;

/// Errors produced by this crate.
///
/// There is no retry logic anywhere in the crate: every error is reported to the caller
/// immediately.
#[derive(Debug, Error)]
pub enum IgraphError {
    /// The input is malformed: an invalid clause value, an unknown node, a bad file name
    /// template, a non-laminar family of subgraphs, etc.
    #[error("Validation error: {0}")]
    Validation(String),
    /// An external tool exited with a non-zero code or did not produce the declared output.
    #[error("Rendering failed: {0}")]
    Render(String),
    /// Reading a configuration or model file, or writing a rendered file, failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The renderer configuration could not be parsed.
    #[error("Invalid renderer configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// A `Result` alias which uses `IgraphError` as the error type.
pub type Result<T> = std::result::Result<T, IgraphError>;

impl IgraphError {
    /// Shorthand for constructing an `IgraphError::Validation`.
    pub(crate) fn validation<S: Into<String>>(message: S) -> IgraphError {
        IgraphError::Validation(message.into())
    }

    /// Shorthand for constructing an `IgraphError::Render`.
    pub(crate) fn render<S: Into<String>>(message: S) -> IgraphError {
        IgraphError::Render(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, IgraphError::Validation(_))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, IgraphError::Render(_))
    }
}
