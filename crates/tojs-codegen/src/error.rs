//! Codegen error types.

use thiserror::Error;
use tojs_types::TreeError;

/// Errors that abort an emission. No partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A leaf wrapper was built from a non-string payload.
    #[error("{kind} must be constructed with a string, got {payload}")]
    Construction {
        kind: &'static str,
        payload: String,
    },

    /// A value outside the known node variants, or an opaque node that could
    /// not render itself.
    #[error("unexpected object in markup tree: {0}")]
    UnsupportedNode(String),
}

impl From<TreeError> for CodegenError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::Construction { kind, payload } => Self::Construction { kind, payload },
            TreeError::UnsupportedNode(value) => Self::UnsupportedNode(value),
        }
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
