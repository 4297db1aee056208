//! Tree construction and emission errors.

use thiserror::Error;

/// Errors raised while building a markup tree or turning it into code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A leaf wrapper (comment, raw fragment, code fragment, ...) was given a
    /// payload that is not a string.
    #[error("{kind} must be constructed with a string, got {payload}")]
    Construction {
        kind: &'static str,
        payload: String,
    },

    /// A value outside the known node variants, or an opaque node that
    /// refused to render. Carries the offending value.
    #[error("unexpected object in markup tree: {0}")]
    UnsupportedNode(String),
}

impl TreeError {
    pub(crate) fn construction(kind: &'static str, payload: impl Into<String>) -> Self {
        Self::Construction {
            kind,
            payload: payload.into(),
        }
    }
}

/// Result alias for tree construction and emission.
pub type TreeResult<T> = Result<T, TreeError>;
