//! Typed errors surfaced at the analysis request boundary

use thiserror::Error;

/// Errors produced by label resolution, peeling, and statistics requests.
///
/// `NoGraph` and `InvalidLabel` are recoverable request-level failures.
/// `MissingDecomposition` indicates a broken library invariant and should be
/// treated as fatal by callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A statistics or export request arrived before any graph was loaded.
    #[error("no graph loaded")]
    NoGraph,

    /// A hierarchical path label was malformed or named a nonexistent node.
    #[error("invalid hierarchy label {label:?}: {reason}")]
    InvalidLabel { label: String, reason: String },

    /// The whole-graph core decomposition does not cover the vertex set.
    #[error("core decomposition covers {got} of {expected} vertices")]
    MissingDecomposition { expected: usize, got: usize },

    /// An adjacency or report export failed at the filesystem level.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub(crate) fn invalid_label(label: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidLabel {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}
