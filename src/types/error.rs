//! Error types for the CascadeGraph library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the CascadeGraph library.
///
/// Out-of-range node ids and unreachable goals are deliberately NOT errors:
/// every query defines an empty/zero result for them, because callers pass
/// ids derived from external, possibly stale data.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The edge-list source could not be opened or read. The graph keeps
    /// its previous contents when a reload returns this.
    #[error("Cannot read edge list {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error outside of edge-list loading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for CascadeGraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
