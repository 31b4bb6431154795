//! Shared data types for the CascadeGraph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Node identifier. Edge lists use dense non-negative integer ids, so a
/// compact 32-bit index keeps the column array at four bytes per edge.
pub type NodeId = u32;

/// Lines starting with this byte are comments and are skipped.
pub const COMMENT_MARKER: u8 = b'#';

/// Weight assigned to every edge of an unweighted input.
pub const DEFAULT_EDGE_WEIGHT: u32 = 1;
