//! Edge-list source access — memory-mapped reads of SNAP-style text files.

pub mod edgelist;

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::types::{GraphError, GraphResult};

pub use edgelist::{parse_edge_list, EdgeList};

/// Open an edge-list file and parse it into an in-memory edge set.
///
/// The file is memory-mapped and parsed directly from the byte slice.
/// Zero-length files parse to an empty edge set without mapping (mmap of
/// an empty file is an error on most platforms). Any open/read failure is
/// reported as [`GraphError::SourceUnavailable`] with the offending path.
pub fn read_edge_list(path: &Path) -> GraphResult<EdgeList> {
    let unavailable = |source: std::io::Error| GraphError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let len = file.metadata().map_err(unavailable)?.len();
    if len == 0 {
        return Ok(EdgeList::default());
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(unavailable)?;
    Ok(parse_edge_list(&mmap))
}
