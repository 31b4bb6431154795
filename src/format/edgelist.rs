//! Permissive line parser for whitespace-separated `src dst` edge records.

use crate::types::{NodeId, COMMENT_MARKER};

/// Parsed edge-list contents, before CSR construction.
#[derive(Debug, Default)]
pub struct EdgeList {
    /// Edge records exactly as read; duplicates and self-loops preserved.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Largest node id seen across both endpoints, `None` for no edges.
    pub max_node: Option<NodeId>,
    /// Number of non-blank, non-comment lines that did not parse.
    pub skipped: usize,
}

/// Outcome of parsing a single line.
enum Line {
    Edge(NodeId, NodeId),
    /// Blank line or comment, not counted as skipped.
    Ignored,
    Malformed,
}

/// Parse a whole edge-list byte buffer.
///
/// One edge per line; blank lines and lines starting with `#` are ignored;
/// lines without two leading parseable integers are counted in `skipped`
/// and dropped. Tokens after the second integer are ignored.
pub fn parse_edge_list(bytes: &[u8]) -> EdgeList {
    let mut list = EdgeList::default();

    for raw in bytes.split(|&b| b == b'\n') {
        match parse_line(raw) {
            Line::Edge(src, dst) => {
                let line_max = src.max(dst);
                list.max_node = Some(match list.max_node {
                    Some(m) => m.max(line_max),
                    None => line_max,
                });
                list.edges.push((src, dst));
            }
            Line::Ignored => {}
            Line::Malformed => list.skipped += 1,
        }
    }

    list
}

fn parse_line(raw: &[u8]) -> Line {
    let trimmed = trim_ascii(raw);
    if trimmed.is_empty() || trimmed[0] == COMMENT_MARKER {
        return Line::Ignored;
    }

    // Edge lists are plain ASCII; anything else cannot hold two integers.
    let Ok(text) = std::str::from_utf8(trimmed) else {
        return Line::Malformed;
    };

    let mut tokens = text.split_ascii_whitespace();
    let src = tokens.next().and_then(|t| t.parse::<NodeId>().ok());
    let dst = tokens.next().and_then(|t| t.parse::<NodeId>().ok());
    match (src, dst) {
        (Some(src), Some(dst)) => Line::Edge(src, dst),
        _ => Line::Malformed,
    }
}

fn trim_ascii(raw: &[u8]) -> &[u8] {
    let start = raw
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |p| p + 1);
    &raw[start..end]
}
