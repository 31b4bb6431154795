//! Graph traversal algorithms over the compressed-row structure.
//!
//! Every function allocates its own visited/distance/parent buffers, so
//! concurrent calls against a shared `&SparseGraph` never contend.

use std::collections::VecDeque;

use crate::graph::SparseGraph;
use crate::types::NodeId;

const UNREACHED: u32 = u32::MAX;

/// Unweighted shortest path from `start` to `goal` via BFS over outgoing
/// edges, stopping as soon as `goal` is dequeued.
///
/// Returns the full path including both endpoints, reconstructed from
/// parent links. Empty if `start` is out of range or the queue exhausts
/// without reaching `goal`; "no path" is a result, not an error. Among
/// equal-distance candidates the smallest id is discovered first because
/// destination blocks are stored ascending.
pub fn shortest_path(graph: &SparseGraph, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let n = graph.node_count();
    let mut distance = vec![UNREACHED; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut queue = VecDeque::new();

    distance[start as usize] = 0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return rebuild_path(&parent, goal);
        }

        for &next in graph.out_edges(current) {
            if distance[next as usize] == UNREACHED {
                distance[next as usize] = distance[current as usize] + 1;
                parent[next as usize] = Some(current);
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Walk parent links from `goal` back to the start, then reverse.
fn rebuild_path(parent: &[Option<NodeId>], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = parent[current as usize] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// All nodes within `max_depth` hops of `start`, in BFS discovery order
/// with `start` first.
///
/// A node is recorded at its first visit (shortest depth) and never
/// re-enqueued; nodes sitting exactly at `max_depth` are included but not
/// expanded. `max_depth == 0` yields just `[start]`. Empty if `start` is
/// out of range.
pub fn reachable_within_depth(graph: &SparseGraph, start: NodeId, max_depth: u32) -> Vec<NodeId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    visited[start as usize] = true;
    order.push(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &next in graph.out_edges(current) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                order.push(next);
                queue.push_back((next, depth + 1));
            }
        }
    }

    order
}

/// Depth-first preorder from `start` using an explicit stack, so traversal
/// depth never rides the call stack.
///
/// A node may be pushed more than once through different parents; only the
/// first pop that finds it unvisited records it. Neighbors are pushed in
/// descending order so the ascending one pops first, reproducing
/// left-to-right preorder over sorted destination blocks. Empty if `start`
/// is out of range.
pub fn depth_first_order(graph: &SparseGraph, start: NodeId) -> Vec<NodeId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current as usize] {
            continue;
        }
        visited[current as usize] = true;
        order.push(current);

        for &next in graph.out_edges(current).iter().rev() {
            if !visited[next as usize] {
                stack.push(next);
            }
        }
    }

    order
}
