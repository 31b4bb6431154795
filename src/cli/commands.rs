//! CLI command implementations.
//!
//! Each command loads the edge list, runs one query against the resulting
//! [`SparseGraph`], and prints either human-readable text or JSON. Query
//! wall-clock time is measured here: timing is a reporting concern, not
//! part of the graph engine.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::graph::{traversal, SparseGraph};
use crate::types::{GraphResult, NodeId};

/// How many entries of a long node listing the text output shows.
const TEXT_LISTING_LIMIT: usize = 20;

/// Summary statistics for a loaded graph.
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub critical_node: Option<NodeId>,
    pub critical_out_degree: usize,
    pub estimated_memory_bytes: u64,
}

impl GraphStats {
    fn collect(graph: &SparseGraph) -> Self {
        let critical_node = graph.most_critical_node();
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            critical_node,
            critical_out_degree: critical_node.map_or(0, |n| graph.out_degree(n)),
            estimated_memory_bytes: graph.estimated_memory_bytes(),
        }
    }
}

fn load_timed(path: &Path) -> GraphResult<(SparseGraph, Duration)> {
    let started = Instant::now();
    let mut graph = SparseGraph::new();
    graph.load(path)?;
    Ok((graph, started.elapsed()))
}

/// Print counts, the critical node, and the estimated CSR footprint.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let (graph, load_time) = load_timed(path)?;
    let stats = GraphStats::collect(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Load time: {:.3}s", load_time.as_secs_f64());
        println!("Nodes: {}", stats.nodes);
        println!("Edges: {}", stats.edges);
        match stats.critical_node {
            Some(node) => println!(
                "Critical node: {} (out-degree {})",
                node, stats.critical_out_degree
            ),
            None => println!("Critical node: none (empty graph)"),
        }
        println!(
            "Estimated memory: {:.2} MB",
            stats.estimated_memory_bytes as f64 / (1024.0 * 1024.0)
        );
    }
    Ok(())
}

/// Shortest unweighted path between two nodes.
pub fn cmd_path(path: &Path, start: NodeId, goal: NodeId, json: bool) -> GraphResult<()> {
    let (graph, _) = load_timed(path)?;
    let started = Instant::now();
    let route = traversal::shortest_path(&graph, start, goal);
    let elapsed = started.elapsed();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "goal": goal,
                "found": !route.is_empty(),
                "hops": route.len().saturating_sub(1),
                "path": route,
            })
        );
    } else if route.is_empty() {
        println!(
            "No path from {} to {} ({:.6}s)",
            start,
            goal,
            elapsed.as_secs_f64()
        );
    } else {
        println!(
            "Path from {} to {}: {} hops ({:.6}s)",
            start,
            goal,
            route.len() - 1,
            elapsed.as_secs_f64()
        );
        print_listing(&route);
    }
    Ok(())
}

/// All nodes reachable within a depth bound.
pub fn cmd_reach(path: &Path, start: NodeId, max_depth: u32, json: bool) -> GraphResult<()> {
    let (graph, _) = load_timed(path)?;
    let started = Instant::now();
    let reached = traversal::reachable_within_depth(&graph, start, max_depth);
    let elapsed = started.elapsed();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "max_depth": max_depth,
                "count": reached.len(),
                "nodes": reached,
            })
        );
    } else {
        println!(
            "{} nodes within depth {} of {} ({:.6}s)",
            reached.len(),
            max_depth,
            start,
            elapsed.as_secs_f64()
        );
        print_listing(&reached);
    }
    Ok(())
}

/// Full depth-first preorder from a start node.
pub fn cmd_dfs(path: &Path, start: NodeId, json: bool) -> GraphResult<()> {
    let (graph, _) = load_timed(path)?;
    let started = Instant::now();
    let order = traversal::depth_first_order(&graph, start);
    let elapsed = started.elapsed();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "visited": order.len(),
                "order": order,
            })
        );
    } else {
        println!(
            "DFS from {} visited {} nodes ({:.6}s)",
            start,
            order.len(),
            elapsed.as_secs_f64()
        );
        print_listing(&order);
    }
    Ok(())
}

/// Out-degree of a single node.
pub fn cmd_degree(path: &Path, node: NodeId, json: bool) -> GraphResult<()> {
    let (graph, _) = load_timed(path)?;
    let degree = graph.out_degree(node);

    if json {
        println!(
            "{}",
            serde_json::json!({"node": node, "out_degree": degree})
        );
    } else {
        println!("Out-degree of {}: {}", node, degree);
    }
    Ok(())
}

/// Outgoing neighbors of a single node.
pub fn cmd_neighbors(path: &Path, node: NodeId, json: bool) -> GraphResult<()> {
    let (graph, _) = load_timed(path)?;
    let neighbors = graph.neighbors(node);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "node": node,
                "count": neighbors.len(),
                "neighbors": neighbors,
            })
        );
    } else {
        println!("{} neighbors of {}", neighbors.len(), node);
        print_listing(&neighbors);
    }
    Ok(())
}

/// Print a node listing, truncated past `TEXT_LISTING_LIMIT` entries.
fn print_listing(nodes: &[NodeId]) {
    if nodes.is_empty() {
        return;
    }
    if nodes.len() <= TEXT_LISTING_LIMIT {
        println!("  {:?}", nodes);
    } else {
        println!(
            "  {:?}... (showing first {} of {})",
            &nodes[..TEXT_LISTING_LIMIT],
            TEXT_LISTING_LIMIT,
            nodes.len()
        );
    }
}
