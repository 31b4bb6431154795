//! Construction tests: edge-list parsing + CSR build invariants.

use std::io::Write;

use tempfile::NamedTempFile;

use cascade_graph::graph::{Graph, SparseGraph};
use cascade_graph::types::{GraphError, NodeId};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn edge_list_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write edges");
    file.flush().expect("flush");
    file
}

// ==================== Load Tests ====================

#[test]
fn test_load_basic() {
    init_logger();
    let file = edge_list_file("0 1\n0 2\n1 2\n2 0\n");
    let mut graph = SparseGraph::new();
    graph.load(file.path()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbors(0), vec![1, 2]);
    assert_eq!(graph.neighbors(2), vec![0]);
}

#[test]
fn test_load_skips_comments_blanks_and_garbage() {
    init_logger();
    let file = edge_list_file("# Directed graph: web-sample.txt\n\n0 1\nabc\n1 2\n\n# done\n");
    let mut graph = SparseGraph::new();
    graph.load(file.path()).unwrap();

    // Only the two valid lines contribute to the derived counts.
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_load_empty_file() {
    let file = edge_list_file("");
    let mut graph = SparseGraph::new();
    graph.load(file.path()).unwrap();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_load_unsorted_input_yields_sorted_blocks() {
    let file = edge_list_file("5 3\n0 9\n5 1\n0 4\n5 2\n");
    let mut graph = SparseGraph::new();
    graph.load(file.path()).unwrap();

    assert_eq!(graph.neighbors(0), vec![4, 9]);
    assert_eq!(graph.neighbors(5), vec![1, 2, 3]);
}

#[test]
fn test_load_missing_file_is_source_unavailable() {
    let mut graph = SparseGraph::new();
    let err = graph.load("/no/such/edge-list.txt".as_ref()).unwrap_err();
    assert!(matches!(err, GraphError::SourceUnavailable { .. }));

    // First load failed: graph is still the empty graph.
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_reload_replaces_contents() {
    let first = edge_list_file("0 1\n1 2\n");
    let second = edge_list_file("0 1\n");
    let mut graph = SparseGraph::new();

    graph.load(first.path()).unwrap();
    assert_eq!(graph.edge_count(), 2);

    graph.load(second.path()).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(1), Vec::<NodeId>::new());
}

#[test]
fn test_failed_reload_retains_previous_graph() {
    let file = edge_list_file("0 1\n1 2\n");
    let mut graph = SparseGraph::new();
    graph.load(file.path()).unwrap();

    let err = graph.load("/no/such/edge-list.txt".as_ref()).unwrap_err();
    assert!(matches!(err, GraphError::SourceUnavailable { .. }));

    // Retain policy: the earlier contents answer queries unchanged.
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.shortest_path(0, 2), vec![0, 1, 2]);
}

// ==================== Structural Invariants ====================

#[test]
fn test_degree_sum_equals_edge_count() {
    let g = SparseGraph::from_edges(vec![(0, 1), (0, 1), (1, 1), (3, 0), (3, 2), (3, 2)]);
    let total: usize = (0..g.node_count()).map(|i| g.out_degree(i as NodeId)).sum();
    assert_eq!(total, g.edge_count());
}

#[test]
fn test_neighbor_blocks_ascending() {
    let g = SparseGraph::from_edges(vec![(0, 7), (0, 3), (0, 5), (1, 2), (1, 0), (2, 2)]);
    for node in 0..g.node_count() as NodeId {
        let block = g.neighbors(node);
        assert!(
            block.windows(2).all(|w| w[0] <= w[1]),
            "block of node {} not ascending: {:?}",
            node,
            block
        );
    }
}

#[test]
fn test_queries_idempotent_between_loads() {
    let g = SparseGraph::from_edges(vec![(0, 1), (0, 2), (2, 1)]);
    let first_neighbors = g.neighbors(0);
    let first_degree = g.out_degree(0);
    for _ in 0..3 {
        assert_eq!(g.neighbors(0), first_neighbors);
        assert_eq!(g.out_degree(0), first_degree);
    }
}

#[test]
fn test_results_are_owned_copies() {
    let g = SparseGraph::from_edges(vec![(0, 1), (0, 2)]);
    let mut copy = g.neighbors(0);
    copy.push(99);
    // Mutating a result must not leak back into the structure.
    assert_eq!(g.neighbors(0), vec![1, 2]);
}

#[test]
fn test_memory_estimate_grows_with_edges() {
    let small = SparseGraph::from_edges(vec![(0, 1)]);
    let large = SparseGraph::from_edges((0..1000u32).map(|i| (0, i)));
    assert!(large.estimated_memory_bytes() > small.estimated_memory_bytes());
}
