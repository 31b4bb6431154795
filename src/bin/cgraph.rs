//! CLI entry point for the `cgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use cascade_graph::cli::commands;
use cascade_graph::types::NodeId;

#[derive(Parser)]
#[command(
    name = "cgraph",
    about = "CascadeGraph CLI — traversal queries over large directed edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge list and report counts, critical node, and memory
    Stats {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Shortest unweighted path between two nodes
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node ID
        start: NodeId,
        /// Goal node ID
        goal: NodeId,
    },
    /// All nodes reachable within a depth bound
    Reach {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node ID
        start: NodeId,
        /// Maximum traversal depth (negative values are treated as 0)
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        depth: i64,
    },
    /// Depth-first traversal order from a start node
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start node ID
        start: NodeId,
    },
    /// Out-degree of a node
    Degree {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node ID
        node: NodeId,
    },
    /// Outgoing neighbors of a node
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node ID
        node: NodeId,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::Path { file, start, goal } => commands::cmd_path(&file, start, goal, json),
        Commands::Reach { file, start, depth } => {
            // Negative depth means no expansion, same as zero.
            let depth = depth.max(0).min(u32::MAX as i64) as u32;
            commands::cmd_reach(&file, start, depth, json)
        }
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, start, json),
        Commands::Degree { file, node } => commands::cmd_degree(&file, node, json),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, node, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            cascade_graph::GraphError::SourceUnavailable { .. } => 1,
            cascade_graph::GraphError::Io(_) => 5,
        };
        process::exit(code);
    }
}
