//! Command-line interface for the `cgraph` tool.

pub mod commands;
