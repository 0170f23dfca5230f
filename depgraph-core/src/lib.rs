//! Depgraph Core
//!
//! This crate provides an acyclic dependency graph for tools that need to
//! reason about ordering constraints between named units of work: build
//! systems, package managers, task schedulers.
//!
//! It implements:
//!
//! - Edge insertion with cycle rejection
//! - Immediate and transitive dependency/dependent queries
//! - Edge and node removal
//! - Topological sorting and subset comparators
//!
//! # Example
//!
//! ```rust
//! use depgraph_core::graph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.depend("binary", "parser").unwrap();
//! graph.depend("parser", "lexer").unwrap();
//!
//! assert_eq!(graph.transitive_dependencies(&"binary").len(), 2);
//!
//! // Closing the loop is refused and leaves the graph as it was.
//! assert!(graph.depend("lexer", "binary").is_err());
//!
//! let comparator = graph.topological_comparator(["lexer", "binary"]);
//! assert_eq!(comparator.values(), vec!["binary", "lexer"]);
//! ```
//!
//! # Logging
//!
//! Mutations emit `tracing` events (`debug` on success, `warn` when an edge
//! is refused). The crate never installs a subscriber.

pub mod graph;

pub use graph::{DependencyGraph, GraphError, GraphResult, NodeId, TopologicalComparator};
