//! Dependency Graph
//!
//! This module implements a directed acyclic graph of "depends on"
//! relations between opaque node identifiers.
//!
//! # Overview
//!
//! - Nodes are any hashable, comparable identifier (see [`NodeId`])
//! - An edge `node -> dep` means `node` depends on `dep`
//! - Edges that would close a cycle are refused with [`GraphError`]
//!
//! # Design Decisions
//!
//! 1. We maintain both forward (dependencies) and reverse (dependents)
//!    edges so that traversal in either direction is a map lookup.
//!
//! 2. Cycles are checked on insertion, so every query and the
//!    topological sort can assume the graph is acyclic.
//!
//! 3. All maps and sets preserve insertion order, which makes results
//!    reproducible across runs.

mod dependency_graph;
mod error;
mod node;
mod topological;
mod traversal;

pub use dependency_graph::DependencyGraph;
pub use error::{GraphError, GraphResult};
pub use node::NodeId;
pub use topological::TopologicalComparator;
