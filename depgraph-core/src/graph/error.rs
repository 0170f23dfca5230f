//! Graph Errors
//!
//! Every mutation that can be refused reports why through [`GraphError`].
//! A refused mutation never touches the graph.

use thiserror::Error;

/// Result type for graph mutations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;

/// Errors returned by graph mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError<N> {
    /// A node was asked to depend on itself.
    #[error("node {node:?} cannot depend on itself")]
    SelfDependency {
        /// The offending node.
        node: N,
    },

    /// The new edge would close a cycle.
    #[error("circular dependency: {dep:?} already depends on {node:?} via {path:?}")]
    CycleDetected {
        /// The node that was to gain the dependency.
        node: N,
        /// The dependency that was to be added.
        dep: N,
        /// Existing chain of dependencies leading from `dep` to `node`,
        /// both ends included.
        path: Vec<N>,
    },

    /// No edge from `node` to `dep` is recorded.
    #[error("edge from {node:?} to {dep:?} does not exist")]
    EdgeNotFound {
        /// Source of the missing edge.
        node: N,
        /// Target of the missing edge.
        dep: N,
    },

    /// The node has no outgoing edges recorded.
    #[error("node {node:?} has no recorded dependencies")]
    NodeNotFound {
        /// The node that was looked up.
        node: N,
    },

    /// The node does not appear anywhere in the graph.
    #[error("unknown node: {node:?}")]
    UnknownNode {
        /// The node that was looked up.
        node: N,
    },
}

impl<N> GraphError<N> {
    /// Creates a self-dependency error.
    pub fn self_dependency(node: N) -> Self {
        Self::SelfDependency { node }
    }

    /// Creates a cycle error for the edge `node -> dep`.
    pub fn cycle(node: N, dep: N, path: Vec<N>) -> Self {
        Self::CycleDetected { node, dep, path }
    }

    /// Creates an edge not found error.
    pub fn edge_not_found(node: N, dep: N) -> Self {
        Self::EdgeNotFound { node, dep }
    }

    /// Creates a node not found error.
    pub fn node_not_found(node: N) -> Self {
        Self::NodeNotFound { node }
    }

    /// Creates an unknown node error.
    pub fn unknown_node(node: N) -> Self {
        Self::UnknownNode { node }
    }

    /// True if the error was raised to keep the graph acyclic.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::SelfDependency { .. } | Self::CycleDetected { .. })
    }
}
