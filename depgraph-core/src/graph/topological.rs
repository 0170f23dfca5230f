//! Topological Ordering
//!
//! The sort orders nodes so that every node comes before the nodes it
//! depends on.
//!
//! # Algorithm
//!
//! Kahn's algorithm over the "depends on" edges:
//!
//! 1. Count, for every node, how many nodes list it as a dependency
//! 2. Push every node with a count of zero onto a stack
//! 3. Pop a node, emit it, and decrement the count of each of its
//!    dependencies, pushing those that reach zero
//!
//! The graph never holds a cycle, so every node is emitted exactly once.
//! Insertion-ordered maps make the result identical across runs.

use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use super::dependency_graph::DependencyGraph;
use super::node::NodeId;

impl<N: NodeId> DependencyGraph<N> {
    /// All nodes, each placed before everything it depends on.
    ///
    /// Nodes that are only ever depended on are included, as are nodes
    /// left without edges by [`remove_edge`](Self::remove_edge).
    pub fn topological_sort(&self) -> Vec<N> {
        let mut in_degree: IndexMap<&N, usize> = IndexMap::new();
        for (node, deps) in &self.dependencies {
            in_degree.entry(node).or_insert(0);
            for dep in deps {
                *in_degree.entry(dep).or_insert(0) += 1;
            }
        }
        // Edge removal can leave a node known only as a dependents key.
        for node in self.dependents.keys() {
            in_degree.entry(node).or_insert(0);
        }

        let mut stack: Vec<&N> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&node, _)| node)
            .collect();
        let mut sorted = Vec::with_capacity(in_degree.len());

        while let Some(node) = stack.pop() {
            for dep in self.immediate_dependencies(node) {
                if let Some(degree) = in_degree.get_mut(dep) {
                    *degree -= 1;
                    if *degree == 0 {
                        stack.push(dep);
                    }
                }
            }
            sorted.push(node.clone());
        }

        trace!(nodes = sorted.len(), "topological sort");
        sorted
    }

    /// A comparator that orders `nodes` by their position in
    /// [`topological_sort`](Self::topological_sort).
    pub fn topological_comparator<I>(&self, nodes: I) -> TopologicalComparator<N>
    where
        I: IntoIterator<Item = N>,
    {
        let wanted: IndexSet<N> = nodes.into_iter().collect();
        let positions = self
            .topological_sort()
            .into_iter()
            .enumerate()
            .filter(|(_, node)| wanted.contains(node))
            .map(|(position, node)| (node, position))
            .collect();

        TopologicalComparator { positions }
    }
}

/// Orders a chosen subset of nodes the way the whole graph sorts them.
///
/// Positions are captured when the comparator is built; later changes to
/// the graph do not affect it.
#[derive(Debug, Clone)]
pub struct TopologicalComparator<N> {
    /// Requested nodes mapped to their sort position, in sort order.
    positions: IndexMap<N, usize>,
}

impl<N: NodeId> TopologicalComparator<N> {
    /// Position of `node` in the full sort, if it was requested.
    pub fn position(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }

    /// Compare two requested nodes.
    ///
    /// Returns `None` if either node has no position.
    pub fn compare(&self, a: &N, b: &N) -> Option<Ordering> {
        Some(self.position(a)?.cmp(&self.position(b)?))
    }

    /// Sort `nodes` in place. Nodes without a position go last.
    pub fn sort(&self, nodes: &mut [N]) {
        nodes.sort_by_key(|node| self.position(node).unwrap_or(usize::MAX));
    }

    /// The requested nodes that are in the graph, in sorted order.
    pub fn values(&self) -> Vec<N> {
        self.positions.keys().cloned().collect()
    }

    /// Number of nodes with a position.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if none of the requested nodes are in the graph.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
