//! Transitive Queries
//!
//! Transitive dependencies and dependents are computed with a level-by-level
//! breadth-first search over one of the two adjacency maps:
//!
//! 1. Start with the seed nodes as the frontier
//! 2. Visit every node in the frontier, collecting unvisited neighbors
//! 3. The collected neighbors become the next frontier
//! 4. Stop when the frontier is empty
//!
//! The seeds themselves are never part of the result.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use tracing::trace;

use super::dependency_graph::{Adjacency, DependencyGraph};
use super::node::NodeId;

type Frontier<N> = SmallVec<[N; 8]>;

/// Every node reachable from `seeds` through `neighbors`, minus the seeds.
fn bfs<N: NodeId>(neighbors: &Adjacency<N>, seeds: &IndexSet<N>) -> IndexSet<N> {
    // Nodes are marked when first reached so each one enters a frontier once.
    let mut visited: IndexSet<N> = seeds.clone();
    let mut frontier: Frontier<N> = seeds.iter().cloned().collect();

    while !frontier.is_empty() {
        let mut next = Frontier::new();
        for node in frontier {
            let Some(adjacent) = neighbors.get(&node) else {
                continue;
            };
            for n in adjacent {
                if visited.insert(n.clone()) {
                    next.push(n.clone());
                }
            }
        }
        frontier = next;
    }

    visited.retain(|node| !seeds.contains(node));
    visited
}

impl<N: NodeId> DependencyGraph<N> {
    /// Every node `node` depends on, directly or transitively.
    pub fn transitive_dependencies(&self, node: &N) -> IndexSet<N> {
        trace!(node = ?node, "transitive dependencies");
        bfs(&self.dependencies, &IndexSet::from([node.clone()]))
    }

    /// Every node any of `nodes` depends on, excluding `nodes` themselves.
    pub fn transitive_dependencies_set(&self, nodes: &IndexSet<N>) -> IndexSet<N> {
        trace!(seeds = nodes.len(), "transitive dependencies of set");
        bfs(&self.dependencies, nodes)
    }

    /// Every node that depends on `node`, directly or transitively.
    pub fn transitive_dependents(&self, node: &N) -> IndexSet<N> {
        trace!(node = ?node, "transitive dependents");
        bfs(&self.dependents, &IndexSet::from([node.clone()]))
    }

    /// Every node that depends on any of `nodes`, excluding `nodes`
    /// themselves.
    pub fn transitive_dependents_set(&self, nodes: &IndexSet<N>) -> IndexSet<N> {
        trace!(seeds = nodes.len(), "transitive dependents of set");
        bfs(&self.dependents, nodes)
    }

    /// True if `x` depends on `y`, directly or transitively.
    pub fn depends_on(&self, x: &N, y: &N) -> bool {
        self.dependency_path(x, y).is_some()
    }

    /// Shortest chain of dependencies leading from `from` to `to`, both
    /// ends included.
    pub(crate) fn dependency_path(&self, from: &N, to: &N) -> Option<Vec<N>> {
        if from == to {
            return None;
        }

        // Each reached node maps to the node it was reached from.
        let mut parents: IndexMap<&N, Option<&N>> = IndexMap::new();
        parents.insert(from, None);
        let mut frontier: SmallVec<[&N; 8]> = SmallVec::from_elem(from, 1);

        while !frontier.is_empty() {
            let mut next = SmallVec::new();
            for node in frontier {
                for dep in self.immediate_dependencies(node) {
                    if parents.contains_key(dep) {
                        continue;
                    }
                    parents.insert(dep, Some(node));
                    if dep == to {
                        return Some(unwind(&parents, dep));
                    }
                    next.push(dep);
                }
            }
            frontier = next;
        }

        None
    }
}

fn unwind<'a, N: NodeId>(parents: &IndexMap<&'a N, Option<&'a N>>, end: &'a N) -> Vec<N> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(&Some(parent)) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
