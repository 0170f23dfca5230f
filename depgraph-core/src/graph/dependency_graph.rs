//! Dependency Graph Storage
//!
//! The graph keeps two adjacency maps that mirror each other:
//!
//! - `dependencies[n]`: the nodes `n` directly depends on
//! - `dependents[d]`: the nodes that directly depend on `d`
//!
//! Every mutation updates both maps, so `d ∈ dependencies[n]` holds exactly
//! when `n ∈ dependents[d]`. Sets are created lazily on first insertion and
//! a missing key reads as an empty set.
//!
//! Both maps are `IndexMap`s, so every query and the topological sort
//! iterate in insertion order and give the same answer on every run.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use super::error::{GraphError, GraphResult};
use super::node::NodeId;

/// Adjacency map from a node to its neighbors in one direction.
pub(crate) type Adjacency<N> = IndexMap<N, IndexSet<N>>;

/// A directed acyclic graph of "depends on" relations.
///
/// Nodes come into existence the first time they are mentioned by
/// [`depend`](Self::depend). Removing edges never drops a node.
/// [`remove_all`](Self::remove_all) always drops it, while
/// [`remove_node`](Self::remove_node) drops it only when nothing else
/// depends on it.
///
/// The graph has no internal locking. Mutations take `&mut self`; share it
/// between threads behind a lock of your choice.
///
/// # Example
///
/// ```
/// use depgraph_core::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.depend("app", "lib").unwrap();
/// graph.depend("lib", "core").unwrap();
///
/// assert!(graph.depends_on(&"app", &"core"));
/// assert!(graph.depend("core", "app").is_err());
/// assert_eq!(graph.topological_sort(), vec!["app", "lib", "core"]);
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph<N> {
    /// Outgoing edges: what each node depends on.
    pub(crate) dependencies: Adjacency<N>,

    /// Incoming edges: what depends on each node.
    pub(crate) dependents: Adjacency<N>,

    /// Returned by reference for nodes without an entry.
    empty: IndexSet<N>,
}

impl<N: NodeId> DependencyGraph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            dependencies: IndexMap::new(),
            dependents: IndexMap::new(),
            empty: IndexSet::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes in each map.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dependencies: IndexMap::with_capacity(capacity),
            dependents: IndexMap::with_capacity(capacity),
            empty: IndexSet::new(),
        }
    }

    /// Build a graph from `(node, dep)` pairs, stopping at the first
    /// rejected edge.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (node, dep) in edges {
            graph.depend(node, dep)?;
        }
        Ok(graph)
    }

    /// Record that `node` depends on `dep`.
    ///
    /// Fails without touching the graph if `node == dep` or if `dep`
    /// already depends on `node`, directly or transitively. Adding an edge
    /// that already exists succeeds and changes nothing.
    pub fn depend(&mut self, node: N, dep: N) -> GraphResult<(), N> {
        if node == dep {
            warn!(node = ?node, "rejected self-dependency");
            return Err(GraphError::self_dependency(node));
        }

        if let Some(path) = self.dependency_path(&dep, &node) {
            warn!(node = ?node, dep = ?dep, path = ?path, "rejected circular dependency");
            return Err(GraphError::cycle(node, dep, path));
        }

        self.dependencies
            .entry(node.clone())
            .or_default()
            .insert(dep.clone());
        self.dependents
            .entry(dep.clone())
            .or_default()
            .insert(node.clone());

        debug!(node = ?node, dep = ?dep, "added dependency");
        Ok(())
    }

    /// Record that `node` depends on each of `deps`, in order.
    ///
    /// Stops at the first rejected edge; edges added before it stay.
    pub fn depend_all<I>(&mut self, node: N, deps: I) -> GraphResult<(), N>
    where
        I: IntoIterator<Item = N>,
    {
        for dep in deps {
            self.depend(node.clone(), dep)?;
        }
        Ok(())
    }

    /// Remove the single edge from `node` to `dep`.
    ///
    /// Other edges of either node are kept, and both nodes stay in the
    /// graph even if this was their last edge.
    pub fn remove_edge(&mut self, node: &N, dep: &N) -> GraphResult<(), N> {
        let removed = self
            .dependencies
            .get_mut(node)
            .is_some_and(|deps| deps.shift_remove(dep));
        if !removed {
            return Err(GraphError::edge_not_found(node.clone(), dep.clone()));
        }

        if let Some(dependents) = self.dependents.get_mut(dep) {
            dependents.shift_remove(node);
        }

        debug!(node = ?node, dep = ?dep, "removed dependency");
        Ok(())
    }

    /// Remove every outgoing edge of `node`.
    ///
    /// Nodes that depend on `node` keep that dependency, so `node` stays
    /// in [`nodes`](Self::nodes) while anything still depends on it.
    pub fn remove_node(&mut self, node: &N) -> GraphResult<(), N> {
        let Some(deps) = self.dependencies.shift_remove(node) else {
            return Err(GraphError::node_not_found(node.clone()));
        };

        for dep in &deps {
            if let Some(dependents) = self.dependents.get_mut(dep) {
                dependents.shift_remove(node);
            }
        }

        debug!(node = ?node, removed = deps.len(), "removed outgoing dependencies");
        Ok(())
    }

    /// Remove `node` and every edge that mentions it.
    pub fn remove_all(&mut self, node: &N) -> GraphResult<(), N> {
        if !self.contains_node(node) {
            return Err(GraphError::unknown_node(node.clone()));
        }

        let deps = self.dependencies.shift_remove(node).unwrap_or_default();
        for dep in &deps {
            if let Some(dependents) = self.dependents.get_mut(dep) {
                dependents.shift_remove(node);
            }
        }

        let dependents = self.dependents.shift_remove(node).unwrap_or_default();
        for dependent in &dependents {
            if let Some(deps) = self.dependencies.get_mut(dependent) {
                deps.shift_remove(node);
            }
        }

        debug!(
            node = ?node,
            dependencies = deps.len(),
            dependents = dependents.len(),
            "removed node"
        );
        Ok(())
    }

    /// The nodes `node` directly depends on.
    pub fn immediate_dependencies(&self, node: &N) -> &IndexSet<N> {
        self.dependencies.get(node).unwrap_or(&self.empty)
    }

    /// The nodes that directly depend on `node`.
    pub fn immediate_dependents(&self, node: &N) -> &IndexSet<N> {
        self.dependents.get(node).unwrap_or(&self.empty)
    }

    /// Every node in the graph.
    pub fn nodes(&self) -> IndexSet<N> {
        self.dependencies
            .keys()
            .chain(self.dependents.keys())
            .cloned()
            .collect()
    }

    /// True if `node` appears anywhere in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.dependencies.contains_key(node) || self.dependents.contains_key(node)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        let dependents_only = self
            .dependents
            .keys()
            .filter(|node| !self.dependencies.contains_key(*node))
            .count();
        self.dependencies.len() + dependents_only
    }

    /// Number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(IndexSet::len).sum()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dependents.is_empty()
    }

    /// All `(node, dep)` edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.dependencies
            .iter()
            .flat_map(|(node, deps)| deps.iter().map(move |dep| (node, dep)))
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.dependencies.clear();
        self.dependents.clear();
    }
}

impl<N: NodeId> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
