//! Graph Nodes
//!
//! This module defines what can be used as a node in the dependency graph.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for node identifiers.
///
/// The graph never looks inside a node. It only needs to hash it, compare
/// it for equality, clone it into its adjacency sets, and print it in
/// errors and log events. Strings, integers and small `Copy` handles all
/// qualify through the blanket implementation.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}
