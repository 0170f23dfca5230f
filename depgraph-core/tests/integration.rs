//! Integration Tests for the Dependency Graph
//!
//! These tests exercise the public API against a few fixed graphs.

use indexmap::IndexSet;

use depgraph_core::{DependencyGraph, GraphError};

type Graph = DependencyGraph<&'static str>;

fn set<const K: usize>(items: [&'static str; K]) -> IndexSet<&'static str> {
    IndexSet::from(items)
}

//         a
//        /|
//       b |
//        \|
//         c
//         |
//         d
fn chain() -> Graph {
    let mut graph = Graph::new();
    graph.depend("b", "a").unwrap();
    graph.depend("c", "b").unwrap();
    graph.depend("c", "a").unwrap();
    graph.depend("d", "c").unwrap();
    graph
}

//       one     five
//        |       |
//       two      |
//       / \      |
//  three   four--
//    |      |
//   six     |
//     \    /
//      seven
fn diamond() -> Graph {
    let mut graph = Graph::new();
    graph.depend("two", "one").unwrap();
    graph.depend("three", "two").unwrap();
    graph.depend("four", "two").unwrap();
    graph.depend("four", "five").unwrap();
    graph.depend("six", "three").unwrap();
    graph.depend("seven", "six").unwrap();
    graph.depend("seven", "four").unwrap();
    graph
}

/// Levels alternate between a single node and a fan of four, up to
/// `level18`. Each fan member depends on the single node above it and the
/// next single node depends on the whole fan.
fn deep() -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();
    for level in (1..18).step_by(2) {
        let top = format!("level{}", level - 1);
        let bottom = format!("level{}", level + 1);
        for suffix in ["a", "b", "c", "d"] {
            let fan = format!("level{level}{suffix}");
            graph.depend(fan.clone(), top.clone()).unwrap();
            graph.depend(bottom.clone(), fan).unwrap();
        }
    }
    graph
}

fn assert_symmetric<N: depgraph_core::NodeId>(graph: &DependencyGraph<N>) {
    for node in graph.nodes() {
        for dep in graph.immediate_dependencies(&node) {
            assert!(graph.immediate_dependents(dep).contains(&node));
        }
        for dependent in graph.immediate_dependents(&node) {
            assert!(graph.immediate_dependencies(dependent).contains(&node));
        }
    }
}

#[test]
fn transitive_dependencies() {
    assert_eq!(chain().transitive_dependencies(&"d"), set(["a", "b", "c"]));
    assert_eq!(
        diamond().transitive_dependencies(&"seven"),
        set(["four", "three", "two", "five", "one", "six"])
    );
}

#[test]
fn transitive_dependencies_deep() {
    let graph = deep();
    let actual = graph.transitive_dependencies(&"level18".to_string());

    let mut expected = IndexSet::new();
    for level in 0..18 {
        if level % 2 == 0 {
            expected.insert(format!("level{level}"));
        } else {
            for suffix in ["a", "b", "c", "d"] {
                expected.insert(format!("level{level}{suffix}"));
            }
        }
    }

    assert_eq!(actual.len(), 45);
    assert_eq!(actual, expected);
}

#[test]
fn transitive_dependencies_set() {
    let cases = [
        (set(["six", "four"]), set(["one", "two", "three", "five"])),
        (set(["two", "four"]), set(["one", "five"])),
        (set(["three", "six"]), set(["two", "one"])),
    ];
    for (seeds, expected) in cases {
        assert_eq!(diamond().transitive_dependencies_set(&seeds), expected);
    }
}

#[test]
fn transitive_dependents() {
    assert_eq!(diamond().transitive_dependents(&"three"), set(["six", "seven"]));
    assert_eq!(diamond().transitive_dependents(&"five"), set(["four", "seven"]));
}

#[test]
fn transitive_dependents_set() {
    let cases = [
        (set(["four", "three"]), set(["six", "seven"])),
        (set(["four", "six"]), set(["seven"])),
    ];
    for (seeds, expected) in cases {
        assert_eq!(diamond().transitive_dependents_set(&seeds), expected);
    }
}

#[test]
fn immediate_queries() {
    let graph = diamond();
    assert_eq!(graph.immediate_dependencies(&"four"), &set(["two", "five"]));
    assert_eq!(graph.immediate_dependents(&"four"), &set(["seven"]));
    assert!(graph.immediate_dependencies(&"one").is_empty());
    assert!(graph.immediate_dependents(&"seven").is_empty());
}

#[test]
fn nodes_include_every_mentioned_identifier() {
    assert_eq!(
        diamond().nodes(),
        set(["one", "two", "three", "four", "six", "seven", "five"])
    );
    assert_eq!(diamond().node_count(), 7);
}

#[test]
fn closure_never_contains_start() {
    let graph = diamond();
    for node in graph.nodes() {
        assert!(!graph.transitive_dependencies(&node).contains(&node));
        assert!(!graph.transitive_dependents(&node).contains(&node));
    }
}

#[test]
fn cycle_leaves_graph_unchanged() {
    let mut graph = diamond();
    let before: Vec<_> = graph.edges().map(|(n, d)| (*n, *d)).collect();

    let err = graph.depend("one", "seven").unwrap_err();
    match &err {
        GraphError::CycleDetected { node, dep, path } => {
            assert_eq!(*node, "one");
            assert_eq!(*dep, "seven");
            assert_eq!(path.first(), Some(&"seven"));
            assert_eq!(path.last(), Some(&"one"));
        }
        other => panic!("expected a cycle error, got {other:?}"),
    }
    assert!(!err.to_string().is_empty());

    let after: Vec<_> = graph.edges().map(|(n, d)| (*n, *d)).collect();
    assert_eq!(before, after);
    assert_symmetric(&graph);
}

#[test]
fn remove_edge_succeeds() {
    let mut graph = diamond();
    graph.remove_edge(&"four", &"two").unwrap();

    assert_eq!(graph.immediate_dependencies(&"four"), &set(["five"]));
    assert_eq!(graph.immediate_dependents(&"two"), &set(["three"]));
    assert!(!graph.depends_on(&"four", &"one"));
    assert_symmetric(&graph);
}

#[test]
fn remove_edge_fails() {
    let mut graph = diamond();
    let nodes = graph.nodes();

    let err = graph.remove_edge(&"unknown", &"unknown2").unwrap_err();
    assert!(!err.to_string().is_empty());

    // Both nodes exist but the edge does not.
    let err = graph.remove_edge(&"three", &"four").unwrap_err();
    assert_eq!(err, GraphError::edge_not_found("three", "four"));
    assert_eq!(graph.nodes(), nodes);
}

#[test]
fn remove_node_succeeds() {
    let mut graph = diamond();
    graph.remove_node(&"three").unwrap();

    assert_eq!(
        graph.nodes(),
        set(["three", "five", "one", "seven", "two", "four", "six"])
    );
    assert!(graph.immediate_dependencies(&"three").is_empty());
    assert_eq!(graph.immediate_dependents(&"three"), &set(["six"]));
    assert_symmetric(&graph);
}

#[test]
fn remove_node_fails() {
    let mut graph = diamond();
    let err = graph.remove_node(&"unknown").unwrap_err();
    assert!(!err.to_string().is_empty());
    assert_eq!(graph.node_count(), 7);
}

#[test]
fn remove_all_succeeds() {
    let mut graph = diamond();
    graph.remove_all(&"three").unwrap();

    assert_eq!(
        graph.nodes(),
        set(["five", "one", "seven", "two", "four", "six"])
    );
    assert_eq!(graph.immediate_dependents(&"two"), &set(["four"]));
    assert!(graph.immediate_dependencies(&"six").is_empty());
    assert_symmetric(&graph);
}

#[test]
fn remove_all_fails() {
    let mut graph = diamond();
    let err = graph.remove_all(&"unknown").unwrap_err();
    assert_eq!(err, GraphError::unknown_node("unknown"));
    assert!(!err.to_string().is_empty());
    assert_eq!(graph.node_count(), 7);
}

#[test]
fn topological_sort() {
    let graph = diamond();
    let order = graph.topological_sort();

    assert_eq!(
        order,
        vec!["seven", "four", "five", "six", "three", "two", "one"]
    );
    for (node, dep) in graph.edges() {
        let node_pos = order.iter().position(|n| n == node).unwrap();
        let dep_pos = order.iter().position(|n| n == dep).unwrap();
        assert!(node_pos < dep_pos);
    }
}

#[test]
fn topological_sort_deep() {
    let graph = deep();
    let order = graph.topological_sort();

    assert_eq!(order.len(), graph.node_count());
    assert_eq!(order.first().map(String::as_str), Some("level18"));
    assert_eq!(order.last().map(String::as_str), Some("level0"));
}

#[test]
fn topological_comparator() {
    let comparator = diamond().topological_comparator(["two", "five", "three"]);
    assert_eq!(comparator.values(), vec!["five", "three", "two"]);

    let mut nodes = vec!["two", "five", "three"];
    comparator.sort(&mut nodes);
    assert_eq!(nodes, vec!["five", "three", "two"]);
}

#[test]
fn integer_nodes() {
    let mut graph = DependencyGraph::new();
    graph.depend(3u32, 2).unwrap();
    graph.depend(2, 1).unwrap();

    assert_eq!(graph.transitive_dependencies(&3), IndexSet::from([2, 1]));
    assert!(matches!(
        graph.depend(1, 3),
        Err(GraphError::CycleDetected { .. })
    ));
    assert!(matches!(
        graph.depend(2, 2),
        Err(GraphError::SelfDependency { node: 2 })
    ));
}
