//! Tests for gated descendant discovery.

use std::collections::HashSet;

use super::element::{ElementId, GraphElement};
use super::store::Graph;
use super::traversal::has_colon_label;
use super::types::{Edge, Node};
use uuid::Uuid;

fn labeled(label: &str) -> Node {
    Node::new().with_property("label", label)
}

fn ids(nodes: &[&Node]) -> Vec<ElementId> {
    nodes.iter().map(|n| n.id()).collect()
}

/// root -> pkg:a -> leaf1, root -> plain -> hidden, pkg:a -> ns:b -> leaf2
fn build_tree() -> (Graph, Vec<Node>) {
    let nodes = vec![
        labeled("root"),
        labeled("pkg:a"),
        labeled("plain"),
        labeled("leaf1"),
        labeled("hidden"),
        labeled("ns:b"),
        labeled("leaf2"),
    ];
    let edge = |from: usize, to: usize| Edge::new(nodes[from].id(), nodes[to].id());
    let edges = vec![edge(0, 1), edge(0, 2), edge(1, 3), edge(2, 4), edge(1, 5), edge(5, 6)];
    (Graph::from_elements(nodes.clone(), edges), nodes)
}

#[test]
fn test_has_colon_label() {
    assert!(has_colon_label(&labeled("Person:Alice")));
    assert!(!has_colon_label(&labeled("Alice")));
    assert!(!has_colon_label(&Node::new()));
    assert!(!has_colon_label(&Node::new().with_property("label", 42)));
}

#[test]
fn test_descendants_none_without_outgoing_edges() {
    let (graph, nodes) = build_tree();
    assert!(graph.descendants_via_colon_labels(nodes[3].id()).is_none());
    assert!(graph.descendants_via_colon_labels(Uuid::new_v4()).is_none());
}

#[test]
fn test_descendants_follow_colon_labels_only() {
    let (graph, nodes) = build_tree();
    let found = graph.descendants_via_colon_labels(nodes[0].id()).unwrap();

    // Direct children always, then the closure through "pkg:a" and "ns:b".
    let expected: Vec<ElementId> = [1, 2, 3, 5, 6].iter().map(|&i| nodes[i].id()).collect();
    assert_eq!(ids(&found), expected);
    assert!(!ids(&found).contains(&nodes[4].id()));
}

#[test]
fn test_descendants_from_colon_node() {
    let (graph, nodes) = build_tree();
    let found = graph.descendants_via_colon_labels(nodes[1].id()).unwrap();
    let expected: Vec<ElementId> = [3, 5, 6].iter().map(|&i| nodes[i].id()).collect();
    assert_eq!(ids(&found), expected);
}

#[test]
fn test_descendants_terminate_on_cycle() {
    // a:1 -> b:2 -> c:3 -> a:1
    let a = labeled("a:1");
    let b = labeled("b:2");
    let c = labeled("c:3");
    let edges = vec![
        Edge::new(a.id(), b.id()),
        Edge::new(b.id(), c.id()),
        Edge::new(c.id(), a.id()),
    ];
    let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
    let graph = Graph::from_elements([a, b, c], edges);

    let found = graph.descendants_via_colon_labels(a_id).unwrap();
    assert_eq!(ids(&found), vec![b_id, c_id, a_id]);
}

#[test]
fn test_descendants_self_loop() {
    let a = labeled("loop:1");
    let a_id = a.id();
    let graph = Graph::from_elements([a], [Edge::new(a_id, a_id)]);

    let found = graph.descendants_via_colon_labels(a_id).unwrap();
    assert_eq!(ids(&found), vec![a_id]);
}

#[test]
fn test_descendants_reported_once_in_diamond() {
    // top -> x:l, top -> y:r, x:l -> bottom, y:r -> bottom, top -> bottom
    let top = labeled("top");
    let left = labeled("x:l");
    let right = labeled("y:r");
    let bottom = labeled("bottom");
    let edges = vec![
        Edge::new(top.id(), left.id()),
        Edge::new(top.id(), right.id()),
        Edge::new(left.id(), bottom.id()),
        Edge::new(right.id(), bottom.id()),
        Edge::new(top.id(), bottom.id()),
    ];
    let top_id = top.id();
    let graph = Graph::from_elements([top, left, right, bottom], edges);

    let found = graph.descendants_via_colon_labels(top_id).unwrap();
    let unique: HashSet<ElementId> = ids(&found).into_iter().collect();
    assert_eq!(found.len(), 3);
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_descendants_skip_dangling_edges() {
    let a = labeled("a");
    let b = labeled("b");
    let edges = vec![Edge::new(a.id(), Uuid::new_v4()), Edge::new(a.id(), b.id())];
    let (a_id, b_id) = (a.id(), b.id());
    let graph = Graph::from_elements([a, b], edges);

    let found = graph.descendants_via_colon_labels(a_id).unwrap();
    assert_eq!(ids(&found), vec![b_id]);
}

#[test]
fn test_descendants_where_custom_gate() {
    let (graph, nodes) = build_tree();
    // Expanding everything yields the full reachable set.
    let found = graph.descendants_where(nodes[0].id(), |_| true).unwrap();
    assert_eq!(found.len(), 6);

    // Expanding nothing yields only direct children.
    let found = graph.descendants_where(nodes[0].id(), |_| false).unwrap();
    assert_eq!(ids(&found), vec![nodes[1].id(), nodes[2].id()]);
}
