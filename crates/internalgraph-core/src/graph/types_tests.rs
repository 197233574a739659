//! Tests for graph types (Node, Edge).

use super::element::GraphElement;
use super::types::{Edge, Node};
use crate::value::{properties, PropertyValue};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_node_new_generates_id() {
    let a = Node::new();
    let b = Node::new();
    assert_ne!(a.id(), b.id());
    assert!(a.properties().is_empty());
}

#[test]
fn test_node_with_id() {
    let id = Uuid::new_v4();
    let node = Node::with_id(id);
    assert_eq!(node.id(), id);
    assert_eq!(
        format!("{node:?}"),
        format!("<Node ID {id} (no \"label\" property)>")
    );
}

#[test]
fn test_node_with_properties() {
    let node = Node::new().with_properties(properties([
        ("label", "pumpernickle"),
        ("label with spaces", "Pumper Nickle"),
        ("unicode label", "Pōmper Nickle"),
    ]));
    assert_eq!(
        node.get_property("label").unwrap().as_str(),
        Some("pumpernickle")
    );
    assert_eq!(
        node.get_property("label with spaces").unwrap().as_str(),
        Some("Pumper Nickle")
    );
    assert_eq!(
        node.get_property("unicode label").unwrap().as_str(),
        Some("Pōmper Nickle")
    );
    assert_eq!(
        format!("{node:?}"),
        format!("<Node \"pumpernickle\" ID {}>", node.id())
    );
}

#[test]
fn test_node_set_property_upserts() {
    let mut node = Node::new();
    node.set_property("name", "Bob");
    node.set_property("name", json!("Robert"));
    assert_eq!(node.properties().len(), 1);
    assert_eq!(node.get_property("name").unwrap().as_str(), Some("Robert"));
}

#[test]
fn test_node_blank_label_reads_as_missing() {
    let node = Node::new().with_property("label", "");
    assert_eq!(
        format!("{node:?}"),
        format!("<Node ID {} (no \"label\" property)>", node.id())
    );
}

#[test]
fn test_falsy_labels_read_as_missing() {
    for label in [
        PropertyValue::from(0),
        PropertyValue::from(0.0),
        PropertyValue::from(false),
        PropertyValue::List(Vec::new()),
        PropertyValue::from(properties(Vec::<(&str, PropertyValue)>::new())),
    ] {
        let node = Node::new().with_property("label", label);
        assert_eq!(
            format!("{node:?}"),
            format!("<Node ID {} (no \"label\" property)>", node.id())
        );
    }
    let node = Node::new().with_property("label", 7);
    assert_eq!(format!("{node:?}"), format!("<Node \"7\" ID {}>", node.id()));
}

#[test]
fn test_edge_new() {
    let (from, to) = (Uuid::new_v4(), Uuid::new_v4());
    let edge = Edge::new(from, to);
    assert_eq!(edge.from_id(), from);
    assert_eq!(edge.to_id(), to);
    assert!(edge.properties().is_empty());
    assert!(!edge.is_self_loop());
}

#[test]
fn test_edge_with_id_debug_repr() {
    let id = Uuid::new_v4();
    let edge = Edge::with_id(id, Uuid::new_v4(), Uuid::new_v4());
    assert_eq!(edge.id(), id);
    assert_eq!(
        format!("{edge:?}"),
        format!("<Edge ID {id} (no \"label\" property)>")
    );
}

#[test]
fn test_edge_with_properties() {
    let edge = Edge::new(Uuid::new_v4(), Uuid::new_v4())
        .with_properties(properties([("one", "a"), ("two", "b"), ("label", "MyEdge")]));
    assert_eq!(edge.get_property("one").unwrap().as_str(), Some("a"));
    assert_eq!(edge.get_property("two").unwrap().as_str(), Some("b"));
    assert_eq!(
        format!("{edge:?}"),
        format!("<Edge \"MyEdge\" ID {}>", edge.id())
    );
}

#[test]
fn test_edge_dict_adds_endpoints() {
    let (from, to) = (Uuid::new_v4(), Uuid::new_v4());
    let edge = Edge::new(from, to).with_property("name", "ab");
    let dict = edge.to_dict();
    assert_eq!(
        dict.keys().map(String::as_str).collect::<Vec<_>>(),
        ["name", "id", "start", "end"]
    );
    assert_eq!(dict.get("start"), Some(&PropertyValue::Uuid(from)));
    assert_eq!(dict.get("end"), Some(&PropertyValue::Uuid(to)));
}

#[test]
fn test_self_loop() {
    let id = Uuid::new_v4();
    assert!(Edge::new(id, id).is_self_loop());
}
