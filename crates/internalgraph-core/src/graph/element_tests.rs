//! Tests for the shared element behavior (properties, split, serialize).

use super::element::{split_properties, GraphElement, SHORT_DETAILS_KEY};
use super::types::{Edge, Node};
use crate::error::Error;
use crate::value::{properties, Properties, PropertyValue};
use serde_json::json;
use uuid::Uuid;

fn keys(map: &Properties) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[test]
fn test_get_property_id_is_synthesized() {
    let node = Node::new().with_property("name", "A");
    assert_eq!(
        node.get_property("id").unwrap().into_owned(),
        PropertyValue::Uuid(node.id())
    );
    assert!(!node.properties().contains_key("id"));
}

#[test]
fn test_get_property_missing_fails() {
    let node = Node::new();
    let err = node.get_property("missing").unwrap_err();
    assert!(matches!(err, Error::PropertyNotFound(ref key) if key == "missing"));
}

#[test]
fn test_get_property_or_none_allows_missing() {
    let node = Node::new().with_property("name", "A");
    assert!(node.get_property_or_none("missing").is_none());
    assert_eq!(
        node.get_property_or_none("name").unwrap().as_str(),
        Some("A")
    );
}

#[test]
fn test_id_never_enters_property_bag() {
    let id = Uuid::new_v4();
    let mut node = Node::with_id(id).with_properties(properties([("id", "bogus"), ("x", "1")]));
    assert_eq!(keys(node.properties()), ["x"]);

    node.set_property("id", "also bogus");
    assert_eq!(keys(node.properties()), ["x"]);
    assert_eq!(node.id(), id);
}

#[test]
fn test_property_names_include_id_last() {
    let node = Node::new().with_properties(properties([("b", 1), ("a", 2)]));
    let names: Vec<_> = node.property_names().into_iter().collect();
    assert_eq!(names, ["b", "a", "id"]);
}

#[test]
fn test_property_names_of_empty_element() {
    let names: Vec<_> = Node::new().property_names().into_iter().collect();
    assert_eq!(names, ["id"]);
}

#[test]
fn test_split_properties() {
    let source: Properties = properties([
        ("a", PropertyValue::from(1)),
        ("b", PropertyValue::from(2)),
        ("c", PropertyValue::from(json!({"d": 3}))),
        ("e", PropertyValue::from(vec![4, 5, 6])),
    ]);
    let (left, right) = split_properties(&source, &["a", "e"]).unwrap();
    assert_eq!(
        left,
        properties([
            ("a", PropertyValue::from(1)),
            ("e", PropertyValue::from(vec![4, 5, 6])),
        ])
    );
    assert_eq!(
        right,
        properties([
            ("b", PropertyValue::from(2)),
            ("c", PropertyValue::from(json!({"d": 3}))),
        ])
    );
}

#[test]
fn test_split_properties_empty_keys_fails() {
    let source = properties([("a", 1)]);
    let err = split_properties(&source, &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_split_properties_unmatched_keys() {
    let source = properties([("a", 1)]);
    let (left, right) = split_properties(&source, &["zzz"]).unwrap();
    assert!(left.is_empty());
    assert_eq!(right, source);
}

#[test]
fn test_node_serialize_promotes_defaults() {
    let node = Node::new().with_properties(properties([
        ("name", "A"),
        ("label", "Thing:A"),
        ("type", "thing"),
        ("weight", "heavy"),
    ]));
    let serialized = node.serialize();
    assert_eq!(keys(&serialized), ["label", "type", "id", SHORT_DETAILS_KEY]);
    assert_eq!(serialized.get("id"), Some(&PropertyValue::Uuid(node.id())));
    assert_eq!(
        serialized.get(SHORT_DETAILS_KEY),
        Some(&PropertyValue::Record(properties([
            ("name", "A"),
            ("weight", "heavy")
        ])))
    );
}

#[test]
fn test_edge_serialize_without_details() {
    let (from, to) = (Uuid::new_v4(), Uuid::new_v4());
    let edge = Edge::new(from, to);
    let serialized = edge.serialize();
    assert_eq!(keys(&serialized), ["id", "start", "end", SHORT_DETAILS_KEY]);
    assert_eq!(serialized.get("start"), Some(&PropertyValue::Uuid(from)));
    assert_eq!(serialized.get("end"), Some(&PropertyValue::Uuid(to)));
    assert_eq!(
        serialized.get(SHORT_DETAILS_KEY),
        Some(&PropertyValue::Record(Properties::new()))
    );
}

#[test]
fn test_edge_serialize_with_details() {
    let edge = Edge::new(Uuid::new_v4(), Uuid::new_v4())
        .with_properties(properties([("one", "a"), ("two", "b"), ("label", "MyEdge")]));
    let serialized = edge.serialize();
    assert_eq!(
        serialized.get("label"),
        Some(&PropertyValue::from("MyEdge"))
    );
    assert_eq!(
        serialized.get(SHORT_DETAILS_KEY),
        Some(&PropertyValue::Record(properties([("one", "a"), ("two", "b")])))
    );
}

#[test]
fn test_serialize_with_custom_keys_keeps_id() {
    let node = Node::new().with_properties(properties([("name", "A"), ("label", "L")]));
    let serialized = node.serialize_with(&["name"]);
    assert_eq!(keys(&serialized), ["name", SHORT_DETAILS_KEY]);

    // id is always part of the dict, so it lands in short_details here.
    let Some(PropertyValue::Record(details)) = serialized.get(SHORT_DETAILS_KEY) else {
        panic!("short_details must be a record");
    };
    assert_eq!(keys(details), ["label", "id"]);
}

#[test]
fn test_serialize_with_empty_keys_uses_defaults() {
    let node = Node::new().with_property("label", "L");
    assert_eq!(node.serialize_with(&[]), node.serialize());
}
