//! Node and edge types for in-memory knowledge graph storage.

use std::fmt;

use uuid::Uuid;

use super::element::{
    fmt_element, sanitize, ElementId, GraphElement, EDGE_PROMOTED_KEYS, END_KEY, ID_KEY,
    START_KEY,
};
use crate::value::{Properties, PropertyValue};

/// A node in the knowledge graph.
///
/// Nodes carry nothing beyond an id and a property bag. Properties named
/// `label` and `type` are the conventional hooks for visualization labels and
/// iconography.
///
/// # Example
///
/// ```rust
/// use internalgraph_core::graph::{GraphElement, Node};
/// use serde_json::json;
///
/// let mut node = Node::new();
/// node.set_property("label", "Person:Alice");
/// node.set_property("age", json!(30));
///
/// assert_eq!(node.label(), Some("Person:Alice"));
/// assert_eq!(format!("{node:?}"), format!("<Node \"Person:Alice\" ID {}>", node.id()));
/// ```
#[derive(Clone, PartialEq)]
pub struct Node {
    id: ElementId,
    properties: Properties,
}

impl Node {
    /// Creates a node with a fresh random id and no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a node with the given id and no properties.
    #[must_use]
    pub fn with_id(id: ElementId) -> Self {
        Self {
            id,
            properties: Properties::new(),
        }
    }

    /// Replaces the property bag (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = sanitize(properties, self.id);
        self
    }

    /// Sets a single property (builder pattern).
    #[must_use]
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphElement for Node {
    fn kind(&self) -> &'static str {
        "Node"
    }

    fn id(&self) -> ElementId {
        self.id
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_element(self, f)
    }
}

/// A directed edge between two nodes, referenced by id.
///
/// Endpoints are weak references: nothing checks that `from_id` or `to_id`
/// name a node of any graph.
///
/// # Example
///
/// ```rust
/// use internalgraph_core::graph::{Edge, GraphElement, Node};
///
/// let a = Node::new();
/// let b = Node::new();
/// let edge = Edge::new(a.id(), b.id()).with_property("label", "KNOWS");
///
/// assert_eq!(edge.from_id(), a.id());
/// assert_eq!(edge.to_id(), b.id());
/// assert!(edge.to_dict().contains_key("start"));
/// ```
#[derive(Clone, PartialEq)]
pub struct Edge {
    id: ElementId,
    from_id: ElementId,
    to_id: ElementId,
    properties: Properties,
}

impl Edge {
    /// Creates an edge `from_id -> to_id` with a fresh random id.
    #[must_use]
    pub fn new(from_id: ElementId, to_id: ElementId) -> Self {
        Self::with_id(Uuid::new_v4(), from_id, to_id)
    }

    /// Creates an edge with the given id.
    #[must_use]
    pub fn with_id(id: ElementId, from_id: ElementId, to_id: ElementId) -> Self {
        Self {
            id,
            from_id,
            to_id,
            properties: Properties::new(),
        }
    }

    /// Replaces the property bag (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = sanitize(properties, self.id);
        self
    }

    /// Sets a single property (builder pattern).
    #[must_use]
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Returns the tail endpoint id.
    #[must_use]
    pub fn from_id(&self) -> ElementId {
        self.from_id
    }

    /// Returns the head endpoint id.
    #[must_use]
    pub fn to_id(&self) -> ElementId {
        self.to_id
    }

    /// Returns true when both endpoints are the same id.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from_id == self.to_id
    }
}

impl GraphElement for Edge {
    fn kind(&self) -> &'static str {
        "Edge"
    }

    fn id(&self) -> ElementId {
        self.id
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn promoted_keys(&self) -> &'static [&'static str] {
        EDGE_PROMOTED_KEYS
    }

    fn to_dict(&self) -> Properties {
        let mut dict = self.properties.clone();
        dict.insert(ID_KEY.to_string(), PropertyValue::Uuid(self.id));
        dict.insert(START_KEY.to_string(), PropertyValue::Uuid(self.from_id));
        dict.insert(END_KEY.to_string(), PropertyValue::Uuid(self.to_id));
        dict
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_element(self, f)
    }
}
