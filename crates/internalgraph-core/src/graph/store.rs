//! Append-only graph container with membership and id indexes.
//!
//! Nodes and edges are kept in insertion order. Two indexes sit beside the
//! sequences:
//!
//! - `node_index`: node id -> position. Its key set is the membership index
//!   and always equals the set of ids in `nodes`.
//! - `edge_index`: edge id -> position of the first edge carrying that id
//!   (edges are not deduplicated).

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;

use super::element::{ElementId, GraphElement};
use super::types::{Edge, Node};
use crate::value::PropertyValue;

/// Anything that identifies a graph element: a raw id or an element.
pub trait ElementKey {
    /// Returns the id to look up.
    fn element_id(&self) -> ElementId;
}

impl ElementKey for ElementId {
    fn element_id(&self) -> ElementId {
        *self
    }
}

impl ElementKey for Node {
    fn element_id(&self) -> ElementId {
        self.id()
    }
}

impl ElementKey for Edge {
    fn element_id(&self) -> ElementId {
        self.id()
    }
}

impl<K: ElementKey + ?Sized> ElementKey for &K {
    fn element_id(&self) -> ElementId {
        (**self).element_id()
    }
}

/// A borrowed node or edge returned by id lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    /// The id resolved to a node.
    Node(&'a Node),
    /// The id resolved to an edge.
    Edge(&'a Edge),
}

impl ElementRef<'_> {
    /// Returns the element id.
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Node(n) => n.id(),
            Self::Edge(e) => e.id(),
        }
    }

    /// Returns the node, if this is one.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            Self::Edge(_) => None,
        }
    }

    /// Returns the edge, if this is one.
    #[must_use]
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Edge(e) => Some(e),
            Self::Node(_) => None,
        }
    }
}

/// In-memory property graph.
///
/// Intended for small to medium graphs (hundreds of nodes, thousands of
/// edges). Edges may reference ids that are not nodes of this graph.
///
/// Not synchronized: wrap in a lock to share between threads.
///
/// # Example
///
/// ```rust
/// use internalgraph_core::graph::{Edge, Graph, GraphElement, Node};
///
/// let a = Node::new().with_property("name", "A");
/// let b = Node::new().with_property("name", "B");
/// let ab = Edge::new(a.id(), b.id()).with_property("name", "ab");
/// let (a_id, b_id) = (a.id(), b.id());
///
/// let mut graph = Graph::new();
/// graph.add_nodes([a, b]);
/// graph.add_edge(ab);
///
/// assert!(graph.node_exists(a_id));
/// assert_eq!(graph.neighbors(a_id).collect::<Vec<_>>(), vec![b_id]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<ElementId, usize>,
    edge_index: HashMap<ElementId, usize>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize, expected_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_nodes),
            edges: Vec::with_capacity(expected_edges),
            node_index: HashMap::with_capacity(expected_nodes),
            edge_index: HashMap::with_capacity(expected_edges),
        }
    }

    /// Builds a graph from pre-computed nodes and edges.
    ///
    /// Nodes go through [`Graph::add_nodes`], so repeated ids keep only the
    /// first occurrence.
    #[must_use]
    pub fn from_elements(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        graph.add_edges(edges);
        graph
    }

    // ── Insertion ──────────────────────────────────────────────────────

    /// Adds a node unless a node with the same id is already present.
    ///
    /// Returns the inserted node, or `None` when the id was already known.
    pub fn add_node(&mut self, node: Node) -> Option<&Node> {
        let pos = self.insert_node(node)?;
        self.nodes.get(pos)
    }

    /// Adds every node whose id is not yet present.
    ///
    /// Returns exactly the nodes that were inserted, in input order.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) -> Vec<&Node> {
        let inserted: Vec<usize> = nodes
            .into_iter()
            .filter_map(|node| self.insert_node(node))
            .collect();
        inserted.iter().filter_map(|&pos| self.nodes.get(pos)).collect()
    }

    fn insert_node(&mut self, node: Node) -> Option<usize> {
        let id = node.id();
        if self.node_index.contains_key(&id) {
            tracing::debug!(node = %id, "node already present, skipping");
            return None;
        }
        let pos = self.nodes.len();
        self.nodes.push(node);
        self.node_index.insert(id, pos);
        Some(pos)
    }

    /// Appends an edge. Duplicates, self-loops and dangling endpoints are
    /// all accepted.
    pub fn add_edge(&mut self, edge: Edge) {
        let pos = self.edges.len();
        self.edge_index.entry(edge.id()).or_insert(pos);
        if !self.node_exists(edge.from_id()) || !self.node_exists(edge.to_id()) {
            tracing::trace!(edge = %edge.id(), "edge endpoint is not a node of this graph");
        }
        self.edges.push(edge);
    }

    /// Appends every edge.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    // ── Access ─────────────────────────────────────────────────────────

    /// Returns true if a node with the given id is present. O(1).
    #[must_use]
    pub fn node_exists(&self, id: ElementId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Returns all nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true when the graph has neither nodes nor edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Gets a node by id.
    #[must_use]
    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.node_index.get(&id).and_then(|&pos| self.nodes.get(pos))
    }

    /// Gets a mutable node by id, e.g. to update its properties.
    pub fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let pos = *self.node_index.get(&id)?;
        self.nodes.get_mut(pos)
    }

    /// Gets the first edge with the given id.
    #[must_use]
    pub fn edge(&self, id: ElementId) -> Option<&Edge> {
        self.edge_index.get(&id).and_then(|&pos| self.edges.get(pos))
    }

    /// Gets the first edge with the given id for mutation.
    pub fn edge_mut(&mut self, id: ElementId) -> Option<&mut Edge> {
        let pos = *self.edge_index.get(&id)?;
        self.edges.get_mut(pos)
    }

    /// Resolves an id (or the id of an element) to a node or edge.
    ///
    /// Nodes win over edges when both carry the same id.
    #[must_use]
    pub fn get<K: ElementKey>(&self, key: K) -> Option<ElementRef<'_>> {
        let id = key.element_id();
        self.node(id)
            .map(ElementRef::Node)
            .or_else(|| self.edge(id).map(ElementRef::Edge))
    }

    // ── Neighborhood queries ───────────────────────────────────────────

    /// Ids adjacent to `id`, in either direction.
    ///
    /// Scans every edge once: yields `to_id` when the edge leaves `id` and
    /// `from_id` when it enters `id`. A self-loop on `id` therefore yields
    /// `id` twice.
    pub fn neighbors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.edges.iter().flat_map(move |e| {
            let downstream = (e.from_id() == id).then(|| e.to_id());
            let upstream = (e.to_id() == id).then(|| e.from_id());
            downstream.into_iter().chain(upstream)
        })
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing_edges(&self, id: ElementId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.from_id() == id)
    }

    /// Edges entering `id`, in insertion order.
    pub fn incoming_edges(&self, id: ElementId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.to_id() == id)
    }

    /// Edges whose endpoints both lie in `ids` (the induced subgraph).
    pub fn induced_edges<'a>(
        &'a self,
        ids: &'a HashSet<ElementId>,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges
            .iter()
            .filter(move |e| ids.contains(&e.from_id()) && ids.contains(&e.to_id()))
    }

    // ── Property enumeration ───────────────────────────────────────────

    /// Union of the property names of every node, `id` included.
    #[must_use]
    pub fn all_node_property_names(&self) -> IndexSet<String> {
        property_names(&self.nodes)
    }

    /// Union of the property names of every edge, `id`, `start` and `end`
    /// included.
    #[must_use]
    pub fn all_edge_property_names(&self) -> IndexSet<String> {
        property_names(&self.edges)
    }

    /// Distinct values stored under `key` across all nodes.
    #[must_use]
    pub fn all_node_property_values(&self, key: &str) -> Vec<PropertyValue> {
        property_values(&self.nodes, key)
    }

    /// Distinct values stored under `key` across all edges.
    #[must_use]
    pub fn all_edge_property_values(&self, key: &str) -> Vec<PropertyValue> {
        property_values(&self.edges, key)
    }
}

fn property_names<E: GraphElement>(elements: &[E]) -> IndexSet<String> {
    elements
        .iter()
        .flat_map(|e| e.to_dict().into_keys())
        .collect()
}

// Values are not hashable (floats), so dedup is a linear scan.
fn property_values<E: GraphElement>(elements: &[E], key: &str) -> Vec<PropertyValue> {
    let mut values: Vec<PropertyValue> = Vec::new();
    for value in elements.iter().filter_map(|e| e.to_dict().shift_remove(key)) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
