//! Gated descendant discovery.
//!
//! Expansion follows outgoing edges only, and only continues through nodes
//! accepted by a gate predicate. A visited set makes the walk terminate on
//! cyclic graphs and guarantees every node is reported once.

use std::collections::{HashSet, VecDeque};

use super::element::{ElementId, GraphElement};
use super::store::Graph;
use super::types::Node;

/// Separator whose presence in a `label` marks a node as expandable.
pub const LABEL_SEPARATOR: char = ':';

/// Returns true when the node's `label` is a string containing
/// [`LABEL_SEPARATOR`].
#[must_use]
pub fn has_colon_label(node: &Node) -> bool {
    node.label().is_some_and(|label| label.contains(LABEL_SEPARATOR))
}

impl Graph {
    /// Nodes reachable from `start` through colon-labeled intermediates.
    ///
    /// Every direct successor of `start` is reported; successors of a
    /// reported node are added only when that node's label contains `':'`.
    /// Results come in breadth-first discovery order, each node once.
    /// `start` itself is reported only if some path leads back to it.
    ///
    /// Returns `None` when `start` has no outgoing edges.
    ///
    /// # Example
    ///
    /// ```rust
    /// use internalgraph_core::graph::{Edge, Graph, GraphElement, Node};
    ///
    /// let root = Node::new().with_property("label", "root");
    /// let ns = Node::new().with_property("label", "pkg:module");
    /// let leaf = Node::new().with_property("label", "leaf");
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(Edge::new(root.id(), ns.id()));
    /// graph.add_edge(Edge::new(ns.id(), leaf.id()));
    /// graph.add_nodes([root.clone(), ns, leaf]);
    ///
    /// let found = graph.descendants_via_colon_labels(root.id()).unwrap();
    /// assert_eq!(found.len(), 2);
    /// ```
    #[must_use]
    pub fn descendants_via_colon_labels(&self, start: ElementId) -> Option<Vec<&Node>> {
        self.descendants_where(start, has_colon_label)
    }

    /// Generalized form of [`Graph::descendants_via_colon_labels`] with an
    /// arbitrary expansion gate.
    ///
    /// Edges whose head is not a node of this graph are skipped.
    #[must_use]
    pub fn descendants_where<F>(&self, start: ElementId, gate: F) -> Option<Vec<&Node>>
    where
        F: Fn(&Node) -> bool,
    {
        if self.outgoing_edges(start).next().is_none() {
            return None;
        }

        let mut found: Vec<&Node> = Vec::new();
        let mut seen: HashSet<ElementId> = HashSet::new();
        let mut expanded: HashSet<ElementId> = HashSet::new();
        let mut queue: VecDeque<ElementId> = VecDeque::new();

        expanded.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for edge in self.outgoing_edges(current) {
                let Some(target) = self.node(edge.to_id()) else {
                    tracing::trace!(edge = %edge.id(), "skipping edge to unknown node");
                    continue;
                };
                if seen.insert(target.id()) {
                    found.push(target);
                }
                if gate(target) && expanded.insert(target.id()) {
                    tracing::trace!(node = %target.id(), "expanding");
                    queue.push_back(target.id());
                }
            }
        }

        Some(found)
    }
}
