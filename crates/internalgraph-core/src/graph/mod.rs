//! In-memory property graph.
//!
//! Provides node/edge types sharing one identity + property-bag abstraction,
//! an append-only [`Graph`] container, neighborhood queries and gated
//! descendant discovery.
//!
//! # Example
//!
//! ```rust
//! use internalgraph_core::graph::{Edge, Graph, GraphElement, Node};
//! use std::collections::HashSet;
//!
//! let a = Node::new().with_property("label", "A");
//! let b = Node::new().with_property("label", "B");
//! let (a_id, b_id) = (a.id(), b.id());
//!
//! let mut graph = Graph::new();
//! assert_eq!(graph.add_nodes([a, b]).len(), 2);
//! graph.add_edge(Edge::new(a_id, b_id).with_property("label", "LINKS"));
//!
//! let subset: HashSet<_> = [a_id, b_id].into_iter().collect();
//! assert_eq!(graph.induced_edges(&subset).count(), 1);
//! ```

mod element;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod element_tests;
#[cfg(test)]
mod traversal_tests;
#[cfg(test)]
mod types_tests;

pub use element::{
    split_properties, ElementId, GraphElement, EDGE_PROMOTED_KEYS, END_KEY, ID_KEY, LABEL_KEY,
    NODE_PROMOTED_KEYS, SHORT_DETAILS_KEY, START_KEY,
};
pub use store::{ElementKey, ElementRef, Graph};
pub use traversal::has_colon_label;
pub use types::{Edge, Node};
