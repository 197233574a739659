//! # internalgraph core
//!
//! A small in-process store for labeled, directed property graphs.
//!
//! Nodes and edges carry an ordered property bag; a [`Graph`] owns them,
//! answers neighborhood queries and exports itself either as a JSON document
//! or as a script fragment for browser-side visualization.
//!
//! ## Quick Start
//!
//! ```rust
//! use internalgraph_core::{Edge, Graph, GraphElement, Node};
//!
//! fn main() -> internalgraph_core::Result<()> {
//!     let alice = Node::new().with_property("label", "Person:Alice");
//!     let acme = Node::new().with_property("label", "Company:Acme");
//!     let works_at = Edge::new(alice.id(), acme.id()).with_property("type", "WORKS_AT");
//!     let alice_id = alice.id();
//!
//!     let mut graph = Graph::new();
//!     graph.add_nodes([alice, acme]);
//!     graph.add_edge(works_at);
//!
//!     assert_eq!(graph.neighbors(alice_id).count(), 1);
//!
//!     let doc = graph.to_document()?;
//!     assert_eq!(doc["edges"][0]["type"], "WORKS_AT");
//!
//!     let script = graph.to_script()?;
//!     assert!(script.contains("nodes.push("));
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and unsynchronized. Query iterators borrow the
//! graph, so it cannot be mutated while one is alive; share a graph across
//! threads behind a lock.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod logging;
pub mod value;

pub use config::{ConfigError, ExportConfig, GraphConfig, LoggingConfig};
pub use error::{Error, Result};
pub use export::Exporter;
pub use graph::{
    split_properties, Edge, ElementId, ElementKey, ElementRef, Graph, GraphElement, Node,
};
pub use logging::init_logging;
pub use value::{properties, Properties, PropertyValue};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
