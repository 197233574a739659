//! Graph exporters: a JSON document and a script fragment for browser-side
//! graph visualization tools.
//!
//! Both formats share one element shape, produced by
//! [`GraphElement::serialize`]: promoted fields (`id`, `label`,
//! `description`, `type`, plus `start`/`end` for edges) at the top level and
//! everything else under `short_details`.
//!
//! ```json
//! {
//!   "nodes": [{ "id": "…", "label": "A", "short_details": { "name": "A" } }],
//!   "edges": [{ "id": "…", "start": "…", "end": "…", "short_details": {} }]
//! }
//! ```

use std::fmt::{self, Write as _};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphElement};
use crate::value::{Properties, PropertyValue};

/// Guard lines declaring the element arrays unless the page already did.
const SCRIPT_PRELUDE: [&str; 2] = [
    r#"if (typeof nodes === "undefined") { nodes = []; }"#,
    r#"if (typeof edges === "undefined") { edges = []; }"#,
];

/// Renders graphs according to an [`ExportConfig`].
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Creates an exporter with the given formatting options.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Returns the formatting options.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Builds `{"nodes": [...], "edges": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedValue` if any property cannot be
    /// represented; no partial document is produced.
    pub fn to_document(&self, graph: &Graph) -> Result<Value> {
        let nodes = graph
            .nodes()
            .iter()
            .map(|n| self.element_to_json(n))
            .collect::<Result<Vec<_>>>()?;
        let edges = graph
            .edges()
            .iter()
            .map(|e| self.element_to_json(e))
            .collect::<Result<Vec<_>>>()?;

        let mut doc = Map::with_capacity(2);
        doc.insert("nodes".to_string(), Value::Array(nodes));
        doc.insert("edges".to_string(), Value::Array(edges));
        Ok(Value::Object(doc))
    }

    /// Renders the document as JSON text using `document_indent`.
    pub fn to_json(&self, graph: &Graph) -> Result<String> {
        render(&self.to_document(graph)?, self.config.document_indent)
    }

    /// Renders the script fragment: the two guard lines, then one
    /// `nodes.push(...)` per node and one `edges.push(...)` per edge,
    /// newline separated.
    pub fn to_script(&self, graph: &Graph) -> Result<String> {
        let indent = self.config.script_indent;
        let mut lines: Vec<String> = SCRIPT_PRELUDE.iter().map(ToString::to_string).collect();
        lines.reserve(graph.node_count() + graph.edge_count());

        for node in graph.nodes() {
            let json = render(&self.element_to_json(node)?, indent)?;
            lines.push(format!("nodes.push({json});"));
        }
        for edge in graph.edges() {
            let json = render(&self.element_to_json(edge)?, indent)?;
            lines.push(format!("edges.push({json});"));
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "rendered script fragment"
        );
        Ok(lines.join("\n"))
    }

    /// Serializes one element to its exported JSON shape.
    pub fn element_to_json<E: GraphElement>(&self, element: &E) -> Result<Value> {
        self.record_to_json(&element.serialize())
    }

    /// Converts a property value to JSON.
    ///
    /// Ids render in canonical hyphenated form, timestamps with the
    /// configured pattern, embedded nodes/edges as their dict form.
    ///
    /// # Errors
    ///
    /// Non-finite floats have no JSON form and yield
    /// `Error::UnsupportedValue`.
    pub fn value_to_json(&self, value: &PropertyValue) -> Result<Value> {
        Ok(match value {
            PropertyValue::Null => Value::Null,
            PropertyValue::Bool(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::from(*i),
            PropertyValue::Float(x) => serde_json::Number::from_f64(*x)
                .map(Value::Number)
                .ok_or_else(|| Error::UnsupportedValue(format!("non-finite float {x}")))?,
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Uuid(id) => Value::String(id.hyphenated().to_string()),
            PropertyValue::Timestamp(ts) => {
                let mut out = String::new();
                write!(out, "{}", ts.format(&self.config.timestamp_format)).map_err(|_| {
                    Error::InvalidConfiguration(format!(
                        "invalid timestamp format '{}'",
                        self.config.timestamp_format
                    ))
                })?;
                Value::String(out)
            }
            PropertyValue::List(items) => Value::Array(
                items
                    .iter()
                    .map(|v| self.value_to_json(v))
                    .collect::<Result<Vec<_>>>()?,
            ),
            PropertyValue::Record(map) => self.record_to_json(map)?,
            PropertyValue::Node(node) => self.record_to_json(&node.to_dict())?,
            PropertyValue::Edge(edge) => self.record_to_json(&edge.to_dict())?,
        })
    }

    fn record_to_json(&self, record: &Properties) -> Result<Value> {
        let mut map = Map::with_capacity(record.len());
        for (key, value) in record {
            map.insert(key.clone(), self.value_to_json(value)?);
        }
        Ok(Value::Object(map))
    }
}

fn render(value: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::UnsupportedValue(e.to_string()))
}

impl Graph {
    /// Document export with default formatting. See [`Exporter::to_document`].
    pub fn to_document(&self) -> Result<Value> {
        Exporter::default().to_document(self)
    }

    /// JSON export with default formatting. See [`Exporter::to_json`].
    pub fn to_json(&self) -> Result<String> {
        Exporter::default().to_json(self)
    }

    /// Script export with default formatting. See [`Exporter::to_script`].
    pub fn to_script(&self) -> Result<String> {
        Exporter::default().to_script(self)
    }
}

/// Pretty JSON with default formatting. A graph that cannot be exported
/// renders as `<unexportable graph: reason>`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "<unexportable graph: {e}>"),
        }
    }
}
