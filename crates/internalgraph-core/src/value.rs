//! Heterogeneous property values attached to nodes and edges.
//!
//! Property bags are ordered maps from string keys to [`PropertyValue`]s.
//! Insertion order is preserved so exports are deterministic.

use std::{fmt, num::FpCategory};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::graph::{Edge, Node};

/// Ordered property bag.
pub type Properties = IndexMap<String, PropertyValue>;

/// A single property value.
///
/// Each variant has an explicit export rule (see [`crate::export`]).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Absent value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Floating point number. Non-finite values cannot be exported.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Point in time, exported as `YYYY-MM-DDTHH:MM:SSZ`.
    Timestamp(DateTime<Utc>),
    /// Unique identifier, exported in canonical hyphenated form.
    Uuid(Uuid),
    /// Ordered sequence of values.
    List(Vec<PropertyValue>),
    /// Nested record.
    Record(Properties),
    /// Embedded node, exported through its dict form.
    Node(Box<Node>),
    /// Embedded edge, exported through its dict form.
    Edge(Box<Edge>),
}

impl PropertyValue {
    /// Returns the variant name, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Timestamp(_) => "timestamp",
            Self::Uuid(_) => "uuid",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Node(_) => "node",
            Self::Edge(_) => "edge",
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the id payload, if this is a uuid.
    #[must_use]
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns true for [`PropertyValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true when the value reads as "unset": null, `false`, zero, or
    /// an empty string, list or record.
    #[must_use]
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) | Self::Integer(0) => true,
            Self::Float(x) => x.classify() == FpCategory::Zero,
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Record(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Self::Uuid(id) => write!(f, "{id}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Node(node) => write!(f, "{node:?}"),
            Self::Edge(edge) => write!(f, "{edge:?}"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Uuid> for PropertyValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Properties> for PropertyValue {
    fn from(value: Properties) -> Self {
        Self::Record(value)
    }
}

impl From<Node> for PropertyValue {
    fn from(value: Node) -> Self {
        Self::Node(Box::new(value))
    }
}

impl From<Edge> for PropertyValue {
    fn from(value: Edge) -> Self {
        Self::Edge(Box::new(value))
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JSON integers that fit in `i64` become [`PropertyValue::Integer`]; every
/// other number becomes [`PropertyValue::Float`].
/// Numbers that fit `i64` become [`PropertyValue::Integer`]; anything else,
/// including unsigned values above `i64::MAX`, becomes a (possibly lossy)
/// [`PropertyValue::Float`].
impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Record(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Builds a property bag from `(key, value)` pairs.
///
/// ```rust
/// use internalgraph_core::value::{properties, PropertyValue};
///
/// let props = properties([("name", "Alice"), ("type", "Person")]);
/// assert_eq!(props.get("name"), Some(&PropertyValue::from("Alice")));
/// ```
pub fn properties<K, V, I>(pairs: I) -> Properties
where
    K: Into<String>,
    V: Into<PropertyValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
