//! Shared identity and property-bag behavior for nodes and edges.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexSet;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::value::{Properties, PropertyValue};

/// Identifier of a node or edge.
pub type ElementId = Uuid;

/// Synthesized key carrying the element id.
pub const ID_KEY: &str = "id";
/// Property consulted by the debug representation and descendant discovery.
pub const LABEL_KEY: &str = "label";
/// Synthesized edge key carrying the tail endpoint.
pub const START_KEY: &str = "start";
/// Synthesized edge key carrying the head endpoint.
pub const END_KEY: &str = "end";
/// Key of the nested record holding non-promoted fields.
pub const SHORT_DETAILS_KEY: &str = "short_details";

/// Keys hoisted to the top level of a serialized node.
pub const NODE_PROMOTED_KEYS: &[&str] = &[ID_KEY, LABEL_KEY, "description", "type"];
/// Keys hoisted to the top level of a serialized edge.
pub const EDGE_PROMOTED_KEYS: &[&str] =
    &[ID_KEY, LABEL_KEY, "description", "type", START_KEY, END_KEY];

/// Common behavior of graph elements.
///
/// Implementors provide identity and property-bag access; everything else
/// (typed reads, enumeration, serialization) is derived from those.
pub trait GraphElement {
    /// Name used in the debug representation (`Node`, `Edge`).
    fn kind(&self) -> &'static str;

    /// Returns the element id.
    fn id(&self) -> ElementId;

    /// Returns the property bag. Never contains [`ID_KEY`].
    fn properties(&self) -> &Properties;

    /// Returns the property bag for mutation.
    ///
    /// Callers are expected to go through [`GraphElement::set_property`],
    /// which guards the reserved id key.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Default promoted keys for [`GraphElement::serialize`].
    fn promoted_keys(&self) -> &'static [&'static str] {
        NODE_PROMOTED_KEYS
    }

    /// The element as a flat map: properties followed by `id`.
    fn to_dict(&self) -> Properties {
        let mut dict = self.properties().clone();
        dict.insert(ID_KEY.to_string(), PropertyValue::Uuid(self.id()));
        dict
    }

    /// Sets a property, replacing any previous value.
    ///
    /// The id is not a property; writes to `"id"` are dropped.
    fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>)
    where
        Self: Sized,
    {
        if name == ID_KEY {
            tracing::warn!(element = %self.id(), "ignoring write to reserved property \"id\"");
            return;
        }
        self.properties_mut().insert(name.to_string(), value.into());
    }

    /// Reads a property. `"id"` always resolves to the element id.
    ///
    /// # Errors
    ///
    /// Returns `Error::PropertyNotFound` if the property is not set.
    fn get_property(&self, name: &str) -> Result<Cow<'_, PropertyValue>> {
        self.get_property_or_none(name)
            .ok_or_else(|| Error::PropertyNotFound(name.to_string()))
    }

    /// Reads a property, yielding `None` when it is not set.
    fn get_property_or_none(&self, name: &str) -> Option<Cow<'_, PropertyValue>> {
        if name == ID_KEY {
            return Some(Cow::Owned(PropertyValue::Uuid(self.id())));
        }
        self.properties().get(name).map(Cow::Borrowed)
    }

    /// Returns the `label` property when it is a string.
    fn label(&self) -> Option<&str> {
        self.properties().get(LABEL_KEY).and_then(PropertyValue::as_str)
    }

    /// Names that can be passed to [`GraphElement::get_property`]: the bag
    /// keys in insertion order, then `"id"`.
    fn property_names(&self) -> IndexSet<String> {
        let mut names: IndexSet<String> = self.properties().keys().cloned().collect();
        names.insert(ID_KEY.to_string());
        names
    }

    /// Serializes with the default promoted keys.
    fn serialize(&self) -> Properties {
        self.serialize_with(self.promoted_keys())
    }

    /// Splits the dict form into promoted top-level fields and a trailing
    /// `short_details` record. An empty `promoted` falls back to the defaults.
    fn serialize_with(&self, promoted: &[&str]) -> Properties {
        let promoted = if promoted.is_empty() {
            self.promoted_keys()
        } else {
            promoted
        };
        let (mut outer, inner) = partition(self.to_dict(), promoted);
        outer.insert(SHORT_DETAILS_KEY.to_string(), PropertyValue::Record(inner));
        outer
    }
}

/// Partitions `map` into `(matched, remainder)` by membership in `keys`.
///
/// Both halves keep the input order.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if `keys` is empty.
///
/// # Example
///
/// ```rust
/// use internalgraph_core::graph::split_properties;
/// use internalgraph_core::value::properties;
///
/// let source = properties([("a", 1), ("b", 2), ("e", 5)]);
/// let (left, right) = split_properties(&source, &["a", "e"]).unwrap();
/// assert_eq!(left.keys().collect::<Vec<_>>(), ["a", "e"]);
/// assert_eq!(right.keys().collect::<Vec<_>>(), ["b"]);
/// ```
pub fn split_properties(map: &Properties, keys: &[&str]) -> Result<(Properties, Properties)> {
    if keys.is_empty() {
        return Err(Error::InvalidConfiguration(
            "split keys must be non-empty".to_string(),
        ));
    }
    Ok(partition(map.clone(), keys))
}

fn partition(map: Properties, keys: &[&str]) -> (Properties, Properties) {
    map.into_iter()
        .partition(|(k, _)| keys.contains(&k.as_str()))
}

/// Strips the reserved id key from caller-supplied properties.
pub(crate) fn sanitize(mut properties: Properties, id: ElementId) -> Properties {
    if properties.shift_remove(ID_KEY).is_some() {
        tracing::warn!(element = %id, "dropping reserved property \"id\" from property bag");
    }
    properties
}

/// Writes `<Kind "label" ID <id>>` or `<Kind ID <id> (no "label" property)>`.
/// A null, `false`, zero or empty label counts as missing.
pub(crate) fn fmt_element<E: GraphElement + ?Sized>(
    element: &E,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match element.properties().get(LABEL_KEY) {
        Some(label) if !label.is_blank() => {
            write!(f, "<{} \"{}\" ID {}>", element.kind(), label, element.id())
        }
        _ => write!(
            f,
            "<{} ID {} (no \"label\" property)>",
            element.kind(),
            element.id()
        ),
    }
}
