//! The structured value domain type.
//!
//! A [`StructuredValue`] is the nested key-value representation of one
//! annotated document's extracted fields: a mapping from field name to
//! value, where values are sub-mappings or primitive leaves. Key order is
//! significant (it fixes the linearization order of the target sequence),
//! so objects store their entries as an ordered list rather than a hash map.
//!
//! Arrays are deliberately outside the domain: receipt and invoice
//! annotations in this pipeline are keyed records all the way down, and a
//! JSON array in the `entities` field indicates mislabeled data.

use crate::core::{KieError, KieResult};

/// A recursively nested document annotation value.
///
/// Numbers keep their `serde_json` representation so that a numeric leaf
/// renders back to exactly its JSON text. Decoded model output only ever
/// produces [`StructuredValue::String`] leaves; the numeric and boolean
/// variants exist for ground truth parsed from JSON, and their typing is
/// lost after one encode/decode round trip. That loss is inherent to the
/// tagged-sequence format, not something this crate papers over.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    /// A mapping from field name to value, in insertion order.
    Object(Vec<(String, StructuredValue)>),
    /// A text leaf.
    String(String),
    /// A numeric leaf, kept in its JSON textual form.
    Number(serde_json::Number),
    /// A boolean leaf.
    Bool(bool),
    /// A null leaf.
    Null,
}

impl StructuredValue {
    /// An empty object, the neutral element of decoding.
    pub fn empty() -> Self {
        StructuredValue::Object(Vec::new())
    }

    /// Parses a JSON string (the `entities` field of a labeled record) into
    /// a structured value.
    ///
    /// # Errors
    ///
    /// Returns `KieError::InvalidInput` if the string is not valid JSON or
    /// contains an array anywhere in the tree.
    pub fn from_json_str(json: &str) -> KieResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| KieError::invalid_input(format!("not valid JSON: {}", e)))?;
        Self::from_json(value)
    }

    /// Converts a `serde_json::Value` into a structured value.
    ///
    /// # Errors
    ///
    /// Returns `KieError::InvalidInput` if the value contains an array.
    pub fn from_json(value: serde_json::Value) -> KieResult<Self> {
        match value {
            serde_json::Value::Object(map) => {
                let mut fields = Vec::with_capacity(map.len());
                for (key, inner) in map {
                    fields.push((key, Self::from_json(inner)?));
                }
                Ok(StructuredValue::Object(fields))
            }
            serde_json::Value::String(s) => Ok(StructuredValue::String(s)),
            serde_json::Value::Number(n) => Ok(StructuredValue::Number(n)),
            serde_json::Value::Bool(b) => Ok(StructuredValue::Bool(b)),
            serde_json::Value::Null => Ok(StructuredValue::Null),
            serde_json::Value::Array(_) => Err(KieError::invalid_input(
                "arrays are outside the structured-value domain",
            )),
        }
    }

    /// Converts back to a `serde_json::Value`, preserving key order.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            StructuredValue::Object(fields) => {
                let mut map = serde_json::Map::with_capacity(fields.len());
                for (key, value) in fields {
                    map.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
            StructuredValue::String(s) => serde_json::Value::String(s.clone()),
            StructuredValue::Number(n) => serde_json::Value::Number(n.clone()),
            StructuredValue::Bool(b) => serde_json::Value::Bool(*b),
            StructuredValue::Null => serde_json::Value::Null,
        }
    }

    /// Returns the object entries if this value is an object.
    pub fn as_object(&self) -> Option<&[(String, StructuredValue)]> {
        match self {
            StructuredValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Renders a leaf as the text that appears in a target sequence.
    ///
    /// Matches JSON rendering for every leaf type: numbers as their JSON
    /// text, booleans as `true`/`false`, null as `null`. Returns `None`
    /// for objects.
    pub fn leaf_text(&self) -> Option<String> {
        match self {
            StructuredValue::Object(_) => None,
            StructuredValue::String(s) => Some(s.clone()),
            StructuredValue::Number(n) => Some(n.to_string()),
            StructuredValue::Bool(b) => Some(b.to_string()),
            StructuredValue::Null => Some("null".to_string()),
        }
    }
}
