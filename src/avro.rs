use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::reflect::Primitive;

/// A derived schema fragment.
///
/// Serializes to the exact compact JSON text the deriver promises; key order
/// is fixed by the `Serialize` impl below.
#[derive(Debug, Clone, PartialEq)]
pub enum AvroSchema {
    /// `{"type":"int"}`
    Primitive(Primitive),
    /// Back-reference to a named type emitted earlier in the same derivation:
    /// `{"type":"Point","namespace":"geo"}`
    Reference {
        name: String,
        namespace: Option<String>,
    },
    /// `{"type":"fixed","size":16,"name":"guid"}`
    Fixed { name: String, size: usize },
    Enum {
        name: String,
        namespace: String,
        symbols: Vec<String>,
    },
    Record {
        name: String,
        namespace: Option<String>,
        fields: Vec<AvroField>,
    },
    Union(Vec<UnionBranch>),
}

/// One branch of a union. Nullable unions render as `["int",null]`.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionBranch {
    Named(String),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvroField {
    pub name: String,
    pub field_type: FieldType,
}

/// The `"type"` of a record field.
///
/// Either way it renders as a JSON string: the full name of a type already
/// emitted in the same derivation, or the nested schema's JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Named(String),
    Inline(Box<AvroSchema>),
}

impl AvroSchema {
    /// Compact JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl AvroField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

impl Serialize for AvroSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AvroSchema::Primitive(primitive) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", primitive)?;
                map.end()
            }
            AvroSchema::Reference { name, namespace } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", name)?;
                if let Some(ns) = namespace {
                    map.serialize_entry("namespace", ns)?;
                }
                map.end()
            }
            AvroSchema::Fixed { name, size } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "fixed")?;
                map.serialize_entry("size", size)?;
                map.serialize_entry("name", name)?;
                map.end()
            }
            AvroSchema::Enum {
                name,
                namespace,
                symbols,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("namespace", namespace)?;
                map.serialize_entry("symbols", symbols)?;
                map.end()
            }
            AvroSchema::Record {
                name,
                namespace,
                fields,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "record")?;
                map.serialize_entry("name", name)?;
                if let Some(ns) = namespace {
                    map.serialize_entry("namespace", ns)?;
                }
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            AvroSchema::Union(branches) => {
                let mut seq = serializer.serialize_seq(Some(branches.len()))?;
                for branch in branches {
                    match branch {
                        UnionBranch::Named(name) => seq.serialize_element(name)?,
                        UnionBranch::Null => seq.serialize_element(&())?,
                    }
                }
                seq.end()
            }
        }
    }
}

impl Serialize for AvroField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        match &self.field_type {
            FieldType::Named(name) => map.serialize_entry("type", name)?,
            FieldType::Inline(schema) => {
                let text = serde_json::to_string(schema).map_err(S::Error::custom)?;
                map.serialize_entry("type", &text)?;
            }
        }
        map.end()
    }
}
