use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Multiplicity of a field's content.
///
/// This is a closed enumeration: every field in a stored schema carries
/// exactly one of these kinds, and edit semantics are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Exactly one child.
    Required,
    /// Zero or one child.
    Optional,
    /// Zero or more ordered children.
    Sequence,
    /// No content permitted.
    Forbidden,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Required => write!(f, "required"),
            FieldKind::Optional => write!(f, "optional"),
            FieldKind::Sequence => write!(f, "sequence"),
            FieldKind::Forbidden => write!(f, "forbidden"),
        }
    }
}

/// Primitive value types a leaf node may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSchema {
    Number,
    String,
    Boolean,
    Null,
}

impl fmt::Display for ValueSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSchema::Number => write!(f, "number"),
            ValueSchema::String => write!(f, "string"),
            ValueSchema::Boolean => write!(f, "boolean"),
            ValueSchema::Null => write!(f, "null"),
        }
    }
}

/// Describes what may occupy a field: the document root, a map node's value
/// slot, or a named field of an object node.
///
/// `types` is the set of node-type identifiers permitted in the field.
/// `None` means any type is permitted; this is distinct from `Some` of an
/// empty set, which permits no type at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeSet<String>>,
}

impl FieldSchema {
    /// Creates a field schema restricted to the given node types.
    pub fn new<I, S>(kind: FieldKind, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            types: Some(types.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a field schema that permits any node type.
    pub fn any(kind: FieldKind) -> Self {
        Self { kind, types: None }
    }
}
