use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::fields::{FieldSchema, ValueSchema};

/// A terminal node holding one primitive value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNodeSchema {
    pub leaf_value: ValueSchema,
}

/// A node whose children form a dynamically keyed collection, all conforming
/// to one shared field schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNodeSchema {
    pub map_fields: FieldSchema,
}

/// A node with a fixed set of named fields, each independently schematized.
///
/// Fields are kept sorted by key so comparison output is deterministic
/// regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectNodeSchema {
    pub fields: BTreeMap<String, FieldSchema>,
}

/// Enumeration over all node schema variants.
///
/// This set is closed: a well-formed schema document contains only these
/// three kinds, and the JSON loader rejects anything else before a value of
/// this type can exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNodeSchema {
    Leaf(LeafNodeSchema),
    Map(MapNodeSchema),
    Object(ObjectNodeSchema),
}

impl TreeNodeSchema {
    pub fn leaf(leaf_value: ValueSchema) -> Self {
        Self::Leaf(LeafNodeSchema { leaf_value })
    }

    pub fn map(map_fields: FieldSchema) -> Self {
        Self::Map(MapNodeSchema { map_fields })
    }

    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldSchema)>,
        S: Into<String>,
    {
        Self::Object(ObjectNodeSchema {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// The kind tag of this node schema.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Map(_) => NodeKind::Map,
            Self::Object(_) => NodeKind::Object,
        }
    }
}

/// Kind tag of a node schema, used in discrepancy reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Leaf,
    Map,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf => write!(f, "leaf"),
            NodeKind::Map => write!(f, "map"),
            NodeKind::Object => write!(f, "object"),
        }
    }
}

/// Immutable snapshot of a document's allowed shape.
///
/// `node_schema` maps each node-type identifier to its schema. The map is
/// sorted by identifier, which fixes the iteration order used for
/// deterministic comparison output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStoredSchema {
    pub root_field_schema: FieldSchema,
    pub node_schema: BTreeMap<String, TreeNodeSchema>,
}

impl TreeStoredSchema {
    pub fn new(root_field_schema: FieldSchema) -> Self {
        Self {
            root_field_schema,
            node_schema: BTreeMap::new(),
        }
    }

    /// Adds a node schema under the given identifier, replacing any previous
    /// entry for that identifier.
    pub fn add_node_schema(&mut self, identifier: impl Into<String>, node: TreeNodeSchema) {
        self.node_schema.insert(identifier.into(), node);
    }
}
