//! Structured records of divergence between a view schema and a stored schema
//!
//! These records are the comparison engine's sole output. They are additive
//! evidence for upstream compatibility decisions, not exceptions: every
//! divergence between two well-formed schemas is reported as data.

use serde::{Deserialize, Serialize};

use super::fields::{FieldKind, ValueSchema};
use super::schema::NodeKind;

/// The allowed-type sets of a field differ.
///
/// `view` and `stored` hold only the asymmetric elements (present on that
/// side and absent on the other), never the full sets. `identifier` is `None`
/// for the document root, the node-type identifier for a map node's value
/// slot, and the field key for a field inside an object node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedTypeDiscrepancy {
    pub identifier: Option<String>,
    pub view: Vec<String>,
    pub stored: Vec<String>,
}

/// The field kinds differ, or the field exists on only one side.
///
/// A `None` kind means the field (or the whole path to it) is absent on that
/// side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldKindDiscrepancy {
    pub identifier: Option<String>,
    pub view: Option<FieldKind>,
    pub stored: Option<FieldKind>,
}

/// Two leaf nodes with the same identifier carry different primitive value
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSchemaDiscrepancy {
    pub identifier: String,
    pub view: ValueSchema,
    pub stored: ValueSchema,
}

/// The node kind differs between view and stored, or one side lacks the
/// node-type identifier entirely (`None` on the missing side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeKindDiscrepancy {
    pub identifier: String,
    pub view: Option<NodeKind>,
    pub stored: Option<NodeKind>,
}

/// Both sides agree the node is an object but differ in one or more fields.
///
/// Never emitted together with a [`NodeKindDiscrepancy`] for the same
/// identifier: a kind mismatch supersedes field-level comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFieldsDiscrepancy {
    pub identifier: String,
    pub differences: Vec<FieldDiscrepancy>,
}

/// A divergence at field granularity, produced by the generic field
/// comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDiscrepancy {
    AllowedTypes(AllowedTypeDiscrepancy),
    FieldKind(FieldKindDiscrepancy),
}

/// One divergence between view and stored schema at root, node, or field
/// scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discrepancy {
    AllowedTypes(AllowedTypeDiscrepancy),
    FieldKind(FieldKindDiscrepancy),
    ValueSchema(ValueSchemaDiscrepancy),
    NodeKind(NodeKindDiscrepancy),
    NodeFields(NodeFieldsDiscrepancy),
}

impl From<FieldDiscrepancy> for Discrepancy {
    fn from(discrepancy: FieldDiscrepancy) -> Self {
        match discrepancy {
            FieldDiscrepancy::AllowedTypes(d) => Discrepancy::AllowedTypes(d),
            FieldDiscrepancy::FieldKind(d) => Discrepancy::FieldKind(d),
        }
    }
}
