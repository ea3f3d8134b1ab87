//! JSON parsing and schema loading functionality
//!
//! This module contains the logic for:
//! - Parsing stored-schema documents from JSON strings and files
//! - Rejecting documents that name a node kind outside the closed set
//! - Running structural validation before a schema is accepted
//!
//! The closed node-kind set is otherwise enforced by the type system; this
//! boundary is the one place a foreign or corrupted schema document can be
//! observed, so the unknown-kind check fails fast and names the offending
//! identifier.

use log::info;
use std::path::Path;

use crate::schema::types::{SchemaError, TreeStoredSchema};
use crate::schema::validator::SchemaValidator;

const KNOWN_NODE_KINDS: [&str; 3] = ["leaf", "map", "object"];

/// Parses and validates a stored-schema document from a JSON string.
pub fn parse_schema_json(json: &str) -> Result<TreeStoredSchema, SchemaError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SchemaError::Parse {
            reason: e.to_string(),
        })?;

    check_node_kinds(&value)?;

    let schema: TreeStoredSchema =
        serde_json::from_value(value).map_err(|e| SchemaError::Parse {
            reason: e.to_string(),
        })?;

    SchemaValidator::new(&schema).validate()?;
    info!(
        "Loaded stored schema with {} node schemas",
        schema.node_schema.len()
    );
    Ok(schema)
}

/// Loads a stored-schema document from a JSON file.
pub fn load_schema_from_file(path: &Path) -> Result<TreeStoredSchema, SchemaError> {
    let contents = std::fs::read_to_string(path)?;
    let schema = parse_schema_json(&contents)?;
    info!("Loaded stored schema from {}", path.display());
    Ok(schema)
}

/// Serializes a schema snapshot to a JSON string.
pub fn schema_to_json(schema: &TreeStoredSchema) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(schema).map_err(|e| SchemaError::Parse {
        reason: e.to_string(),
    })
}

/// Rejects any node-schema entry whose kind tag is outside the closed
/// leaf/map/object set, naming the offending identifier.
fn check_node_kinds(value: &serde_json::Value) -> Result<(), SchemaError> {
    let Some(nodes) = value.get("node_schema").and_then(|v| v.as_object()) else {
        return Ok(());
    };

    for (identifier, node) in nodes {
        if let Some(kind) = node.get("kind").and_then(|k| k.as_str()) {
            if !KNOWN_NODE_KINDS.contains(&kind) {
                return Err(SchemaError::UnknownNodeKind {
                    identifier: identifier.clone(),
                    kind: kind.to_string(),
                });
            }
        }
    }

    Ok(())
}
