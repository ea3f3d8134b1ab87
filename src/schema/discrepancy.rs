//! Comparison engine for view and stored tree schemas
//!
//! This module contains the logic for:
//! - Comparing the root field schemas of two schema snapshots
//! - Walking the node-schema collections and classifying each entry
//! - Comparing object fields, map value slots, and leaf value types
//! - Reporting stored-only node types after the forward walk
//!
//! The engine is a pure function over immutable inputs. It never fails on
//! well-formed schemas: every divergence is reported as a [`Discrepancy`]
//! record, and an empty result means full structural compatibility.

use log::debug;
use std::collections::BTreeSet;

use crate::schema::types::{
    AllowedTypeDiscrepancy, Discrepancy, FieldDiscrepancy, FieldKindDiscrepancy, FieldSchema,
    NodeFieldsDiscrepancy, NodeKindDiscrepancy, ObjectNodeSchema, TreeNodeSchema, TreeStoredSchema,
    ValueSchemaDiscrepancy,
};

/// Compares a view schema against a stored schema and returns every
/// structural divergence between them.
///
/// Output ordering is deterministic: root field discrepancies first, then
/// per-node discrepancies in the view collection's iteration order (sorted by
/// node-type identifier), then node types present only in the stored schema.
pub fn compare_schemas(view: &TreeStoredSchema, stored: &TreeStoredSchema) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();

    // Root field first, unconditionally.
    discrepancies.extend(
        compare_field_schemas(None, &view.root_field_schema, &stored.root_field_schema)
            .into_iter()
            .map(Discrepancy::from),
    );

    // Forward walk over the view's node schemas.
    for (identifier, view_node) in &view.node_schema {
        let Some(stored_node) = stored.node_schema.get(identifier) else {
            discrepancies.push(Discrepancy::NodeKind(NodeKindDiscrepancy {
                identifier: identifier.clone(),
                view: Some(view_node.kind()),
                stored: None,
            }));
            continue;
        };

        match (view_node, stored_node) {
            (TreeNodeSchema::Object(view_object), TreeNodeSchema::Object(stored_object)) => {
                let differences = compare_object_fields(view_object, stored_object);
                if !differences.is_empty() {
                    discrepancies.push(Discrepancy::NodeFields(NodeFieldsDiscrepancy {
                        identifier: identifier.clone(),
                        differences,
                    }));
                }
            }
            (TreeNodeSchema::Map(view_map), TreeNodeSchema::Map(stored_map)) => {
                discrepancies.extend(
                    compare_field_schemas(
                        Some(identifier.as_str()),
                        &view_map.map_fields,
                        &stored_map.map_fields,
                    )
                    .into_iter()
                    .map(Discrepancy::from),
                );
            }
            (TreeNodeSchema::Leaf(view_leaf), TreeNodeSchema::Leaf(stored_leaf)) => {
                if view_leaf.leaf_value != stored_leaf.leaf_value {
                    discrepancies.push(Discrepancy::ValueSchema(ValueSchemaDiscrepancy {
                        identifier: identifier.clone(),
                        view: view_leaf.leaf_value,
                        stored: stored_leaf.leaf_value,
                    }));
                }
            }
            // Kind mismatch supersedes field-level comparison: the field-key
            // space of an object and a map have different semantics, so a
            // single atomic record is reported instead of spurious field
            // diffs.
            _ => {
                discrepancies.push(Discrepancy::NodeKind(NodeKindDiscrepancy {
                    identifier: identifier.clone(),
                    view: Some(view_node.kind()),
                    stored: Some(stored_node.kind()),
                }));
            }
        }
    }

    // Residual pass: node types present only in the stored schema.
    for (identifier, stored_node) in &stored.node_schema {
        if !view.node_schema.contains_key(identifier) {
            discrepancies.push(Discrepancy::NodeKind(NodeKindDiscrepancy {
                identifier: identifier.clone(),
                view: None,
                stored: Some(stored_node.kind()),
            }));
        }
    }

    debug!(
        "Schema comparison found {} discrepancies across {} view / {} stored node schemas",
        discrepancies.len(),
        view.node_schema.len(),
        stored.node_schema.len()
    );

    discrepancies
}

/// Compares two field schemas scoped to `identifier` (`None` for the document
/// root).
///
/// Returns at most two records: an allowed-type set discrepancy followed by a
/// field-kind discrepancy.
pub fn compare_field_schemas(
    identifier: Option<&str>,
    view: &FieldSchema,
    stored: &FieldSchema,
) -> Vec<FieldDiscrepancy> {
    let mut differences = Vec::new();

    let (view_only, stored_only) =
        allowed_type_differences(view.types.as_ref(), stored.types.as_ref());
    if !view_only.is_empty() || !stored_only.is_empty() {
        differences.push(FieldDiscrepancy::AllowedTypes(AllowedTypeDiscrepancy {
            identifier: identifier.map(str::to_owned),
            view: view_only,
            stored: stored_only,
        }));
    }

    if view.kind != stored.kind {
        differences.push(FieldDiscrepancy::FieldKind(FieldKindDiscrepancy {
            identifier: identifier.map(str::to_owned),
            view: Some(view.kind),
            stored: Some(stored.kind),
        }));
    }

    differences
}

/// Computes the one-sided halves of the symmetric difference between two
/// allowed-type sets.
///
/// An absent set means "any type permitted" and is handled as an explicit
/// case: when both sides are unrestricted there is nothing to compare, and
/// when exactly one side is restricted every one of its elements is a
/// one-sided difference on that side.
fn allowed_type_differences(
    view: Option<&BTreeSet<String>>,
    stored: Option<&BTreeSet<String>>,
) -> (Vec<String>, Vec<String>) {
    match (view, stored) {
        (None, None) => (Vec::new(), Vec::new()),
        (Some(view_types), None) => (view_types.iter().cloned().collect(), Vec::new()),
        (None, Some(stored_types)) => (Vec::new(), stored_types.iter().cloned().collect()),
        (Some(view_types), Some(stored_types)) => (
            view_types.difference(stored_types).cloned().collect(),
            stored_types.difference(view_types).cloned().collect(),
        ),
    }
}

/// Compares the field maps of two object-kind node schemas.
///
/// View-side keys are processed first, then keys present only in the stored
/// schema; within each pass the map's sorted iteration order applies.
fn compare_object_fields(
    view: &ObjectNodeSchema,
    stored: &ObjectNodeSchema,
) -> Vec<FieldDiscrepancy> {
    let mut differences = Vec::new();

    for (key, view_field) in &view.fields {
        match stored.fields.get(key) {
            Some(stored_field) => {
                differences.extend(compare_field_schemas(Some(key), view_field, stored_field));
            }
            None => {
                differences.push(FieldDiscrepancy::FieldKind(FieldKindDiscrepancy {
                    identifier: Some(key.clone()),
                    view: Some(view_field.kind),
                    stored: None,
                }));
            }
        }
    }

    for (key, stored_field) in &stored.fields {
        if !view.fields.contains_key(key) {
            differences.push(FieldDiscrepancy::FieldKind(FieldKindDiscrepancy {
                identifier: Some(key.clone()),
                view: None,
                stored: Some(stored_field.kind),
            }));
        }
    }

    differences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldKind;

    fn types(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_allowed_type_differences_both_unrestricted() {
        let (view_only, stored_only) = allowed_type_differences(None, None);
        assert!(view_only.is_empty());
        assert!(stored_only.is_empty());
    }

    #[test]
    fn test_allowed_type_differences_one_side_unrestricted() {
        let stored = types(&["X"]);
        let (view_only, stored_only) = allowed_type_differences(None, Some(&stored));
        assert!(view_only.is_empty());
        assert_eq!(stored_only, ["X"]);

        let view = types(&["A", "B"]);
        let (view_only, stored_only) = allowed_type_differences(Some(&view), None);
        assert_eq!(view_only, ["A", "B"]);
        assert!(stored_only.is_empty());
    }

    #[test]
    fn test_allowed_type_differences_symmetric_halves() {
        let view = types(&["A", "B"]);
        let stored = types(&["B", "C"]);
        let (view_only, stored_only) = allowed_type_differences(Some(&view), Some(&stored));
        assert_eq!(view_only, ["A"]);
        assert_eq!(stored_only, ["C"]);
    }

    #[test]
    fn test_allowed_type_differences_empty_set_is_restrictive() {
        let empty = types(&[]);
        let stored = types(&["X"]);
        let (view_only, stored_only) = allowed_type_differences(Some(&empty), Some(&stored));
        assert!(view_only.is_empty());
        assert_eq!(stored_only, ["X"]);
    }

    #[test]
    fn test_field_comparator_emits_types_before_kind() {
        let view = FieldSchema::new(FieldKind::Optional, ["A"]);
        let stored = FieldSchema::new(FieldKind::Required, ["B"]);
        let differences = compare_field_schemas(None, &view, &stored);
        assert_eq!(differences.len(), 2);
        assert!(matches!(differences[0], FieldDiscrepancy::AllowedTypes(_)));
        assert!(matches!(differences[1], FieldDiscrepancy::FieldKind(_)));
    }

    #[test]
    fn test_field_comparator_identical_fields_produce_nothing() {
        let field = FieldSchema::new(FieldKind::Sequence, ["A", "B"]);
        assert!(compare_field_schemas(Some("scope"), &field, &field).is_empty());
    }

    #[test]
    fn test_object_comparator_reports_residual_fields() {
        let shared = FieldSchema::new(FieldKind::Optional, ["Str"]);
        let view = ObjectNodeSchema {
            fields: [
                ("f1".to_string(), FieldSchema::any(FieldKind::Required)),
                ("f2".to_string(), shared.clone()),
            ]
            .into_iter()
            .collect(),
        };
        let stored = ObjectNodeSchema {
            fields: [
                ("f2".to_string(), shared),
                ("f3".to_string(), FieldSchema::any(FieldKind::Sequence)),
            ]
            .into_iter()
            .collect(),
        };

        let differences = compare_object_fields(&view, &stored);
        assert_eq!(
            differences,
            vec![
                FieldDiscrepancy::FieldKind(FieldKindDiscrepancy {
                    identifier: Some("f1".to_string()),
                    view: Some(FieldKind::Required),
                    stored: None,
                }),
                FieldDiscrepancy::FieldKind(FieldKindDiscrepancy {
                    identifier: Some("f3".to_string()),
                    view: None,
                    stored: Some(FieldKind::Sequence),
                }),
            ]
        );
    }
}
