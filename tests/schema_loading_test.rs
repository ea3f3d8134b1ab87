use std::io::Write;

use treefold::schema::{load_schema_from_file, parse_schema_json, schema_to_json};
use treefold::{
    compare_schemas, FieldKind, FieldSchema, SchemaError, TreeNodeSchema, TreeStoredSchema,
    ValueSchema,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_parse_schema_from_json_document() {
    init_logging();
    let json = r#"{
        "root_field_schema": { "kind": "optional", "types": ["Str", "Point"] },
        "node_schema": {
            "Str": { "kind": "leaf", "leaf_value": "string" },
            "Num": { "kind": "leaf", "leaf_value": "number" },
            "Point": {
                "kind": "object",
                "fields": {
                    "x": { "kind": "required", "types": ["Num"] },
                    "y": { "kind": "required", "types": ["Num"] }
                }
            }
        }
    }"#;

    let schema = parse_schema_json(json).unwrap();
    assert_eq!(schema.root_field_schema.kind, FieldKind::Optional);
    assert_eq!(schema.node_schema.len(), 3);
    assert_eq!(
        schema.node_schema.get("Num"),
        Some(&TreeNodeSchema::leaf(ValueSchema::Number))
    );
}

#[test]
fn test_unknown_node_kind_is_fatal_and_names_offender() {
    init_logging();
    let json = r#"{
        "root_field_schema": { "kind": "optional" },
        "node_schema": {
            "Widget": { "kind": "tuple", "leaf_value": "string" }
        }
    }"#;

    let err = parse_schema_json(json).unwrap_err();
    match err {
        SchemaError::UnknownNodeKind { identifier, kind } => {
            assert_eq!(identifier, "Widget");
            assert_eq!(kind, "tuple");
        }
        other => panic!("expected UnknownNodeKind, got {other}"),
    }
}

#[test]
fn test_dangling_type_reference_is_rejected() {
    init_logging();
    let json = r#"{
        "root_field_schema": { "kind": "optional", "types": ["Nope"] },
        "node_schema": {}
    }"#;

    let err = parse_schema_json(json).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidSchema { .. }));
    assert!(err.to_string().contains("Nope"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    init_logging();
    let err = parse_schema_json("{ not json").unwrap_err();
    assert!(matches!(err, SchemaError::Parse { .. }));
}

#[test]
fn test_schema_round_trips_through_json() {
    init_logging();
    let mut schema = TreeStoredSchema::new(FieldSchema::new(FieldKind::Sequence, ["Obj"]));
    schema.add_node_schema("Str", TreeNodeSchema::leaf(ValueSchema::String));
    schema.add_node_schema(
        "Obj",
        TreeNodeSchema::object([
            ("name", FieldSchema::new(FieldKind::Required, ["Str"])),
            ("tags", FieldSchema::any(FieldKind::Sequence)),
        ]),
    );
    schema.add_node_schema(
        "Dict",
        TreeNodeSchema::map(FieldSchema::new(FieldKind::Optional, ["Str"])),
    );

    let json = schema_to_json(&schema).unwrap();
    let reloaded = parse_schema_json(&json).unwrap();
    assert_eq!(schema, reloaded);
    assert_eq!(compare_schemas(&schema, &reloaded), vec![]);
}

#[test]
fn test_load_schema_from_file() {
    init_logging();
    let mut schema = TreeStoredSchema::new(FieldSchema::new(FieldKind::Optional, ["Str"]));
    schema.add_node_schema("Str", TreeNodeSchema::leaf(ValueSchema::String));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(schema_to_json(&schema).unwrap().as_bytes())
        .unwrap();

    let loaded = load_schema_from_file(file.path()).unwrap();
    assert_eq!(loaded, schema);
}

#[test]
fn test_missing_file_is_an_io_error() {
    init_logging();
    let err = load_schema_from_file(std::path::Path::new("/nonexistent/schema.json")).unwrap_err();
    assert!(matches!(err, SchemaError::Io(_)));
}
