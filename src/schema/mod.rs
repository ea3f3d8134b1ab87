pub mod compatibility;
pub mod discrepancy;
pub mod parsing;
pub mod types;
pub mod validator;


pub use compatibility::{check_compatibility, is_schema_superset, CompatibilityLevel};
pub use discrepancy::{compare_field_schemas, compare_schemas};
pub use parsing::{load_schema_from_file, parse_schema_json, schema_to_json};
pub use validator::SchemaValidator;

// Re-export all types at the schema module level
pub use types::{
    AllowedTypeDiscrepancy, Discrepancy, FieldDiscrepancy, FieldKind, FieldKindDiscrepancy,
    FieldSchema, LeafNodeSchema, MapNodeSchema, NodeFieldsDiscrepancy, NodeKind,
    NodeKindDiscrepancy, ObjectNodeSchema, SchemaError, TreeNodeSchema, TreeStoredSchema,
    ValueSchema, ValueSchemaDiscrepancy,
};
