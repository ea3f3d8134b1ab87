pub mod discrepancy;
pub mod errors;
pub mod fields;
pub mod schema;

pub use discrepancy::{
    AllowedTypeDiscrepancy, Discrepancy, FieldDiscrepancy, FieldKindDiscrepancy,
    NodeFieldsDiscrepancy, NodeKindDiscrepancy, ValueSchemaDiscrepancy,
};
pub use errors::SchemaError;
pub use fields::{FieldKind, FieldSchema, ValueSchema};
pub use schema::{
    LeafNodeSchema, MapNodeSchema, NodeKind, ObjectNodeSchema, TreeNodeSchema, TreeStoredSchema,
};
