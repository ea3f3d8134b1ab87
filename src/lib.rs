//! Stored-schema compatibility engine for collaborative tree documents.
//!
//! A collaborative tree document carries a *stored schema* persisted with the
//! document, while each client holds a *view schema* derived from its own
//! code. Before reading or writing, the client must know whether its view of
//! allowed document shapes still matches what is persisted.
//!
//! [`compare_schemas`] computes the precise set of structural differences
//! between the two snapshots as [`Discrepancy`] records;
//! [`check_compatibility`] classifies that set into an accept/upgrade/reject
//! verdict.

pub mod schema;

pub use schema::{
    check_compatibility, compare_schemas, is_schema_superset, CompatibilityLevel, Discrepancy,
    FieldKind, FieldSchema, SchemaError, TreeNodeSchema, TreeStoredSchema, ValueSchema,
};
