use thiserror::Error;

/// Errors raised while loading or validating schema documents.
///
/// The comparison engine itself never fails on well-formed schemas; every
/// divergence it finds is reported as data. These errors cover the boundary
/// where schema documents enter the system: parsing and structural
/// validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A schema document names a node kind outside the closed leaf/map/object
    /// set. This indicates a corrupted or foreign schema document and is not
    /// recoverable.
    #[error("Unknown node kind for '{identifier}': {kind}")]
    UnknownNodeKind { identifier: String, kind: String },

    /// The schema parsed but violates a structural rule, such as an empty
    /// identifier or an allowed-type reference to an undeclared node schema.
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// The schema document is not valid JSON or does not match the schema
    /// model.
    #[error("Failed to parse schema document: {reason}")]
    Parse { reason: String },

    /// Reading a schema file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
