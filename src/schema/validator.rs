use log::debug;

use crate::schema::types::{FieldSchema, SchemaError, TreeNodeSchema, TreeStoredSchema};

/// Validates a [`TreeStoredSchema`] before it is accepted for use.
///
/// The validator checks general formatting rules and verifies that every
/// allowed-type reference resolves to a declared node schema.
pub struct SchemaValidator<'a> {
    schema: &'a TreeStoredSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Create a new validator for the provided schema snapshot.
    pub fn new(schema: &'a TreeStoredSchema) -> Self {
        Self { schema }
    }

    /// Validate the schema snapshot.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_field(&self.schema.root_field_schema, "root")?;

        for (identifier, node) in &self.schema.node_schema {
            if identifier.is_empty() {
                return Err(SchemaError::InvalidSchema {
                    reason: "Node-type identifier cannot be empty".to_string(),
                });
            }

            match node {
                TreeNodeSchema::Leaf(_) => {}
                TreeNodeSchema::Map(map) => {
                    self.validate_field(&map.map_fields, identifier)?;
                }
                TreeNodeSchema::Object(object) => {
                    for (key, field) in &object.fields {
                        if key.is_empty() {
                            return Err(SchemaError::InvalidSchema {
                                reason: format!(
                                    "Object node '{}' has a field with an empty key",
                                    identifier
                                ),
                            });
                        }
                        self.validate_field(field, &format!("{}.{}", identifier, key))?;
                    }
                }
            }
        }

        debug!(
            "Schema validated: {} node schemas",
            self.schema.node_schema.len()
        );
        Ok(())
    }

    /// Checks that every allowed type of `field` is declared in the schema.
    fn validate_field(&self, field: &FieldSchema, scope: &str) -> Result<(), SchemaError> {
        let Some(types) = &field.types else {
            return Ok(());
        };

        for identifier in types {
            if !self.schema.node_schema.contains_key(identifier) {
                return Err(SchemaError::InvalidSchema {
                    reason: format!(
                        "Field {} references unknown node type '{}'",
                        scope, identifier
                    ),
                });
            }
        }

        Ok(())
    }
}
