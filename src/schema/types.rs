//! Contract definition types
//!
//! A contract definition is plain data: it names the ledger key prefix, the
//! ordered record fields, the seed rows written at ledger initialization, and
//! the operation names the router answers to. The two deployed variants (the
//! four-field LPN contract and the single-field Barcode contract) differ only
//! in this data, so one definition type parameterizes the whole state machine.

use serde::{Deserialize, Serialize};

/// Operation-name table for one contract.
///
/// Names are matched exactly and case-sensitively by the router. The
/// field-update operation is optional: a single-field contract has nothing to
/// selectively update and simply does not expose one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationNames {
    /// Bulk ledger initialization
    pub seed: String,
    /// Single caller-driven record write
    pub create: String,
    /// Point read by key
    pub point_query: String,
    /// Full-table range read
    pub range_query: String,
    /// Designated-field rewrite, if the contract declares an update field
    #[serde(default)]
    pub field_update: Option<String>,
}

/// A complete contract definition.
///
/// Field order is significant: it is the declared schema order, used for
/// serialized output and for positional create arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDefinition {
    /// Identifier used by the definition registry and file naming
    pub contract_id: String,
    /// Prefix for seeded record keys (`<prefix><index>`)
    pub key_prefix: String,
    /// Ordered record field names
    pub fields: Vec<String>,
    /// Field rewritten by the field-update operation, if any
    #[serde(default)]
    pub update_field: Option<String>,
    /// Rows written by the seed operation, one value per field in order
    pub seed_rows: Vec<Vec<String>>,
    /// Operation names answered by the router
    pub operations: OperationNames,
}

impl ContractDefinition {
    /// Number of record fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Positional index of a field name, if declared.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Positional index of the designated update field, if any.
    pub fn update_field_index(&self) -> Option<usize> {
        self.update_field
            .as_deref()
            .and_then(|name| self.field_index(name))
    }

    /// Argument count the create operation expects: key plus one value per field.
    pub fn create_arity(&self) -> usize {
        1 + self.fields.len()
    }

    /// Validates structural invariants of the definition.
    ///
    /// Returns a human-readable reason on failure; callers wrap it into their
    /// own error type.
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.contract_id.is_empty() {
            return Err("contract_id must not be empty".to_string());
        }
        if self.key_prefix.is_empty() {
            return Err("key_prefix must not be empty".to_string());
        }
        if self.fields.is_empty() {
            return Err("fields must not be empty".to_string());
        }
        for (i, field) in self.fields.iter().enumerate() {
            if field.is_empty() {
                return Err(format!("field {} has an empty name", i));
            }
            if self.fields[..i].contains(field) {
                return Err(format!("duplicate field name: {}", field));
            }
        }

        match (&self.update_field, &self.operations.field_update) {
            (Some(field), Some(_)) => {
                if self.field_index(field).is_none() {
                    return Err(format!("update_field {} is not a declared field", field));
                }
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err("update_field declared without a field_update operation".to_string());
            }
            (None, Some(_)) => {
                return Err("field_update operation declared without an update_field".to_string());
            }
        }

        for (i, row) in self.seed_rows.iter().enumerate() {
            if row.len() != self.fields.len() {
                return Err(format!(
                    "seed row {} has {} values, expected {}",
                    i,
                    row.len(),
                    self.fields.len()
                ));
            }
        }

        let mut names: Vec<&str> = vec![
            self.operations.seed.as_str(),
            self.operations.create.as_str(),
            self.operations.point_query.as_str(),
            self.operations.range_query.as_str(),
        ];
        if let Some(name) = &self.operations.field_update {
            names.push(name.as_str());
        }
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err("operation names must not be empty".to_string());
            }
            if names[..i].contains(name) {
                return Err(format!("duplicate operation name: {}", name));
            }
        }

        Ok(())
    }
}
