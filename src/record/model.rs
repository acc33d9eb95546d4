//! Record model
//!
//! A record is an ordered set of named string fields whose shape comes from a
//! [`ContractDefinition`]. The serialized form is a JSON object carrying every
//! schema field in declared order; a field is never null, at worst empty.
//!
//! Decoding is permissive: absent bytes decode to the zero record and absent
//! fields default to the empty string. That leniency is load-bearing for the
//! field-update operation, which reads whatever is under the key and rewrites
//! one field without an existence check.

use serde_json::{Map, Value};

use crate::schema::ContractDefinition;

use super::errors::{RecordError, RecordResult};

/// Field values aligned positionally with a definition's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    /// The zero record: every field present and empty.
    pub fn zero(definition: &ContractDefinition) -> Self {
        Self {
            values: vec![String::new(); definition.field_count()],
        }
    }

    /// Builds a record from positional values.
    ///
    /// Callers validate arity first; a mismatched slice is a caller bug.
    pub fn from_values(definition: &ContractDefinition, values: &[String]) -> Self {
        debug_assert_eq!(values.len(), definition.field_count());
        let mut record = Self::zero(definition);
        for (slot, value) in record.values.iter_mut().zip(values) {
            *slot = value.clone();
        }
        record
    }

    /// Returns the value at a field position.
    pub fn field(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// Replaces the value at a field position.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) {
        self.values[index] = value.into();
    }

    /// All field values in declared order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Serializes to canonical JSON bytes.
    ///
    /// Every schema field is emitted, in declared order, even when empty.
    pub fn to_bytes(&self, definition: &ContractDefinition) -> Vec<u8> {
        let mut object = Map::with_capacity(definition.field_count());
        for (name, value) in definition.fields.iter().zip(&self.values) {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        serde_json::to_vec(&Value::Object(object)).expect("Record serialization cannot fail")
    }

    /// Decodes stored bytes against a definition.
    ///
    /// Permissive rules:
    /// - empty bytes decode to the zero record (a read miss carries no bytes)
    /// - fields absent from the object default to the empty string
    /// - unknown members are ignored
    ///
    /// Bytes that are present but not a JSON object, or that carry a
    /// non-string value for a schema field, are malformed.
    pub fn from_bytes(definition: &ContractDefinition, bytes: &[u8]) -> RecordResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::zero(definition));
        }

        let parsed: Value =
            serde_json::from_slice(bytes).map_err(|e| RecordError::Syntax(e.to_string()))?;
        let object = parsed.as_object().ok_or(RecordError::NotAnObject)?;

        let mut values = Vec::with_capacity(definition.field_count());
        for name in &definition.fields {
            match object.get(name) {
                None => values.push(String::new()),
                Some(Value::String(s)) => values.push(s.clone()),
                Some(_) => return Err(RecordError::FieldType(name.clone())),
            }
        }

        Ok(Self { values })
    }
}
