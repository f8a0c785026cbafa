//! Field values, composite keys and rows.

use crate::schema::TableDescriptor;
use std::collections::BTreeMap;
use std::fmt;

/// Error type for key derivation.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// Row lacks a declared key field
    #[error("Row of table '{table}' is missing key field '{field}'")]
    MissingKeyField { table: String, field: String },

    /// Key field holds a value that cannot be a key component
    #[error("Field '{field}' holds a {kind} value, which cannot be a key component")]
    NotAKeyValue { field: String, kind: &'static str },

    /// Key has the wrong number of components for its table
    #[error("Table '{table}' expects a key of {expected} components, got {actual}")]
    Arity {
        table: String,
        expected: usize,
        actual: usize,
    },
}

// ============================================================================
// Field Values
// ============================================================================

/// A value of one field, shaped like its `FieldType`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Enum(String),
    FixedBinary(Vec<u8>),
    Map(BTreeMap<String, FieldValue>),
    Record(BTreeMap<String, FieldValue>),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::FixedBinary(_) => "binary",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            Self::Integer(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Float(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Entries of a map or record value.
    pub fn as_entries(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            Self::Map(m) | Self::Record(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

// ============================================================================
// Composite Keys
// ============================================================================

/// One component of a composite key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyComponent {
    Integer(i32),
    Long(i64),
    String(String),
}

impl KeyComponent {
    /// Extract a key component from a field value.
    pub fn from_value(field: &str, value: &FieldValue) -> Result<Self, KeyError> {
        match value {
            FieldValue::Integer(v) => Ok(Self::Integer(*v)),
            FieldValue::Long(v) => Ok(Self::Long(*v)),
            FieldValue::String(s) => Ok(Self::String(s.clone())),
            other => Err(KeyError::NotAKeyValue {
                field: field.to_string(),
                kind: other.kind(),
            }),
        }
    }
}

impl From<KeyComponent> for FieldValue {
    fn from(component: KeyComponent) -> Self {
        match component {
            KeyComponent::Integer(v) => Self::Integer(v),
            KeyComponent::Long(v) => Self::Long(v),
            KeyComponent::String(s) => Self::String(s),
        }
    }
}

impl fmt::Display for KeyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Ordered key components, in declared primary-key order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(pub Vec<KeyComponent>);

impl CompositeKey {
    pub fn new(components: Vec<KeyComponent>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[KeyComponent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading `n` components (e.g. the inherited parent key).
    pub fn prefix(&self, n: usize) -> CompositeKey {
        CompositeKey(self.0.iter().take(n).cloned().collect())
    }

    /// Whether `self` begins with all components of `other`.
    pub fn starts_with(&self, other: &CompositeKey) -> bool {
        self.0.starts_with(&other.0)
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One row of a table: field name to value, including inherited key fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Qualified table name
    pub table: String,

    /// Field values by name
    pub fields: BTreeMap<String, FieldValue>,
}

impl Row {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Derive the composite primary key in `table`'s declared key order.
    pub fn primary_key(&self, table: &TableDescriptor) -> Result<CompositeKey, KeyError> {
        self.key_of(table, table.primary_key())
    }

    /// Derive the shard key.
    pub fn shard_key(&self, table: &TableDescriptor) -> Result<CompositeKey, KeyError> {
        self.key_of(table, table.shard_key())
    }

    fn key_of(&self, table: &TableDescriptor, fields: &[String]) -> Result<CompositeKey, KeyError> {
        fields
            .iter()
            .map(|name| {
                let value = self.fields.get(name).ok_or_else(|| KeyError::MissingKeyField {
                    table: table.qualified_name(),
                    field: name.clone(),
                })?;
                KeyComponent::from_value(name, value)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CompositeKey)
    }

    /// Overwrite the key fields of this row from `key`.
    pub fn assign_key(&mut self, table: &TableDescriptor, key: &CompositeKey) -> Result<(), KeyError> {
        let names = table.primary_key();
        if names.len() != key.len() {
            return Err(KeyError::Arity {
                table: table.qualified_name(),
                expected: names.len(),
                actual: key.len(),
            });
        }
        for (name, component) in names.iter().zip(key.components()) {
            self.fields
                .insert(name.clone(), FieldValue::from(component.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, COUNTRY_ID, SSN};

    #[test]
    fn test_primary_key_in_declared_order() {
        let catalog = Catalog::standard().unwrap();
        let row = Row::new("countries.residents")
            .with(SSN, 123_456_789_i64)
            .with(COUNTRY_ID, 7);

        let key = row.primary_key(&catalog.residents).unwrap();
        assert_eq!(
            key,
            CompositeKey::new(vec![KeyComponent::Integer(7), KeyComponent::Long(123_456_789)])
        );
        assert_eq!(key.to_string(), "[7, 123456789]");
        assert_eq!(
            row.shard_key(&catalog.residents).unwrap(),
            CompositeKey::new(vec![KeyComponent::Integer(7)])
        );
        assert!(key.starts_with(&key.prefix(1)));
    }

    #[test]
    fn test_missing_key_field() {
        let catalog = Catalog::standard().unwrap();
        let row = Row::new("countries.residents").with(SSN, 1_i64);
        assert!(matches!(
            row.primary_key(&catalog.residents),
            Err(KeyError::MissingKeyField { field, .. }) if field == COUNTRY_ID
        ));
    }

    #[test]
    fn test_non_key_value_rejected() {
        assert!(KeyComponent::from_value("value", &FieldValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_assign_key() {
        let catalog = Catalog::standard().unwrap();
        let mut row = Row::new("countries");
        let key = CompositeKey::new(vec![KeyComponent::Integer(3)]);
        row.assign_key(&catalog.countries, &key).unwrap();
        assert_eq!(row.get(COUNTRY_ID), Some(&FieldValue::Integer(3)));
        assert!(row.assign_key(&catalog.residents, &key).is_err());
    }
}
