//! Field types for table descriptors.
//!
//! `FieldType` is the type universe of the key-value table model: primitives,
//! enumerations, fixed-length binary and the three complex shapes (map, record,
//! array). Each store derives its own DDL from it through the [`ToDdl`] trait.

use crate::schema::FieldDescriptor;
use std::fmt;

/// Type of a single table field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Boolean value
    Boolean,

    /// 32-bit signed integer
    Integer,

    /// 64-bit signed integer
    Long,

    /// 32-bit IEEE 754 floating point
    Float,

    /// 64-bit IEEE 754 floating point
    Double,

    /// Unbounded text
    String,

    /// Enumeration with a closed set of symbols
    Enum {
        /// Declared symbols, in declaration order
        symbols: Vec<String>,
    },

    /// Binary value of an exact length
    FixedBinary {
        /// Length in bytes
        size: usize,
    },

    /// Map from string keys to values of one type
    Map {
        /// Type of every map value
        value_type: Box<FieldType>,
    },

    /// Nested record with named fields
    Record {
        /// Record fields, in declaration order
        fields: Vec<FieldDescriptor>,
    },

    /// Ordered sequence of values of one type
    Array {
        /// Element type
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Create an enumeration type from its symbols.
    pub fn enumeration(symbols: &[&str]) -> Self {
        Self::Enum {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a fixed-length binary type.
    pub fn fixed_binary(size: usize) -> Self {
        Self::FixedBinary { size }
    }

    /// Create a map type with the given value type.
    pub fn map(value_type: FieldType) -> Self {
        Self::Map {
            value_type: Box::new(value_type),
        }
    }

    /// Create a record type from its fields.
    pub fn record(fields: Vec<FieldDescriptor>) -> Self {
        Self::Record { fields }
    }

    /// Create an array type with the given element type.
    pub fn array(element_type: FieldType) -> Self {
        Self::Array {
            element_type: Box::new(element_type),
        }
    }

    /// Whether values of this type may be a primary key component.
    pub fn is_key_type(&self) -> bool {
        matches!(self, Self::Integer | Self::Long | Self::String)
    }

    /// Whether this type is a primitive (not map, record or array).
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Self::Map { .. } | Self::Record { .. } | Self::Array { .. }
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TableDdl.to_ddl(self))
    }
}

/// Trait for rendering a `FieldType` in a store's DDL dialect.
pub trait ToDdl {
    /// Generate the DDL type definition for the given `FieldType`.
    fn to_ddl(&self, field_type: &FieldType) -> String;
}

/// The key-value table DDL dialect (`CREATE TABLE ... (zipcode STRING, ...)`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDdl;

impl ToDdl for TableDdl {
    fn to_ddl(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::Boolean => "BOOLEAN".to_string(),
            FieldType::Integer => "INTEGER".to_string(),
            FieldType::Long => "LONG".to_string(),
            FieldType::Float => "FLOAT".to_string(),
            FieldType::Double => "DOUBLE".to_string(),
            FieldType::String => "STRING".to_string(),
            FieldType::Enum { symbols } => format!("ENUM({})", symbols.join(",")),
            FieldType::FixedBinary { size } => format!("BINARY({size})"),
            FieldType::Map { value_type } => format!("MAP({})", self.to_ddl(value_type)),
            FieldType::Record { fields } => {
                let columns: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{} {}", f.name, self.to_ddl(&f.field_type)))
                    .collect();
                format!("RECORD({})", columns.join(", "))
            }
            FieldType::Array { element_type } => format!("ARRAY({})", self.to_ddl(element_type)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_ddl() {
        assert_eq!(TableDdl.to_ddl(&FieldType::Long), "LONG");
        assert_eq!(TableDdl.to_ddl(&FieldType::Double), "DOUBLE");
        assert_eq!(
            TableDdl.to_ddl(&FieldType::enumeration(&["male", "female"])),
            "ENUM(male,female)"
        );
        assert_eq!(TableDdl.to_ddl(&FieldType::fixed_binary(9)), "BINARY(9)");
        assert_eq!(
            TableDdl.to_ddl(&FieldType::map(FieldType::String)),
            "MAP(STRING)"
        );
    }

    #[test]
    fn test_nested_ddl() {
        let vehicle = FieldType::record(vec![
            FieldDescriptor::new("type", FieldType::String),
            FieldDescriptor::new("value", FieldType::Float),
            FieldDescriptor::new("paid", FieldType::Boolean),
        ]);
        assert_eq!(
            FieldType::array(vehicle).to_string(),
            "ARRAY(RECORD(type STRING, value FLOAT, paid BOOLEAN))"
        );
    }

    #[test]
    fn test_key_types() {
        assert!(FieldType::Integer.is_key_type());
        assert!(FieldType::Long.is_key_type());
        assert!(FieldType::String.is_key_type());
        assert!(!FieldType::Float.is_key_type());
        assert!(!FieldType::fixed_binary(9).is_key_type());
        assert!(!FieldType::map(FieldType::String).is_scalar());
    }
}
