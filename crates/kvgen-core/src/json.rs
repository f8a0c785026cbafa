//! JSON conversion for rows, values and keys.
//!
//! Forward conversion is untyped; reverse conversion needs the declared
//! `FieldType` because JSON cannot tell an enum from a string or a float from
//! a double. Fixed binary is carried as standard base64 text.

use crate::schema::TableDescriptor;
use crate::types::FieldType;
use crate::values::{CompositeKey, FieldValue, KeyComponent, Row};
use base64::Engine;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Error type for JSON → value conversion.
#[derive(Debug, thiserror::Error)]
pub enum JsonDecodeError {
    /// JSON shape does not match the declared type
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Integer does not fit the declared width
    #[error("{path}: {value} is out of range for {expected}")]
    OutOfRange {
        path: String,
        value: String,
        expected: &'static str,
    },

    /// Binary field is not valid base64
    #[error("{path}: invalid base64: {source}")]
    Base64 {
        path: String,
        #[source]
        source: base64::DecodeError,
    },

    /// Top-level row is not a JSON object
    #[error("Row of table '{0}' is not a JSON object")]
    NotAnObject(String),
}

// ============================================================================
// Forward: value → JSON
// ============================================================================

/// Convert a field value to JSON.
pub fn to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Boolean(b) => json!(*b),
        FieldValue::Integer(i) => json!(*i),
        FieldValue::Long(i) => json!(*i),
        FieldValue::Float(f) => json!(*f),
        FieldValue::Double(f) => json!(*f),
        FieldValue::String(s) | FieldValue::Enum(s) => json!(s),
        FieldValue::FixedBinary(bytes) => {
            json!(base64::engine::general_purpose::STANDARD.encode(bytes))
        }
        FieldValue::Map(entries) | FieldValue::Record(entries) => Value::Object(object(entries)),
        FieldValue::Array(items) => Value::Array(items.iter().map(to_json).collect()),
    }
}

/// Convert every field of a row to one JSON object.
pub fn row_to_json(row: &Row) -> Value {
    Value::Object(object(&row.fields))
}

fn object(entries: &BTreeMap<String, FieldValue>) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), to_json(v)))
        .collect()
}

/// Convert a composite key to a JSON array.
pub fn key_to_json(key: &CompositeKey) -> Value {
    Value::Array(
        key.components()
            .iter()
            .map(|c| match c {
                KeyComponent::Integer(i) => json!(*i),
                KeyComponent::Long(i) => json!(*i),
                KeyComponent::String(s) => json!(s),
            })
            .collect(),
    )
}

// ============================================================================
// Reverse: JSON → value
// ============================================================================

/// Convert JSON to a value of the declared type.
pub fn from_json(path: &str, field_type: &FieldType, value: &Value) -> Result<FieldValue, JsonDecodeError> {
    let mismatch = || JsonDecodeError::TypeMismatch {
        path: path.to_string(),
        expected: field_type.to_string(),
        found: json_kind(value).to_string(),
    };

    match field_type {
        FieldType::Boolean => value.as_bool().map(FieldValue::Boolean).ok_or_else(mismatch),
        FieldType::Integer => {
            let wide = value.as_i64().ok_or_else(mismatch)?;
            i32::try_from(wide)
                .map(FieldValue::Integer)
                .map_err(|_| JsonDecodeError::OutOfRange {
                    path: path.to_string(),
                    value: wide.to_string(),
                    expected: "INTEGER",
                })
        }
        FieldType::Long => value.as_i64().map(FieldValue::Long).ok_or_else(mismatch),
        FieldType::Float => value
            .as_f64()
            .map(|f| FieldValue::Float(f as f32))
            .ok_or_else(mismatch),
        FieldType::Double => value.as_f64().map(FieldValue::Double).ok_or_else(mismatch),
        FieldType::String => value
            .as_str()
            .map(|s| FieldValue::String(s.to_string()))
            .ok_or_else(mismatch),
        FieldType::Enum { .. } => value
            .as_str()
            .map(|s| FieldValue::Enum(s.to_string()))
            .ok_or_else(mismatch),
        FieldType::FixedBinary { .. } => {
            let text = value.as_str().ok_or_else(mismatch)?;
            base64::engine::general_purpose::STANDARD
                .decode(text)
                .map(FieldValue::FixedBinary)
                .map_err(|source| JsonDecodeError::Base64 {
                    path: path.to_string(),
                    source,
                })
        }
        FieldType::Map { value_type } => {
            let obj = value.as_object().ok_or_else(mismatch)?;
            let mut entries = BTreeMap::new();
            for (k, v) in obj {
                entries.insert(k.clone(), from_json(&format!("{path}.{k}"), value_type, v)?);
            }
            Ok(FieldValue::Map(entries))
        }
        FieldType::Record { fields } => {
            let obj = value.as_object().ok_or_else(mismatch)?;
            let mut entries = BTreeMap::new();
            for field in fields {
                if let Some(v) = obj.get(&field.name) {
                    let nested = format!("{path}.{}", field.name);
                    entries.insert(field.name.clone(), from_json(&nested, &field.field_type, v)?);
                }
            }
            Ok(FieldValue::Record(entries))
        }
        FieldType::Array { element_type } => {
            let items = value.as_array().ok_or_else(mismatch)?;
            items
                .iter()
                .enumerate()
                .map(|(i, v)| from_json(&format!("{path}[{i}]"), element_type, v))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::Array)
        }
    }
}

/// Convert a JSON object back into a row of `table`.
///
/// Undeclared members are ignored; missing members stay absent so that
/// conformance checking can report them.
pub fn row_from_json(table: &TableDescriptor, value: &Value) -> Result<Row, JsonDecodeError> {
    let qualified = table.qualified_name();
    let obj = value
        .as_object()
        .ok_or_else(|| JsonDecodeError::NotAnObject(qualified.clone()))?;

    let mut row = Row::new(qualified);
    for field in table.all_fields() {
        if let Some(v) = obj.get(&field.name) {
            row.set(field.name.clone(), from_json(&field.name, &field.field_type, v)?);
        }
    }
    Ok(row)
}

/// Convert a JSON array back into a composite key of `table`.
pub fn key_from_json(table: &TableDescriptor, value: &Value) -> Result<CompositeKey, JsonDecodeError> {
    let items = value.as_array().ok_or_else(|| JsonDecodeError::TypeMismatch {
        path: table.qualified_name(),
        expected: "key array".to_string(),
        found: json_kind(value).to_string(),
    })?;

    if items.len() != table.primary_key().len() {
        return Err(JsonDecodeError::TypeMismatch {
            path: table.qualified_name(),
            expected: format!("{} key components", table.primary_key().len()),
            found: format!("{} components", items.len()),
        });
    }

    let mut components = Vec::with_capacity(items.len());
    for (name, item) in table.primary_key().iter().zip(items) {
        let field_type = table
            .field(name)
            .map(|f| &f.field_type)
            .unwrap_or(&FieldType::String);
        let component = match from_json(name, field_type, item)? {
            FieldValue::Integer(i) => KeyComponent::Integer(i),
            FieldValue::Long(i) => KeyComponent::Long(i),
            FieldValue::String(s) => KeyComponent::String(s),
            other => {
                return Err(JsonDecodeError::TypeMismatch {
                    path: name.clone(),
                    expected: "key component".to_string(),
                    found: other.kind().to_string(),
                })
            }
        };
        components.push(component);
    }
    Ok(CompositeKey::new(components))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_binary_is_base64() {
        let value = FieldValue::FixedBinary(b"S12345678".to_vec());
        assert_eq!(to_json(&value), json!("UzEyMzQ1Njc4"));

        let back = from_json("license", &FieldType::fixed_binary(9), &json!("UzEyMzQ1Njc4")).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_declared_type_drives_decoding() {
        let gender = FieldType::enumeration(&["male", "female"]);
        assert_eq!(
            from_json("gender", &gender, &json!("female")).unwrap(),
            FieldValue::Enum("female".to_string())
        );
        assert_eq!(
            from_json("value", &FieldType::Float, &json!(20743.18_f32)).unwrap(),
            FieldValue::Float(20743.18)
        );
        assert!(matches!(
            from_json("number", &FieldType::Integer, &json!(5_000_000_000_i64)),
            Err(JsonDecodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            from_json("zip", &FieldType::Integer, &json!("12345")),
            Err(JsonDecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_row_from_json_ignores_unknown_members() {
        let catalog = Catalog::standard().unwrap();
        let value = json!({
            "country_id": 4,
            "country_code": "AS",
            "country_name": "American Samoa",
            "id": "ignored"
        });
        let row = row_from_json(&catalog.countries, &value).unwrap();
        assert_eq!(row.get("country_id"), Some(&FieldValue::Integer(4)));
        assert!(row.get("id").is_none());
        assert_eq!(row_to_json(&row)["country_code"], json!("AS"));
    }

    #[test]
    fn test_key_json() {
        let catalog = Catalog::standard().unwrap();
        let key = CompositeKey::new(vec![KeyComponent::Integer(12), KeyComponent::Long(987_654_321)]);
        let encoded = key_to_json(&key);
        assert_eq!(encoded, json!([12, 987_654_321]));
        assert_eq!(key_from_json(&catalog.residents, &encoded).unwrap(), key);
        assert!(key_from_json(&catalog.countries, &encoded).is_err());
    }
}
