//! Checks that a row matches its table descriptor.

use crate::schema::TableDescriptor;
use crate::types::FieldType;
use crate::values::{FieldValue, Row};

/// A value that does not match its declared type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {reason}")]
pub struct ConformanceError {
    /// Dotted path to the offending value, e.g. `vehicleinfo[1].model`
    pub path: String,
    pub reason: String,
}

impl ConformanceError {
    fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Validate every field of `row` against `table`, including inherited key fields.
///
/// Every declared field must be present and no undeclared field may appear.
pub fn validate_row(table: &TableDescriptor, row: &Row) -> Result<(), ConformanceError> {
    if row.table != table.qualified_name() {
        return Err(ConformanceError::new(
            &row.table,
            format!("row belongs to '{}', not '{}'", row.table, table.qualified_name()),
        ));
    }

    for field in table.all_fields() {
        let value = row
            .get(&field.name)
            .ok_or_else(|| ConformanceError::new(&field.name, "missing required field"))?;
        validate_value(&field.name, &field.field_type, value)?;
    }

    if let Some(extra) = row.fields.keys().find(|name| table.field(name).is_none()) {
        return Err(ConformanceError::new(extra, "field is not declared"));
    }

    Ok(())
}

/// Validate one value against its type.
pub fn validate_value(
    path: &str,
    field_type: &FieldType,
    value: &FieldValue,
) -> Result<(), ConformanceError> {
    let mismatch = || {
        ConformanceError::new(
            path,
            format!("expected {field_type}, found {} value", value.kind()),
        )
    };

    match (field_type, value) {
        (FieldType::Boolean, FieldValue::Boolean(_))
        | (FieldType::Integer, FieldValue::Integer(_))
        | (FieldType::Long, FieldValue::Long(_))
        | (FieldType::String, FieldValue::String(_)) => Ok(()),
        (FieldType::Float, FieldValue::Float(v)) if v.is_finite() => Ok(()),
        (FieldType::Double, FieldValue::Double(v)) if v.is_finite() => Ok(()),
        (FieldType::Enum { symbols }, FieldValue::Enum(symbol)) => {
            if symbols.iter().any(|s| s == symbol) {
                Ok(())
            } else {
                Err(ConformanceError::new(
                    path,
                    format!("'{symbol}' is not one of {}", symbols.join(",")),
                ))
            }
        }
        (FieldType::FixedBinary { size }, FieldValue::FixedBinary(bytes)) => {
            if bytes.len() == *size {
                Ok(())
            } else {
                Err(ConformanceError::new(
                    path,
                    format!("expected {size} bytes, found {}", bytes.len()),
                ))
            }
        }
        (FieldType::Map { value_type }, FieldValue::Map(entries)) => {
            for (key, item) in entries {
                validate_value(&format!("{path}.{key}"), value_type, item)?;
            }
            Ok(())
        }
        (FieldType::Record { fields }, FieldValue::Record(entries)) => {
            for field in fields {
                let nested = format!("{path}.{}", field.name);
                let item = entries
                    .get(&field.name)
                    .ok_or_else(|| ConformanceError::new(&nested, "missing required field"))?;
                validate_value(&nested, &field.field_type, item)?;
            }
            if let Some(extra) = entries
                .keys()
                .find(|name| !fields.iter().any(|f| &f.name == *name))
            {
                return Err(ConformanceError::new(
                    &format!("{path}.{extra}"),
                    "field is not declared",
                ));
            }
            Ok(())
        }
        (FieldType::Array { element_type }, FieldValue::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                validate_value(&format!("{path}[{i}]"), element_type, item)?;
            }
            Ok(())
        }
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::schema::FieldDescriptor;
    use std::collections::BTreeMap;

    fn country_row() -> Row {
        Row::new("countries")
            .with("country_id", 1)
            .with("country_code", "AF")
            .with("country_name", "Afghanistan")
    }

    #[test]
    fn test_complete_row_conforms() {
        let catalog = Catalog::standard().unwrap();
        assert!(validate_row(&catalog.countries, &country_row()).is_ok());
    }

    #[test]
    fn test_missing_and_extra_fields() {
        let catalog = Catalog::standard().unwrap();
        let mut row = country_row();
        row.fields.remove("country_code");
        let err = validate_row(&catalog.countries, &row).unwrap_err();
        assert_eq!(err.path, "country_code");

        let row = country_row().with("population", 5);
        let err = validate_row(&catalog.countries, &row).unwrap_err();
        assert_eq!(err.path, "population");
    }

    #[test]
    fn test_enum_and_binary_checks() {
        let gender = FieldType::enumeration(&["male", "female"]);
        assert!(validate_value("gender", &gender, &FieldValue::Enum("male".into())).is_ok());
        assert!(validate_value("gender", &gender, &FieldValue::Enum("other".into())).is_err());
        assert!(validate_value("gender", &gender, &FieldValue::String("male".into())).is_err());

        let license = FieldType::fixed_binary(9);
        assert!(validate_value("license", &license, &FieldValue::FixedBinary(b"S12345678".to_vec())).is_ok());
        assert!(validate_value("license", &license, &FieldValue::FixedBinary(b"S1".to_vec())).is_err());
    }

    #[test]
    fn test_nested_path_reported() {
        let vehicle = FieldType::record(vec![
            FieldDescriptor::new("make", FieldType::String),
            FieldDescriptor::new("paid", FieldType::Boolean),
        ]);
        let mut first = BTreeMap::new();
        first.insert("make".to_string(), FieldValue::from("Ford"));
        first.insert("paid".to_string(), FieldValue::Boolean(true));
        let mut second = BTreeMap::new();
        second.insert("make".to_string(), FieldValue::from("GM"));

        let value = FieldValue::Array(vec![FieldValue::Record(first), FieldValue::Record(second)]);
        let err = validate_value("vehicleinfo", &FieldType::array(vehicle), &value).unwrap_err();
        assert_eq!(err.path, "vehicleinfo[1].paid");
    }
}
