//! `countries` rows and country ids.

use crate::reference::Country;
use kvgen_core::catalog::{COUNTRY_CODE, COUNTRY_ID, COUNTRY_NAME};
use kvgen_core::Row;

/// Country id for a zero-based pool position.
pub fn country_id(position: usize) -> Option<i32> {
    i32::try_from(position).ok()?.checked_add(1)
}

/// Zero-based pool position for a country id.
pub fn country_position(id: i32) -> Option<usize> {
    usize::try_from(id).ok()?.checked_sub(1)
}

/// The parent row for one country. Content depends only on its inputs.
pub fn country_row(table: &str, id: i32, country: &Country) -> Row {
    Row::new(table)
        .with(COUNTRY_ID, id)
        .with(COUNTRY_CODE, country.code.as_str())
        .with(COUNTRY_NAME, country.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvgen_core::FieldValue;

    #[test]
    fn test_ids_are_one_based() {
        assert_eq!(country_id(0), Some(1));
        assert_eq!(country_id(245), Some(246));
        assert_eq!(country_position(1), Some(0));
        assert_eq!(country_position(0), None);
        assert_eq!(country_position(-3), None);
    }

    #[test]
    fn test_country_row() {
        let row = country_row("countries", 3, &Country::new("DZ", "Algeria"));
        assert_eq!(row.get(COUNTRY_ID), Some(&FieldValue::Integer(3)));
        assert_eq!(row.get(COUNTRY_CODE), Some(&FieldValue::from("DZ")));
        assert_eq!(row.get(COUNTRY_NAME), Some(&FieldValue::from("Algeria")));
    }
}
