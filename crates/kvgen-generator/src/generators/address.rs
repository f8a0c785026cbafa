//! `address` record.

use super::digit_value;
use crate::reference::ReferenceData;
use crate::sampler::Sampler;
use kvgen_core::FieldValue;
use rand::{CryptoRng, RngCore};
use std::collections::BTreeMap;

pub const MAX_STREET_NUMBER: i32 = 99_998;
pub const MIN_UNIT: i32 = -1;
pub const MAX_UNIT: i32 = 9;

/// A generated street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub number: i32,
    pub street: String,
    /// `-1` means no unit
    pub unit: i32,
    pub city: String,
    pub state: String,
    pub zip: i32,
}

impl Address {
    /// Generate an address whose `zip` is the numeric value of `zipcode`.
    pub fn generate<R: RngCore + CryptoRng>(
        sampler: &mut Sampler<R>,
        data: &ReferenceData,
        zipcode: &str,
    ) -> Self {
        let number = sampler.sample_range(0, MAX_STREET_NUMBER);
        let street = sampler.choose(&data.street_names).clone();
        let unit = sampler.sample_range(MIN_UNIT, MAX_UNIT);
        let city = sampler.choose(&data.city_names).clone();
        let state = sampler.choose(&data.states).clone();
        Self {
            number,
            street,
            unit,
            city,
            state,
            zip: zip_value(zipcode),
        }
    }

    pub fn into_value(self) -> FieldValue {
        let mut fields = BTreeMap::new();
        fields.insert("number".to_string(), FieldValue::Integer(self.number));
        fields.insert("street".to_string(), FieldValue::String(self.street));
        fields.insert("unit".to_string(), FieldValue::Integer(self.unit));
        fields.insert("city".to_string(), FieldValue::String(self.city));
        fields.insert("state".to_string(), FieldValue::String(self.state));
        fields.insert("zip".to_string(), FieldValue::Integer(self.zip));
        FieldValue::Record(fields)
    }
}

fn zip_value(zipcode: &str) -> i32 {
    i32::try_from(digit_value(zipcode)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_shares_zipcode_digits() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        let address = Address::generate(&mut sampler, &data, "02139");
        assert_eq!(address.zip, 2139);
    }

    #[test]
    fn test_ranges_and_pools() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        for _ in 0..500 {
            let a = Address::generate(&mut sampler, &data, "12345");
            assert!((0..=MAX_STREET_NUMBER).contains(&a.number));
            assert!((MIN_UNIT..=MAX_UNIT).contains(&a.unit));
            assert!(data.street_names.contains(&a.street));
            assert!(data.city_names.contains(&a.city));
            assert!(data.states.contains(&a.state));
        }
    }
}
