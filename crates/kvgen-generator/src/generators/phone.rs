//! `phoneinfo` map: one number per phone type.

use crate::reference::ReferenceData;
use crate::sampler::Sampler;
use kvgen_core::FieldValue;
use rand::{CryptoRng, RngCore};
use std::collections::BTreeMap;

const LINE_DIGITS: usize = 4;

/// `AAA-EEE-NNNN`: area code, exchange, four random digits.
pub fn phone_number<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>, data: &ReferenceData) -> String {
    let area = sampler.choose(&data.area_codes).clone();
    let exchange = sampler.choose(&data.exchanges).clone();
    let line = sampler.sample_digits(LINE_DIGITS);
    format!("{area}-{exchange}-{line}")
}

/// One number per entry of the phone-type pool, in pool order.
pub fn phoneinfo<R: RngCore + CryptoRng>(
    sampler: &mut Sampler<R>,
    data: &ReferenceData,
) -> BTreeMap<String, FieldValue> {
    data.phone_types
        .iter()
        .map(|phone_type| {
            (
                phone_type.clone(),
                FieldValue::String(phone_number(sampler, data)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_format() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        let number = phone_number(&mut sampler, &data);
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(data.area_codes.contains_str(parts[0]));
        assert!(data.exchanges.contains_str(parts[1]));
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_every_phone_type_present() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        let map = phoneinfo(&mut sampler, &data);
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cell", "home", "work"]);
    }
}
