//! Personal identity fields: zipcode, ssn, names, gender and license.

use super::digit_value;
use crate::reference::ReferenceData;
use crate::sampler::Sampler;
use rand::{CryptoRng, RngCore};

pub const ZIPCODE_DIGITS: usize = 5;
pub const SSN_DIGITS: usize = 9;
pub const LICENSE_PREFIX: &str = "S";
pub const LICENSE_DIGITS: usize = 8;

/// Value of the `gender` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Five random digits.
pub fn zipcode<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>) -> String {
    sampler.sample_digits(ZIPCODE_DIGITS)
}

/// Nine random digits read as a number.
pub fn ssn<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>) -> i64 {
    digit_value(&sampler.sample_digits(SSN_DIGITS))
}

/// Fair-coin gender, then a first name from the matching pool.
pub fn gender_and_first_name<R: RngCore + CryptoRng>(
    sampler: &mut Sampler<R>,
    data: &ReferenceData,
) -> (Gender, String) {
    if sampler.sample_bool() {
        (Gender::Male, sampler.choose(&data.male_first_names).clone())
    } else {
        (Gender::Female, sampler.choose(&data.female_first_names).clone())
    }
}

pub fn last_name<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>, data: &ReferenceData) -> String {
    sampler.choose(&data.last_names).clone()
}

/// License bytes: `S` followed by eight random digits.
pub fn license<R: RngCore + CryptoRng>(sampler: &mut Sampler<R>) -> Vec<u8> {
    sampler
        .sample_prefixed_digits(LICENSE_PREFIX, LICENSE_DIGITS)
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssn_range() {
        let mut sampler = Sampler::seeded(42);
        for _ in 0..500 {
            let v = ssn(&mut sampler);
            assert!((0..=999_999_999).contains(&v));
        }
    }

    #[test]
    fn test_first_name_matches_gender() {
        let data = ReferenceData::standard().unwrap();
        let mut sampler = Sampler::seeded(42);
        let mut genders = Vec::new();
        for _ in 0..200 {
            let (gender, name) = gender_and_first_name(&mut sampler, &data);
            let pool = match gender {
                Gender::Male => &data.male_first_names,
                Gender::Female => &data.female_first_names,
            };
            assert!(pool.contains(&name), "{name} not in {} pool", gender.as_str());
            genders.push(gender);
        }
        assert!(genders.contains(&Gender::Male));
        assert!(genders.contains(&Gender::Female));
    }

    #[test]
    fn test_license_shape() {
        let mut sampler = Sampler::seeded(42);
        let bytes = license(&mut sampler);
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[0], b'S');
        assert!(bytes[1..].iter().all(u8::is_ascii_digit));
    }

    #[test]
    fn test_zipcode_shape() {
        let mut sampler = Sampler::seeded(42);
        let zip = zipcode(&mut sampler);
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()));
    }
}
