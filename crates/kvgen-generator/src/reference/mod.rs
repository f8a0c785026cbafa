//! Reference data pools.
//!
//! Every pool is validated non-empty when [`ReferenceData`] is built, so the
//! synthesizer can sample from any of them without further checks.

pub mod models;
pub mod tables;

use crate::pools::{Pool, PoolError};
pub use models::{ModelCatalog, VehicleType};

/// One entry of the country pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// All pools the record synthesizer samples from.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub last_names: Pool<String>,
    pub female_first_names: Pool<String>,
    pub male_first_names: Pool<String>,
    pub phone_types: Pool<String>,
    pub area_codes: Pool<String>,
    pub exchanges: Pool<String>,
    pub street_names: Pool<String>,
    pub city_names: Pool<String>,
    pub states: Pool<String>,
    pub vehicle_types: Pool<VehicleType>,
    pub makes: Pool<String>,
    pub classes: Pool<String>,
    pub colors: Pool<String>,
    pub models: ModelCatalog,
    pub countries: Pool<Country>,
}

impl ReferenceData {
    /// The built-in reference tables.
    pub fn standard() -> Result<Self, PoolError> {
        Ok(Self {
            last_names: Pool::of_strs("last_names", &tables::LAST_NAMES)?,
            female_first_names: Pool::of_strs("female_first_names", &tables::FEMALE_FIRST_NAMES)?,
            male_first_names: Pool::of_strs("male_first_names", &tables::MALE_FIRST_NAMES)?,
            phone_types: Pool::of_strs("phone_types", &tables::PHONE_TYPES)?,
            area_codes: Pool::of_strs("area_codes", &tables::AREA_CODES)?,
            exchanges: Pool::of_strs("exchanges", &tables::EXCHANGES)?,
            street_names: Pool::of_strs("street_names", &tables::STREET_NAMES)?,
            city_names: Pool::of_strs("city_names", &tables::CITY_NAMES)?,
            states: Pool::of_strs("states", &tables::STATE_ABBREVIATIONS)?,
            vehicle_types: Pool::new("vehicle_types", VehicleType::ALL.to_vec())?,
            makes: Pool::of_strs("makes", &tables::MAKES)?,
            classes: Pool::of_strs("classes", &tables::CLASSES)?,
            colors: Pool::of_strs("colors", &tables::COLORS)?,
            models: ModelCatalog::standard()?,
            countries: Pool::new(
                "countries",
                tables::COUNTRIES
                    .iter()
                    .map(|(code, name)| Country::new(*code, *name))
                    .collect(),
            )?,
        })
    }

    /// Replace the country pool, keeping every other pool.
    pub fn with_countries(mut self, countries: Pool<Country>) -> Self {
        self.countries = countries;
        self
    }

    /// Replace the last-name pool, keeping every other pool.
    pub fn with_last_names(mut self, last_names: Pool<String>) -> Self {
        self.last_names = last_names;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_cardinalities() {
        let data = ReferenceData::standard().unwrap();
        assert_eq!(data.countries.len(), 246);
        assert_eq!(data.last_names.len(), 1000);
        assert_eq!(data.phone_types.as_slice(), ["home", "cell", "work"]);
        assert_eq!(data.states.len(), 50);
        assert_eq!(data.vehicle_types.len(), 3);
    }

    #[test]
    fn test_country_order() {
        let data = ReferenceData::standard().unwrap();
        assert_eq!(data.countries.get(0), Some(&Country::new("AF", "Afghanistan")));
        assert_eq!(data.countries.get(245), Some(&Country::new("ZW", "Zimbabwe")));
    }
}
