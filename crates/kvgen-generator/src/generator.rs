//! Record synthesizer: composes generator draws into complete rows.

use crate::generators::address::Address;
use crate::generators::country::{country_id, country_position, country_row};
use crate::generators::{identity, phone, vehicle};
use crate::pools::PoolError;
use crate::reference::ReferenceData;
use crate::sampler::Sampler;
use kvgen_core::catalog::{
    ADDRESS, COUNTRIES_TABLE, FIRSTNAME, GENDER, LASTNAME, LICENSE, PHONEINFO, RESIDENTS_QUALIFIED,
    SSN, VEHICLEINFO, ZIPCODE,
};
use kvgen_core::{CompositeKey, FieldValue, KeyComponent, KeyError, Row, TableDescriptor};
use rand::{CryptoRng, RngCore};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Table has no synthesizer
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Country id outside the country pool
    #[error("Country id {id} is outside the country pool (1..={count})")]
    CountryOutOfRange { id: i32, count: usize },

    /// Key field cannot be re-sampled
    #[error("Field '{field}' of table '{table}' cannot be re-sampled")]
    NotResamplable { table: String, field: String },

    /// Key error
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    /// Reference data error
    #[error("Reference data error: {0}")]
    Pool(#[from] PoolError),
}

/// Produces parent and child rows from the reference pools.
///
/// The synthesizer holds no random state; every call takes the sampler
/// explicitly so callers control seeding.
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    data: ReferenceData,
}

impl RecordSynthesizer {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }

    /// Synthesizer over the built-in reference tables.
    pub fn standard() -> Result<Self, GeneratorError> {
        Ok(Self::new(ReferenceData::standard()?))
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Number of parent rows: one per country.
    pub fn parent_count(&self) -> usize {
        self.data.countries.len()
    }

    /// The parent row with the given 1-based country id.
    pub fn parent_row(&self, table: &TableDescriptor, id: i32) -> Result<Row, GeneratorError> {
        expect_table(table, COUNTRIES_TABLE)?;
        let country = country_position(id)
            .and_then(|p| self.data.countries.get(p))
            .ok_or(GeneratorError::CountryOutOfRange {
                id,
                count: self.parent_count(),
            })?;
        Ok(country_row(&table.qualified_name(), id, country))
    }

    /// Every parent row, in pool order.
    pub fn parent_rows(&self, table: &TableDescriptor) -> Result<Vec<Row>, GeneratorError> {
        expect_table(table, COUNTRIES_TABLE)?;
        let qualified = table.qualified_name();
        self.data
            .countries
            .iter()
            .enumerate()
            .map(|(position, country)| {
                let id = country_id(position).ok_or(GeneratorError::CountryOutOfRange {
                    id: i32::MAX,
                    count: self.parent_count(),
                })?;
                Ok(country_row(&qualified, id, country))
            })
            .collect()
    }

    /// One complete child row under `parent_key`.
    ///
    /// Inherited key fields are copied from `parent_key`; `zipcode` and
    /// `address.zip` carry the same digits.
    pub fn child_row<R: RngCore + CryptoRng>(
        &self,
        table: &TableDescriptor,
        sampler: &mut Sampler<R>,
        parent_key: &CompositeKey,
    ) -> Result<Row, GeneratorError> {
        expect_table(table, RESIDENTS_QUALIFIED)?;

        let inherited = table.inherited_key_fields();
        if inherited.len() != parent_key.len() {
            return Err(KeyError::Arity {
                table: table.qualified_name(),
                expected: inherited.len(),
                actual: parent_key.len(),
            }
            .into());
        }

        let mut row = Row::new(table.qualified_name());
        for (field, component) in inherited.iter().zip(parent_key.components()) {
            row.set(field.name.clone(), FieldValue::from(component.clone()));
        }

        let zipcode = identity::zipcode(sampler);
        row.set(ZIPCODE, zipcode.as_str());
        row.set(SSN, identity::ssn(sampler));
        row.set(LASTNAME, identity::last_name(sampler, &self.data));

        let (gender, first_name) = identity::gender_and_first_name(sampler, &self.data);
        row.set(FIRSTNAME, first_name);
        row.set(GENDER, FieldValue::Enum(gender.as_str().to_string()));
        row.set(LICENSE, FieldValue::FixedBinary(identity::license(sampler)));
        row.set(PHONEINFO, FieldValue::Map(phone::phoneinfo(sampler, &self.data)));
        row.set(
            ADDRESS,
            Address::generate(sampler, &self.data, &zipcode).into_value(),
        );
        row.set(
            VEHICLEINFO,
            FieldValue::Array(
                vehicle::vehicles(sampler, &self.data)
                    .into_iter()
                    .map(vehicle::Vehicle::into_value)
                    .collect(),
            ),
        );

        Ok(row)
    }

    /// A fresh value for one key field, leaving every other field alone.
    pub fn resample_key_component<R: RngCore + CryptoRng>(
        &self,
        table: &TableDescriptor,
        field: &str,
        sampler: &mut Sampler<R>,
    ) -> Result<KeyComponent, GeneratorError> {
        match (table.qualified_name().as_str(), field) {
            (RESIDENTS_QUALIFIED, SSN) => Ok(KeyComponent::Long(identity::ssn(sampler))),
            (name, _) => Err(GeneratorError::NotResamplable {
                table: name.to_string(),
                field: field.to_string(),
            }),
        }
    }
}

fn expect_table(table: &TableDescriptor, expected: &str) -> Result<(), GeneratorError> {
    let qualified = table.qualified_name();
    if qualified == expected {
        Ok(())
    } else {
        Err(GeneratorError::TableNotFound(qualified))
    }
}
