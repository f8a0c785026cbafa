//! The fixed, hand-authored schema: `countries` and its child `residents`.

use crate::ddl::DdlStatement;
use crate::schema::{FieldDescriptor, IndexDescriptor, SchemaError, TableDescriptor};
use crate::types::FieldType;

pub const COUNTRIES_TABLE: &str = "countries";
pub const RESIDENTS_TABLE: &str = "residents";
pub const RESIDENTS_QUALIFIED: &str = "countries.residents";
pub const FIRSTLAST_INDEX: &str = "firstlast";

pub const COUNTRY_ID: &str = "country_id";
pub const COUNTRY_CODE: &str = "country_code";
pub const COUNTRY_NAME: &str = "country_name";

pub const ZIPCODE: &str = "zipcode";
pub const LASTNAME: &str = "lastname";
pub const FIRSTNAME: &str = "firstname";
pub const SSN: &str = "ssn";
pub const GENDER: &str = "gender";
pub const LICENSE: &str = "license";
pub const PHONEINFO: &str = "phoneinfo";
pub const ADDRESS: &str = "address";
pub const VEHICLEINFO: &str = "vehicleinfo";

/// Byte length of the `license` field.
pub const LICENSE_LEN: usize = 9;

/// Symbols of the `gender` enumeration.
pub const GENDER_SYMBOLS: [&str; 2] = ["male", "female"];

/// The complete schema: both tables and the secondary index.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub countries: TableDescriptor,
    pub residents: TableDescriptor,
    pub firstlast: IndexDescriptor,
}

impl Catalog {
    /// Build the standard schema.
    pub fn standard() -> Result<Self, SchemaError> {
        let countries = TableDescriptor::top_level(
            COUNTRIES_TABLE,
            vec![
                FieldDescriptor::new(COUNTRY_ID, FieldType::Integer),
                FieldDescriptor::new(COUNTRY_CODE, FieldType::String),
                FieldDescriptor::new(COUNTRY_NAME, FieldType::String),
            ],
            &[COUNTRY_ID],
            &[COUNTRY_ID],
        )?;

        let residents = TableDescriptor::child(
            &countries,
            RESIDENTS_TABLE,
            vec![
                FieldDescriptor::new(ZIPCODE, FieldType::String),
                FieldDescriptor::new(LASTNAME, FieldType::String),
                FieldDescriptor::new(FIRSTNAME, FieldType::String),
                FieldDescriptor::new(SSN, FieldType::Long),
                FieldDescriptor::new(GENDER, FieldType::enumeration(&GENDER_SYMBOLS)),
                FieldDescriptor::new(LICENSE, FieldType::fixed_binary(LICENSE_LEN)),
                FieldDescriptor::new(PHONEINFO, FieldType::map(FieldType::String)),
                FieldDescriptor::new(ADDRESS, address_type()),
                FieldDescriptor::new(VEHICLEINFO, FieldType::array(vehicle_type())),
            ],
            &[SSN],
        )?;

        let firstlast = IndexDescriptor::new(FIRSTLAST_INDEX, &residents, &[FIRSTNAME, LASTNAME])?;

        Ok(Self {
            countries,
            residents,
            firstlast,
        })
    }

    /// Setup statements in dependency order: parent, child, index.
    pub fn setup_statements(&self) -> Vec<DdlStatement<'_>> {
        vec![
            DdlStatement::CreateTable(&self.countries),
            DdlStatement::CreateTable(&self.residents),
            DdlStatement::CreateIndex(&self.firstlast),
        ]
    }

    /// Teardown statements in reverse dependency order: index, child, parent.
    pub fn teardown_statements(&self) -> Vec<DdlStatement<'_>> {
        vec![
            DdlStatement::DropIndex(&self.firstlast),
            DdlStatement::DropTable(&self.residents),
            DdlStatement::DropTable(&self.countries),
        ]
    }
}

fn address_type() -> FieldType {
    FieldType::record(vec![
        FieldDescriptor::new("number", FieldType::Integer),
        FieldDescriptor::new("street", FieldType::String),
        FieldDescriptor::new("unit", FieldType::Integer),
        FieldDescriptor::new("city", FieldType::String),
        FieldDescriptor::new("state", FieldType::String),
        FieldDescriptor::new("zip", FieldType::Integer),
    ])
}

fn vehicle_type() -> FieldType {
    FieldType::record(vec![
        FieldDescriptor::new("type", FieldType::String),
        FieldDescriptor::new("make", FieldType::String),
        FieldDescriptor::new("model", FieldType::String),
        FieldDescriptor::new("class", FieldType::String),
        FieldDescriptor::new("color", FieldType::String),
        FieldDescriptor::new("value", FieldType::Float),
        FieldDescriptor::new("tax", FieldType::Double),
        FieldDescriptor::new("paid", FieldType::Boolean),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_keys() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.countries.primary_key(), [COUNTRY_ID]);
        assert_eq!(catalog.residents.qualified_name(), RESIDENTS_QUALIFIED);
        assert_eq!(catalog.residents.primary_key(), [COUNTRY_ID, SSN]);
        assert_eq!(catalog.residents.shard_key(), [COUNTRY_ID]);
        assert_eq!(catalog.residents.mutable_key_field(), Some(SSN));
    }

    #[test]
    fn test_statement_order() {
        let catalog = Catalog::standard().unwrap();
        let setup: Vec<String> = catalog
            .setup_statements()
            .iter()
            .map(|s| s.text())
            .collect();
        assert!(setup[0].starts_with("CREATE TABLE IF NOT EXISTS countries ("));
        assert!(setup[1].starts_with("CREATE TABLE IF NOT EXISTS countries.residents ("));
        assert!(setup[1].contains("gender ENUM(male,female)"));
        assert!(setup[1].contains("license BINARY(9)"));
        assert!(setup[1].ends_with("PRIMARY KEY (ssn))"));
        assert_eq!(
            setup[2],
            "CREATE INDEX IF NOT EXISTS firstlast ON countries.residents(firstname, lastname)"
        );

        let teardown = catalog.teardown_statements();
        assert!(teardown.iter().all(|s| s.is_drop()));
        assert_eq!(
            teardown[2].text(),
            "DROP TABLE IF EXISTS countries"
        );
    }
}
