//! Table and index descriptors.
//!
//! A `TableDescriptor` declares a table's fields, its shard key and its
//! primary key. Child tables inherit the full primary key of their parent:
//! the child's primary key is the parent's key fields followed by the child's
//! own key fields, and its shard key is the parent's shard key.

use crate::types::{FieldType, TableDdl, ToDdl};
use std::collections::HashSet;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema construction.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Primary key has no fields
    #[error("Table '{0}' declares an empty primary key")]
    EmptyPrimaryKey(String),

    /// Key refers to a field the table does not declare
    #[error("Table '{table}' declares key field '{field}' which is not one of its fields")]
    UnknownKeyField { table: String, field: String },

    /// Key field has a type that cannot be part of a key
    #[error("Key field '{field}' of table '{table}' has type {field_type}, which cannot be a key component")]
    UnsupportedKeyType {
        table: String,
        field: String,
        field_type: String,
    },

    /// Shard key is not a leading prefix of the primary key
    #[error("Shard key of table '{0}' must be a non-empty prefix of its primary key")]
    ShardKeyNotPrefix(String),

    /// Same field name declared twice (including inherited key fields)
    #[error("Field '{field}' is declared more than once in table '{table}'")]
    DuplicateField { table: String, field: String },

    /// Index refers to a field the table does not declare
    #[error("Index '{index}' refers to unknown field '{field}'")]
    UnknownIndexField { index: String, field: String },
}

// ============================================================================
// Field and Table Descriptors
// ============================================================================

/// A named, typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Field type
    pub field_type: FieldType,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The parent scope a child table is declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentScope {
    /// Qualified name of the parent table
    pub name: String,

    /// The parent's primary key fields, inherited by the child
    pub key_fields: Vec<FieldDescriptor>,
}

/// Declaration of one table: fields, shard key and primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    name: String,
    parent: Option<ParentScope>,
    fields: Vec<FieldDescriptor>,
    own_key: Vec<String>,
    primary_key: Vec<String>,
    shard_key: Vec<String>,
}

impl TableDescriptor {
    /// Declare a top-level table.
    ///
    /// `shard_key` must be a non-empty prefix of `primary_key`.
    pub fn top_level(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        shard_key: &[&str],
        primary_key: &[&str],
    ) -> Result<Self, SchemaError> {
        let table = Self {
            name: name.into(),
            parent: None,
            fields,
            own_key: to_strings(primary_key),
            primary_key: to_strings(primary_key),
            shard_key: to_strings(shard_key),
        };
        table.validate()?;
        Ok(table)
    }

    /// Declare a child table of `parent`.
    ///
    /// The child's primary key is the parent's primary key followed by
    /// `own_key`. The shard key is inherited from the parent.
    pub fn child(
        parent: &TableDescriptor,
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        own_key: &[&str],
    ) -> Result<Self, SchemaError> {
        let key_fields: Vec<FieldDescriptor> = parent
            .primary_key
            .iter()
            .filter_map(|k| parent.field(k).cloned())
            .collect();

        let mut primary_key = parent.primary_key.clone();
        primary_key.extend(to_strings(own_key));

        let table = Self {
            name: name.into(),
            parent: Some(ParentScope {
                name: parent.qualified_name(),
                key_fields,
            }),
            fields,
            own_key: to_strings(own_key),
            primary_key,
            shard_key: parent.shard_key.clone(),
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let qualified = self.qualified_name();

        if self.own_key.is_empty() {
            return Err(SchemaError::EmptyPrimaryKey(qualified));
        }

        let mut seen = HashSet::new();
        for field in self.all_fields() {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    table: qualified,
                    field: field.name.clone(),
                });
            }
        }

        for key in &self.primary_key {
            let field = self
                .field(key)
                .ok_or_else(|| SchemaError::UnknownKeyField {
                    table: qualified.clone(),
                    field: key.clone(),
                })?;
            if !field.field_type.is_key_type() {
                return Err(SchemaError::UnsupportedKeyType {
                    table: qualified,
                    field: key.clone(),
                    field_type: field.field_type.to_string(),
                });
            }
        }

        if self.shard_key.is_empty() || !self.primary_key.starts_with(&self.shard_key) {
            return Err(SchemaError::ShardKeyNotPrefix(qualified));
        }

        Ok(())
    }

    /// Local table name (without the parent prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified table name, e.g. `countries.residents`.
    pub fn qualified_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}.{}", parent.name, self.name),
            None => self.name.clone(),
        }
    }

    /// Parent scope, for child tables.
    pub fn parent(&self) -> Option<&ParentScope> {
        self.parent.as_ref()
    }

    /// Fields declared by this table itself (excluding inherited key fields).
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Key fields inherited from the parent table.
    pub fn inherited_key_fields(&self) -> &[FieldDescriptor] {
        match &self.parent {
            Some(parent) => &parent.key_fields,
            None => &[],
        }
    }

    /// Every field a complete row carries: inherited key fields first.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.inherited_key_fields().iter().chain(self.fields.iter())
    }

    /// Look up a field (own or inherited) by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.all_fields().find(|f| f.name == name)
    }

    /// Full primary key, in key order (inherited components first).
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    /// Key fields declared by this table itself.
    pub fn own_key(&self) -> &[String] {
        &self.own_key
    }

    /// Shard key (a prefix of the primary key).
    pub fn shard_key(&self) -> &[String] {
        &self.shard_key
    }

    /// The trailing key component that is not part of the shard key.
    ///
    /// This is the component the collision resolver re-samples. Tables whose
    /// whole key is the shard key have none.
    pub fn mutable_key_field(&self) -> Option<&str> {
        self.primary_key
            .last()
            .filter(|last| !self.shard_key.contains(last))
            .map(|s| s.as_str())
    }

    /// `CREATE TABLE IF NOT EXISTS` statement text.
    ///
    /// A child table only declares its own fields and key; the parent scope is
    /// expressed through the qualified name.
    pub fn create_statement(&self) -> String {
        let ddl = TableDdl;
        let columns: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{} {}", f.name, ddl.to_ddl(&f.field_type)))
            .collect();

        let key = if self.parent.is_some() {
            self.own_key.join(", ")
        } else if self.shard_key == self.primary_key {
            self.primary_key.join(", ")
        } else {
            let rest = &self.primary_key[self.shard_key.len()..];
            let mut parts = vec![format!("SHARD({})", self.shard_key.join(", "))];
            parts.extend(rest.iter().cloned());
            parts.join(", ")
        };

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({}, PRIMARY KEY ({}))",
            self.qualified_name(),
            columns.join(", "),
            key
        )
    }

    /// `DROP TABLE IF EXISTS` statement text.
    pub fn drop_statement(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.qualified_name())
    }
}

/// Declaration of a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    /// Index name
    pub name: String,

    /// Qualified name of the indexed table
    pub table: String,

    /// Indexed fields, in order
    pub fields: Vec<String>,
}

impl IndexDescriptor {
    /// Declare an index over `fields` of `table`.
    pub fn new(
        name: impl Into<String>,
        table: &TableDescriptor,
        fields: &[&str],
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        for field in fields {
            if table.field(field).is_none() {
                return Err(SchemaError::UnknownIndexField {
                    index: name,
                    field: field.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            table: table.qualified_name(),
            fields: to_strings(fields),
        })
    }

    /// `CREATE INDEX IF NOT EXISTS` statement text.
    pub fn create_statement(&self) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {}({})",
            self.name,
            self.table,
            self.fields.join(", ")
        )
    }

    /// `DROP INDEX IF EXISTS` statement text.
    pub fn drop_statement(&self) -> String {
        format!("DROP INDEX IF EXISTS {} ON {}", self.name, self.table)
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent() -> TableDescriptor {
        TableDescriptor::top_level(
            "countries",
            vec![
                FieldDescriptor::new("country_name", FieldType::String),
                FieldDescriptor::new("country_code", FieldType::String),
                FieldDescriptor::new("country_id", FieldType::Integer),
            ],
            &["country_id"],
            &["country_id"],
        )
        .unwrap()
    }

    fn child(parent: &TableDescriptor) -> TableDescriptor {
        TableDescriptor::child(
            parent,
            "students",
            vec![
                FieldDescriptor::new("first_name", FieldType::String),
                FieldDescriptor::new("student_id", FieldType::Integer),
            ],
            &["student_id"],
        )
        .unwrap()
    }

    #[test]
    fn test_child_inherits_parent_key() {
        let parent = parent();
        let child = child(&parent);

        assert_eq!(child.qualified_name(), "countries.students");
        assert_eq!(child.primary_key(), ["country_id", "student_id"]);
        assert_eq!(child.shard_key(), ["country_id"]);
        assert_eq!(child.own_key(), ["student_id"]);
        assert_eq!(child.mutable_key_field(), Some("student_id"));
        assert_eq!(child.inherited_key_fields().len(), 1);
        assert_eq!(
            child.field("country_id").map(|f| &f.field_type),
            Some(&FieldType::Integer)
        );
    }

    #[test]
    fn test_top_level_whole_key_is_shard_key() {
        let parent = parent();
        assert_eq!(parent.mutable_key_field(), None);
        assert_eq!(
            parent.create_statement(),
            "CREATE TABLE IF NOT EXISTS countries (country_name STRING, country_code STRING, \
             country_id INTEGER, PRIMARY KEY (country_id))"
        );
    }

    #[test]
    fn test_child_statement_declares_own_key_only() {
        let parent = parent();
        let child = child(&parent);
        assert_eq!(
            child.create_statement(),
            "CREATE TABLE IF NOT EXISTS countries.students (first_name STRING, \
             student_id INTEGER, PRIMARY KEY (student_id))"
        );
        assert_eq!(
            child.drop_statement(),
            "DROP TABLE IF EXISTS countries.students"
        );
    }

    #[test]
    fn test_shard_prefix_statement() {
        let table = TableDescriptor::top_level(
            "rmvTable",
            vec![
                FieldDescriptor::new("zipcode", FieldType::String),
                FieldDescriptor::new("lastname", FieldType::String),
                FieldDescriptor::new("ssn", FieldType::Long),
            ],
            &["zipcode"],
            &["zipcode", "lastname", "ssn"],
        )
        .unwrap();
        assert!(table
            .create_statement()
            .ends_with("PRIMARY KEY (SHARD(zipcode), lastname, ssn))"));
        assert_eq!(table.mutable_key_field(), Some("ssn"));
    }

    #[test]
    fn test_invalid_declarations() {
        let fields = vec![
            FieldDescriptor::new("id", FieldType::Integer),
            FieldDescriptor::new("score", FieldType::Float),
        ];
        assert!(matches!(
            TableDescriptor::top_level("t", fields.clone(), &["id"], &[]),
            Err(SchemaError::EmptyPrimaryKey(_))
        ));
        assert!(matches!(
            TableDescriptor::top_level("t", fields.clone(), &["id"], &["missing"]),
            Err(SchemaError::UnknownKeyField { .. })
        ));
        assert!(matches!(
            TableDescriptor::top_level("t", fields.clone(), &["score"], &["score"]),
            Err(SchemaError::UnsupportedKeyType { .. })
        ));
        assert!(matches!(
            TableDescriptor::top_level("t", fields, &["score"], &["id"]),
            Err(SchemaError::ShardKeyNotPrefix(_))
        ));
    }

    #[test]
    fn test_child_cannot_redeclare_inherited_field() {
        let parent = parent();
        let result = TableDescriptor::child(
            &parent,
            "students",
            vec![
                FieldDescriptor::new("country_id", FieldType::Integer),
                FieldDescriptor::new("student_id", FieldType::Integer),
            ],
            &["student_id"],
        );
        assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    }

    #[test]
    fn test_index_statements() {
        let parent = parent();
        let child = child(&parent);
        let index = IndexDescriptor::new("firstlast", &child, &["first_name"]).unwrap();
        assert_eq!(
            index.create_statement(),
            "CREATE INDEX IF NOT EXISTS firstlast ON countries.students(first_name)"
        );
        assert_eq!(
            index.drop_statement(),
            "DROP INDEX IF EXISTS firstlast ON countries.students"
        );
        assert!(IndexDescriptor::new("bad", &child, &["nope"]).is_err());
    }
}
