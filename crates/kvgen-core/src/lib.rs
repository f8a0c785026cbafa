//! Core types for the kvgen hierarchical loader.
//!
//! This crate provides the foundational types shared by the generator, the
//! stores and the load driver:
//!
//! - [`FieldType`] - Type universe of the key-value table model
//! - [`TableDescriptor`] - Table fields, shard key and primary key
//! - [`Catalog`] - The fixed `countries` / `countries.residents` schema
//! - [`FieldValue`], [`Row`], [`CompositeKey`] - Row values and derived keys
//! - [`DdlStatement`], [`StatementStatus`] - Schema statements and their outcome
//!
//! # Architecture
//!
//! ```text
//! kvgen-core (this crate)
//!    │
//!    ├─── kvgen-generator  (synthesizes rows against the catalog)
//!    ├─── kvgen-store      (executes statements, stores rows by key)
//!    └─── kvgen-populate   (resolves keys, drives load and delete)
//! ```
//!
//! # Example
//!
//! ```rust
//! use kvgen_core::{Catalog, Row};
//!
//! let catalog = Catalog::standard().unwrap();
//! let row = Row::new("countries")
//!     .with("country_id", 1)
//!     .with("country_code", "AF")
//!     .with("country_name", "Afghanistan");
//!
//! let key = row.primary_key(&catalog.countries).unwrap();
//! assert_eq!(key.to_string(), "[1]");
//! ```

pub mod catalog;
pub mod conformance;
pub mod ddl;
pub mod json;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use catalog::Catalog;
pub use conformance::{validate_row, ConformanceError};
pub use ddl::{DdlStatement, StatementResult, StatementStatus};
pub use json::JsonDecodeError;
pub use schema::{FieldDescriptor, IndexDescriptor, ParentScope, SchemaError, TableDescriptor};
pub use types::{FieldType, TableDdl, ToDdl};
pub use values::{CompositeKey, FieldValue, KeyComponent, KeyError, Row};
