//! Error types for the load driver.

use kvgen_core::{KeyError, SchemaError, StatementStatus};
use kvgen_generator::GeneratorError;
use kvgen_store::StoreError;
use thiserror::Error;

/// Errors that can occur while loading or deleting.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Bad or missing run parameter.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table or index descriptor rejected.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Store connection, query or decode error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Schema statement that did not succeed.
    #[error("Statement failed ({status}):\n\t{statement}")]
    Statement {
        statement: String,
        status: StatementStatus,
    },

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Key derivation error.
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    /// Child load requested but the parent table has no rows.
    #[error("Parent table '{0}' has no rows to reference")]
    ParentTableEmpty(String),

    /// Re-sampling never produced an unused key.
    #[error("No unused key found in table '{table}' after {attempts} re-samples")]
    KeySpaceExhausted { table: String, attempts: u32 },

    /// Table has no key component that can be re-sampled.
    #[error("Table '{0}' has no mutable key component")]
    NoMutableKey(String),

    /// Store rejected a write.
    #[error("Write to '{table}' failed for key {key}: {reason}")]
    WriteFailed {
        table: String,
        key: String,
        reason: String,
    },

    /// Driver phases run out of order.
    #[error("Cannot move from phase {from:?} to {to:?}")]
    PhaseOrder {
        from: crate::driver::LoadPhase,
        to: crate::driver::LoadPhase,
    },
}

impl LoadError {
    /// Whether the error means the store is unreachable or refused us.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_connectivity())
    }
}
