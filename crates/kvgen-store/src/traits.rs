//! The store seam used by the load driver.

use crate::error::StoreError;
use futures::stream::BoxStream;
use kvgen_core::{CompositeKey, DdlStatement, Row, StatementStatus, TableDescriptor};
use std::fmt;

/// How a row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fails if the key exists
    Insert,
    /// Overwrites any existing row
    Upsert,
    /// Leaves an existing row untouched and reports a duplicate
    InsertIfAbsent,
}

/// Result of a single write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    SkippedDuplicate,
    Failed(String),
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::SkippedDuplicate => write!(f, "skipped (duplicate)"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Result of a single delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Absent,
}

/// Lazy, finite sequence of a table's keys.
pub type KeyStream = BoxStream<'static, Result<CompositeKey, StoreError>>;

/// Lazy, finite sequence of a table's rows.
pub type RowStream = BoxStream<'static, Result<Row, StoreError>>;

/// A key-value table store.
///
/// Opened once per run and closed at the end. Insert-if-absent must be atomic
/// with respect to other writers of the same key.
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Short backend name, for logging.
    fn backend(&self) -> &'static str;

    /// Execute one schema-definition statement.
    async fn execute(&self, statement: DdlStatement<'_>) -> Result<StatementStatus, StoreError>;

    /// Point lookup by composite key.
    async fn get(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<Option<Row>, StoreError>;

    /// Whether a row with `key` exists.
    async fn exists(&self, table: &TableDescriptor, key: &CompositeKey) -> Result<bool, StoreError> {
        Ok(self.get(table, key).await?.is_some())
    }

    /// Write one row.
    async fn write(
        &self,
        table: &TableDescriptor,
        row: &Row,
        mode: WriteMode,
    ) -> Result<WriteOutcome, StoreError>;

    /// Delete one row by key.
    async fn delete(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<DeleteOutcome, StoreError>;

    /// Every key of the table. Restartable only by calling again.
    async fn keys(&self, table: &TableDescriptor) -> Result<KeyStream, StoreError>;

    /// Every row of the table.
    async fn rows(&self, table: &TableDescriptor) -> Result<RowStream, StoreError>;

    /// Release the connection.
    async fn close(&self) -> Result<(), StoreError>;
}
