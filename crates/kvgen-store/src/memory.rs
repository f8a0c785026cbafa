//! In-memory table store.
//!
//! Each table is an ordered map from composite key to row. All access goes
//! through one async lock, which makes insert-if-absent atomic.

use crate::error::StoreError;
use crate::traits::{DeleteOutcome, KeyStream, RowStream, TableStore, WriteMode, WriteOutcome};
use futures::stream::{self, StreamExt};
use kvgen_core::{
    validate_row, CompositeKey, DdlStatement, IndexDescriptor, Row, StatementStatus,
    TableDescriptor,
};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct MemTable {
    rows: BTreeMap<CompositeKey, Row>,
}

#[derive(Debug, Default)]
struct MemState {
    tables: HashMap<String, MemTable>,
    indexes: HashMap<(String, String), IndexDescriptor>,
}

/// Table store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently in `table`, or `None` if it does not exist.
    pub async fn row_count(&self, table: &str) -> Option<usize> {
        let state = self.state.read().await;
        state.tables.get(table).map(|t| t.rows.len())
    }

    /// Whether `table` has been created.
    pub async fn has_table(&self, table: &str) -> bool {
        self.state.read().await.tables.contains_key(table)
    }

    /// Whether index `name` exists on `table`.
    pub async fn has_index(&self, table: &str, name: &str) -> bool {
        self.state
            .read()
            .await
            .indexes
            .contains_key(&(table.to_string(), name.to_string()))
    }
}

fn missing(table: &TableDescriptor) -> StoreError {
    StoreError::TableNotFound(table.qualified_name())
}

#[async_trait::async_trait]
impl TableStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn execute(&self, statement: DdlStatement<'_>) -> Result<StatementStatus, StoreError> {
        debug!("Executing: {statement}");
        let mut state = self.state.write().await;

        let status = match statement {
            DdlStatement::CreateTable(table) => {
                let name = table.qualified_name();
                if state.tables.contains_key(&name) {
                    StatementStatus::AlreadyExists
                } else if let Some(parent) = table
                    .parent()
                    .filter(|p| !state.tables.contains_key(&p.name))
                {
                    StatementStatus::Failed {
                        error: format!("parent table '{}' does not exist", parent.name),
                    }
                } else {
                    state.tables.insert(
                        name,
                        MemTable {
                            rows: BTreeMap::new(),
                        },
                    );
                    StatementStatus::Succeeded
                }
            }
            DdlStatement::DropTable(table) => {
                let name = table.qualified_name();
                let prefix = format!("{name}.");
                if state.tables.keys().any(|t| t.starts_with(&prefix)) {
                    StatementStatus::Failed {
                        error: format!("table '{name}' still has child tables"),
                    }
                } else {
                    state.tables.remove(&name);
                    state.indexes.retain(|(t, _), _| t != &name);
                    StatementStatus::Succeeded
                }
            }
            DdlStatement::CreateIndex(index) => {
                let id = (index.table.clone(), index.name.clone());
                if !state.tables.contains_key(&index.table) {
                    StatementStatus::Failed {
                        error: format!("table '{}' does not exist", index.table),
                    }
                } else if state.indexes.contains_key(&id) {
                    StatementStatus::AlreadyExists
                } else {
                    state.indexes.insert(id, index.clone());
                    StatementStatus::Succeeded
                }
            }
            DdlStatement::DropIndex(index) => {
                state
                    .indexes
                    .remove(&(index.table.clone(), index.name.clone()));
                StatementStatus::Succeeded
            }
        };
        Ok(status)
    }

    async fn get(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<Option<Row>, StoreError> {
        let state = self.state.read().await;
        let t = state
            .tables
            .get(&table.qualified_name())
            .ok_or_else(|| missing(table))?;
        Ok(t.rows.get(key).cloned())
    }

    async fn write(
        &self,
        table: &TableDescriptor,
        row: &Row,
        mode: WriteMode,
    ) -> Result<WriteOutcome, StoreError> {
        if let Err(e) = validate_row(table, row) {
            return Ok(WriteOutcome::Failed(e.to_string()));
        }
        let key = row.primary_key(table)?;

        let mut state = self.state.write().await;
        let t = state
            .tables
            .get_mut(&table.qualified_name())
            .ok_or_else(|| missing(table))?;

        let outcome = match mode {
            WriteMode::Upsert => {
                t.rows.insert(key, row.clone());
                WriteOutcome::Written
            }
            WriteMode::Insert | WriteMode::InsertIfAbsent if t.rows.contains_key(&key) => {
                if mode == WriteMode::Insert {
                    WriteOutcome::Failed(format!("key {key} already exists"))
                } else {
                    WriteOutcome::SkippedDuplicate
                }
            }
            WriteMode::Insert | WriteMode::InsertIfAbsent => {
                t.rows.insert(key, row.clone());
                WriteOutcome::Written
            }
        };
        Ok(outcome)
    }

    async fn delete(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<DeleteOutcome, StoreError> {
        let mut state = self.state.write().await;
        let t = state
            .tables
            .get_mut(&table.qualified_name())
            .ok_or_else(|| missing(table))?;
        Ok(match t.rows.remove(key) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::Absent,
        })
    }

    async fn keys(&self, table: &TableDescriptor) -> Result<KeyStream, StoreError> {
        let state = self.state.read().await;
        let t = state
            .tables
            .get(&table.qualified_name())
            .ok_or_else(|| missing(table))?;
        let keys: Vec<CompositeKey> = t.rows.keys().cloned().collect();
        Ok(stream::iter(keys.into_iter().map(Ok)).boxed())
    }

    async fn rows(&self, table: &TableDescriptor) -> Result<RowStream, StoreError> {
        let state = self.state.read().await;
        let t = state
            .tables
            .get(&table.qualified_name())
            .ok_or_else(|| missing(table))?;
        let rows: Vec<Row> = t.rows.values().cloned().collect();
        Ok(stream::iter(rows.into_iter().map(Ok)).boxed())
    }

    async fn close(&self) -> Result<(), StoreError> {
        debug!("Closing in-memory store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use kvgen_core::{Catalog, KeyComponent};

    fn country(id: i32, code: &str, name: &str) -> Row {
        Row::new("countries")
            .with("country_id", id)
            .with("country_code", code)
            .with("country_name", name)
    }

    async fn store_with_countries(catalog: &Catalog) -> MemoryStore {
        let store = MemoryStore::new();
        for statement in catalog.setup_statements() {
            assert!(store.execute(statement).await.unwrap().is_usable());
        }
        store
    }

    #[tokio::test]
    async fn test_child_table_requires_parent() {
        let catalog = Catalog::standard().unwrap();
        let store = MemoryStore::new();
        let status = store
            .execute(DdlStatement::CreateTable(&catalog.residents))
            .await
            .unwrap();
        assert!(matches!(status, StatementStatus::Failed { .. }));
        assert!(!store.has_table("countries.residents").await);
    }

    #[tokio::test]
    async fn test_create_twice_reports_already_exists() {
        let catalog = Catalog::standard().unwrap();
        let store = store_with_countries(&catalog).await;
        assert_eq!(
            store
                .execute(DdlStatement::CreateTable(&catalog.countries))
                .await
                .unwrap(),
            StatementStatus::AlreadyExists
        );
        assert!(store.has_index("countries.residents", "firstlast").await);
    }

    #[tokio::test]
    async fn test_write_modes() {
        let catalog = Catalog::standard().unwrap();
        let store = store_with_countries(&catalog).await;
        let t = &catalog.countries;

        let first = country(1, "AF", "Afghanistan");
        let renamed = country(1, "AF", "Afghanistan (renamed)");

        assert_eq!(store.write(t, &first, WriteMode::Insert).await.unwrap(), WriteOutcome::Written);
        assert!(matches!(
            store.write(t, &renamed, WriteMode::Insert).await.unwrap(),
            WriteOutcome::Failed(_)
        ));
        assert_eq!(
            store.write(t, &renamed, WriteMode::InsertIfAbsent).await.unwrap(),
            WriteOutcome::SkippedDuplicate
        );

        let key = CompositeKey::new(vec![KeyComponent::Integer(1)]);
        assert_eq!(store.get(t, &key).await.unwrap(), Some(first));

        assert_eq!(store.write(t, &renamed, WriteMode::Upsert).await.unwrap(), WriteOutcome::Written);
        assert_eq!(store.get(t, &key).await.unwrap(), Some(renamed));
        assert_eq!(store.row_count("countries").await, Some(1));
    }

    #[tokio::test]
    async fn test_nonconforming_row_fails() {
        let catalog = Catalog::standard().unwrap();
        let store = store_with_countries(&catalog).await;
        let row = Row::new("countries").with("country_id", 1);
        assert!(matches!(
            store.write(&catalog.countries, &row, WriteMode::Upsert).await.unwrap(),
            WriteOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_keys_and_delete() {
        let catalog = Catalog::standard().unwrap();
        let store = store_with_countries(&catalog).await;
        let t = &catalog.countries;
        for (id, code) in [(2, "AL"), (1, "AF"), (3, "DZ")] {
            store.write(t, &country(id, code, code), WriteMode::Upsert).await.unwrap();
        }

        let keys: Vec<CompositeKey> = store.keys(t).await.unwrap().try_collect().await.unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0], CompositeKey::new(vec![KeyComponent::Integer(1)]));

        assert_eq!(store.delete(t, &keys[0]).await.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.delete(t, &keys[0]).await.unwrap(), DeleteOutcome::Absent);
        assert!(!store.exists(t, &keys[0]).await.unwrap());

        let rows: Vec<Row> = store.rows(t).await.unwrap().try_collect().await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_drop_order_enforced() {
        let catalog = Catalog::standard().unwrap();
        let store = store_with_countries(&catalog).await;
        let status = store
            .execute(DdlStatement::DropTable(&catalog.countries))
            .await
            .unwrap();
        assert!(matches!(status, StatementStatus::Failed { .. }));

        for statement in catalog.teardown_statements() {
            assert!(store.execute(statement).await.unwrap().is_usable());
        }
        assert!(!store.has_table("countries").await);
        assert!(matches!(
            store.keys(&catalog.countries).await,
            Err(StoreError::TableNotFound(_))
        ));
    }
}
