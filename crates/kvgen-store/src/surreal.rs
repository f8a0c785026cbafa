//! SurrealDB v2 table store.
//!
//! Each table maps to a SurrealDB table whose name has dots replaced by
//! `__` (`countries.residents` becomes `countries__residents`). Each
//! composite key maps to an array record id, e.g. `countries__residents:[12, 123456789]`.
//! Rows are stored as their JSON form, so fixed binary fields are base64 text.
//!
//! Key and row streams page through the table in record id order, resuming
//! after the last id seen, so rows deleted mid-iteration never shift a page.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::traits::{DeleteOutcome, KeyStream, RowStream, TableStore, WriteMode, WriteOutcome};
use futures::stream::{self, BoxStream, StreamExt};
use kvgen_core::json::{key_from_json, key_to_json, row_from_json, row_to_json};
use kvgen_core::{
    validate_row, CompositeKey, DdlStatement, FieldType, IndexDescriptor, Row, StatementStatus,
    TableDescriptor, ToDdl,
};
use serde::de::IgnoredAny;
use std::collections::VecDeque;
use std::time::Duration;
use surrealdb::engine::any::Any;
use surrealdb::Surreal;
use tracing::{debug, info, warn};

/// Default number of connection retry attempts
const DEFAULT_RETRY_ATTEMPTS: u32 = 5;
/// Default delay between retry attempts in seconds
const DEFAULT_RETRY_DELAY_SECS: u64 = 2;
/// Default number of records fetched per page by key and row streams
const DEFAULT_PAGE_SIZE: usize = 1000;
/// Alias of the record id's key array in paged selects
const KEY_ALIAS: &str = "__key";

/// SurrealDB type clause for a top-level field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurrealDdl;

impl ToDdl for SurrealDdl {
    fn to_ddl(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::Boolean => "bool".to_string(),
            FieldType::Integer | FieldType::Long => "int".to_string(),
            FieldType::Float | FieldType::Double => "float".to_string(),
            FieldType::String | FieldType::Enum { .. } | FieldType::FixedBinary { .. } => {
                "string".to_string()
            }
            FieldType::Map { .. } | FieldType::Record { .. } => "object".to_string(),
            FieldType::Array { element_type } => format!("array<{}>", self.to_ddl(element_type)),
        }
    }
}

/// SurrealDB table name for a qualified table name.
pub fn surreal_table_name(qualified: &str) -> String {
    qualified.replace('.', "__")
}

/// Table store backed by SurrealDB v2.
pub struct SurrealStore {
    client: Surreal<Any>,
    endpoint: String,
    page_size: usize,
}

impl SurrealStore {
    /// Connect with the default retry policy.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::connect_with_retries(config, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_SECS).await
    }

    /// Connect, retrying failures up to `max_retries` times with
    /// `retry_delay_secs` seconds between attempts.
    pub async fn connect_with_retries(
        config: &StoreConfig,
        max_retries: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, StoreError> {
        let endpoint = config.endpoint();
        let masked = config.masked_endpoint();
        debug!(
            "Connecting to SurrealDB at {} (namespace: {}, database: {})",
            masked, config.store, config.database
        );

        let mut last_error = None;
        for attempt in 1..=max_retries.max(1) {
            match try_connect(&endpoint, config).await {
                Ok(client) => {
                    if attempt > 1 {
                        info!("Successfully connected to SurrealDB after {attempt} attempts");
                    }
                    return Ok(Self {
                        client,
                        endpoint: masked,
                        page_size: DEFAULT_PAGE_SIZE,
                    });
                }
                // Bad credentials will not fix themselves
                Err(e @ StoreError::Authentication { .. }) => return Err(e),
                Err(e) => {
                    if attempt < max_retries {
                        warn!(
                            "Failed to connect to SurrealDB at '{}' (attempt {}/{}): {}. Retrying in {}s...",
                            masked, attempt, max_retries, e, retry_delay_secs
                        );
                        tokio::time::sleep(Duration::from_secs(retry_delay_secs)).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(StoreError::Connection {
            endpoint: masked,
            reason: format!(
                "gave up after {max_retries} attempts; last error: {}",
                last_error.map(|e| e.to_string()).unwrap_or_default()
            ),
        })
    }

    /// Embedded in-process SurrealDB (`mem://`).
    pub async fn connect_embedded(namespace: &str, database: &str) -> Result<Self, StoreError> {
        let endpoint = "mem://".to_string();
        let client = surrealdb::engine::any::connect(&endpoint)
            .await
            .map_err(|e| StoreError::Connection {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;
        client.use_ns(namespace).use_db(database).await?;
        Ok(Self {
            client,
            endpoint,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Records fetched per round trip when streaming keys or rows.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Masked endpoint this store is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn cursor(&self, table: &TableDescriptor, projection: &'static str) -> TableCursor {
        TableCursor {
            client: self.client.clone(),
            table: surreal_table_name(&table.qualified_name()),
            projection,
            page_size: self.page_size,
            after: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    async fn db_tables(&self) -> Result<Vec<String>, StoreError> {
        let mut response = self.client.query("INFO FOR DB;").await?;
        let info: Option<serde_json::Value> = response.take(0)?;
        Ok(info
            .as_ref()
            .and_then(|i| i.get("tables"))
            .and_then(|t| t.as_object())
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn table_indexes(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let mut response = self
            .client
            .query(format!("INFO FOR TABLE {table};"))
            .await?;
        let info: Option<serde_json::Value> = response.take(0)?;
        Ok(info
            .as_ref()
            .and_then(|i| i.get("indexes"))
            .and_then(|t| t.as_object())
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Run DDL text and map a rejection to `Failed`.
    async fn run_ddl(&self, sql: String) -> Result<StatementStatus, StoreError> {
        debug!("Executing SurrealDB DDL: {sql}");
        let response = self.client.query(sql).await?;
        Ok(match response.check() {
            Ok(_) => StatementStatus::Succeeded,
            Err(e) => StatementStatus::Failed {
                error: e.to_string(),
            },
        })
    }

    async fn create_table(&self, table: &TableDescriptor) -> Result<StatementStatus, StoreError> {
        let name = surreal_table_name(&table.qualified_name());
        let existing = self.db_tables().await?;
        if existing.contains(&name) {
            return Ok(StatementStatus::AlreadyExists);
        }
        if let Some(parent) = table.parent() {
            if !existing.contains(&surreal_table_name(&parent.name)) {
                return Ok(StatementStatus::Failed {
                    error: format!("parent table '{}' does not exist", parent.name),
                });
            }
        }
        self.run_ddl(define_table_sql(table)).await
    }

    async fn drop_table(&self, table: &TableDescriptor) -> Result<StatementStatus, StoreError> {
        let name = surreal_table_name(&table.qualified_name());
        let prefix = format!("{name}__");
        if self.db_tables().await?.iter().any(|t| t.starts_with(&prefix)) {
            return Ok(StatementStatus::Failed {
                error: format!("table '{}' still has child tables", table.qualified_name()),
            });
        }
        self.run_ddl(format!("REMOVE TABLE IF EXISTS {name};")).await
    }

    async fn create_index(&self, index: &IndexDescriptor) -> Result<StatementStatus, StoreError> {
        let table = surreal_table_name(&index.table);
        if !self.db_tables().await?.contains(&table) {
            return Ok(StatementStatus::Failed {
                error: format!("table '{}' does not exist", index.table),
            });
        }
        if self.table_indexes(&table).await?.contains(&index.name) {
            return Ok(StatementStatus::AlreadyExists);
        }
        self.run_ddl(format!(
            "DEFINE INDEX IF NOT EXISTS {} ON TABLE {} FIELDS {};",
            index.name,
            table,
            index.fields.join(", ")
        ))
        .await
    }
}

/// `DEFINE TABLE` plus one `DEFINE FIELD` per top-level scalar field.
fn define_table_sql(table: &TableDescriptor) -> String {
    let name = surreal_table_name(&table.qualified_name());
    let mut sql = format!("DEFINE TABLE IF NOT EXISTS {name} SCHEMALESS;");
    for field in table.all_fields().filter(|f| f.field_type.is_scalar()) {
        sql.push_str(&format!(
            " DEFINE FIELD IF NOT EXISTS {} ON TABLE {} TYPE {}",
            field.name,
            name,
            SurrealDdl.to_ddl(&field.field_type)
        ));
        if let FieldType::Enum { symbols } = &field.field_type {
            let quoted: Vec<String> = symbols.iter().map(|s| format!("{s:?}")).collect();
            sql.push_str(&format!(" ASSERT $value INSIDE [{}]", quoted.join(", ")));
        }
        sql.push(';');
    }
    sql
}

async fn try_connect(endpoint: &str, config: &StoreConfig) -> Result<Surreal<Any>, StoreError> {
    let client = surrealdb::engine::any::connect(endpoint)
        .await
        .map_err(|e| StoreError::Connection {
            endpoint: config.masked_endpoint(),
            reason: e.to_string(),
        })?;

    if let Some(credentials) = &config.credentials {
        client
            .signin(surrealdb::opt::auth::Root {
                username: &credentials.username,
                password: &credentials.password,
            })
            .await
            .map_err(|e| StoreError::Authentication {
                username: credentials.username.clone(),
                reason: e.to_string(),
            })?;
    }

    client
        .use_ns(&config.store)
        .use_db(&config.database)
        .await
        .map_err(|e| StoreError::Connection {
            endpoint: config.masked_endpoint(),
            reason: format!(
                "failed to select namespace '{}' / database '{}': {e}",
                config.store, config.database
            ),
        })?;

    Ok(client)
}

/// Keyset pagination over one table, in record id order.
struct TableCursor {
    client: Surreal<Any>,
    table: String,
    projection: &'static str,
    page_size: usize,
    after: Option<serde_json::Value>,
    buffer: VecDeque<serde_json::Value>,
    exhausted: bool,
}

impl TableCursor {
    async fn fetch_page(&mut self) -> Result<(), StoreError> {
        let filter = if self.after.is_some() {
            "WHERE id > type::thing($tb, $after) "
        } else {
            ""
        };
        let sql = format!(
            "SELECT {} FROM type::table($tb) {filter}ORDER BY {KEY_ALIAS} LIMIT $limit;",
            self.projection
        );
        let mut response = self
            .client
            .query(sql)
            .bind(("tb", self.table.clone()))
            .bind(("after", self.after.clone()))
            .bind(("limit", self.page_size))
            .await?;
        let page: Vec<serde_json::Value> = response.take(0)?;
        tracing::trace!("Fetched {} records from '{}'", page.len(), self.table);

        self.exhausted = page.len() < self.page_size;
        match page.last().and_then(|last| last.get(KEY_ALIAS)) {
            Some(last) => self.after = Some(last.clone()),
            None => self.exhausted = true,
        }
        self.buffer.extend(page);
        Ok(())
    }

    async fn next(&mut self) -> Result<Option<serde_json::Value>, StoreError> {
        if self.buffer.is_empty() && !self.exhausted {
            self.fetch_page().await?;
        }
        Ok(self.buffer.pop_front())
    }
}

fn paged<T, F>(cursor: TableCursor, decode: F) -> BoxStream<'static, Result<T, StoreError>>
where
    T: Send + 'static,
    F: Fn(&serde_json::Value) -> Result<T, StoreError> + Send + 'static,
{
    stream::try_unfold((cursor, decode), |(mut cursor, decode)| async move {
        match cursor.next().await? {
            Some(value) => {
                let item = decode(&value)?;
                Ok::<_, StoreError>(Some((item, (cursor, decode))))
            }
            None => Ok(None),
        }
    })
    .boxed()
}

fn is_already_exists(error: &surrealdb::Error) -> bool {
    error.to_string().contains("already exists")
}

#[async_trait::async_trait]
impl TableStore for SurrealStore {
    fn backend(&self) -> &'static str {
        "surrealdb"
    }

    async fn execute(&self, statement: DdlStatement<'_>) -> Result<StatementStatus, StoreError> {
        debug!("Executing: {statement}");
        match statement {
            DdlStatement::CreateTable(table) => self.create_table(table).await,
            DdlStatement::DropTable(table) => self.drop_table(table).await,
            DdlStatement::CreateIndex(index) => self.create_index(index).await,
            DdlStatement::DropIndex(index) => {
                self.run_ddl(format!(
                    "REMOVE INDEX IF EXISTS {} ON TABLE {};",
                    index.name,
                    surreal_table_name(&index.table)
                ))
                .await
            }
        }
    }

    async fn get(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<Option<Row>, StoreError> {
        let mut response = self
            .client
            .query("SELECT * OMIT id FROM type::thing($tb, $id);")
            .bind(("tb", surreal_table_name(&table.qualified_name())))
            .bind(("id", key_to_json(key)))
            .await?;
        let found: Vec<serde_json::Value> = response.take(0)?;
        match found.first() {
            Some(value) => Ok(Some(row_from_json(table, value)?)),
            None => Ok(None),
        }
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
        let sql = match mode {
            WriteMode::Upsert => "UPSERT type::thing($tb, $id) CONTENT $content RETURN NONE;",
            WriteMode::Insert | WriteMode::InsertIfAbsent => {
                "CREATE type::thing($tb, $id) CONTENT $content RETURN NONE;"
            }
        };
        tracing::trace!("Executing SurrealDB query: {sql} for record {key}");

        let response = self
            .client
            .query(sql)
            .bind(("tb", surreal_table_name(&table.qualified_name())))
            .bind(("id", key_to_json(&key)))
            .bind(("content", row_to_json(row)))
            .await?;

        Ok(match response.check() {
            Ok(_) => WriteOutcome::Written,
            Err(e) if mode == WriteMode::InsertIfAbsent && is_already_exists(&e) => {
                WriteOutcome::SkippedDuplicate
            }
            Err(e) => WriteOutcome::Failed(e.to_string()),
        })
    }

    async fn delete(
        &self,
        table: &TableDescriptor,
        key: &CompositeKey,
    ) -> Result<DeleteOutcome, StoreError> {
        let mut response = self
            .client
            .query("DELETE type::thing($tb, $id) RETURN BEFORE;")
            .bind(("tb", surreal_table_name(&table.qualified_name())))
            .bind(("id", key_to_json(key)))
            .await?;
        let before: Vec<IgnoredAny> = response.take(0)?;
        Ok(if before.is_empty() {
            DeleteOutcome::Absent
        } else {
            DeleteOutcome::Deleted
        })
    }

    async fn keys(&self, table: &TableDescriptor) -> Result<KeyStream, StoreError> {
        let cursor = self.cursor(table, "record::id(id) AS __key");
        let table = table.clone();
        Ok(paged(cursor, move |value| {
            let id = value.get(KEY_ALIAS).unwrap_or(&serde_json::Value::Null);
            Ok(key_from_json(&table, id)?)
        }))
    }

    async fn rows(&self, table: &TableDescriptor) -> Result<RowStream, StoreError> {
        let cursor = self.cursor(table, "*, record::id(id) AS __key OMIT id");
        let table = table.clone();
        Ok(paged(cursor, move |value| Ok(row_from_json(&table, value)?)))
    }

    async fn close(&self) -> Result<(), StoreError> {
        debug!("Closing SurrealDB connection to {}", self.endpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvgen_core::Catalog;

    #[test]
    fn test_table_names() {
        assert_eq!(surreal_table_name("countries"), "countries");
        assert_eq!(surreal_table_name("countries.residents"), "countries__residents");
    }

    #[test]
    fn test_define_table_sql() {
        let catalog = Catalog::standard().unwrap();
        let sql = define_table_sql(&catalog.residents);
        assert!(sql.starts_with("DEFINE TABLE IF NOT EXISTS countries__residents SCHEMALESS;"));
        assert!(sql.contains("DEFINE FIELD IF NOT EXISTS country_id ON TABLE countries__residents TYPE int;"));
        assert!(sql.contains("DEFINE FIELD IF NOT EXISTS ssn ON TABLE countries__residents TYPE int;"));
        assert!(sql.contains("ASSERT $value INSIDE [\"male\", \"female\"]"));
        assert!(!sql.contains("vehicleinfo"));
    }

    #[test]
    fn test_surreal_types() {
        assert_eq!(SurrealDdl.to_ddl(&FieldType::fixed_binary(9)), "string");
        assert_eq!(SurrealDdl.to_ddl(&FieldType::Long), "int");
        assert_eq!(
            SurrealDdl.to_ddl(&FieldType::array(FieldType::Double)),
            "array<float>"
        );
    }
}
