//! Schema setup and teardown against a store.

use crate::error::LoadError;
use kvgen_core::{Catalog, DdlStatement, StatementResult};
use kvgen_store::TableStore;
use tracing::{info, warn};

/// Create both tables and the index, in dependency order.
///
/// "Already exists" is fine; any other unusable status stops the run.
pub async fn ensure_schema<S: TableStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
) -> Result<Vec<StatementResult>, LoadError> {
    run_statements(store, catalog.setup_statements()).await
}

/// Drop the index and both tables, children first.
pub async fn drop_schema<S: TableStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
) -> Result<Vec<StatementResult>, LoadError> {
    run_statements(store, catalog.teardown_statements()).await
}

async fn run_statements<'a, S, I>(store: &S, statements: I) -> Result<Vec<StatementResult>, LoadError>
where
    S: TableStore + ?Sized,
    I: IntoIterator<Item = DdlStatement<'a>>,
{
    let mut results = Vec::new();
    for statement in statements {
        let status = store.execute(statement).await?;
        let result = StatementResult::new(&statement, status);
        if !result.is_usable() {
            warn!("{}: {}", result.status, result.statement);
            return Err(LoadError::Statement {
                statement: result.statement,
                status: result.status,
            });
        }
        info!("{}: {}", result.status, result.statement);
        results.push(result);
    }
    Ok(results)
}
