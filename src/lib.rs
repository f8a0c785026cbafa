//! kvgen library
//!
//! Generates synthetic `countries` and `countries.residents` rows and loads
//! them into a key-value table store, idempotently.
//!
//! # CLI Usage
//!
//! ```bash
//! # Load 1000 residents into SurrealDB, deleting what was there
//! kvgen load --host localhost --port 8000 --store kvstore --nops 1000 --delete
//!
//! # Reproducible smoke run without a server
//! kvgen load --backend memory --seed 42 --display
//!
//! # Print the schema statements
//! kvgen schema
//! ```

use kvgen_core::Catalog;
use kvgen_generator::{RecordSynthesizer, Sampler};
use kvgen_populate::{drop_schema, ensure_schema, Backend, LoadArgs, LoadDriver, LoadError, LoadReport};
use kvgen_store::{MemoryStore, StoreConfig, SurrealStore, TableStore};
use tracing::info;

pub use kvgen_populate as populate;

/// Open the store selected by `backend`.
pub async fn open_store(
    backend: Backend,
    config: &StoreConfig,
) -> Result<Box<dyn TableStore>, LoadError> {
    let store: Box<dyn TableStore> = match backend {
        Backend::Surreal => Box::new(SurrealStore::connect(config).await?),
        Backend::SurrealMem => {
            Box::new(SurrealStore::connect_embedded(&config.store, &config.database).await?)
        }
        Backend::Memory => Box::new(MemoryStore::new()),
    };
    info!("Opened {} store", store.backend());
    Ok(store)
}

/// Set up the schema and run one load against the configured store.
pub async fn run_load(args: &LoadArgs) -> Result<LoadReport, LoadError> {
    let config = args.store_config()?;
    let catalog = Catalog::standard()?;
    let synth = RecordSynthesizer::standard()?;

    let store = open_store(args.backend, &config).await?;
    let result = load_into(store.as_ref(), &catalog, &synth, args).await;
    store.close().await?;
    result
}

async fn load_into(
    store: &dyn TableStore,
    catalog: &Catalog,
    synth: &RecordSynthesizer,
    args: &LoadArgs,
) -> Result<LoadReport, LoadError> {
    if args.drop_tables {
        drop_schema(store, catalog).await?;
    }
    ensure_schema(store, catalog).await?;

    let sampler = match args.seed {
        Some(seed) => {
            info!("Using random seed {seed}");
            Sampler::seeded(seed)
        }
        None => Sampler::from_entropy(),
    };
    LoadDriver::new(store, catalog, synth, sampler)
        .run(&args.load_options())
        .await
}

/// Statements `kvgen load` runs to set up the schema, in order.
pub fn schema_statements(catalog: &Catalog) -> Vec<String> {
    catalog
        .setup_statements()
        .iter()
        .map(|statement| format!("{statement};"))
        .collect()
}

/// What to check when the store cannot be reached or refuses the login.
pub fn connectivity_guidance(args: &LoadArgs) -> String {
    format!(
        "Please make sure a store is running at {}:{} and that the store name '{}' is correct.\n\
         If the store is secured, pass a credentials file with --security \
         (TOML with `username` and `password`).",
        args.host, args.port, args.store
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_in_dependency_order() {
        let catalog = Catalog::standard().unwrap();
        let statements = schema_statements(&catalog);
        assert_eq!(statements.len(), 3);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS countries ("));
        assert!(statements[1].starts_with("CREATE TABLE IF NOT EXISTS countries.residents ("));
        assert!(statements[2].starts_with("CREATE INDEX IF NOT EXISTS firstlast"));
        assert!(statements.iter().all(|s| s.ends_with(';')));
    }
}
