//! CLI argument definitions for the load command.

use crate::driver::LoadOptions;
use crate::error::LoadError;
use clap::{Args, ValueEnum};
use kvgen_store::{Credentials, StoreConfig};
use std::path::PathBuf;

/// Which store implementation to load into.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// SurrealDB v2 over WebSocket
    Surreal,
    /// Embedded in-process SurrealDB (`mem://`)
    SurrealMem,
    /// Plain in-memory maps, for smoke runs
    Memory,
}

/// Arguments of the load command.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Store name (SurrealDB namespace)
    #[arg(long, env = "KVGEN_STORE", default_value = "kvstore")]
    pub store: String,

    /// Store host name
    #[arg(long, env = "KVGEN_HOST", default_value = "localhost")]
    pub host: String,

    /// Store port
    #[arg(long, env = "KVGEN_PORT", default_value = "8000")]
    pub port: u16,

    /// Database within the store
    #[arg(long, env = "KVGEN_DATABASE", default_value = "kvgen")]
    pub database: String,

    /// Number of child records to create
    #[arg(long, default_value = "10")]
    pub nops: u64,

    /// Path to a TOML credentials file (username, password)
    #[arg(long, env = "KVGEN_SECURITY")]
    pub security: Option<PathBuf>,

    /// Delete all existing rows before loading
    #[arg(long)]
    pub delete: bool,

    /// Drop the index and both tables before creating them again
    #[arg(long)]
    pub drop_tables: bool,

    /// Log every row as JSON after loading
    #[arg(long)]
    pub display: bool,

    /// Random seed for reproducible data (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Store implementation
    #[arg(long, value_enum, default_value_t = Backend::Surreal)]
    pub backend: Backend,
}

impl LoadArgs {
    /// Store location, with credentials read from `--security` when given.
    pub fn store_config(&self) -> Result<StoreConfig, LoadError> {
        if self.store.trim().is_empty() {
            return Err(LoadError::Config("--store must not be empty".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(LoadError::Config("--host must not be empty".to_string()));
        }
        let credentials = self
            .security
            .as_ref()
            .map(Credentials::from_file)
            .transpose()?;
        Ok(StoreConfig {
            store: self.store.clone(),
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            credentials,
        })
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            records: self.nops,
            delete_existing: self.delete,
            display: self.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        load: LoadArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["kvgen"]).unwrap();
        assert_eq!(cli.load.nops, 10);
        assert_eq!(cli.load.port, 8000);
        assert!(!cli.load.delete);
        assert_eq!(cli.load.backend, Backend::Surreal);
        assert!(cli.load.seed.is_none());
    }

    #[test]
    fn test_zero_records_allowed() {
        let cli = TestCli::try_parse_from(["kvgen", "--nops", "0", "--delete"]).unwrap();
        let options = cli.load.load_options();
        assert_eq!(options.records, 0);
        assert!(options.delete_existing);
    }

    #[test]
    fn test_negative_records_rejected() {
        assert!(TestCli::try_parse_from(["kvgen", "--nops", "-5"]).is_err());
        assert!(TestCli::try_parse_from(["kvgen", "--port", "notaport"]).is_err());
    }

    #[test]
    fn test_security_file_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username = \"root\"\npassword = \"root\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = TestCli::try_parse_from(["kvgen", "--security", &path]).unwrap();
        let config = cli.load.store_config().unwrap();
        assert_eq!(
            config.credentials.map(|c| c.username),
            Some("root".to_string())
        );
    }

    #[test]
    fn test_missing_security_file_is_an_error() {
        let cli =
            TestCli::try_parse_from(["kvgen", "--security", "/nonexistent/security.toml"]).unwrap();
        assert!(matches!(cli.load.store_config(), Err(LoadError::Store(_))));
    }
}
