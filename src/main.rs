//! Command-line interface for kvgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Load the default 10 residents into a local SurrealDB
//! kvgen load
//!
//! # Delete everything first, then load 100000 residents with credentials
//! kvgen load --host db.internal --port 8000 --store kvstore \
//!   --nops 100000 --delete --security security.toml
//!
//! # Drop and recreate the schema, log every row afterwards
//! kvgen load --drop-tables --display --nops 5
//!
//! # Print the schema statements without connecting
//! kvgen schema
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use kvgen::{connectivity_guidance, run_load, schema_statements};
use kvgen_core::Catalog;
use kvgen_populate::LoadArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kvgen")]
#[command(about = "Generate hierarchical country/resident records and load them into a key-value store")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema if needed, optionally delete existing rows, then load
    Load(LoadArgs),

    /// Print the schema statements in execution order
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load(args) => match run_load(&args).await {
            Ok(report) => {
                if args.delete {
                    println!("{} records deleted", report.deleted());
                }
                println!("{} new records added", report.children.rows);
            }
            Err(e) if e.is_connectivity() => {
                eprintln!("{}", connectivity_guidance(&args));
                return Err(e).context("Store is unreachable or refused the login");
            }
            Err(e) => return Err(e).context("Load failed"),
        },
        Commands::Schema => {
            let catalog = Catalog::standard().context("Failed to build the table catalog")?;
            for statement in schema_statements(&catalog) {
                println!("{statement}");
            }
        }
    }

    Ok(())
}
