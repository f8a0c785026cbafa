//! Load driver for the kvgen hierarchical loader.
//!
//! Ties the generator to a [`kvgen_store::TableStore`]:
//!
//! - [`ensure_schema`] / [`drop_schema`] - Run the catalog's statements in order
//! - [`KeyResolver`] - Re-sample the mutable key component until the key is free
//! - [`LoadDriver`] - Teardown, parent load, child load and report
//!
//! # Example
//!
//! ```rust,no_run
//! use kvgen_core::Catalog;
//! use kvgen_generator::{RecordSynthesizer, Sampler};
//! use kvgen_populate::{ensure_schema, LoadDriver, LoadOptions};
//! use kvgen_store::MemoryStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::standard()?;
//! let synth = RecordSynthesizer::standard()?;
//! let store = MemoryStore::new();
//!
//! ensure_schema(&store, &catalog).await?;
//! let mut driver = LoadDriver::new(&store, &catalog, &synth, Sampler::seeded(42));
//! let report = driver.run(&LoadOptions::default()).await?;
//! assert_eq!(report.children.rows, 10);
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod schema;

pub use args::{Backend, LoadArgs};
pub use driver::{LoadDriver, LoadOptions, LoadPhase, LoadSession};
pub use error::LoadError;
pub use metrics::{LoadReport, PhaseMetrics};
pub use resolver::{KeyResolver, ResolvedWrite, MAX_KEY_RESAMPLES};
pub use schema::{drop_schema, ensure_schema};
