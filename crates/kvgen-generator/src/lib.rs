//! Record generator for the kvgen hierarchical loader.
//!
//! This crate provides the [`RecordSynthesizer`], which turns reference pools
//! and a [`Sampler`] into complete `countries` and `countries.residents` rows.
//!
//! # Architecture
//!
//! ```text
//! ReferenceData (static pools)
//!        │
//!        ▼
//! ┌──────────────────────┐      ┌──────────────────┐
//! │  RecordSynthesizer   │◄─────│  Sampler<StdRng> │
//! │                      │      └──────────────────┘
//! │  - parent_row        │
//! │  - child_row         │
//! │  - resample_key_...  │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    Row { table, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use kvgen_core::{Catalog, CompositeKey, KeyComponent};
//! use kvgen_generator::{RecordSynthesizer, Sampler};
//!
//! let catalog = Catalog::standard().unwrap();
//! let synth = RecordSynthesizer::standard().unwrap();
//! let mut sampler = Sampler::seeded(42);
//!
//! let parent = CompositeKey::new(vec![KeyComponent::Integer(1)]);
//! let row = synth.child_row(&catalog.residents, &mut sampler, &parent).unwrap();
//! assert!(row.get("vehicleinfo").is_some());
//! ```

pub mod generator;
pub mod generators;
pub mod pools;
pub mod reference;
pub mod sampler;

// Re-exports for convenience
pub use generator::{GeneratorError, RecordSynthesizer};
pub use pools::{Pool, PoolError};
pub use reference::{Country, ModelCatalog, ReferenceData, VehicleType};
pub use sampler::Sampler;
