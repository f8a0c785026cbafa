//! Table stores for the kvgen hierarchical loader.
//!
//! - [`TableStore`] - The async seam the load driver writes through
//! - [`MemoryStore`] - Ordered in-process maps, used by tests and smoke runs
//! - [`SurrealStore`] - SurrealDB v2 over `engine::any` (`ws://`, `wss://`, `mem://`)

pub mod config;
pub mod error;
pub mod memory;
pub mod surreal;
pub mod traits;

// Re-exports for convenience
pub use config::{mask_connection_password, Credentials, StoreConfig};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use surreal::SurrealStore;
pub use traits::{DeleteOutcome, KeyStream, RowStream, TableStore, WriteMode, WriteOutcome};
