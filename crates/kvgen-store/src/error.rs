//! Error type for store operations.

use kvgen_core::{JsonDecodeError, KeyError};

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store could not be reached
    #[error("Connection to '{endpoint}' failed: {reason}")]
    Connection { endpoint: String, reason: String },

    /// Store rejected the credentials
    #[error("Authentication failed (user: '{username}'): {reason}")]
    Authentication { username: String, reason: String },

    /// Credentials file could not be read or parsed
    #[error("Invalid credentials file '{path}': {reason}")]
    Credentials { path: String, reason: String },

    /// Table has not been created
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Query failed
    #[error("Query failed: {0}")]
    Query(#[from] surrealdb::Error),

    /// Stored data could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] JsonDecodeError),

    /// Key could not be derived
    #[error("Key error: {0}")]
    Key(#[from] KeyError),
}

impl StoreError {
    /// Whether the error means the store is unreachable or refused us.
    ///
    /// Covers failures at connect time and transport failures mid-run, such
    /// as a dropped WebSocket.
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Connection { .. } | Self::Authentication { .. } => true,
            Self::Query(surrealdb::Error::Api(api)) => is_transport_error(api),
            _ => false,
        }
    }
}

fn is_transport_error(error: &surrealdb::error::Api) -> bool {
    use surrealdb::error::Api;
    matches!(
        error,
        Api::Ws(_) | Api::Http(_) | Api::ConnectionUninitialised
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::error::Api;

    #[test]
    fn test_connectivity_classification() {
        let dropped = StoreError::Query(surrealdb::Error::Api(Api::Ws(
            "connection reset by peer".to_string(),
        )));
        assert!(dropped.is_connectivity());

        let uninitialised = StoreError::Query(surrealdb::Error::Api(Api::ConnectionUninitialised));
        assert!(uninitialised.is_connectivity());

        let bad_query = StoreError::Query(surrealdb::Error::Api(Api::Query(
            "parse error".to_string(),
        )));
        assert!(!bad_query.is_connectivity());

        assert!(!StoreError::TableNotFound("countries".to_string()).is_connectivity());
        assert!(StoreError::Connection {
            endpoint: "ws://localhost:8000".to_string(),
            reason: "refused".to_string(),
        }
        .is_connectivity());
    }
}
