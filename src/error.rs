//! Error types for the college-records data access layer

use thiserror::Error;

/// Result type for all data access operations
pub type Result<T> = std::result::Result<T, Error>;

/// Data access errors
///
/// Every operation has a two-outcome contract: resolved with data, or
/// rejected with one of these. Display strings are the short messages the
/// HTTP layer surfaces verbatim; the underlying sqlx error is kept as the
/// source for logging only.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema setup failed. Fatal: the server must not start.
    #[error("Unable to set up the database: {0}")]
    Initialization(#[source] sqlx::Error),

    /// A read was rejected by the store.
    #[error("No results returned")]
    Query(#[source] sqlx::Error),

    /// A write was rejected by the store (or was malformed before reaching it).
    #[error("{reason}")]
    Mutation {
        reason: &'static str,
        #[source]
        source: Option<sqlx::Error>,
    },
}

impl Error {
    /// Mutation error carrying the fixed reason string for one operation.
    pub fn mutation(reason: &'static str, source: sqlx::Error) -> Self {
        Error::Mutation {
            reason,
            source: Some(source),
        }
    }

    /// Mutation error rejected before any statement was issued
    /// (e.g. an update payload missing its own primary key).
    pub fn malformed(reason: &'static str) -> Self {
        Error::Mutation {
            reason,
            source: None,
        }
    }
}
