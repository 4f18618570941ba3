pub mod mock;

use thiserror::Error;

use crate::record::Record;

/// Failure at the datastore boundary. Distinct from the classifier's empty
/// no-match result: an empty classification is never executed, while this
/// error means a real query could not be run.
#[derive(Debug, Error)]
pub enum DataRetrievalError {
    #[error("failed to retrieve data for your question: {reason}")]
    Failed { reason: String },

    #[error("refusing to execute an empty query")]
    EmptyQuery,
}

/// Boundary to the datastore. A production implementation would run the
/// query against a live backend (and suspend while doing so); the core only
/// ever consumes the resulting rows.
pub trait QueryExecutor {
    fn execute(&self, query: &str) -> Result<Vec<Record>, DataRetrievalError>;
}
