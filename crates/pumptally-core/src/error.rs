use thiserror::Error;

/// Errors for one aggregation pass over a pump-history export.
///
/// Every variant is fatal: the pass either completes over the full input
/// or produces nothing. There is no per-event recovery.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Input is not well-formed JSON.
    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("expected a JSON array of events, found {found}")]
    NotAnArray { found: &'static str },

    /// An array element is not a JSON object.
    #[error("event at index {index} is not a JSON object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    /// An event object lacks a required field.
    #[error("event at index {index} is missing required field \"{field}\"")]
    MissingField { index: usize, field: &'static str },
}
