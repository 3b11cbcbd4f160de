use serde::Serialize;
use thiserror::Error;

/// Fatal decode errors. A receipt that fails with one of these produces no
/// `Receipt` and no verdict; non-fatal inconsistencies are reported as
/// anomalies instead (see `domain::entities::verdict::AnomalyKind`).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum DecodeError {
    /// The payload (or a nested in-app entry) was not a JSON object of the
    /// expected shape.
    #[error("malformed receipt payload: {0}")]
    MalformedPayload(String),

    /// A required scalar or required date triple was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// None of the three representations of a timestamp field could be
    /// parsed.
    #[error("no parseable representation for timestamp field: {0}")]
    UnparseableTimestamp(String),

    /// `receipt_type` was not one of the four known literals.
    #[error("unrecognized receipt_type: {0}")]
    InvalidReceiptType(String),
}
