use chrono::{DateTime, Utc};

use crate::{
    domain::entities::{receipt::ValidatedReceipt, verdict::Verdict},
    errors::DecodeError,
};

pub trait ReceiptRepository {
    /// Decode and validate one raw receipt payload.
    ///
    /// body:
    ///   The decoded receipt JSON, as returned by the platform's
    ///   verification endpoint. Signature and transport authenticity must
    ///   already have been verified by the caller.
    fn validate(&self, body: &str) -> Result<ValidatedReceipt, DecodeError>;

    /// Classify a validated receipt as of the given instant.
    fn classify(&self, validated: &ValidatedReceipt, as_of: DateTime<Utc>) -> Verdict;
}
