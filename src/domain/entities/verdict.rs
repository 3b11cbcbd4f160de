use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::receipt::ValidatedReceipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Environment {
    Production,
    Sandbox,
}

/// A non-fatal inconsistency detected while decoding or validating a
/// receipt. Anomalies are informational: the decode still succeeds, and the
/// caller decides how many (and which) it is willing to tolerate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AnomalyKind {
    /// The three representations of a timestamp field disagreed by more
    /// than the reconciliation tolerance. `field` is the wire field path,
    /// e.g. `receipt_creation_date` or `in_app[2].purchase_date`.
    TemporalMismatch { field: String },
    /// A non-VPP receipt carried the VPP expiration fields.
    UnexpectedExpirationField,
    /// A sandbox receipt whose `application_version` is not `"1.0"`.
    SandboxVersionMismatch,
    /// The `in_app` entry at `index` could not be decoded.
    TransactionDecodeFailure { index: usize },
}

/// The classification of a validated receipt at a given instant. Derived,
/// never stored as the source of truth; recomputable at any time from the
/// same `ValidatedReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub environment: Environment,
    pub is_expired: bool,
    pub anomalies: BTreeSet<AnomalyKind>,
}

impl Verdict {
    /// Pure and deterministic for a given receipt and `as_of`.
    ///
    /// A receipt with no expiration triple never expires (documented
    /// platform behavior for non-VPP apps); otherwise it is expired exactly
    /// when the reconciled expiration instant is strictly before `as_of`.
    pub fn derive(validated: &ValidatedReceipt, as_of: DateTime<Utc>) -> Self {
        Verdict {
            environment: if validated.receipt.receipt_type.is_sandbox() {
                Environment::Sandbox
            } else {
                Environment::Production
            },
            is_expired: validated
                .receipt
                .expiration_date
                .as_ref()
                .map(|expiration| expiration.canonical < as_of)
                .unwrap_or(false),
            anomalies: validated.anomalies.clone(),
        }
    }
}
