use std::collections::BTreeSet;

use crate::domain::entities::{
    in_app_transaction::{InAppTransaction, TransactionFailure},
    receipt_date::ReceiptDate,
    verdict::AnomalyKind,
};

/// The environment in which a receipt (or VPP purchase) was generated.
///
/// The four literals are the platform's own; the `VPP` variants carry
/// Volume Purchase Program licensing semantics (notably receipt expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptType {
    Production,
    ProductionVPP,
    ProductionSandbox,
    ProductionVPPSandbox,
}

impl ReceiptType {
    pub fn is_sandbox(&self) -> bool {
        matches!(
            self,
            ReceiptType::ProductionSandbox | ReceiptType::ProductionVPPSandbox
        )
    }

    pub fn is_vpp(&self) -> bool {
        matches!(
            self,
            ReceiptType::ProductionVPP | ReceiptType::ProductionVPPSandbox
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptType::Production => "Production",
            ReceiptType::ProductionVPP => "ProductionVPP",
            ReceiptType::ProductionSandbox => "ProductionSandbox",
            ReceiptType::ProductionVPPSandbox => "ProductionVPPSandbox",
        }
    }
}

/// One fully decoded purchase receipt.
///
/// Constructed once per decode call from an immutable raw payload and never
/// mutated afterwards. There is no partially valid receipt: either every
/// required field decoded or the whole call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// See `app_item_id`. String-encoded 64-bit integer; kept opaque to
    /// avoid precision loss on large identifiers.
    pub adam_id: String,
    /// Identifier the platform assigns to the app at purchase time.
    /// String-encoded 64-bit integer, kept opaque.
    pub app_item_id: String,
    /// The app's version number at receipt creation time. In the sandbox,
    /// the platform documents this as always `"1.0"`.
    pub application_version: String,
    /// The bundle identifier of the app the receipt belongs to.
    pub bundle_id: String,
    /// A unique identifier for the app download transaction.
    pub download_id: i64,
    /// The version of the app the user originally purchased.
    pub original_application_version: String,
    pub receipt_type: ReceiptType,
    /// An arbitrary number identifying a revision of the app. `0` in the
    /// sandbox.
    pub version_external_identifier: i64,
    /// The time the platform generated the receipt.
    pub receipt_creation_date: ReceiptDate,
    /// The time of the original app purchase.
    pub original_purchase_date: ReceiptDate,
    /// The time the verification request was processed.
    pub request_date: ReceiptDate,
    /// Receipt expiry for Volume Purchase Program apps. Absent means the
    /// receipt never expires. All-or-nothing with its sibling wire fields.
    pub expiration_date: Option<ReceiptDate>,
    /// Pre-order time, present only for pre-ordered apps. All-or-nothing
    /// with its sibling wire fields.
    pub preorder_date: Option<ReceiptDate>,
    /// Successfully decoded in-app purchase entries, in issuance order.
    /// Entries that failed to decode are reported in
    /// `ValidatedReceipt::transaction_failures` instead.
    pub in_app: Vec<InAppTransaction>,
}

/// Full output of a successful validation: the receipt itself, the anomaly
/// set accumulated while decoding it, and the per-entry transaction decode
/// failures. Anomalies never abort validation; they are surfaced so the
/// caller can apply its own risk policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub receipt: Receipt,
    pub anomalies: BTreeSet<AnomalyKind>,
    pub transaction_failures: Vec<TransactionFailure>,
}
