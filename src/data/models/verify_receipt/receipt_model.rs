use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Wire model for the decoded receipt payload returned by the platform's
/// verification endpoint.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
///
/// Every field is optional at this layer; required-field enforcement (with
/// field-name error reporting) happens in the repository. Unknown fields are
/// ignored, since the platform has been observed to add extra fields.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ReceiptModel {
    /// See `app_item_id`. String-encoded 64-bit integer; never parsed as a
    /// native number, to avoid precision loss.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) adam_id: Option<String>,
    /// Generated by the platform to uniquely identify the app purchased.
    /// Assigned only in production. String-encoded 64-bit integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app_item_id: Option<String>,
    /// The app's version number. In production this is the version current
    /// at `receipt_creation_date_ms`; in the sandbox it is always `1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) application_version: Option<String>,
    /// The bundle identifier for the app to which the receipt belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bundle_id: Option<String>,
    /// A unique identifier for the app download transaction. An integer on
    /// the wire, but tolerates string encoding.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) download_id: Option<i64>,
    /// The time the receipt expires for apps purchased through the Volume
    /// Purchase Program, in a date-time format similar to ISO 8601.
    /// If absent, the receipt does not expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expiration_date: Option<String>,
    /// The VPP expiration time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expiration_date_ms: Option<String>,
    /// The VPP expiration time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expiration_date_pst: Option<String>,
    /// The in-app purchase receipt fields for all in-app transactions.
    /// Kept as raw values so each entry can be decoded independently; one
    /// malformed entry must not fail the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) in_app: Option<Vec<serde_json::Value>>,
    /// The version of the app the user originally purchased. Always `1.0`
    /// in the sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_application_version: Option<String>,
    /// The time of the original app purchase, ISO-like format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date: Option<String>,
    /// The time of the original app purchase, in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date_ms: Option<String>,
    /// The time of the original app purchase, in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date_pst: Option<String>,
    /// The time the user pre-ordered the app, ISO-like format. Present only
    /// for pre-ordered apps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preorder_date: Option<String>,
    /// The pre-order time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preorder_date_ms: Option<String>,
    /// The pre-order time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preorder_date_pst: Option<String>,
    /// The time the platform generated the receipt, ISO-like format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) receipt_creation_date: Option<String>,
    /// The receipt creation time in UNIX epoch milliseconds. This value
    /// does not change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) receipt_creation_date_ms: Option<String>,
    /// The receipt creation time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) receipt_creation_date_pst: Option<String>,
    /// The type of receipt generated; corresponds to the environment in
    /// which the app or VPP purchase was made. One of `Production`,
    /// `ProductionVPP`, `ProductionSandbox`, `ProductionVPPSandbox`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) receipt_type: Option<String>,
    /// The time the verification request was processed, ISO-like format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_date: Option<String>,
    /// The request-processing time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_date_ms: Option<String>,
    /// The request-processing time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_date_pst: Option<String>,
    /// An arbitrary number identifying a revision of the app. `0` in the
    /// sandbox. An integer on the wire, but tolerates string encoding.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) version_external_identifier: Option<i64>,
}
