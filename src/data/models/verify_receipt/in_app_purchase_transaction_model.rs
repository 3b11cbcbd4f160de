use serde::{Deserialize, Serialize};

/// Wire model for one entry of the receipt's `in_app` array.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt/in_app
///
/// Same conventions as `ReceiptModel`: all fields optional at this layer,
/// unknown fields ignored, date fields carried as the platform's three
/// parallel serializations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct InAppPurchaseTransactionModel {
    /// The number of items purchased, string-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) quantity: Option<String>,
    /// The product identifier of the purchased item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product_id: Option<String>,
    /// The platform's unique identifier for the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) transaction_id: Option<String>,
    /// The transaction identifier of the original purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_transaction_id: Option<String>,
    /// The time the platform charged the user's account, ISO-like format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) purchase_date: Option<String>,
    /// The purchase time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) purchase_date_ms: Option<String>,
    /// The purchase time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) purchase_date_pst: Option<String>,
    /// The time of the original purchase, ISO-like format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date: Option<String>,
    /// The original purchase time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date_ms: Option<String>,
    /// The original purchase time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original_purchase_date_pst: Option<String>,
    /// Subscription expiry, ISO-like format. Present only for
    /// auto-renewable subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expires_date: Option<String>,
    /// Subscription expiry in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expires_date_ms: Option<String>,
    /// Subscription expiry in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expires_date_pst: Option<String>,
    /// The time the platform refunded or revoked the transaction, ISO-like
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cancellation_date: Option<String>,
    /// The refund time in UNIX epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cancellation_date_ms: Option<String>,
    /// The refund time in the Pacific Time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cancellation_date_pst: Option<String>,
    /// The reason for a refund, string-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cancellation_reason: Option<String>,
    /// Cross-device identifier for subscription purchase events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) web_order_line_item_id: Option<String>,
    /// `"true"` if the subscription is in its free-trial period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_trial_period: Option<String>,
    /// `"true"` if the subscription is in an introductory price period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_in_intro_offer_period: Option<String>,
    /// The identifier of a redeemed promotional offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) promotional_offer_id: Option<String>,
}
