use serde::Serialize;

use crate::{domain::entities::receipt_date::ReceiptDate, errors::DecodeError};

/// One in-app purchase or subscription event within a receipt. Owned
/// exclusively by its parent `Receipt` and never looked up independently.
///
/// Entries follow the same identifier + date-triple pattern as the receipt
/// itself; fields beyond that pattern are carried through opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppTransaction {
    /// The number of items purchased, string-encoded by the platform.
    pub quantity: Option<String>,
    /// The product identifier of the purchased item.
    pub product_id: String,
    /// The platform's unique identifier for this transaction.
    pub transaction_id: String,
    /// The transaction identifier of the original purchase (differs from
    /// `transaction_id` for restores and subscription renewals).
    pub original_transaction_id: Option<String>,
    /// The time the platform charged the user's account.
    pub purchase_date: ReceiptDate,
    /// The time of the original purchase.
    pub original_purchase_date: Option<ReceiptDate>,
    /// Subscription expiry, present for auto-renewable subscriptions only.
    pub expires_date: Option<ReceiptDate>,
    /// The time the platform refunded or revoked the transaction.
    pub cancellation_date: Option<ReceiptDate>,
    /// The reason for a refund, string-encoded by the platform.
    pub cancellation_reason: Option<String>,
    /// Cross-device identifier for subscription purchase events.
    pub web_order_line_item_id: Option<String>,
    /// `"true"` if the subscription is in its free-trial period.
    pub is_trial_period: Option<String>,
    /// `"true"` if the subscription is in an introductory price period.
    pub is_in_intro_offer_period: Option<String>,
    /// The identifier of a redeemed promotional offer.
    pub promotional_offer_id: Option<String>,
}

/// One undecodable `in_app` entry. Failures are isolated to their slot:
/// `index` is the entry's position in the wire array, which is otherwise
/// preserved in issuance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionFailure {
    pub index: usize,
    pub reason: DecodeError,
}
