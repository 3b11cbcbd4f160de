use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    data::{
        datasources::{
            utils::reconcile_date_fields,
            verify_receipt_datasource::{VerifyReceiptDatasource, VerifyReceiptDatasourceImpl},
        },
        models::verify_receipt::{
            in_app_purchase_transaction_model::InAppPurchaseTransactionModel,
            receipt_model::ReceiptModel,
        },
    },
    domain::{
        entities::{
            in_app_transaction::{InAppTransaction, TransactionFailure},
            receipt::{Receipt, ReceiptType, ValidatedReceipt},
            receipt_date::ReceiptDate,
            verdict::{AnomalyKind, Verdict},
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::DecodeError,
};

pub struct ReceiptRepositoryImpl<D: VerifyReceiptDatasource> {
    verify_receipt_datasource: D,
}

impl<D: VerifyReceiptDatasource> ReceiptRepository for ReceiptRepositoryImpl<D> {
    fn validate(&self, body: &str) -> Result<ValidatedReceipt, DecodeError> {
        let model = self.verify_receipt_datasource.decode_receipt(body)?;
        let validated = ValidatedReceipt::from_model(model)?;
        debug!(
            bundle_id = %validated.receipt.bundle_id,
            receipt_type = validated.receipt.receipt_type.as_str(),
            transactions = validated.receipt.in_app.len(),
            "decoded receipt"
        );
        if !validated.anomalies.is_empty() {
            warn!(
                bundle_id = %validated.receipt.bundle_id,
                anomalies = validated.anomalies.len(),
                "receipt decoded with anomalies"
            );
        }
        Ok(validated)
    }

    fn classify(&self, validated: &ValidatedReceipt, as_of: DateTime<Utc>) -> Verdict {
        Verdict::derive(validated, as_of)
    }
}

impl ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            verify_receipt_datasource: VerifyReceiptDatasourceImpl::new(),
        }
    }
}

fn required_string(field: &'static str, value: &Option<String>) -> Result<String, DecodeError> {
    value.clone().ok_or(DecodeError::MissingField(field))
}

/// Reconcile one date triple, recording a `TemporalMismatch` anomaly when
/// the representations diverge beyond tolerance. `field_path` is the wire
/// path used in anomalies and unparseable-timestamp errors (for in-app
/// entries it carries the array index).
fn optional_date(
    field_path: &str,
    iso: &Option<String>,
    epoch_ms: &Option<String>,
    zone_local: &Option<String>,
    anomalies: &mut BTreeSet<AnomalyKind>,
) -> Result<Option<ReceiptDate>, DecodeError> {
    match reconcile_date_fields(
        field_path,
        iso.as_deref(),
        epoch_ms.as_deref(),
        zone_local.as_deref(),
    )? {
        None => Ok(None),
        Some(reconciled) => {
            if reconciled.mismatch {
                anomalies.insert(AnomalyKind::TemporalMismatch {
                    field: field_path.to_string(),
                });
            }
            Ok(Some(ReceiptDate {
                canonical: reconciled.canonical,
                iso: iso.clone(),
                epoch_ms: epoch_ms.clone(),
                zone_local: zone_local.clone(),
            }))
        }
    }
}

fn required_date(
    field: &'static str,
    field_path: &str,
    iso: &Option<String>,
    epoch_ms: &Option<String>,
    zone_local: &Option<String>,
    anomalies: &mut BTreeSet<AnomalyKind>,
) -> Result<ReceiptDate, DecodeError> {
    optional_date(field_path, iso, epoch_ms, zone_local, anomalies)?
        .ok_or(DecodeError::MissingField(field))
}

fn to_wire_value<T: Serialize>(model: &T) -> serde_json::Value {
    // Wire models contain only strings, integers, and nested values.
    serde_json::to_value(model).expect("wire model serializes to JSON")
}

impl ValidatedReceipt {
    pub(crate) fn from_model(m: ReceiptModel) -> Result<Self, DecodeError> {
        let mut anomalies = BTreeSet::new();

        let receipt_type = match m.receipt_type.as_deref() {
            None => return Err(DecodeError::MissingField("receipt_type")),
            Some("Production") => ReceiptType::Production,
            Some("ProductionVPP") => ReceiptType::ProductionVPP,
            Some("ProductionSandbox") => ReceiptType::ProductionSandbox,
            Some("ProductionVPPSandbox") => ReceiptType::ProductionVPPSandbox,
            Some(other) => return Err(DecodeError::InvalidReceiptType(other.to_string())),
        };

        let receipt_creation_date = required_date(
            "receipt_creation_date",
            "receipt_creation_date",
            &m.receipt_creation_date,
            &m.receipt_creation_date_ms,
            &m.receipt_creation_date_pst,
            &mut anomalies,
        )?;
        let original_purchase_date = required_date(
            "original_purchase_date",
            "original_purchase_date",
            &m.original_purchase_date,
            &m.original_purchase_date_ms,
            &m.original_purchase_date_pst,
            &mut anomalies,
        )?;
        let request_date = required_date(
            "request_date",
            "request_date",
            &m.request_date,
            &m.request_date_ms,
            &m.request_date_pst,
            &mut anomalies,
        )?;
        let expiration_date = optional_date(
            "expiration_date",
            &m.expiration_date,
            &m.expiration_date_ms,
            &m.expiration_date_pst,
            &mut anomalies,
        )?;
        let preorder_date = optional_date(
            "preorder_date",
            &m.preorder_date,
            &m.preorder_date_ms,
            &m.preorder_date_pst,
            &mut anomalies,
        )?;

        // Each entry decodes independently, slot order preserved; one bad
        // entry never aborts the receipt.
        let mut in_app = Vec::new();
        let mut transaction_failures = Vec::new();
        for (index, raw) in m.in_app.iter().flatten().enumerate() {
            match InAppTransaction::from_raw_entry(index, raw) {
                Ok((transaction, entry_anomalies)) => {
                    anomalies.extend(entry_anomalies);
                    in_app.push(transaction);
                }
                Err(reason) => {
                    anomalies.insert(AnomalyKind::TransactionDecodeFailure { index });
                    transaction_failures.push(TransactionFailure { index, reason });
                }
            }
        }

        let application_version = required_string("application_version", &m.application_version)?;
        if receipt_type.is_sandbox() && application_version != "1.0" {
            anomalies.insert(AnomalyKind::SandboxVersionMismatch);
        }
        // Only VPP receipts are documented to expire; the platform has been
        // observed to include extra fields, so this is surfaced, not fatal.
        if !receipt_type.is_vpp() && expiration_date.is_some() {
            anomalies.insert(AnomalyKind::UnexpectedExpirationField);
        }

        let receipt = Receipt {
            adam_id: required_string("adam_id", &m.adam_id)?,
            app_item_id: required_string("app_item_id", &m.app_item_id)?,
            application_version,
            bundle_id: required_string("bundle_id", &m.bundle_id)?,
            download_id: m
                .download_id
                .ok_or(DecodeError::MissingField("download_id"))?,
            original_application_version: required_string(
                "original_application_version",
                &m.original_application_version,
            )?,
            receipt_type,
            version_external_identifier: m
                .version_external_identifier
                .ok_or(DecodeError::MissingField("version_external_identifier"))?,
            receipt_creation_date,
            original_purchase_date,
            request_date,
            expiration_date,
            preorder_date,
            in_app,
        };

        Ok(ValidatedReceipt {
            receipt,
            anomalies,
            transaction_failures,
        })
    }
}

impl InAppTransaction {
    fn from_raw_entry(
        index: usize,
        raw: &serde_json::Value,
    ) -> Result<(Self, BTreeSet<AnomalyKind>), DecodeError> {
        let m: InAppPurchaseTransactionModel = serde_json::from_value(raw.clone())
            .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
        let mut anomalies = BTreeSet::new();

        let purchase_date = required_date(
            "purchase_date",
            &format!("in_app[{index}].purchase_date"),
            &m.purchase_date,
            &m.purchase_date_ms,
            &m.purchase_date_pst,
            &mut anomalies,
        )?;
        let original_purchase_date = optional_date(
            &format!("in_app[{index}].original_purchase_date"),
            &m.original_purchase_date,
            &m.original_purchase_date_ms,
            &m.original_purchase_date_pst,
            &mut anomalies,
        )?;
        let expires_date = optional_date(
            &format!("in_app[{index}].expires_date"),
            &m.expires_date,
            &m.expires_date_ms,
            &m.expires_date_pst,
            &mut anomalies,
        )?;
        let cancellation_date = optional_date(
            &format!("in_app[{index}].cancellation_date"),
            &m.cancellation_date,
            &m.cancellation_date_ms,
            &m.cancellation_date_pst,
            &mut anomalies,
        )?;

        let transaction = InAppTransaction {
            quantity: m.quantity,
            product_id: m.product_id.ok_or(DecodeError::MissingField("product_id"))?,
            transaction_id: m
                .transaction_id
                .ok_or(DecodeError::MissingField("transaction_id"))?,
            original_transaction_id: m.original_transaction_id,
            purchase_date,
            original_purchase_date,
            expires_date,
            cancellation_date,
            cancellation_reason: m.cancellation_reason,
            web_order_line_item_id: m.web_order_line_item_id,
            is_trial_period: m.is_trial_period,
            is_in_intro_offer_period: m.is_in_intro_offer_period,
            promotional_offer_id: m.promotional_offer_id,
        };
        Ok((transaction, anomalies))
    }

    fn to_model(&self) -> InAppPurchaseTransactionModel {
        let (purchase_date, purchase_date_ms, purchase_date_pst) = date_to_wire(&self.purchase_date);
        let (original_purchase_date, original_purchase_date_ms, original_purchase_date_pst) =
            opt_date_to_wire(&self.original_purchase_date);
        let (expires_date, expires_date_ms, expires_date_pst) =
            opt_date_to_wire(&self.expires_date);
        let (cancellation_date, cancellation_date_ms, cancellation_date_pst) =
            opt_date_to_wire(&self.cancellation_date);
        InAppPurchaseTransactionModel {
            quantity: self.quantity.clone(),
            product_id: Some(self.product_id.clone()),
            transaction_id: Some(self.transaction_id.clone()),
            original_transaction_id: self.original_transaction_id.clone(),
            purchase_date,
            purchase_date_ms,
            purchase_date_pst,
            original_purchase_date,
            original_purchase_date_ms,
            original_purchase_date_pst,
            expires_date,
            expires_date_ms,
            expires_date_pst,
            cancellation_date,
            cancellation_date_ms,
            cancellation_date_pst,
            cancellation_reason: self.cancellation_reason.clone(),
            web_order_line_item_id: self.web_order_line_item_id.clone(),
            is_trial_period: self.is_trial_period.clone(),
            is_in_intro_offer_period: self.is_in_intro_offer_period.clone(),
            promotional_offer_id: self.promotional_offer_id.clone(),
        }
    }
}

fn date_to_wire(date: &ReceiptDate) -> (Option<String>, Option<String>, Option<String>) {
    (
        date.iso.clone(),
        Some(date.epoch_ms_for_wire()),
        date.zone_local.clone(),
    )
}

fn opt_date_to_wire(
    date: &Option<ReceiptDate>,
) -> (Option<String>, Option<String>, Option<String>) {
    date.as_ref().map(date_to_wire).unwrap_or((None, None, None))
}

impl Receipt {
    /// Serialize back to the platform's wire mapping, using the same field
    /// names as the input payload. The epoch-milliseconds representation of
    /// each date is backfilled from the canonical instant when the raw
    /// string was absent, so the result always decodes again.
    pub fn to_payload(&self) -> serde_json::Value {
        to_wire_value(&self.to_model())
    }

    pub(crate) fn to_model(&self) -> ReceiptModel {
        let (receipt_creation_date, receipt_creation_date_ms, receipt_creation_date_pst) =
            date_to_wire(&self.receipt_creation_date);
        let (original_purchase_date, original_purchase_date_ms, original_purchase_date_pst) =
            date_to_wire(&self.original_purchase_date);
        let (request_date, request_date_ms, request_date_pst) = date_to_wire(&self.request_date);
        let (expiration_date, expiration_date_ms, expiration_date_pst) =
            opt_date_to_wire(&self.expiration_date);
        let (preorder_date, preorder_date_ms, preorder_date_pst) =
            opt_date_to_wire(&self.preorder_date);
        ReceiptModel {
            adam_id: Some(self.adam_id.clone()),
            app_item_id: Some(self.app_item_id.clone()),
            application_version: Some(self.application_version.clone()),
            bundle_id: Some(self.bundle_id.clone()),
            download_id: Some(self.download_id),
            expiration_date,
            expiration_date_ms,
            expiration_date_pst,
            in_app: if self.in_app.is_empty() {
                None
            } else {
                Some(
                    self.in_app
                        .iter()
                        .map(|transaction| to_wire_value(&transaction.to_model()))
                        .collect(),
                )
            },
            original_application_version: Some(self.original_application_version.clone()),
            original_purchase_date,
            original_purchase_date_ms,
            original_purchase_date_pst,
            preorder_date,
            preorder_date_ms,
            preorder_date_pst,
            receipt_creation_date,
            receipt_creation_date_ms,
            receipt_creation_date_pst,
            receipt_type: Some(self.receipt_type.as_str().to_string()),
            request_date,
            request_date_ms,
            request_date_pst,
            version_external_identifier: Some(self.version_external_identifier),
        }
    }
}
