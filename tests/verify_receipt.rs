use chrono::{TimeZone, Utc};
use iap_receipt_validator::{
    domain::entities::verdict::{AnomalyKind, Environment},
    errors::DecodeError,
    util::ReceiptValidatorUtil,
};
use serde_json::json;

fn sandbox_payload() -> serde_json::Value {
    json!({
        "adam_id": "0",
        "app_item_id": "0",
        "application_version": "2.0",
        "bundle_id": "com.example.app",
        "download_id": 0,
        "original_application_version": "1.0",
        "original_purchase_date": "2021-03-01 07:00:00 Etc/GMT",
        "original_purchase_date_ms": "1614582000000",
        "original_purchase_date_pst": "2021-02-28 23:00:00 America/Los_Angeles",
        "receipt_creation_date": "2021-03-22 10:33:18 Etc/GMT",
        "receipt_creation_date_ms": "1616409198724",
        "receipt_creation_date_pst": "2021-03-22 03:33:18 America/Los_Angeles",
        "receipt_type": "ProductionSandbox",
        "request_date": "2021-03-22 10:33:18 Etc/GMT",
        "request_date_ms": "1616409198724",
        "request_date_pst": "2021-03-22 03:33:18 America/Los_Angeles",
        "version_external_identifier": 0,
        "in_app": [{
            "quantity": "1",
            "product_id": "com.example.app.monthly",
            "transaction_id": "1000000000000001",
            "original_transaction_id": "1000000000000001",
            "purchase_date": "2021-03-22 10:33:00 Etc/GMT",
            "purchase_date_ms": "1616409180000",
            "purchase_date_pst": "2021-03-22 03:33:00 America/Los_Angeles",
            "expires_date": "2021-04-22 10:33:00 Etc/GMT",
            "expires_date_ms": "1619087580000",
            "expires_date_pst": "2021-04-22 03:33:00 America/Los_Angeles",
            "is_trial_period": "true",
        }],
    })
}

#[test]
fn sandbox_receipt_with_bumped_version_is_valid_but_flagged() {
    let util = ReceiptValidatorUtil::new();
    let as_of = Utc.with_ymd_and_hms(2021, 3, 23, 0, 0, 0).unwrap();
    let (validated, verdict) = util
        .validate_and_classify(&sandbox_payload().to_string(), as_of)
        .unwrap();

    assert_eq!(verdict.environment, Environment::Sandbox);
    assert!(!verdict.is_expired);
    assert!(verdict
        .anomalies
        .contains(&AnomalyKind::SandboxVersionMismatch));

    assert_eq!(validated.receipt.in_app.len(), 1);
    let transaction = &validated.receipt.in_app[0];
    assert_eq!(transaction.product_id, "com.example.app.monthly");
    assert_eq!(
        transaction.expires_date.as_ref().unwrap().canonical.timestamp_millis(),
        1619087580000
    );
}

#[test]
fn verdict_is_recomputable_and_deterministic() {
    let util = ReceiptValidatorUtil::new();
    let validated = util.validate(&sandbox_payload().to_string()).unwrap();
    let as_of = Utc.with_ymd_and_hms(2021, 3, 23, 0, 0, 0).unwrap();
    assert_eq!(
        util.classify(&validated, as_of),
        util.classify(&validated, as_of)
    );
}

#[test]
fn malformed_payload_yields_no_verdict() {
    let util = ReceiptValidatorUtil::new();
    let result = util.validate_and_classify("{\"bundle_id\":", Utc::now());
    assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
}
