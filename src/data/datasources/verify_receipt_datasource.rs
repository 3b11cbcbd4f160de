use crate::{data::models::verify_receipt::receipt_model::ReceiptModel, errors::DecodeError};

pub(crate) trait VerifyReceiptDatasource {
    /// Decode the raw receipt body into the wire model:
    /// https://developer.apple.com/documentation/appstorereceipts/responsebody/receipt
    ///
    /// body:
    ///   The decoded receipt JSON object. The caller is responsible for
    ///   having verified the payload's signature and transport authenticity
    ///   before this point.
    fn decode_receipt(&self, body: &str) -> Result<ReceiptModel, DecodeError>;
}

pub struct VerifyReceiptDatasourceImpl;

impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    fn decode_receipt(&self, body: &str) -> Result<ReceiptModel, DecodeError> {
        serde_json::from_str(body).map_err(|e| DecodeError::MalformedPayload(e.to_string()))
    }
}

impl VerifyReceiptDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_body_is_a_malformed_payload() {
        let result = VerifyReceiptDatasourceImpl::new().decode_receipt("not json");
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let model = VerifyReceiptDatasourceImpl::new()
            .decode_receipt(r#"{"bundle_id": "com.example.app", "some_new_field": 42}"#)
            .unwrap();
        assert_eq!(model.bundle_id.as_deref(), Some("com.example.app"));
    }

    #[test]
    fn stringified_integers_are_tolerated() {
        let model = VerifyReceiptDatasourceImpl::new()
            .decode_receipt(r#"{"download_id": "90210", "version_external_identifier": 7}"#)
            .unwrap();
        assert_eq!(model.download_id, Some(90210));
        assert_eq!(model.version_external_identifier, Some(7));
    }
}
