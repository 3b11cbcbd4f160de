use chrono::{DateTime, Utc};

use crate::{
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasourceImpl,
        repositories::receipt_repository_impl::ReceiptRepositoryImpl,
    },
    domain::{
        entities::{receipt::ValidatedReceipt, verdict::Verdict},
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::DecodeError,
};

/// Entry point for receipt validation.
///
/// All operations are pure and synchronous: each call decodes its own input
/// and touches no shared state, so one util value can be used concurrently
/// for independent receipts.
pub struct ReceiptValidatorUtil<R: ReceiptRepository> {
    receipt_repository: R,
}

impl<R: ReceiptRepository> ReceiptValidatorUtil<R> {
    /// Decode and validate one raw receipt payload. `body` must be the
    /// decoded receipt JSON whose signature has already been verified
    /// upstream.
    pub fn validate(&self, body: &str) -> Result<ValidatedReceipt, DecodeError> {
        self.receipt_repository.validate(body)
    }

    /// Classify a previously validated receipt as of the given instant.
    pub fn classify(&self, validated: &ValidatedReceipt, as_of: DateTime<Utc>) -> Verdict {
        self.receipt_repository.classify(validated, as_of)
    }

    pub fn validate_and_classify(
        &self,
        body: &str,
        as_of: DateTime<Utc>,
    ) -> Result<(ValidatedReceipt, Verdict), DecodeError> {
        let validated = self.validate(body)?;
        let verdict = self.classify(&validated, as_of);
        Ok((validated, verdict))
    }
}

impl ReceiptValidatorUtil<ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl>> {
    pub fn new() -> Self {
        Self {
            receipt_repository: ReceiptRepositoryImpl::new(),
        }
    }
}

impl Default for ReceiptValidatorUtil<ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl>> {
    fn default() -> Self {
        Self::new()
    }
}
