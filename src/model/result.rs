//! Normalized gateway result.

/// The decoded outcome of one gateway call.
///
/// Built by the response decoders and returned to the caller when the result
/// code is `"0"`. Non-zero codes never reach the caller as a result; the
/// client converts them into [`crate::BillPayError::Gateway`] before
/// returning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillPayResult {
    /// Gateway result code, verbatim. `"0"` means success.
    pub response_code: String,
    /// Gateway result message, verbatim.
    pub response_message: String,
    /// Gateway transaction id, for payment and reversal operations.
    pub transaction_id: Option<String>,
    /// Issued token, for tokenization operations. Payment-method creation
    /// surfaces the gateway's payment-method key here.
    pub token: Option<String>,
    /// Hosted payment identifier, for hosted-payment loads.
    pub payment_identifier: Option<String>,
}

impl BillPayResult {
    /// Whether the gateway reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_code == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_code_is_success() {
        let result = BillPayResult { response_code: "0".to_owned(), ..BillPayResult::default() };
        assert!(result.is_success());
    }

    #[test]
    fn test_nonzero_code_is_not_success() {
        let result = BillPayResult { response_code: "5".to_owned(), ..BillPayResult::default() };
        assert!(!result.is_success());
    }

    #[test]
    fn test_default_has_no_payload() {
        let result = BillPayResult::default();
        assert!(result.transaction_id.is_none());
        assert!(result.token.is_none());
        assert!(result.payment_identifier.is_none());
    }
}
