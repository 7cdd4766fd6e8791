//! Error types for the bill-pay gateway client.
//!
//! This module defines all error types that can occur while talking to the
//! gateway. All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Routing errors** ([`BillPayError::UnsupportedTransaction`]): the
//!   requested intent/flag combination has no gateway operation
//! - **Transport errors** ([`BillPayError::Http`],
//!   [`BillPayError::UnexpectedStatus`]): the gateway could not be reached,
//!   or answered with a non-200 status
//! - **Protocol errors** ([`BillPayError::Protocol`]): the gateway answered
//!   with XML that does not match the documented response contract
//! - **Gateway errors** ([`BillPayError::Gateway`]): a well-formed response
//!   carrying a non-zero result code
//!
//! # Examples
//!
//! ```
//! use billpay_client::error::{BillPayError, Result};
//!
//! fn check_code(code: &str, message: &str) -> Result<()> {
//!     if code != "0" {
//!         return Err(BillPayError::Gateway {
//!             summary: "An error occurred attempting to make the payment",
//!             code: code.to_owned(),
//!             message: message.to_owned(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for gateway operations.
///
/// This is a convenience type that uses [`BillPayError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, BillPayError>;

/// Errors that can occur while executing a gateway call.
///
/// Every non-success path of a call surfaces as exactly one of these
/// variants; nothing is retried or suppressed internally.
///
/// # Error Recovery
///
/// - **Transport errors** ([`Http`](Self::Http),
///   [`UnexpectedStatus`](Self::UnexpectedStatus)): safe to retry at the
///   caller's discretion
/// - **Routing errors** ([`UnsupportedTransaction`](Self::UnsupportedTransaction)):
///   fix the request; retrying the same call cannot succeed
/// - **Protocol errors** ([`Protocol`](Self::Protocol)): indicates a contract
///   mismatch with the gateway; not retryable
/// - **Gateway errors** ([`Gateway`](Self::Gateway)): inspect the carried
///   code to decide on compensation logic
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum BillPayError {
    /// The transaction type and flag combination has no gateway operation.
    ///
    /// The gateway only supports tokenization (`Verify`) when a multi-use
    /// token is requested; any other unroutable combination also lands here.
    #[error("transaction type is not supported by the gateway: {0}")]
    UnsupportedTransaction(String),

    /// HTTP request failed before a response was received.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, connection refused, DNS and TLS
    /// failures. The caller may retry with its own backoff policy.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-200 HTTP status.
    ///
    /// The response body is never decoded in this case.
    #[error("unexpected http status code [{status}]")]
    UnexpectedStatus {
        /// The HTTP status code the gateway returned.
        status: u16,
    },

    /// The response XML does not match the gateway contract.
    ///
    /// Raised when the expected response element or its result code is
    /// missing, or the body cannot be parsed at all. Indicates a contract
    /// mismatch between this client and the gateway version it talks to.
    #[error("invalid gateway response: {0}")]
    Protocol(String),

    /// A well-formed gateway response carrying a non-zero result code.
    ///
    /// `code` and `message` are carried verbatim from the response;
    /// `summary` is a fixed human-readable sentence per operation family.
    #[error("{summary} [{code}]: {message}")]
    Gateway {
        /// Fixed human-readable summary for the failed operation family.
        summary: &'static str,
        /// Gateway-assigned result code, verbatim.
        code: String,
        /// Gateway-assigned result message, verbatim.
        message: String,
    },

    /// The request failed validation before reaching the gateway.
    ///
    /// Produced by upstream builder layers and carried through unchanged;
    /// this crate itself never validates business rules.
    #[error("the request failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Configuration is missing or invalid.
    ///
    /// Raised for unparseable TOML, non-HTTPS service URLs, out-of-range
    /// timeouts, or a registry lookup for a service that was never
    /// configured.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_transaction_display() {
        let error = BillPayError::UnsupportedTransaction("Verify without token request".to_owned());
        assert_eq!(
            error.to_string(),
            "transaction type is not supported by the gateway: Verify without token request"
        );
    }

    #[test]
    fn test_unexpected_status_display() {
        let error = BillPayError::UnexpectedStatus { status: 503 };
        assert_eq!(error.to_string(), "unexpected http status code [503]");
    }

    #[test]
    fn test_gateway_error_display() {
        let error = BillPayError::Gateway {
            summary: "An error occurred attempting to make the payment",
            code: "5".to_owned(),
            message: "Declined".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "An error occurred attempting to make the payment [5]: Declined"
        );
    }

    #[test]
    fn test_protocol_error_display() {
        let error = BillPayError::Protocol("response missing MakePaymentResponse".to_owned());
        assert!(error.to_string().contains("invalid gateway response"));
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let error = BillPayError::Validation(vec![
            "bills cannot be empty".to_owned(),
            "amount must match the sum of the bill amounts".to_owned(),
        ]);
        let display = error.to_string();
        assert!(display.contains("bills cannot be empty"));
        assert!(display.contains("; amount must match"));
    }

    #[test]
    fn test_config_error_display() {
        let error = BillPayError::Config("service_url must use HTTPS".to_owned());
        assert_eq!(error.to_string(), "configuration error: service_url must use HTTPS");
    }
}
