//! Envelope construction.
//!
//! Every gateway request is the same envelope: a header carrying the service
//! credentials and a body holding exactly one operation element. Encoders
//! produce the operation element; this module wraps it.

use quick_xml::escape::escape;

use crate::config::Credentials;

/// Wraps an operation body in the transport envelope.
///
/// Credential values are XML-escaped; the operation body is inserted as-is
/// since encoders already produce well-formed XML. Pure function of its
/// inputs, no I/O.
///
/// # Examples
///
/// ```
/// use billpay_client::{config::BillPayConfig, soap::envelope::build_envelope};
///
/// let config = BillPayConfig::new("Merchant", "cashier", "secret", "https://gw.example.com");
/// let envelope = build_envelope(&config.credentials(), "<GetToken/>");
/// assert!(envelope.contains("<MerchantName>Merchant</MerchantName>"));
/// assert!(envelope.contains("<soapenv:Body><GetToken/></soapenv:Body>"));
/// ```
#[must_use]
pub fn build_envelope(credentials: &Credentials<'_>, operation_body: &str) -> String {
    let merchant_name = escape(credentials.merchant_name);
    let username = escape(credentials.username);
    let password = escape(credentials.password);

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Header><MerchantName>{merchant_name}</MerchantName><UserName>{username}</UserName><Password>{password}</Password></soapenv:Header><soapenv:Body>{operation_body}</soapenv:Body></soapenv:Envelope>"#
    )
}
