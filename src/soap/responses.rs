//! Response decoders, one per response shape.
//!
//! Every gateway response is a single `<OperationName>Response` element
//! carrying a `<Code>`, a `<Message>`, and at most one payload element.
//! Decoders tolerate unknown elements for forward compatibility but fail
//! closed when the response element or its result code is missing — the
//! client never sees a result without a code.

use serde::Deserialize;

use crate::{
    error::{BillPayError, Result},
    model::BillPayResult,
    soap::{
        extract_element,
        operations::{GatewayOperation, ResponseKind},
    },
};

/// Decodes the raw response body for an operation.
///
/// # Errors
///
/// Returns [`BillPayError::Protocol`] when the expected response element is
/// absent or its required children (the result code) cannot be parsed.
pub fn decode_response(operation: GatewayOperation, raw: &str) -> Result<BillPayResult> {
    let cleaned = strip_namespace_prefixes(raw);
    let tag = operation.response_tag();
    let fragment = extract_element(&cleaned, tag).ok_or_else(|| {
        BillPayError::Protocol(format!("response is missing the {tag} element"))
    })?;

    match operation.response_kind() {
        ResponseKind::Transaction => {
            let xml: TransactionResponseXml = parse(operation, fragment)?;
            Ok(BillPayResult {
                response_code: xml.code,
                response_message: xml.message,
                transaction_id: xml.transaction_id,
                token: xml.token,
                payment_identifier: None,
            })
        }
        ResponseKind::Token => {
            let xml: TokenResponseXml = parse(operation, fragment)?;
            Ok(BillPayResult {
                response_code: xml.code,
                response_message: xml.message,
                transaction_id: None,
                token: xml.token,
                payment_identifier: None,
            })
        }
        ResponseKind::PaymentIdentifier => {
            let xml: SecurePayResponseXml = parse(operation, fragment)?;
            Ok(BillPayResult {
                response_code: xml.code,
                response_message: xml.message,
                transaction_id: None,
                token: None,
                payment_identifier: xml.payment_identifier,
            })
        }
        ResponseKind::PaymentMethodKey => {
            let xml: CustomerAccountResponseXml = parse(operation, fragment)?;
            Ok(BillPayResult {
                response_code: xml.code,
                response_message: xml.message,
                transaction_id: None,
                token: xml.payment_method_key,
                payment_identifier: None,
            })
        }
        ResponseKind::Ack => {
            let xml: AckResponseXml = parse(operation, fragment)?;
            Ok(BillPayResult {
                response_code: xml.code,
                response_message: xml.message,
                transaction_id: None,
                token: None,
                payment_identifier: None,
            })
        }
    }
}

fn parse<'de, T: Deserialize<'de>>(operation: GatewayOperation, fragment: &'de str) -> Result<T> {
    quick_xml::de::from_str(fragment).map_err(|e| {
        BillPayError::Protocol(format!("malformed {} response: {e}", operation.name()))
    })
}

/// Strips namespace prefixes and declarations from a response document.
///
/// Gateways front the response with a namespaced envelope; removing the
/// prefixes up front keeps the deserialization structs free of namespace
/// handling.
fn strip_namespace_prefixes(xml: &str) -> String {
    xml.replace("soapenv:", "")
        .replace("soap:", "")
        .replace(" xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\"", "")
        .replace(" xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"", "")
        .replace(" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"", "")
        .replace(" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\"", "")
}

// Response shapes ----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TransactionResponseXml {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "TransactionId")]
    transaction_id: Option<String>,
    #[serde(rename = "Token")]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponseXml {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Token")]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SecurePayResponseXml {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "PaymentIdentifier")]
    payment_identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomerAccountResponseXml {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "PaymentMethodKey")]
    payment_method_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AckResponseXml {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}
