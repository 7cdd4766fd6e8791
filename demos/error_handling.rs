//! Error handling example showing how to handle different error types.
//!
//! This example demonstrates the error taxonomy: configuration errors,
//! routing errors, transport errors, and gateway result codes.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println"
)]

use billpay_client::{
    BillPayClient, BillPayError,
    config::BillPayConfig,
    model::{BillPayRequest, CardData, PaymentMethod, TransactionIntent},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bill-Pay Client: Error Handling Example\n");

    // Example 1: HTTP service URL (should fail at construction)
    println!("Example 1: Testing HTTP service URL (should fail)");
    let config = BillPayConfig::new(
        "IntegrationTesting",
        "IntegrationTestCashier",
        "secret",
        "http://billpay.example.com/gw",
    );

    match BillPayClient::new(config) {
        Ok(_) => println!("   Unexpected success"),
        Err(BillPayError::Config(msg)) => {
            println!("   ✓ Caught configuration error: {msg}");
            println!("   Recovery: Use an HTTPS service URL instead");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    // Example 2: Verify without a multi-use token request (unroutable)
    println!("\nExample 2: Testing Verify without a token request (should fail)");
    let config = BillPayConfig::new(
        "IntegrationTesting",
        "IntegrationTestCashier",
        "secret",
        "https://billpay.example.com/gw",
    );
    let client = BillPayClient::new(config)?;

    let mut request =
        BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: false });
    request.payment_method = Some(PaymentMethod::Card(CardData {
        number: "4444444444444448".to_owned(),
        expiration_month: 12,
        expiration_year: 2027,
        security_code: Some("123".to_owned()),
        card_holder_name: None,
    }));

    match client.execute(&request).await {
        Ok(_) => println!("   Unexpected success"),
        Err(BillPayError::UnsupportedTransaction(msg)) => {
            println!("   ✓ Caught routing error: {msg}");
            println!("   Recovery: Set request_multi_use_token to true");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    // Example 3: Unreachable gateway (transport error, retryable)
    println!("\nExample 3: Testing unreachable gateway (should fail)");
    let mut request =
        BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: true });
    request.payment_method = Some(PaymentMethod::Card(CardData {
        number: "4444444444444448".to_owned(),
        expiration_month: 12,
        expiration_year: 2027,
        security_code: Some("123".to_owned()),
        card_holder_name: None,
    }));

    match client.execute(&request).await {
        Ok(_) => println!("   Unexpected success"),
        Err(BillPayError::Http(e)) => {
            println!("   ✓ Caught transport error: {e}");
            println!("   Recovery: Retry with backoff once the gateway is reachable");
        }
        Err(BillPayError::UnexpectedStatus { status }) => {
            println!("   ✓ Caught transport error: status {status}");
        }
        Err(BillPayError::Gateway { summary, code, message }) => {
            // A reachable test gateway may decline instead.
            println!("   ✓ Gateway declined: {summary} [{code}]: {message}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    println!("\nDone.");
    Ok(())
}
