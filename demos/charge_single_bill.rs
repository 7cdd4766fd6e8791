//! Basic charge example: pay one hosted bill with a clear-text card.
//!
//! # Running this example
//!
//! ```bash
//! export BILLPAY_PASSWORD=<your cashier password>
//! cargo run --example charge_single_bill
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println"
)]

use std::env;

use billpay_client::{
    BillPayClient,
    config::BillPayConfig,
    model::{Address, Bill, BillPayRequest, CardData, PaymentMethod, TransactionIntent},
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bill-Pay Client: Charge Example\n");

    let password = env::var("BILLPAY_PASSWORD").map_err(|_| {
        "BILLPAY_PASSWORD environment variable not set.\nSet it with: export BILLPAY_PASSWORD=<password>"
    })?;

    let config = BillPayConfig::new(
        "IntegrationTesting",
        "IntegrationTestCashier",
        password,
        "https://billpay.example.com/BillingDataManagement",
    );
    let client = BillPayClient::new(config)?;

    let amount = Decimal::new(5000, 2); // 50.00
    let mut request = BillPayRequest::new(TransactionIntent::Sale {
        bill_data_hosted: true,
        request_multi_use_token: false,
    });
    request.amount = amount;
    request.currency = Some("USD".to_owned());
    request.bills = vec![Bill::new("12345", amount)];
    request.address = Some(Address {
        street_address1: Some("1234 Test St".to_owned()),
        city: Some("Auburn".to_owned()),
        state: Some("AL".to_owned()),
        postal_code: Some("12345".to_owned()),
        country: Some("US".to_owned()),
        ..Address::default()
    });
    request.payment_method = Some(PaymentMethod::Card(CardData {
        number: "4444444444444448".to_owned(),
        expiration_month: 12,
        expiration_year: 2027,
        security_code: Some("123".to_owned()),
        card_holder_name: Some("Test Tester".to_owned()),
    }));

    println!("Charging {amount} against bill 12345...");

    match client.execute(&request).await {
        Ok(result) => {
            println!("Approved!");
            println!("  transaction id: {}", result.transaction_id.as_deref().unwrap_or("-"));
            println!("  message:        {}", result.response_message);
        }
        Err(e) => eprintln!("Charge failed: {e}"),
    }

    Ok(())
}
