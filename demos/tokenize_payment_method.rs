//! Tokenization example: obtain multi-use tokens for a card and an ACH
//! account, then charge with the card token.
//!
//! # Running this example
//!
//! ```bash
//! export BILLPAY_PASSWORD=<your cashier password>
//! cargo run --example tokenize_payment_method
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
    model::{
        AccountType, Address, AchAccount, Bill, BillPayRequest, CardData, CheckType,
        PaymentMethod, SecCode, TokenData, TransactionIntent,
    },
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bill-Pay Client: Tokenization Example\n");

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

    // 1. Tokenize a card.
    let mut request = BillPayRequest::new(TransactionIntent::Verify {
        request_multi_use_token: true,
    });
    request.address = Some(Address::with_postal_code("12345"));
    request.payment_method = Some(PaymentMethod::Card(CardData {
        number: "4444444444444448".to_owned(),
        expiration_month: 12,
        expiration_year: 2027,
        security_code: Some("123".to_owned()),
        card_holder_name: Some("Test Tester".to_owned()),
    }));

    let card_token = match client.execute(&request).await {
        Ok(result) => {
            let token = result.token.unwrap_or_default();
            println!("Card token: {token}");
            Some(token)
        }
        Err(e) => {
            eprintln!("Card tokenization failed: {e}");
            None
        }
    };

    // 2. Tokenize an ACH account; the client routes this to the ACH
    //    flavor of the token operation automatically.
    let mut request = BillPayRequest::new(TransactionIntent::Verify {
        request_multi_use_token: true,
    });
    request.address = Some(Address::with_postal_code("12345"));
    request.payment_method = Some(PaymentMethod::Ach(AchAccount {
        account_number: "12345".to_owned(),
        routing_number: "064000017".to_owned(),
        account_type: AccountType::Checking,
        check_type: CheckType::Business,
        sec_code: SecCode::Web,
        check_holder_name: Some("Tester".to_owned()),
        bank_name: Some("Regions".to_owned()),
    }));

    match client.execute(&request).await {
        Ok(result) => println!("ACH token: {}", result.token.unwrap_or_default()),
        Err(e) => eprintln!("ACH tokenization failed: {e}"),
    }

    // 3. Charge with the stored card token.
    if let Some(token) = card_token {
        let amount = Decimal::new(5000, 2);
        let mut request = BillPayRequest::new(TransactionIntent::Sale {
            bill_data_hosted: true,
            request_multi_use_token: false,
        });
        request.amount = amount;
        request.currency = Some("USD".to_owned());
        request.bills = vec![Bill::new("12345", amount)];
        request.payment_method = Some(PaymentMethod::Token(TokenData {
            value: token,
            expiration_month: Some(12),
            expiration_year: Some(2027),
        }));

        match client.execute(&request).await {
            Ok(result) => println!(
                "Token charge approved, transaction id {}",
                result.transaction_id.as_deref().unwrap_or("-")
            ),
            Err(e) => eprintln!("Token charge failed: {e}"),
        }
    }

    Ok(())
}
