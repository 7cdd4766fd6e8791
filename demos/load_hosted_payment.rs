//! Bill loading example: register named services, upload bills, and
//! pre-load a hosted payment page.
//!
//! # Running this example
//!
//! ```bash
//! export BILLPAY_PASSWORD=<your cashier password>
//! cargo run --example load_hosted_payment
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
        Address, Bill, BillPayRequest, BillPresentment, Customer, HostedPaymentType,
        TransactionIntent,
    },
    registry,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bill-Pay Client: Bill Load Example\n");

    let password = env::var("BILLPAY_PASSWORD").map_err(|_| {
        "BILLPAY_PASSWORD environment variable not set.\nSet it with: export BILLPAY_PASSWORD=<password>"
    })?;

    // Bill uploads run under a separately provisioned merchant; register
    // both services once, then resolve by name.
    registry::configure(BillPayConfig::new(
        "IntegrationTesting",
        "IntegrationTestCashier",
        password.clone(),
        "https://billpay.example.com/BillingDataManagement",
    ))?;
    registry::configure_named(
        "billload",
        BillPayConfig::new(
            "IntegrationTestingBillUpload",
            "IntegrationTestCashier",
            password,
            "https://billpay.example.com/BillingDataManagement",
        ),
    )?;

    let customer = Customer {
        first_name: Some("Test".to_owned()),
        last_name: Some("Tester".to_owned()),
        email: Some("test@tester.com".to_owned()),
        address: Some(Address {
            street_address1: Some("123 Drive".to_owned()),
            postal_code: Some("12345".to_owned()),
            ..Address::default()
        }),
        ..Customer::default()
    };

    let due_date = (Utc::now() + Duration::days(3)).date_naive();
    let bill = Bill {
        bill_type: Some("Tax Payments".to_owned()),
        identifier2: Some("23456".to_owned()),
        due_date: Some(due_date),
        presentment: Some(BillPresentment::Full),
        customer: Some(customer.clone()),
        ..Bill::new("12345", Decimal::new(5000, 2))
    };

    // 1. Upload the bill through the named bill-load service.
    let load_client = BillPayClient::from_registry(Some("billload"))?;
    let mut request = BillPayRequest::new(TransactionIntent::LoadBills);
    request.bills = vec![bill.clone()];

    match load_client.execute(&request).await {
        Ok(_) => println!("Bill loaded."),
        Err(e) => eprintln!("Bill load failed: {e}"),
    }

    // 2. Pre-load a hosted payment page for the same bill.
    let client = BillPayClient::from_registry(None)?;
    let mut request = BillPayRequest::new(TransactionIntent::LoadHostedPayment {
        payment_type: HostedPaymentType::MakePaymentReturnToken,
        customer_is_editable: true,
    });
    request.bills = vec![bill];
    request.customer = Some(customer);

    match client.execute(&request).await {
        Ok(result) => println!(
            "Hosted payment identifier: {}",
            result.payment_identifier.unwrap_or_default()
        ),
        Err(e) => eprintln!("Hosted payment load failed: {e}"),
    }

    Ok(())
}
