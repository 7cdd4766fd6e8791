//! Bill-Pay Gateway Client: SOAP/XML client for a remote bill-payment gateway.
//!
//! A Rust library that turns high-level payment intents — charge a card or
//! ACH account against bills, tokenize a payment method, reverse a payment,
//! load bills, manage customers and their stored payment methods — into the
//! gateway's SOAP-style XML operations, and translates gateway result codes
//! back into success values or typed errors.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   Caller         │  builds a BillPayRequest (validated upstream)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────────────────────────────────────┐
//! │        BillPayClient (this crate)                │
//! │  ┌────────────┐  ┌───────────┐  ┌────────────┐   │
//! │  │  routing   │──│  encoders │──│  envelope  │   │
//! │  │  (select)  │  │  (XML)    │  │ (header +  │   │
//! │  └────────────┘  └───────────┘  │   body)    │   │
//! │  ┌────────────┐  ┌───────────┐  └────────────┘   │
//! │  │  decoders  │──│ code → ok │                   │
//! │  │  (XML)     │  │ or error  │                   │
//! │  └────────────┘  └───────────┘                   │
//! └────────┬─────────────────────────────────────────┘
//!          │ HTTPS POST, Content-Type: text/xml
//! ┌────────▼─────────┐
//! │  Bill-pay        │  remote SOAP/XML gateway
//! │  gateway         │
//! └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## 1. Charge a card against a bill
//!
//! ```rust,no_run
//! use billpay_client::{
//!     BillPayClient,
//!     config::BillPayConfig,
//!     model::{Bill, BillPayRequest, CardData, PaymentMethod, TransactionIntent},
//! };
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> billpay_client::error::Result<()> {
//! let config = BillPayConfig::new(
//!     "IntegrationTesting",
//!     "IntegrationTestCashier",
//!     "secret",
//!     "https://billpay.example.com/gw",
//! );
//! let client = BillPayClient::new(config)?;
//!
//! let mut request = BillPayRequest::new(TransactionIntent::Sale {
//!     bill_data_hosted: true,
//!     request_multi_use_token: false,
//! });
//! request.amount = Decimal::new(5000, 2);
//! request.currency = Some("USD".to_owned());
//! request.bills = vec![Bill::new("12345", request.amount)];
//! request.payment_method = Some(PaymentMethod::Card(CardData {
//!     number: "4444444444444448".to_owned(),
//!     expiration_month: 12,
//!     expiration_year: 2027,
//!     security_code: Some("123".to_owned()),
//!     card_holder_name: Some("Test Tester".to_owned()),
//! }));
//!
//! let result = client.execute(&request).await?;
//! println!("transaction id: {:?}", result.transaction_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## 2. Tokenize a payment method
//!
//! ```rust,no_run
//! use billpay_client::{
//!     BillPayClient,
//!     config::BillPayConfig,
//!     model::{Address, BillPayRequest, CardData, PaymentMethod, TransactionIntent},
//! };
//!
//! # async fn example() -> billpay_client::error::Result<()> {
//! # let config = BillPayConfig::new("M", "u", "p", "https://billpay.example.com/gw");
//! let client = BillPayClient::new(config)?;
//!
//! let mut request = BillPayRequest::new(TransactionIntent::Verify {
//!     request_multi_use_token: true,
//! });
//! request.address = Some(Address::with_postal_code("12345"));
//! request.payment_method = Some(PaymentMethod::Card(CardData {
//!     number: "4444444444444448".to_owned(),
//!     expiration_month: 12,
//!     expiration_year: 2027,
//!     security_code: Some("123".to_owned()),
//!     card_holder_name: None,
//! }));
//!
//! let result = client.execute(&request).await?;
//! println!("token: {:?}", result.token);
//! # Ok(())
//! # }
//! ```
//!
//! ## 3. Configure services once, resolve by name
//!
//! Bill loading commonly runs under separately provisioned credentials.
//! Register both configurations at startup and resolve by name at call
//! time:
//!
//! ```rust,no_run
//! use billpay_client::{BillPayClient, config::BillPayConfig, registry};
//!
//! # fn example() -> billpay_client::error::Result<()> {
//! registry::configure(BillPayConfig::new(
//!     "IntegrationTesting",
//!     "IntegrationTestCashier",
//!     "secret",
//!     "https://billpay.example.com/gw",
//! ))?;
//! registry::configure_named("billload", BillPayConfig::new(
//!     "IntegrationTestingBillUpload",
//!     "IntegrationTestCashier",
//!     "secret",
//!     "https://billpay.example.com/gw",
//! ))?;
//!
//! let payments = BillPayClient::from_registry(None)?;
//! let bill_loader = BillPayClient::from_registry(Some("billload"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: the request pipeline ([`BillPayClient`])
//! - [`model`]: request, result, and domain data types
//! - [`soap`]: operation routing, envelope, encoders and decoders
//! - [`transport`]: the HTTP boundary (sealed trait + reqwest implementation)
//! - [`config`]: service configuration, TOML-loadable
//! - [`registry`]: process-wide named service configurations
//! - [`error`]: error taxonomy
//!
//! # Error Handling
//!
//! All operations return [`Result<T, BillPayError>`](error::Result). The
//! gateway's own failure signal — a non-zero result code in an otherwise
//! well-formed response — surfaces as [`BillPayError::Gateway`] with the
//! code and message verbatim:
//!
//! ```rust,no_run
//! use billpay_client::BillPayError;
//! # use billpay_client::{BillPayClient, config::BillPayConfig, model::*};
//! # async fn example() {
//! # let client = BillPayClient::new(BillPayConfig::new("M", "u", "p", "https://gw.example.com")).unwrap();
//! # let request = BillPayRequest::new(TransactionIntent::LoadBills);
//! match client.execute(&request).await {
//!     Ok(result) => println!("approved: {:?}", result.transaction_id),
//!     Err(BillPayError::Gateway { summary, code, message }) => {
//!         eprintln!("{summary} (code {code}): {message}");
//!     }
//!     Err(BillPayError::UnexpectedStatus { status }) => {
//!         eprintln!("gateway unreachable, status {status}; safe to retry");
//!     }
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! # }
//! ```
//!
//! # Concurrency
//!
//! A client is immutable after construction and safe to share: each call is
//! one independent request/response exchange with no shared mutable state.
//! The library performs no retries and no background work; cancellation and
//! retry policy belong to the caller.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod soap;
pub mod transport;

pub use client::BillPayClient;
pub use config::BillPayConfig;
pub use error::{BillPayError, Result};
pub use model::{BillPayRequest, BillPayResult, TransactionIntent};
