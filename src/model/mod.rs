//! Domain data types for bill-pay gateway calls.
//!
//! These are plain data holders: the library receives them fully formed from
//! the caller (or an upstream builder layer) and never mutates them. Business
//! validation such as "bills must not be empty" or "amount must match the sum
//! of the bill amounts" happens before a request reaches this crate.

mod bill;
mod customer;
mod payment;
mod request;
mod result;

pub use bill::{Bill, BillPresentment};
pub use customer::{Address, Customer};
pub use payment::{AccountType, AchAccount, CardData, CheckType, PaymentMethod, PaymentMethodKind, SecCode, TokenData};
pub use request::{BillPayRequest, HostedPaymentType, TransactionIntent};
pub use result::BillPayResult;
