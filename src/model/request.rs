//! Normalized gateway request.
//!
//! A [`BillPayRequest`] is the finished parameter set an upstream builder
//! layer produces: one transaction intent plus the data that intent needs.
//! Intents that require extra references carry them as variant fields, so an
//! unreferenced reversal or an un-keyed payment-method update cannot be
//! expressed at all.

use rust_decimal::Decimal;

use crate::model::{Address, Bill, Customer, PaymentMethod};

/// The caller's declared intent for one gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionIntent {
    /// Charge the payment method against one or more bills.
    Sale {
        /// Whether the bills were previously loaded at the gateway.
        bill_data_hosted: bool,
        /// Whether to request a multi-use token alongside the charge.
        request_multi_use_token: bool,
    },
    /// Verify the payment method, optionally requesting a multi-use token.
    ///
    /// The gateway only supports verification through tokenization;
    /// `request_multi_use_token` must be true for the call to route.
    Verify {
        /// Whether to request a multi-use token.
        request_multi_use_token: bool,
    },
    /// Reverse a previously executed payment, fully or partially.
    Reversal {
        /// Transaction id of the payment being reversed.
        transaction_id: String,
    },
    /// Load bills into the gateway's hosted bill store.
    LoadBills,
    /// Pre-load a hosted payment page and obtain its payment identifier.
    LoadHostedPayment {
        /// The payment flavor the hosted page will execute.
        payment_type: HostedPaymentType,
        /// Whether the payer may edit customer data on the hosted page.
        customer_is_editable: bool,
    },
    /// Create a customer record.
    CreateCustomer,
    /// Update an existing customer record.
    UpdateCustomer,
    /// Delete a customer record.
    DeleteCustomer,
    /// Attach a recurring payment method to a customer.
    CreatePaymentMethod {
        /// Merchant-assigned name for the stored payment method.
        account_name: String,
    },
    /// Update a stored recurring payment method.
    UpdatePaymentMethod {
        /// Gateway-assigned key of the stored payment method.
        payment_method_key: String,
    },
    /// Delete a stored recurring payment method.
    DeletePaymentMethod {
        /// Gateway-assigned key of the stored payment method.
        payment_method_key: String,
    },
    /// Update the expiration date stored against a card token.
    UpdateTokenExpiry,
}

/// Payment flavor a hosted payment page executes on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostedPaymentType {
    /// Plain payment.
    MakePayment,
    /// Payment that also returns a multi-use token.
    MakePaymentReturnToken,
}

impl HostedPaymentType {
    /// Gateway wire text for this hosted payment type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MakePayment => "MakePayment",
            Self::MakePaymentReturnToken => "MakePaymentReturnToken",
        }
    }
}

/// A normalized, validated gateway request.
///
/// Invariants assumed (enforced upstream, not here): the amount is
/// non-negative, and for charge and reversal intents the bill amounts sum to
/// the declared total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillPayRequest {
    /// What the caller wants done.
    pub intent: TransactionIntent,
    /// The payment method, for intents that charge or tokenize one.
    pub payment_method: Option<PaymentMethod>,
    /// Total amount of the transaction.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Convenience fee charged alongside the bill total.
    pub convenience_amount: Option<Decimal>,
    /// Bills the transaction applies to.
    pub bills: Vec<Bill>,
    /// Billing address.
    pub address: Option<Address>,
    /// Customer data, for billing detail and CRUD intents.
    pub customer: Option<Customer>,
}

impl BillPayRequest {
    /// Creates an empty request for the given intent.
    ///
    /// Callers fill the remaining fields with struct update syntax; upstream
    /// builders are expected to have validated the combination before the
    /// request reaches [`crate::BillPayClient::execute`].
    #[must_use]
    pub fn new(intent: TransactionIntent) -> Self {
        Self {
            intent,
            payment_method: None,
            amount: Decimal::ZERO,
            currency: None,
            convenience_amount: None,
            bills: Vec::new(),
            address: None,
            customer: None,
        }
    }
}
