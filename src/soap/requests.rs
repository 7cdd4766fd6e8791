//! Request encoders, one per gateway operation.
//!
//! Each encoder turns a normalized request into the operation's XML body
//! element. The gateway's XML is order-sensitive, so every body is a serde
//! struct whose field order is the wire order, serialized with `quick-xml`.
//!
//! Optional data follows the gateway's absent-versus-blank rule: a `None`
//! field is omitted from the body entirely, while `Some("")` is emitted as
//! an empty element.

use serde::Serialize;

use crate::{
    error::{BillPayError, Result},
    model::{
        Address, Bill, BillPayRequest, Customer, PaymentMethod, TransactionIntent,
    },
    soap::{format_amount, format_date, operations::GatewayOperation},
};

/// Encodes the operation body element for a request.
///
/// # Errors
///
/// Returns [`BillPayError::Validation`] when the request is missing data the
/// operation requires (normally caught upstream), and
/// [`BillPayError::Protocol`] if XML serialization itself fails.
pub fn encode_request(operation: GatewayOperation, request: &BillPayRequest) -> Result<String> {
    match operation {
        GatewayOperation::MakePayment
        | GatewayOperation::MakePaymentReturnToken
        | GatewayOperation::MakeBlindPayment
        | GatewayOperation::MakeBlindPaymentReturnToken => {
            serialize(operation, &ChargeXml::from_request(operation, request)?)
        }
        GatewayOperation::GetToken => {
            serialize(operation, &CardTokenXml::from_request(request)?)
        }
        GatewayOperation::GetAchToken => {
            serialize(operation, &AchTokenXml::from_request(request)?)
        }
        GatewayOperation::ReversePayment => {
            serialize(operation, &ReversePaymentXml::from_request(request)?)
        }
        GatewayOperation::LoadBills => {
            serialize(operation, &LoadBillsXml::from_request(request))
        }
        GatewayOperation::LoadSecurePay => {
            serialize(operation, &LoadSecurePayXml::from_request(request)?)
        }
        GatewayOperation::CreateCustomer | GatewayOperation::UpdateCustomer => {
            serialize(operation, &CustomerEnvelopeXml::from_request(operation, request)?)
        }
        GatewayOperation::DeleteCustomer => {
            serialize(operation, &DeleteCustomerXml::from_request(request)?)
        }
        GatewayOperation::CreateCustomerAccount => {
            serialize(operation, &CreateCustomerAccountXml::from_request(request)?)
        }
        GatewayOperation::UpdateCustomerAccount => {
            serialize(operation, &UpdateCustomerAccountXml::from_request(request)?)
        }
        GatewayOperation::DeleteCustomerAccount => {
            serialize(operation, &DeleteCustomerAccountXml::from_request(request)?)
        }
        GatewayOperation::UpdateTokenExpirationDate => {
            serialize(operation, &UpdateTokenExpirationDateXml::from_request(request)?)
        }
    }
}

fn serialize<T: Serialize>(operation: GatewayOperation, body: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(operation.envelope_element(), body).map_err(|e| {
        BillPayError::Protocol(format!("failed to serialize {} request: {e}", operation.name()))
    })
}

fn missing(operation: GatewayOperation, what: &str) -> BillPayError {
    BillPayError::Validation(vec![format!("{what} is required for {}", operation.name())])
}

fn intent_mismatch(operation: GatewayOperation) -> BillPayError {
    BillPayError::Validation(vec![format!(
        "request intent does not match the {} operation",
        operation.name()
    )])
}

// Shared sub-elements ------------------------------------------------------

#[derive(Debug, Serialize)]
struct BillsXml<'a> {
    #[serde(rename = "Bill")]
    bills: Vec<BillXml<'a>>,
}

impl<'a> BillsXml<'a> {
    fn from_bills(bills: &'a [Bill]) -> Self {
        Self { bills: bills.iter().map(BillXml::from_bill).collect() }
    }
}

#[derive(Debug, Serialize)]
struct BillXml<'a> {
    #[serde(rename = "BillType", skip_serializing_if = "Option::is_none")]
    bill_type: Option<&'a str>,
    #[serde(rename = "Identifier1")]
    identifier1: &'a str,
    #[serde(rename = "Identifier2", skip_serializing_if = "Option::is_none")]
    identifier2: Option<&'a str>,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "DueDate", skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    #[serde(rename = "BillPresentment", skip_serializing_if = "Option::is_none")]
    presentment: Option<&'static str>,
    #[serde(rename = "Customer", skip_serializing_if = "Option::is_none")]
    customer: Option<CustomerXml<'a>>,
}

impl<'a> BillXml<'a> {
    fn from_bill(bill: &'a Bill) -> Self {
        Self {
            bill_type: bill.bill_type.as_deref(),
            identifier1: &bill.identifier1,
            identifier2: bill.identifier2.as_deref(),
            amount: format_amount(bill.amount),
            due_date: bill.due_date.map(format_date),
            presentment: bill.presentment.map(|p| p.as_str()),
            customer: bill.customer.as_ref().map(CustomerXml::from_customer),
        }
    }
}

#[derive(Debug, Serialize)]
struct CustomerXml<'a> {
    #[serde(rename = "CustomerId", skip_serializing_if = "Option::is_none")]
    customer_id: Option<&'a str>,
    #[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(rename = "HomePhone", skip_serializing_if = "Option::is_none")]
    home_phone: Option<&'a str>,
    #[serde(rename = "MobilePhone", skip_serializing_if = "Option::is_none")]
    mobile_phone: Option<&'a str>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    address: Option<AddressXml<'a>>,
}

impl<'a> CustomerXml<'a> {
    fn from_customer(customer: &'a Customer) -> Self {
        Self {
            customer_id: customer.id.as_deref(),
            first_name: customer.first_name.as_deref(),
            last_name: customer.last_name.as_deref(),
            email: customer.email.as_deref(),
            home_phone: customer.home_phone.as_deref(),
            mobile_phone: customer.mobile_phone.as_deref(),
            address: customer.address.as_ref().map(AddressXml::from_address),
        }
    }
}

#[derive(Debug, Serialize)]
struct AddressXml<'a> {
    #[serde(rename = "StreetAddress1", skip_serializing_if = "Option::is_none")]
    street_address1: Option<&'a str>,
    #[serde(rename = "StreetAddress2", skip_serializing_if = "Option::is_none")]
    street_address2: Option<&'a str>,
    #[serde(rename = "City", skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    country: Option<&'a str>,
}

impl<'a> AddressXml<'a> {
    fn from_address(address: &'a Address) -> Self {
        Self {
            street_address1: address.street_address1.as_deref(),
            street_address2: address.street_address2.as_deref(),
            city: address.city.as_deref(),
            state: address.state.as_deref(),
            postal_code: address.postal_code.as_deref(),
            country: address.country.as_deref(),
        }
    }
}

/// Payment-account fields for the stored payment-method operations.
///
/// Exactly one group is populated, matching the request's payment method
/// kind; the rest are omitted from the wire.
#[derive(Debug, Default, Serialize)]
struct AccountXml<'a> {
    #[serde(rename = "Token", skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
    #[serde(rename = "CardNumber", skip_serializing_if = "Option::is_none")]
    card_number: Option<&'a str>,
    #[serde(rename = "ExpirationMonth", skip_serializing_if = "Option::is_none")]
    expiration_month: Option<u32>,
    #[serde(rename = "ExpirationYear", skip_serializing_if = "Option::is_none")]
    expiration_year: Option<i32>,
    #[serde(rename = "SecurityCode", skip_serializing_if = "Option::is_none")]
    security_code: Option<&'a str>,
    #[serde(rename = "CardHolderName", skip_serializing_if = "Option::is_none")]
    card_holder_name: Option<&'a str>,
    #[serde(rename = "AccountNumber", skip_serializing_if = "Option::is_none")]
    account_number: Option<&'a str>,
    #[serde(rename = "RoutingNumber", skip_serializing_if = "Option::is_none")]
    routing_number: Option<&'a str>,
    #[serde(rename = "AccountType", skip_serializing_if = "Option::is_none")]
    account_type: Option<&'static str>,
    #[serde(rename = "CheckType", skip_serializing_if = "Option::is_none")]
    check_type: Option<&'static str>,
    #[serde(rename = "SecCode", skip_serializing_if = "Option::is_none")]
    sec_code: Option<&'static str>,
    #[serde(rename = "CheckHolderName", skip_serializing_if = "Option::is_none")]
    check_holder_name: Option<&'a str>,
    #[serde(rename = "BankName", skip_serializing_if = "Option::is_none")]
    bank_name: Option<&'a str>,
}

impl<'a> AccountXml<'a> {
    fn from_method(method: &'a PaymentMethod) -> Self {
        match method {
            PaymentMethod::Card(card) => Self {
                card_number: Some(&card.number),
                expiration_month: Some(card.expiration_month),
                expiration_year: Some(card.expiration_year),
                security_code: card.security_code.as_deref(),
                card_holder_name: card.card_holder_name.as_deref(),
                ..Self::default()
            },
            PaymentMethod::Ach(ach) => Self {
                account_number: Some(&ach.account_number),
                routing_number: Some(&ach.routing_number),
                account_type: Some(ach.account_type.as_str()),
                check_type: Some(ach.check_type.as_str()),
                sec_code: Some(ach.sec_code.as_str()),
                check_holder_name: ach.check_holder_name.as_deref(),
                bank_name: ach.bank_name.as_deref(),
                ..Self::default()
            },
            PaymentMethod::Token(token) => Self {
                token: Some(&token.value),
                expiration_month: token.expiration_month,
                expiration_year: token.expiration_year,
                ..Self::default()
            },
        }
    }
}

// Charge family ------------------------------------------------------------

/// Body for the four charge operations.
///
/// Hosted and blind charges share one layout; the difference is entirely in
/// the bill data the caller supplies (identifiers only when hosted, full
/// presentment detail when blind). The payment-account fields sit inline in
/// the body, not under a wrapper element.
#[derive(Debug, Serialize)]
struct ChargeXml<'a> {
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "ConvenienceAmount", skip_serializing_if = "Option::is_none")]
    convenience_amount: Option<String>,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
    #[serde(rename = "Token", skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
    #[serde(rename = "CardNumber", skip_serializing_if = "Option::is_none")]
    card_number: Option<&'a str>,
    #[serde(rename = "ExpirationMonth", skip_serializing_if = "Option::is_none")]
    expiration_month: Option<u32>,
    #[serde(rename = "ExpirationYear", skip_serializing_if = "Option::is_none")]
    expiration_year: Option<i32>,
    #[serde(rename = "SecurityCode", skip_serializing_if = "Option::is_none")]
    security_code: Option<&'a str>,
    #[serde(rename = "CardHolderName", skip_serializing_if = "Option::is_none")]
    card_holder_name: Option<&'a str>,
    #[serde(rename = "AccountNumber", skip_serializing_if = "Option::is_none")]
    account_number: Option<&'a str>,
    #[serde(rename = "RoutingNumber", skip_serializing_if = "Option::is_none")]
    routing_number: Option<&'a str>,
    #[serde(rename = "AccountType", skip_serializing_if = "Option::is_none")]
    account_type: Option<&'static str>,
    #[serde(rename = "CheckType", skip_serializing_if = "Option::is_none")]
    check_type: Option<&'static str>,
    #[serde(rename = "SecCode", skip_serializing_if = "Option::is_none")]
    sec_code: Option<&'static str>,
    #[serde(rename = "CheckHolderName", skip_serializing_if = "Option::is_none")]
    check_holder_name: Option<&'a str>,
    #[serde(rename = "BankName", skip_serializing_if = "Option::is_none")]
    bank_name: Option<&'a str>,
    #[serde(rename = "Bills")]
    bills: BillsXml<'a>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    address: Option<AddressXml<'a>>,
}

impl<'a> ChargeXml<'a> {
    fn from_request(operation: GatewayOperation, request: &'a BillPayRequest) -> Result<Self> {
        let method = request
            .payment_method
            .as_ref()
            .ok_or_else(|| missing(operation, "a payment method"))?;

        let mut body = Self {
            amount: format_amount(request.amount),
            convenience_amount: request.convenience_amount.map(format_amount),
            currency: request.currency.as_deref(),
            token: None,
            card_number: None,
            expiration_month: None,
            expiration_year: None,
            security_code: None,
            card_holder_name: None,
            account_number: None,
            routing_number: None,
            account_type: None,
            check_type: None,
            sec_code: None,
            check_holder_name: None,
            bank_name: None,
            bills: BillsXml::from_bills(&request.bills),
            address: request.address.as_ref().map(AddressXml::from_address),
        };

        match method {
            PaymentMethod::Card(card) => {
                body.card_number = Some(&card.number);
                body.expiration_month = Some(card.expiration_month);
                body.expiration_year = Some(card.expiration_year);
                body.security_code = card.security_code.as_deref();
                body.card_holder_name = card.card_holder_name.as_deref();
            }
            PaymentMethod::Ach(ach) => {
                body.account_number = Some(&ach.account_number);
                body.routing_number = Some(&ach.routing_number);
                body.account_type = Some(ach.account_type.as_str());
                body.check_type = Some(ach.check_type.as_str());
                body.sec_code = Some(ach.sec_code.as_str());
                body.check_holder_name = ach.check_holder_name.as_deref();
                body.bank_name = ach.bank_name.as_deref();
            }
            PaymentMethod::Token(token) => {
                body.token = Some(&token.value);
                body.expiration_month = token.expiration_month;
                body.expiration_year = token.expiration_year;
            }
        }

        Ok(body)
    }
}

// Token family -------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CardTokenXml<'a> {
    #[serde(rename = "CardNumber")]
    card_number: &'a str,
    #[serde(rename = "ExpirationMonth")]
    expiration_month: u32,
    #[serde(rename = "ExpirationYear")]
    expiration_year: i32,
    #[serde(rename = "SecurityCode", skip_serializing_if = "Option::is_none")]
    security_code: Option<&'a str>,
    #[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
    #[serde(rename = "RequestMultiUseToken")]
    request_multi_use_token: bool,
}

impl<'a> CardTokenXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::GetToken;
        let Some(PaymentMethod::Card(card)) = request.payment_method.as_ref() else {
            return Err(missing(operation, "clear-text card data"));
        };

        Ok(Self {
            card_number: &card.number,
            expiration_month: card.expiration_month,
            expiration_year: card.expiration_year,
            security_code: card.security_code.as_deref(),
            postal_code: postal_code(request),
            request_multi_use_token: true,
        })
    }
}

#[derive(Debug, Serialize)]
struct AchTokenXml<'a> {
    #[serde(rename = "AccountNumber")]
    account_number: &'a str,
    #[serde(rename = "RoutingNumber")]
    routing_number: &'a str,
    #[serde(rename = "AccountType")]
    account_type: &'static str,
    #[serde(rename = "CheckType")]
    check_type: &'static str,
    #[serde(rename = "SecCode")]
    sec_code: &'static str,
    #[serde(rename = "CheckHolderName", skip_serializing_if = "Option::is_none")]
    check_holder_name: Option<&'a str>,
    #[serde(rename = "BankName", skip_serializing_if = "Option::is_none")]
    bank_name: Option<&'a str>,
    #[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
    #[serde(rename = "RequestMultiUseToken")]
    request_multi_use_token: bool,
}

impl<'a> AchTokenXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::GetAchToken;
        let Some(PaymentMethod::Ach(ach)) = request.payment_method.as_ref() else {
            return Err(missing(operation, "an ACH account"));
        };

        Ok(Self {
            account_number: &ach.account_number,
            routing_number: &ach.routing_number,
            account_type: ach.account_type.as_str(),
            check_type: ach.check_type.as_str(),
            sec_code: ach.sec_code.as_str(),
            check_holder_name: ach.check_holder_name.as_deref(),
            bank_name: ach.bank_name.as_deref(),
            postal_code: postal_code(request),
            request_multi_use_token: true,
        })
    }
}

#[derive(Debug, Serialize)]
struct UpdateTokenExpirationDateXml<'a> {
    #[serde(rename = "Token")]
    token: &'a str,
    #[serde(rename = "ExpirationMonth")]
    expiration_month: u32,
    #[serde(rename = "ExpirationYear")]
    expiration_year: i32,
}

impl<'a> UpdateTokenExpirationDateXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::UpdateTokenExpirationDate;
        let Some(PaymentMethod::Token(token)) = request.payment_method.as_ref() else {
            return Err(missing(operation, "a token payment method"));
        };

        Ok(Self {
            token: &token.value,
            expiration_month: token
                .expiration_month
                .ok_or_else(|| missing(operation, "an expiration month"))?,
            expiration_year: token
                .expiration_year
                .ok_or_else(|| missing(operation, "an expiration year"))?,
        })
    }
}

fn postal_code(request: &BillPayRequest) -> Option<&str> {
    request.address.as_ref().and_then(|a| a.postal_code.as_deref())
}

// Reversal -----------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ReversePaymentXml<'a> {
    #[serde(rename = "TransactionId")]
    transaction_id: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "ConvenienceAmount", skip_serializing_if = "Option::is_none")]
    convenience_amount: Option<String>,
    #[serde(rename = "Bills", skip_serializing_if = "Option::is_none")]
    bills: Option<BillsXml<'a>>,
}

impl<'a> ReversePaymentXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let TransactionIntent::Reversal { transaction_id } = &request.intent else {
            return Err(intent_mismatch(GatewayOperation::ReversePayment));
        };

        // Partial reversals replace the original bill amounts; a full
        // reversal sends no bill collection at all.
        let bills =
            (!request.bills.is_empty()).then(|| BillsXml::from_bills(&request.bills));

        Ok(Self {
            transaction_id,
            amount: format_amount(request.amount),
            convenience_amount: request.convenience_amount.map(format_amount),
            bills,
        })
    }
}

// Billing ------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct LoadBillsXml<'a> {
    #[serde(rename = "Bills")]
    bills: BillsXml<'a>,
}

impl<'a> LoadBillsXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Self {
        Self { bills: BillsXml::from_bills(&request.bills) }
    }
}

#[derive(Debug, Serialize)]
struct LoadSecurePayXml<'a> {
    #[serde(rename = "PaymentType")]
    payment_type: &'static str,
    #[serde(rename = "CustomerIsEditable")]
    customer_is_editable: bool,
    #[serde(rename = "Bills")]
    bills: BillsXml<'a>,
    #[serde(rename = "Customer", skip_serializing_if = "Option::is_none")]
    customer: Option<CustomerXml<'a>>,
}

impl<'a> LoadSecurePayXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let TransactionIntent::LoadHostedPayment { payment_type, customer_is_editable } =
            &request.intent
        else {
            return Err(intent_mismatch(GatewayOperation::LoadSecurePay));
        };

        Ok(Self {
            payment_type: payment_type.as_str(),
            customer_is_editable: *customer_is_editable,
            bills: BillsXml::from_bills(&request.bills),
            customer: request.customer.as_ref().map(CustomerXml::from_customer),
        })
    }
}

// Customer CRUD ------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CustomerEnvelopeXml<'a> {
    #[serde(rename = "Customer")]
    customer: CustomerXml<'a>,
}

impl<'a> CustomerEnvelopeXml<'a> {
    fn from_request(operation: GatewayOperation, request: &'a BillPayRequest) -> Result<Self> {
        let customer = request
            .customer
            .as_ref()
            .ok_or_else(|| missing(operation, "a customer record"))?;

        if operation == GatewayOperation::UpdateCustomer && customer.id.is_none() {
            return Err(missing(operation, "a customer id"));
        }

        Ok(Self { customer: CustomerXml::from_customer(customer) })
    }
}

#[derive(Debug, Serialize)]
struct DeleteCustomerXml<'a> {
    #[serde(rename = "CustomerId")]
    customer_id: &'a str,
}

impl<'a> DeleteCustomerXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::DeleteCustomer;
        let customer_id = request
            .customer
            .as_ref()
            .and_then(|c| c.id.as_deref())
            .ok_or_else(|| missing(operation, "a customer id"))?;

        Ok(Self { customer_id })
    }
}

// Payment-method CRUD ------------------------------------------------------

#[derive(Debug, Serialize)]
struct CreateCustomerAccountXml<'a> {
    #[serde(rename = "CustomerId")]
    customer_id: &'a str,
    #[serde(rename = "AccountName")]
    account_name: &'a str,
    #[serde(rename = "PaymentAccount")]
    account: AccountXml<'a>,
}

impl<'a> CreateCustomerAccountXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::CreateCustomerAccount;
        let TransactionIntent::CreatePaymentMethod { account_name } = &request.intent else {
            return Err(intent_mismatch(operation));
        };

        Ok(Self {
            customer_id: customer_id(operation, request)?,
            account_name,
            account: AccountXml::from_method(
                request
                    .payment_method
                    .as_ref()
                    .ok_or_else(|| missing(operation, "a payment method"))?,
            ),
        })
    }
}

#[derive(Debug, Serialize)]
struct UpdateCustomerAccountXml<'a> {
    #[serde(rename = "CustomerId")]
    customer_id: &'a str,
    #[serde(rename = "PaymentMethodKey")]
    payment_method_key: &'a str,
    #[serde(rename = "PaymentAccount")]
    account: AccountXml<'a>,
}

impl<'a> UpdateCustomerAccountXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::UpdateCustomerAccount;
        let TransactionIntent::UpdatePaymentMethod { payment_method_key } = &request.intent else {
            return Err(intent_mismatch(operation));
        };

        Ok(Self {
            customer_id: customer_id(operation, request)?,
            payment_method_key,
            account: AccountXml::from_method(
                request
                    .payment_method
                    .as_ref()
                    .ok_or_else(|| missing(operation, "a payment method"))?,
            ),
        })
    }
}

#[derive(Debug, Serialize)]
struct DeleteCustomerAccountXml<'a> {
    #[serde(rename = "CustomerId")]
    customer_id: &'a str,
    #[serde(rename = "PaymentMethodKey")]
    payment_method_key: &'a str,
}

impl<'a> DeleteCustomerAccountXml<'a> {
    fn from_request(request: &'a BillPayRequest) -> Result<Self> {
        let operation = GatewayOperation::DeleteCustomerAccount;
        let TransactionIntent::DeletePaymentMethod { payment_method_key } = &request.intent else {
            return Err(intent_mismatch(operation));
        };

        Ok(Self { customer_id: customer_id(operation, request)?, payment_method_key })
    }
}

fn customer_id<'a>(
    operation: GatewayOperation,
    request: &'a BillPayRequest,
) -> Result<&'a str> {
    request
        .customer
        .as_ref()
        .and_then(|c| c.id.as_deref())
        .ok_or_else(|| missing(operation, "a customer id"))
}
