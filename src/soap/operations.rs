//! Operation routing.
//!
//! The gateway exposes a family of near-identical operations and the right
//! one depends on the declared intent plus a handful of flags. The whole
//! decision lives in [`GatewayOperation::select`] as one exhaustive match,
//! so adding an intent without a route fails to compile instead of failing
//! at runtime.

use crate::{
    error::{BillPayError, Result},
    model::{BillPayRequest, PaymentMethod, PaymentMethodKind, TransactionIntent},
};

/// A concrete gateway operation, selected from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOperation {
    /// Charge against hosted bill data.
    MakePayment,
    /// Charge against hosted bill data, returning a multi-use token.
    MakePaymentReturnToken,
    /// Charge with inline bill data.
    MakeBlindPayment,
    /// Charge with inline bill data, returning a multi-use token.
    MakeBlindPaymentReturnToken,
    /// Tokenize a card.
    GetToken,
    /// Tokenize an ACH account.
    GetAchToken,
    /// Reverse a previous payment.
    ReversePayment,
    /// Load bills into the hosted bill store.
    LoadBills,
    /// Pre-load a hosted payment page.
    LoadSecurePay,
    /// Create a customer record.
    CreateCustomer,
    /// Update a customer record.
    UpdateCustomer,
    /// Delete a customer record.
    DeleteCustomer,
    /// Attach a recurring payment method to a customer.
    CreateCustomerAccount,
    /// Update a stored recurring payment method.
    UpdateCustomerAccount,
    /// Delete a stored recurring payment method.
    DeleteCustomerAccount,
    /// Update the expiration date stored against a card token.
    UpdateTokenExpirationDate,
}

impl GatewayOperation {
    /// Selects the gateway operation for a request.
    ///
    /// # Errors
    ///
    /// Returns [`BillPayError::UnsupportedTransaction`] when the intent and
    /// flag combination has no gateway operation — today that is `Verify`
    /// without a multi-use token request, which the gateway cannot express.
    pub fn select(request: &BillPayRequest) -> Result<Self> {
        match &request.intent {
            TransactionIntent::Sale { bill_data_hosted, request_multi_use_token } => {
                Ok(match (bill_data_hosted, request_multi_use_token) {
                    (true, true) => Self::MakePaymentReturnToken,
                    (true, false) => Self::MakePayment,
                    (false, true) => Self::MakeBlindPaymentReturnToken,
                    (false, false) => Self::MakeBlindPayment,
                })
            }
            TransactionIntent::Verify { request_multi_use_token } => {
                if !request_multi_use_token {
                    return Err(BillPayError::UnsupportedTransaction(
                        "Verify requires a multi-use token request".to_owned(),
                    ));
                }

                match request.payment_method.as_ref().map(PaymentMethod::kind) {
                    Some(PaymentMethodKind::Ach) => Ok(Self::GetAchToken),
                    _ => Ok(Self::GetToken),
                }
            }
            TransactionIntent::Reversal { .. } => Ok(Self::ReversePayment),
            TransactionIntent::LoadBills => Ok(Self::LoadBills),
            TransactionIntent::LoadHostedPayment { .. } => Ok(Self::LoadSecurePay),
            TransactionIntent::CreateCustomer => Ok(Self::CreateCustomer),
            TransactionIntent::UpdateCustomer => Ok(Self::UpdateCustomer),
            TransactionIntent::DeleteCustomer => Ok(Self::DeleteCustomer),
            TransactionIntent::CreatePaymentMethod { .. } => Ok(Self::CreateCustomerAccount),
            TransactionIntent::UpdatePaymentMethod { .. } => Ok(Self::UpdateCustomerAccount),
            TransactionIntent::DeletePaymentMethod { .. } => Ok(Self::DeleteCustomerAccount),
            TransactionIntent::UpdateTokenExpiry => Ok(Self::UpdateTokenExpirationDate),
        }
    }

    /// The operation's name, for diagnostics and logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MakePayment => "MakePayment",
            Self::MakePaymentReturnToken => "MakePaymentReturnToken",
            Self::MakeBlindPayment => "MakeBlindPayment",
            Self::MakeBlindPaymentReturnToken => "MakeBlindPaymentReturnToken",
            Self::GetToken => "GetToken",
            Self::GetAchToken => "GetAchToken",
            Self::ReversePayment => "ReversePayment",
            Self::LoadBills => "LoadBills",
            Self::LoadSecurePay => "LoadSecurePay",
            Self::CreateCustomer => "CreateCustomer",
            Self::UpdateCustomer => "UpdateCustomer",
            Self::DeleteCustomer => "DeleteCustomer",
            Self::CreateCustomerAccount => "CreateCustomerAccount",
            Self::UpdateCustomerAccount => "UpdateCustomerAccount",
            Self::DeleteCustomerAccount => "DeleteCustomerAccount",
            Self::UpdateTokenExpirationDate => "UpdateTokenExpirationDate",
        }
    }

    /// The body element name this operation sends.
    ///
    /// `GetAchToken` is a distinct encoder but goes over the wire inside a
    /// `GetToken` element; every other operation element matches the
    /// operation name.
    #[must_use]
    pub fn envelope_element(self) -> &'static str {
        match self {
            Self::GetAchToken => "GetToken",
            _ => self.name(),
        }
    }

    /// The response element name this operation expects back.
    #[must_use]
    pub fn response_tag(self) -> &'static str {
        match self {
            Self::MakePayment => "MakePaymentResponse",
            Self::MakePaymentReturnToken => "MakePaymentReturnTokenResponse",
            Self::MakeBlindPayment => "MakeBlindPaymentResponse",
            Self::MakeBlindPaymentReturnToken => "MakeBlindPaymentReturnTokenResponse",
            Self::GetToken | Self::GetAchToken => "GetTokenResponse",
            Self::ReversePayment => "ReversePaymentResponse",
            Self::LoadBills => "LoadBillsResponse",
            Self::LoadSecurePay => "LoadSecurePayResponse",
            Self::CreateCustomer => "CreateCustomerResponse",
            Self::UpdateCustomer => "UpdateCustomerResponse",
            Self::DeleteCustomer => "DeleteCustomerResponse",
            Self::CreateCustomerAccount => "CreateCustomerAccountResponse",
            Self::UpdateCustomerAccount => "UpdateCustomerAccountResponse",
            Self::DeleteCustomerAccount => "DeleteCustomerAccountResponse",
            Self::UpdateTokenExpirationDate => "UpdateTokenExpirationDateResponse",
        }
    }

    /// The operation family, which fixes the error summary wording.
    #[must_use]
    pub fn family(self) -> OperationFamily {
        match self {
            Self::MakePayment
            | Self::MakePaymentReturnToken
            | Self::MakeBlindPayment
            | Self::MakeBlindPaymentReturnToken => OperationFamily::Payment,
            Self::GetToken | Self::GetAchToken | Self::UpdateTokenExpirationDate => {
                OperationFamily::Token
            }
            Self::ReversePayment => OperationFamily::Reversal,
            Self::LoadBills => OperationFamily::Billing,
            Self::LoadSecurePay => OperationFamily::HostedPayment,
            Self::CreateCustomer | Self::UpdateCustomer | Self::DeleteCustomer => {
                OperationFamily::Customer
            }
            Self::CreateCustomerAccount
            | Self::UpdateCustomerAccount
            | Self::DeleteCustomerAccount => OperationFamily::PaymentMethod,
        }
    }

    /// Which payload shape the response decoder extracts.
    pub(crate) fn response_kind(self) -> ResponseKind {
        match self {
            Self::MakePayment
            | Self::MakePaymentReturnToken
            | Self::MakeBlindPayment
            | Self::MakeBlindPaymentReturnToken
            | Self::ReversePayment => ResponseKind::Transaction,
            Self::GetToken | Self::GetAchToken => ResponseKind::Token,
            Self::LoadSecurePay => ResponseKind::PaymentIdentifier,
            Self::CreateCustomerAccount => ResponseKind::PaymentMethodKey,
            Self::LoadBills
            | Self::CreateCustomer
            | Self::UpdateCustomer
            | Self::DeleteCustomer
            | Self::UpdateCustomerAccount
            | Self::DeleteCustomerAccount
            | Self::UpdateTokenExpirationDate => ResponseKind::Ack,
        }
    }
}

/// Operation families, each with a fixed human-readable failure summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFamily {
    /// Charge operations.
    Payment,
    /// Tokenization and token maintenance operations.
    Token,
    /// Payment reversals.
    Reversal,
    /// Bill loading.
    Billing,
    /// Hosted payment pre-loads.
    HostedPayment,
    /// Customer record management.
    Customer,
    /// Recurring payment-method management.
    PaymentMethod,
}

impl OperationFamily {
    /// The fixed summary attached to gateway failures in this family.
    #[must_use]
    pub fn error_summary(self) -> &'static str {
        match self {
            Self::Payment => "An error occurred attempting to make the payment",
            Self::Token => "An error occurred attempting to create the token",
            Self::Reversal => "An error occurred attempting to reverse the payment",
            Self::Billing => "An error occurred attempting to load the bills",
            Self::HostedPayment => "An error occurred attempting to load the hosted payment",
            Self::Customer => "An error occurred attempting to manage the customer",
            Self::PaymentMethod => "An error occurred attempting to manage the payment method",
        }
    }
}

/// Response payload shapes, one per decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseKind {
    /// Result code, message, transaction id, optional issued token.
    Transaction,
    /// Result code, message, issued token.
    Token,
    /// Result code, message, hosted payment identifier.
    PaymentIdentifier,
    /// Result code, message, stored payment-method key.
    PaymentMethodKey,
    /// Result code and message only.
    Ack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AccountType, AchAccount, CardData, CheckType, SecCode, TokenData,
    };

    fn sale_request(hosted: bool, multi_use: bool) -> BillPayRequest {
        BillPayRequest::new(TransactionIntent::Sale {
            bill_data_hosted: hosted,
            request_multi_use_token: multi_use,
        })
    }

    fn card() -> PaymentMethod {
        PaymentMethod::Card(CardData {
            number: "4444444444444448".to_owned(),
            expiration_month: 12,
            expiration_year: 2027,
            security_code: Some("123".to_owned()),
            card_holder_name: Some("Test Tester".to_owned()),
        })
    }

    fn ach() -> PaymentMethod {
        PaymentMethod::Ach(AchAccount {
            account_number: "12345".to_owned(),
            routing_number: "064000017".to_owned(),
            account_type: AccountType::Checking,
            check_type: CheckType::Business,
            sec_code: SecCode::Web,
            check_holder_name: Some("Tester".to_owned()),
            bank_name: Some("Regions".to_owned()),
        })
    }

    #[test]
    fn test_sale_routing_covers_four_distinct_operations() {
        let routed = [
            GatewayOperation::select(&sale_request(true, true)).unwrap(),
            GatewayOperation::select(&sale_request(true, false)).unwrap(),
            GatewayOperation::select(&sale_request(false, true)).unwrap(),
            GatewayOperation::select(&sale_request(false, false)).unwrap(),
        ];

        assert_eq!(routed[0], GatewayOperation::MakePaymentReturnToken);
        assert_eq!(routed[1], GatewayOperation::MakePayment);
        assert_eq!(routed[2], GatewayOperation::MakeBlindPaymentReturnToken);
        assert_eq!(routed[3], GatewayOperation::MakeBlindPayment);

        for (i, a) in routed.iter().enumerate() {
            for b in routed.iter().skip(i + 1) {
                assert_ne!(a, b, "sale routes must be mutually exclusive");
            }
        }
    }

    #[test]
    fn test_verify_without_multi_use_token_is_unsupported() {
        for method in [Some(card()), Some(ach()), None] {
            let mut request =
                BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: false });
            request.payment_method = method;

            let err = GatewayOperation::select(&request).unwrap_err();
            assert!(matches!(err, BillPayError::UnsupportedTransaction(_)));
        }
    }

    #[test]
    fn test_verify_with_ach_routes_to_ach_token() {
        let mut request =
            BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: true });
        request.payment_method = Some(ach());
        assert_eq!(GatewayOperation::select(&request).unwrap(), GatewayOperation::GetAchToken);
    }

    #[test]
    fn test_verify_with_card_routes_to_get_token() {
        let mut request =
            BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: true });
        request.payment_method = Some(card());
        assert_eq!(GatewayOperation::select(&request).unwrap(), GatewayOperation::GetToken);
    }

    #[test]
    fn test_verify_with_token_routes_to_get_token() {
        let mut request =
            BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: true });
        request.payment_method = Some(PaymentMethod::Token(TokenData {
            value: "tok-1".to_owned(),
            expiration_month: None,
            expiration_year: None,
        }));
        assert_eq!(GatewayOperation::select(&request).unwrap(), GatewayOperation::GetToken);
    }

    #[test]
    fn test_reversal_routes_to_reverse_payment() {
        let request = BillPayRequest::new(TransactionIntent::Reversal {
            transaction_id: "987654".to_owned(),
        });
        assert_eq!(GatewayOperation::select(&request).unwrap(), GatewayOperation::ReversePayment);
    }

    #[test]
    fn test_management_intents_route_to_same_named_operations() {
        let cases = [
            (TransactionIntent::LoadBills, GatewayOperation::LoadBills),
            (TransactionIntent::CreateCustomer, GatewayOperation::CreateCustomer),
            (TransactionIntent::UpdateCustomer, GatewayOperation::UpdateCustomer),
            (TransactionIntent::DeleteCustomer, GatewayOperation::DeleteCustomer),
            (TransactionIntent::UpdateTokenExpiry, GatewayOperation::UpdateTokenExpirationDate),
        ];

        for (intent, expected) in cases {
            let request = BillPayRequest::new(intent);
            assert_eq!(GatewayOperation::select(&request).unwrap(), expected);
        }
    }

    #[test]
    fn test_ach_token_shares_get_token_wire_names() {
        assert_eq!(GatewayOperation::GetAchToken.envelope_element(), "GetToken");
        assert_eq!(GatewayOperation::GetAchToken.response_tag(), "GetTokenResponse");
        assert_eq!(GatewayOperation::GetAchToken.name(), "GetAchToken");
    }

    #[test]
    fn test_response_tags_follow_operation_names() {
        assert_eq!(GatewayOperation::MakePayment.response_tag(), "MakePaymentResponse");
        assert_eq!(
            GatewayOperation::MakeBlindPaymentReturnToken.response_tag(),
            "MakeBlindPaymentReturnTokenResponse"
        );
        assert_eq!(GatewayOperation::LoadSecurePay.response_tag(), "LoadSecurePayResponse");
    }

    #[test]
    fn test_family_summaries() {
        assert_eq!(
            GatewayOperation::MakeBlindPayment.family().error_summary(),
            "An error occurred attempting to make the payment"
        );
        assert_eq!(
            GatewayOperation::GetAchToken.family().error_summary(),
            "An error occurred attempting to create the token"
        );
        assert_eq!(
            GatewayOperation::ReversePayment.family().error_summary(),
            "An error occurred attempting to reverse the payment"
        );
    }
}
