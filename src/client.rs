//! The gateway client.
//!
//! [`BillPayClient`] drives the full request pipeline: select the gateway
//! operation for a request, encode its body, wrap it in the credential
//! envelope, POST it, decode the response, and turn non-zero result codes
//! into typed errors. Each call is one independent synchronous exchange;
//! the client holds no per-call state and can be shared across tasks.
//!
//! # Examples
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

use std::sync::Arc;

use tracing::instrument;

use crate::{
    config::BillPayConfig,
    error::{BillPayError, Result},
    model::{BillPayRequest, BillPayResult},
    registry,
    soap::{
        envelope::build_envelope, operations::GatewayOperation, requests::encode_request,
        responses::decode_response,
    },
    transport::{HttpTransport, Transport},
};

/// A client bound to one configured bill-pay service.
///
/// Construction validates the configuration once; afterwards the client is
/// immutable and every [`execute`](Self::execute) call is independent.
#[derive(Debug)]
pub struct BillPayClient<T: Transport = HttpTransport> {
    config: Arc<BillPayConfig>,
    transport: T,
}

impl BillPayClient<HttpTransport> {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails validation or the HTTP
    /// client cannot be built.
    pub fn new(config: BillPayConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(&config.http)?;
        Ok(Self { config: Arc::new(config), transport })
    }

    /// Creates a client from the process-wide service registry.
    ///
    /// `None` resolves the default service; a name resolves a named service
    /// (bill loading commonly runs under a separately provisioned one).
    ///
    /// # Errors
    ///
    /// Returns error if no service is configured under the requested name.
    pub fn from_registry(service_name: Option<&str>) -> Result<Self> {
        let config = registry::lookup(service_name)?;
        let transport = HttpTransport::with_config(&config.http)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> BillPayClient<T> {
    /// Creates a client over an explicit transport. Used by tests.
    #[cfg(test)]
    pub(crate) fn with_transport(config: Arc<BillPayConfig>, transport: T) -> Self {
        Self { config, transport }
    }

    /// The configuration this client is bound to.
    #[must_use]
    pub fn config(&self) -> &BillPayConfig {
        &self.config
    }

    /// Executes one gateway call.
    ///
    /// Routes the request to its gateway operation, sends it, and maps the
    /// outcome:
    ///
    /// - result code `"0"`: the decoded [`BillPayResult`] is returned
    /// - any other result code: [`BillPayError::Gateway`] carrying the code
    ///   and message verbatim plus the operation family's fixed summary
    /// - a non-200 HTTP status short-circuits with
    ///   [`BillPayError::UnexpectedStatus`] before any decoding
    ///
    /// No retries are performed at any layer; callers own retry policy.
    ///
    /// # Errors
    ///
    /// Returns one of the routing, transport, protocol, or gateway errors
    /// described on [`BillPayError`].
    #[instrument(skip_all, fields(operation = tracing::field::Empty))]
    pub async fn execute(&self, request: &BillPayRequest) -> Result<BillPayResult> {
        let operation = GatewayOperation::select(request)?;
        tracing::Span::current().record("operation", operation.name());

        let body = encode_request(operation, request)?;
        let envelope = build_envelope(&self.config.credentials(), &body);

        let response = self.transport.post(&self.config.service_url, &envelope).await?;

        if response.status != 200 {
            return Err(BillPayError::UnexpectedStatus { status: response.status });
        }

        let result = decode_response(operation, &response.body)?;

        if result.is_success() {
            tracing::debug!(operation = operation.name(), "gateway call succeeded");
            return Ok(result);
        }

        tracing::debug!(
            operation = operation.name(),
            code = %result.response_code,
            "gateway call failed"
        );

        Err(BillPayError::Gateway {
            summary: operation.family().error_summary(),
            code: result.response_code,
            message: result.response_message,
        })
    }
}
