//! Transport abstraction for gateway exchanges.
//!
//! This module provides a sealed [`Transport`] trait that abstracts the
//! "send bytes, get status and bytes back" boundary. The client drives it
//! with a fully built XML envelope and interprets the returned status and
//! body itself; the transport performs no retries and attaches no meaning to
//! the payload.
//!
//! # Examples
//!
//! ```rust,no_run
//! use billpay_client::transport::{HttpTransport, Transport};
//!
//! # async fn example() -> billpay_client::error::Result<()> {
//! let transport = HttpTransport::new()?;
//! let response = transport
//!     .post("https://billpay.example.com/gw", "<soapenv:Envelope/>")
//!     .await?;
//! println!("Status: {}", response.status);
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use crate::error::Result;

pub mod http;
pub(crate) mod sealed;

pub use http::HttpTransport;

/// Response from one transport exchange.
///
/// The status code is surfaced verbatim; callers decide how to interpret
/// non-200 answers.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// Transport protocol abstraction.
///
/// This trait is sealed: only implementations within this crate exist, which
/// keeps the credential-bearing request path reviewable in one place.
///
/// One call corresponds to exactly one synchronous request/response exchange
/// with the gateway. Implementations must not retry internally; transport
/// and I/O failures surface as [`crate::BillPayError::Http`], distinct from
/// gateway-logical failures.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Executes a POST of the given body to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is invalid or the HTTP exchange fails
    /// before a response is received. A non-200 status is not an error at
    /// this layer; it is returned in [`TransportResponse::status`].
    fn post<'a>(
        &'a self,
        endpoint: &'a str,
        body: &'a str,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;
}
