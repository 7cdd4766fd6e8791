//! HTTP transport implementation.
//!
//! This module provides the HTTPS transport using reqwest. Requests are
//! POSTed with `Content-Type: text/xml`, the content type the gateway
//! requires for its SOAP-style endpoints.

use std::{sync::LazyLock, time::Duration};

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::{
    config::HttpConfig,
    error::{BillPayError, Result},
    transport::{Transport, TransportResponse, sealed},
};

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per transport instance,
/// preserving connection pooling benefits across all default transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create default HTTP client")
});

/// Validates the endpoint URL before sending anything.
///
/// The gateway is only reachable over HTTPS; loopback addresses are
/// rejected so credentials cannot be redirected to a local listener.
fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| BillPayError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

    if url.scheme() != "https" {
        return Err(BillPayError::Config("only HTTPS endpoints are allowed".to_owned()));
    }

    if let Some(host) = url.host_str()
        && (host == "localhost" || host == "::1" || host == "[::1]" || host.starts_with("127."))
    {
        return Err(BillPayError::Config("loopback endpoints are not allowed".to_owned()));
    }

    Ok(url)
}

/// HTTPS transport using reqwest.
///
/// Supports automatic connection pooling and keep-alive. The transport is a
/// pure byte pipe: it does not inspect response bodies or map status codes.
///
/// # Examples
///
/// ```rust,no_run
/// use billpay_client::transport::{HttpTransport, Transport};
///
/// # async fn example() -> billpay_client::error::Result<()> {
/// let transport = HttpTransport::new()?;
/// let response = transport
///     .post("https://billpay.example.com/gw", "<soapenv:Envelope/>")
///     .await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a new HTTP transport with default settings.
    ///
    /// Uses a shared singleton client for connection pooling efficiency.
    ///
    /// Default configuration:
    /// - Pool max idle per host: 10
    /// - Timeout: 30 seconds
    /// - Connect timeout: 10 seconds
    ///
    /// # Errors
    ///
    /// This method is infallible but returns `Result` for API consistency.
    ///
    /// # Examples
    ///
    /// ```
    /// use billpay_client::transport::HttpTransport;
    ///
    /// let transport = HttpTransport::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Ok(Self { client: DEFAULT_HTTP_CLIENT.clone() })
    }

    /// Creates an HTTP transport with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the timeouts are out of bounds or HTTP client
    /// creation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use billpay_client::{config::HttpConfig, transport::HttpTransport};
    ///
    /// let config = HttpConfig {
    ///     pool_max_idle_per_host: 20,
    ///     timeout_secs: 60,
    ///     connect_timeout_secs: 15,
    /// };
    ///
    /// let transport = HttpTransport::with_config(&config).unwrap();
    /// ```
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(BillPayError::Http)?;

        Ok(Self { client })
    }
}

impl HttpTransport {
    /// Internal method to execute one POST exchange.
    #[instrument(skip_all, fields(endpoint, body_len = body.len()))]
    async fn execute_request(&self, endpoint: &str, body: &str) -> Result<TransportResponse> {
        let url = validate_endpoint(endpoint)?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", "text/xml")
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(BillPayError::Http)?;

        tracing::debug!(status, response_len = body.len(), "gateway exchange completed");

        Ok(TransportResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn post<'a>(&'a self, endpoint: &'a str, body: &'a str) -> Result<TransportResponse> {
        self.execute_request(endpoint, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transport() {
        let transport = HttpTransport::new();
        assert!(transport.is_ok());
    }

    #[test]
    fn test_with_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 5,
            timeout_secs: 45,
            connect_timeout_secs: 5,
        };
        assert!(HttpTransport::with_config(&config).is_ok());
    }

    #[test]
    fn test_with_config_rejects_zero_timeout() {
        let config = HttpConfig {
            pool_max_idle_per_host: 5,
            timeout_secs: 0,
            connect_timeout_secs: 5,
        };
        assert!(HttpTransport::with_config(&config).is_err());
    }

    #[test]
    fn test_validate_endpoint_accepts_https() {
        assert!(validate_endpoint("https://billpay.example.com/gw").is_ok());
    }

    #[test]
    fn test_validate_endpoint_rejects_http() {
        let err = validate_endpoint("http://billpay.example.com/gw").unwrap_err();
        assert!(err.to_string().contains("HTTPS"));
    }

    #[test]
    fn test_validate_endpoint_rejects_localhost() {
        assert!(validate_endpoint("https://localhost:8443/gw").is_err());
        assert!(validate_endpoint("https://127.0.0.1/gw").is_err());
    }

    #[test]
    fn test_validate_endpoint_rejects_garbage() {
        assert!(validate_endpoint("not a url").is_err());
    }
}
