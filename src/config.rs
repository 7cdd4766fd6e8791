//! Service configuration types.
//!
//! This module defines TOML-deserializable configuration for a bill-pay
//! service: the credentials the gateway authenticates, the service URL, and
//! HTTP transport tuning.
//!
//! # Examples
//!
//! ```
//! use billpay_client::config::BillPayConfig;
//!
//! let toml = r#"
//!     merchant_name = "IntegrationTesting"
//!     username = "IntegrationTestCashier"
//!     password = "secret"
//!     service_url = "https://billpay.example.com/BillingDataManagement"
//! "#;
//!
//! let config: BillPayConfig = toml::from_str(toml).unwrap();
//! assert!(config.validate().is_ok());
//! ```

use std::{path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{BillPayError, Result};

/// Configuration for one bill-pay service.
///
/// A process typically configures one default service and, when bill loading
/// uses separate credentials, additional named services (see
/// [`crate::registry`]).
#[derive(Debug, Clone, Deserialize)]
pub struct BillPayConfig {
    /// Merchant name the gateway authenticates.
    pub merchant_name: String,

    /// Cashier or API username.
    pub username: String,

    /// Account password.
    pub password: String,

    /// Public endpoint URL requests are POSTed to.
    pub service_url: String,

    /// HTTP transport tuning.
    #[serde(default)]
    pub http: HttpConfig,
}

impl BillPayConfig {
    /// Creates a configuration from the four required fields with default
    /// transport settings.
    #[must_use]
    pub fn new(
        merchant_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        service_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_name: merchant_name.into(),
            username: username.into(),
            password: password.into(),
            service_url: service_url.into(),
            http: HttpConfig::default(),
        }
    }

    /// Creates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| BillPayError::Config(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or TOML parsing fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BillPayError::Config(format!("cannot read config file: {e}")))?;
        Self::from_toml(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks that:
    /// - `merchant_name` and `username` are non-empty
    /// - `service_url` parses, uses HTTPS, and is not a loopback address
    /// - transport timeouts are within bounds
    ///
    /// # Errors
    ///
    /// Returns [`BillPayError::Config`] describing the first failure.
    pub fn validate(&self) -> Result<()> {
        if self.merchant_name.is_empty() {
            return Err(BillPayError::Config("merchant_name must not be empty".to_owned()));
        }
        if self.username.is_empty() {
            return Err(BillPayError::Config("username must not be empty".to_owned()));
        }

        self.validate_service_url()?;
        self.http.validate()?;

        Ok(())
    }

    /// Borrows the credential fields for the duration of one call.
    #[must_use]
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            merchant_name: &self.merchant_name,
            username: &self.username,
            password: &self.password,
        }
    }

    fn validate_service_url(&self) -> Result<()> {
        let url = Url::parse(&self.service_url).map_err(|e| {
            BillPayError::Config(format!("invalid service_url '{}': {e}", self.service_url))
        })?;

        if url.scheme() != "https" {
            return Err(BillPayError::Config(format!(
                "service_url must use HTTPS, got: {}",
                url.scheme()
            )));
        }

        if let Some(host) = url.host_str() {
            let host_lower = host.to_lowercase();
            if host_lower == "localhost"
                || host_lower == "::1"
                || host_lower == "[::1]"
                || host_lower.starts_with("127.")
            {
                return Err(BillPayError::Config(format!(
                    "service_url must not be localhost or loopback: {host}"
                )));
            }
        }

        Ok(())
    }
}

/// Borrowed view of the credential fields of a [`BillPayConfig`].
///
/// The envelope builder reads these for exactly one call; nothing in the
/// crate stores or mutates them.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    /// Merchant name.
    pub merchant_name: &'a str,
    /// Username.
    pub username: &'a str,
    /// Password.
    pub password: &'a str,
}

/// HTTP transport tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns error if timeout values are outside valid ranges:
    /// - `timeout_secs`: must be 1-300 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(BillPayError::Config(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(BillPayError::Config(
                "connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connect timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_pool_max_idle() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> BillPayConfig {
        BillPayConfig::new(
            "IntegrationTesting",
            "IntegrationTestCashier",
            "secret",
            "https://billpay.example.com/BillingDataManagement",
        )
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_http_url_is_rejected() {
        let mut config = sample_config();
        config.service_url = "http://billpay.example.com".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("HTTPS"));
    }

    #[test]
    fn test_localhost_url_is_rejected() {
        let mut config = sample_config();
        config.service_url = "https://localhost:8443/gateway".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_loopback_ip_is_rejected() {
        let mut config = sample_config();
        config.service_url = "https://127.0.0.1/gateway".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_merchant_name_is_rejected() {
        let mut config = sample_config();
        config.merchant_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            merchant_name = "IntegrationTesting"
            username = "IntegrationTestCashier"
            password = "secret"
            service_url = "https://billpay.example.com/gw"

            [http]
            timeout_secs = 60
        "#;

        let config = BillPayConfig::from_toml(toml).unwrap();
        assert_eq!(config.merchant_name, "IntegrationTesting");
        assert_eq!(config.http.timeout_secs, 60);
        assert_eq!(config.http.connect_timeout_secs, 10);
    }

    #[test]
    fn test_from_toml_rejects_missing_fields() {
        let toml = r#"merchant_name = "OnlyName""#;
        assert!(BillPayConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_from_toml_rejects_bad_timeout() {
        let toml = r#"
            merchant_name = "M"
            username = "U"
            password = "P"
            service_url = "https://billpay.example.com/gw"

            [http]
            timeout_secs = 0
        "#;
        assert!(BillPayConfig::from_toml(toml).is_err());
    }

    #[test]
    fn test_credentials_borrow_config_fields() {
        let config = sample_config();
        let credentials = config.credentials();
        assert_eq!(credentials.merchant_name, "IntegrationTesting");
        assert_eq!(credentials.username, "IntegrationTestCashier");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_http_config_defaults() {
        let http = HttpConfig::default();
        assert_eq!(http.pool_max_idle_per_host, 10);
        assert_eq!(http.timeout(), Duration::from_secs(30));
        assert_eq!(http.connect_timeout(), Duration::from_secs(10));
    }
}
