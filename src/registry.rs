//! Process-wide service registry.
//!
//! Deployments often talk to the gateway under more than one credential set
//! — typically a payment service plus a separately provisioned bill-load
//! service. The registry holds one default configuration and any number of
//! named ones; clients resolve a configuration by optional name at
//! construction time.
//!
//! The registry is written during startup and read for the rest of the
//! process lifetime. Configurations are handed out as [`Arc`]s, so a
//! reconfiguration never invalidates a client already holding one.
//!
//! # Examples
//!
//! ```
//! use billpay_client::{config::BillPayConfig, registry};
//!
//! let config = BillPayConfig::new(
//!     "IntegrationTesting",
//!     "IntegrationTestCashier",
//!     "secret",
//!     "https://billpay.example.com/gw",
//! );
//! registry::configure_named("doc-example", config).unwrap();
//!
//! let resolved = registry::lookup(Some("doc-example")).unwrap();
//! assert_eq!(resolved.merchant_name, "IntegrationTesting");
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use crate::{
    config::BillPayConfig,
    error::{BillPayError, Result},
};

/// Key under which the unnamed default configuration is stored.
const DEFAULT_SLOT: &str = "default";

fn registry() -> &'static RwLock<HashMap<String, Arc<BillPayConfig>>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<BillPayConfig>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Registers the default service configuration.
///
/// Replaces any previously registered default.
///
/// # Errors
///
/// Returns error if the configuration fails validation.
pub fn configure(config: BillPayConfig) -> Result<()> {
    config.validate()?;
    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    map.insert(DEFAULT_SLOT.to_owned(), Arc::new(config));
    Ok(())
}

/// Registers a named service configuration.
///
/// Replaces any previously registered configuration under the same name.
///
/// # Errors
///
/// Returns error if the name is empty or the configuration fails validation.
pub fn configure_named(name: &str, config: BillPayConfig) -> Result<()> {
    if name.is_empty() {
        return Err(BillPayError::Config("service name must not be empty".to_owned()));
    }
    config.validate()?;
    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    map.insert(name.to_owned(), Arc::new(config));
    Ok(())
}

/// Resolves a configuration by optional service name.
///
/// `None` resolves the default slot.
///
/// # Errors
///
/// Returns [`BillPayError::Config`] if no configuration was registered under
/// the requested name.
pub fn lookup(name: Option<&str>) -> Result<Arc<BillPayConfig>> {
    let slot = name.unwrap_or(DEFAULT_SLOT);
    let map = registry().read().unwrap_or_else(PoisonError::into_inner);
    map.get(slot).cloned().ok_or_else(|| {
        BillPayError::Config(format!("no service configured under name '{slot}'"))
    })
}
