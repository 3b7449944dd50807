//! Paystack API client and its configuration.
//!
//! The client holds everything a request needs: the secret key, the base
//! URL, the user agent and the HTTP transport. Resource services borrow it.

mod misc;
mod request;

use std::fmt;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::Result;
use crate::services::{
    BankService, BulkChargeService, ChargeService, CustomerService, PageService, PlanService,
    SettlementService, SubAccountService, SubscriptionService, TransactionService,
    TransferService,
};

pub use request::RequestBody;
pub(crate) use request::{paginate, path_segment, with_query};

/// Base URL for all Paystack API requests.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Overall deadline for one HTTP exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("paystack-rs/", env!("CARGO_PKG_VERSION"));

/// Settings used to build a [`PaystackClient`].
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given secret key with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sends requests to a different host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the transport timeout. Ignored by [`PaystackClient::with_http_client`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Paystack API client.
///
/// Cheap to clone; clones share the underlying connection pool. The key is
/// not validated locally, an invalid key surfaces as an API error on the
/// first call.
#[derive(Clone)]
pub struct PaystackClient {
    pub(crate) http: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl PaystackClient {
    /// Creates a client for the given secret key with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Creates a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that sends requests through the given transport.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        info!("Creating Paystack API client for {}", config.base_url);
        debug!("API key length: {}", config.api_key.len());
        Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            user_agent: config.user_agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn customers(&self) -> CustomerService<'_> {
        CustomerService::new(self)
    }

    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(self)
    }

    pub fn transfers(&self) -> TransferService<'_> {
        TransferService::new(self)
    }

    pub fn plans(&self) -> PlanService<'_> {
        PlanService::new(self)
    }

    pub fn subscriptions(&self) -> SubscriptionService<'_> {
        SubscriptionService::new(self)
    }

    pub fn subaccounts(&self) -> SubAccountService<'_> {
        SubAccountService::new(self)
    }

    pub fn pages(&self) -> PageService<'_> {
        PageService::new(self)
    }

    pub fn settlements(&self) -> SettlementService<'_> {
        SettlementService::new(self)
    }

    pub fn charges(&self) -> ChargeService<'_> {
        ChargeService::new(self)
    }

    pub fn banks(&self) -> BankService<'_> {
        BankService::new(self)
    }

    pub fn bulk_charges(&self) -> BulkChargeService<'_> {
        BulkChargeService::new(self)
    }
}

impl fmt::Debug for PaystackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
