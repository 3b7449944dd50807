//! Miscellaneous endpoints implemented directly on the client.

use log::{debug, info};
use reqwest::Method;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Balance, Response};

use super::{path_segment, PaystackClient, RequestBody};

const SESSION_TIMEOUT_PATH: &str = "/integration/payment_session_timeout";

#[derive(Deserialize)]
struct BalanceEnvelope {
    data: Option<Vec<Balance>>,
}

impl PaystackClient {
    /// Looks up the issuer details of a card BIN (its first six digits).
    pub fn resolve_card_bin(&self, bin: &str) -> Result<Response> {
        debug!("Resolving card BIN {bin}");
        let path = format!("/decision/bin/{}", path_segment(bin));
        self.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the available balance for every currency on the integration.
    pub fn check_balance(&self) -> Result<Vec<Balance>> {
        let envelope: BalanceEnvelope = self.call(Method::GET, "/balance", RequestBody::Empty)?;
        let balances = envelope
            .data
            .ok_or_else(|| Error::UnexpectedResponse("balance response has no data".to_string()))?;
        info!("Fetched balances for {} currencies", balances.len());
        Ok(balances)
    }

    /// Fetches the payment session timeout, in seconds.
    pub fn get_session_timeout(&self) -> Result<Response> {
        self.call(Method::GET, SESSION_TIMEOUT_PATH, RequestBody::Empty)
    }

    /// Updates the payment session timeout. Zero means sessions never expire.
    pub fn update_session_timeout(&self, timeout: u32) -> Result<Response> {
        let body = RequestBody::form([("timeout", timeout.to_string())]);
        self.call(Method::PUT, SESSION_TIMEOUT_PATH, body)
    }
}
