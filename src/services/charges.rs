//! Direct charges against cards, bank accounts and authorizations.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{path_segment, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{Metadata, Response};

/// Raw card details for a direct charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(
        rename = "card_number",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
    #[serde(
        rename = "card_cvc",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cvv: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Bank account to debit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    /// Bank code, as listed by [`BankService::list`](super::BankService::list).
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Payload for [`ChargeService::create`] and [`ChargeService::tokenize`].
///
/// Set exactly one of `card`, `bank` or `authorization_code`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeRequest {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Amount in the currency's subunit.
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Charge endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ChargeService<'a> {
    client: &'a PaystackClient,
}

impl<'a> ChargeService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Starts a charge. The response's `status` tells which `submit_*` step
    /// comes next, if any.
    pub fn create(&self, request: &ChargeRequest) -> Result<Response> {
        info!("Creating charge for {:?}", request.email);
        self.client
            .call(Method::POST, "/charge", RequestBody::json(request)?)
    }

    pub fn tokenize(&self, request: &ChargeRequest) -> Result<Response> {
        self.client
            .call(Method::POST, "/charge/tokenize", RequestBody::json(request)?)
    }

    pub fn submit_pin(&self, pin: &str, reference: &str) -> Result<Response> {
        self.submit("submit_pin", "pin", pin, reference)
    }

    pub fn submit_otp(&self, otp: &str, reference: &str) -> Result<Response> {
        self.submit("submit_otp", "otp", otp, reference)
    }

    pub fn submit_phone(&self, phone: &str, reference: &str) -> Result<Response> {
        self.submit("submit_phone", "phone", phone, reference)
    }

    pub fn submit_birthday(&self, birthday: &str, reference: &str) -> Result<Response> {
        self.submit("submit_birthday", "birthday", birthday, reference)
    }

    /// Polls a charge that is still being processed.
    pub fn check_pending(&self, reference: &str) -> Result<Response> {
        let path = format!("/charge/{}", path_segment(reference));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    fn submit(&self, step: &str, key: &str, value: &str, reference: &str) -> Result<Response> {
        info!("Charge {reference}: {step}");
        let body = RequestBody::form([(key, value), ("reference", reference)]);
        self.client
            .call(Method::POST, &format!("/charge/{step}"), body)
    }
}
