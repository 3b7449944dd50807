//! Transactions: initialization, verification and reporting.

use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use crate::client::{paginate, path_segment, with_query, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{Authorization, Expandable, List, Metadata, Response};

use super::customers::Customer;
use super::plans::Plan;
use super::subaccounts::SubAccount;
use super::DEFAULT_PAGE_SIZE;

/// Request to start a transaction or charge a saved authorization.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRequest {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Amount in the currency's subunit (kobo, pesewas, cents).
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<i64>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bearer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
}

/// Request to check or re-request an authorization.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationRequest {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A Paystack transaction.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        rename = "createdAt",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Free-form; Paystack returns an object, a JSON-encoded string or `0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<Value>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_split: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Expandable<Authorization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Expandable<Plan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<Expandable<SubAccount>>,
}

pub type TransactionList = List<Transaction>;

/// Timeline of events in a transaction's checkout session.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionTimeline {
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<i64>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<Value>>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Response>>,
}

/// Transaction endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TransactionService<'a> {
    client: &'a PaystackClient,
}

impl<'a> TransactionService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Initializes a transaction. The response carries the `authorization_url`,
    /// `access_code` and `reference` to complete it.
    pub fn initialize(&self, request: &TransactionRequest) -> Result<Response> {
        info!(
            "Initializing transaction {:?} for {:?}",
            request.reference, request.email
        );
        self.client.call(
            Method::POST,
            "/transaction/initialize",
            RequestBody::json(request)?,
        )
    }

    /// Confirms the status of a transaction by its reference.
    pub fn verify(&self, reference: &str) -> Result<Transaction> {
        debug!("Verifying transaction {reference}");
        let path = format!("/transaction/verify/{}", path_segment(reference));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the first page of transactions.
    pub fn list(&self) -> Result<TransactionList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` transactions from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<TransactionList> {
        let path = paginate("/transaction", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    pub fn get(&self, id: i64) -> Result<Transaction> {
        self.client
            .call(Method::GET, &format!("/transaction/{id}"), RequestBody::Empty)
    }

    /// Charges a reusable authorization.
    pub fn charge_authorization(&self, request: &TransactionRequest) -> Result<Transaction> {
        info!(
            "Charging authorization {:?} for {:?}",
            request.authorization_code, request.amount
        );
        self.client.call(
            Method::POST,
            "/transaction/charge_authorization",
            RequestBody::json(request)?,
        )
    }

    /// Returns the checkout timeline. `id_or_reference` accepts either.
    pub fn timeline(&self, id_or_reference: &str) -> Result<TransactionTimeline> {
        let path = format!("/transaction/timeline/{}", path_segment(id_or_reference));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the total amount received on the integration.
    pub fn totals(&self) -> Result<Response> {
        self.client
            .call(Method::GET, "/transaction/totals", RequestBody::Empty)
    }

    /// Exports transactions to a file and returns a link to it. `params` are
    /// passed through as filters, e.g. `("from", "2024-01-01")`.
    pub fn export(&self, params: &[(&str, &str)]) -> Result<Response> {
        let path = with_query("/transaction/export", params);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Requests reauthorization of a charge.
    pub fn reauthorize(&self, request: &AuthorizationRequest) -> Result<Response> {
        self.client.call(
            Method::POST,
            "/transaction/request_reauthorization",
            RequestBody::json(request)?,
        )
    }

    /// Checks whether an authorization can be charged for the given amount.
    pub fn check_authorization(&self, request: &AuthorizationRequest) -> Result<Response> {
        self.client.call(
            Method::POST,
            "/transaction/check_authorization",
            RequestBody::json(request)?,
        )
    }
}
