//! Customer management.

use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::serde_as;

use crate::client::{paginate, path_segment, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{Authorization, List, Metadata, Response};

use super::subscriptions::Subscription;
use super::{require_id, DEFAULT_PAGE_SIZE};

/// A Paystack customer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        rename = "createdAt",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        rename = "updatedAt",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<Vec<Authorization>>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub risk_action: Option<String>,
}

pub type CustomerList = List<Customer>;

/// Whitelist/blacklist state of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
}

/// Customer endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CustomerService<'a> {
    client: &'a PaystackClient,
}

impl<'a> CustomerService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Creates a new customer.
    pub fn create(&self, customer: &Customer) -> Result<Customer> {
        info!("Creating customer {:?}", customer.email);
        self.client
            .call(Method::POST, "/customer", RequestBody::json(customer)?)
    }

    /// Updates a customer's properties. `customer.id` selects the customer.
    pub fn update(&self, customer: &Customer) -> Result<Customer> {
        let id = require_id(customer.id, "customer")?;
        debug!("Updating customer {id}");
        self.client.call(
            Method::PUT,
            &format!("/customer/{id}"),
            RequestBody::json(customer)?,
        )
    }

    /// Returns a customer by id, code or email.
    pub fn get(&self, customer_code: &str) -> Result<Customer> {
        let path = format!("/customer/{}", path_segment(customer_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the first page of customers.
    pub fn list(&self) -> Result<CustomerList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` customers from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<CustomerList> {
        let path = paginate("/customer", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Whitelists or blacklists a customer.
    pub fn set_risk_action(&self, customer_code: &str, risk_action: RiskAction) -> Result<Customer> {
        info!("Setting risk action {risk_action:?} on customer {customer_code}");
        let body = RequestBody::Json(json!({
            "customer": customer_code,
            "risk_action": risk_action,
        }));
        self.client
            .call(Method::POST, "/customer/set_risk_action", body)
    }

    /// Deactivates a reusable authorization so it can no longer be charged.
    pub fn deactivate_authorization(&self, authorization_code: &str) -> Result<Response> {
        info!("Deactivating authorization {authorization_code}");
        let body = RequestBody::form([("authorization_code", authorization_code)]);
        self.client
            .call(Method::POST, "/customer/deactivate_authorization", body)
    }
}
