//! Subscriptions of customers to plans.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use crate::client::{paginate, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{Authorization, Expandable, List, Response};

use super::customers::Customer;
use super::plans::Plan;
use super::{require_id, DEFAULT_PAGE_SIZE};

/// A customer's subscription to a plan.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
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
    /// Create returns the customer id, fetch returns the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Expandable<Plan>>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Fetch returns the authorization code, list returns the authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Expandable<Authorization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<Value>>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub subscription_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub email_token: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub easy_cron_id: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub open_invoice: Option<String>,
}

pub type SubscriptionList = List<Subscription>;

/// Request to subscribe a customer to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionRequest {
    /// Customer code or email address.
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Plan code.
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// ISO 8601 date of the first debit.
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Subscription endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionService<'a> {
    client: &'a PaystackClient,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    pub fn create(&self, request: &SubscriptionRequest) -> Result<Subscription> {
        info!(
            "Subscribing customer {:?} to plan {:?}",
            request.customer, request.plan
        );
        self.client
            .call(Method::POST, "/subscription", RequestBody::json(request)?)
    }

    pub fn update(&self, subscription: &Subscription) -> Result<Subscription> {
        let id = require_id(subscription.id, "subscription")?;
        self.client.call(
            Method::PUT,
            &format!("/subscription/{id}"),
            RequestBody::json(subscription)?,
        )
    }

    pub fn get(&self, id: i64) -> Result<Subscription> {
        self.client
            .call(Method::GET, &format!("/subscription/{id}"), RequestBody::Empty)
    }

    /// Returns the first page of subscriptions.
    pub fn list(&self) -> Result<SubscriptionList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` subscriptions from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<SubscriptionList> {
        let path = paginate("/subscription", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Enables a subscription using its code and the customer's email token.
    pub fn enable(&self, subscription_code: &str, email_token: &str) -> Result<Response> {
        info!("Enabling subscription {subscription_code}");
        let body = RequestBody::form([("code", subscription_code), ("token", email_token)]);
        self.client.call(Method::POST, "/subscription/enable", body)
    }

    /// Disables a subscription using its code and the customer's email token.
    pub fn disable(&self, subscription_code: &str, email_token: &str) -> Result<Response> {
        info!("Disabling subscription {subscription_code}");
        let body = RequestBody::form([("code", subscription_code), ("token", email_token)]);
        self.client.call(Method::POST, "/subscription/disable", body)
    }
}
