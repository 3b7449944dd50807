//! Subscription plans.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{paginate, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{List, Response};

use super::{require_id, DEFAULT_PAGE_SIZE};

/// A recurring billing plan.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
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
    pub name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// `hourly`, `daily`, `weekly`, `monthly`, `quarterly`, `biannually` or `annually`.
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<i64>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_page: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub hosted_page_url: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub hosted_page_summary: Option<String>,
}

pub type PlanList = List<Plan>;

/// Plan endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PlanService<'a> {
    client: &'a PaystackClient,
}

impl<'a> PlanService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    pub fn create(&self, plan: &Plan) -> Result<Plan> {
        info!("Creating plan {:?}", plan.name);
        self.client
            .call(Method::POST, "/plan", RequestBody::json(plan)?)
    }

    /// Updates a plan. Paystack answers with a message only, no plan.
    pub fn update(&self, plan: &Plan) -> Result<Response> {
        let id = require_id(plan.id, "plan")?;
        self.client
            .call(Method::PUT, &format!("/plan/{id}"), RequestBody::json(plan)?)
    }

    pub fn get(&self, id: i64) -> Result<Plan> {
        self.client
            .call(Method::GET, &format!("/plan/{id}"), RequestBody::Empty)
    }

    /// Returns the first page of plans.
    pub fn list(&self) -> Result<PlanList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` plans from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<PlanList> {
        let path = paginate("/plan", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
