//! Subaccounts for split payments.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{paginate, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{List, Metadata};

use super::{require_id, DEFAULT_PAGE_SIZE};

/// A subaccount that receives a share of split payments.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubAccount {
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
    pub business_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub subaccount_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_charge: Option<f64>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub settlement_bank: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub settlement_schedule: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<bool>,
}

pub type SubAccountList = List<SubAccount>;

/// Subaccount endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SubAccountService<'a> {
    client: &'a PaystackClient,
}

impl<'a> SubAccountService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    pub fn create(&self, subaccount: &SubAccount) -> Result<SubAccount> {
        info!("Creating subaccount {:?}", subaccount.business_name);
        self.client
            .call(Method::POST, "/subaccount", RequestBody::json(subaccount)?)
    }

    pub fn update(&self, subaccount: &SubAccount) -> Result<SubAccount> {
        let id = require_id(subaccount.id, "subaccount")?;
        self.client.call(
            Method::PUT,
            &format!("/subaccount/{id}"),
            RequestBody::json(subaccount)?,
        )
    }

    pub fn get(&self, id: i64) -> Result<SubAccount> {
        self.client
            .call(Method::GET, &format!("/subaccount/{id}"), RequestBody::Empty)
    }

    /// Returns the first page of subaccounts.
    pub fn list(&self) -> Result<SubAccountList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` subaccounts from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<SubAccountList> {
        let path = paginate("/subaccount", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
