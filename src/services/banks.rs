//! Banks and identity verification.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{paginate, path_segment, with_query, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{List, Response};

use super::DEFAULT_PAGE_SIZE;

/// A bank supported by Paystack.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
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
    pub name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub long_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

pub type BankList = List<Bank>;

/// Identity behind a Bank Verification Number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BvnResponse {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub formatted_dob: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Details to check against a BVN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BvnRequest {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Bank endpoints.
#[derive(Debug, Clone, Copy)]
pub struct BankService<'a> {
    client: &'a PaystackClient,
}

impl<'a> BankService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Returns the first page of banks.
    pub fn list(&self) -> Result<BankList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` banks from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<BankList> {
        let path = paginate("/bank", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Looks up the customer details behind a BVN.
    pub fn resolve_bvn(&self, bvn: &str) -> Result<BvnResponse> {
        info!("Resolving BVN");
        let path = format!("/bank/resolve_bvn/{}", path_segment(bvn));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Checks whether the given account and name details belong to a BVN.
    pub fn match_bvn(&self, request: &BvnRequest) -> Result<Response> {
        info!("Matching BVN against account {:?}", request.account_number);
        self.client
            .call(Method::POST, "/bvn/match", RequestBody::json(request)?)
    }

    /// Confirms the account name behind an account number.
    pub fn resolve_account_number(&self, account_number: &str, bank_code: &str) -> Result<Response> {
        let path = with_query(
            "/bank/resolve",
            &[("account_number", account_number), ("bank_code", bank_code)],
        );
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
