//! Payment pages.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{paginate, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{List, Response};

use super::{require_id, DEFAULT_PAGE_SIZE};

/// A hosted payment page.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
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
    pub slug: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<Response>>,
}

pub type PageList = List<Page>;

/// Payment page endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PageService<'a> {
    client: &'a PaystackClient,
}

impl<'a> PageService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    pub fn create(&self, page: &Page) -> Result<Page> {
        info!("Creating page {:?}", page.name);
        self.client
            .call(Method::POST, "/page", RequestBody::json(page)?)
    }

    pub fn update(&self, page: &Page) -> Result<Page> {
        let id = require_id(page.id, "page")?;
        self.client
            .call(Method::PUT, &format!("/page/{id}"), RequestBody::json(page)?)
    }

    pub fn get(&self, id: i64) -> Result<Page> {
        self.client
            .call(Method::GET, &format!("/page/{id}"), RequestBody::Empty)
    }

    /// Returns the first page of payment pages.
    pub fn list(&self) -> Result<PageList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` payment pages from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<PageList> {
        let path = paginate("/page", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
