//! Settlements made to the integration's bank account.

use reqwest::Method;

use crate::client::{paginate, PaystackClient, RequestBody};
use crate::error::Result;
use crate::models::{List, Response};

use super::DEFAULT_PAGE_SIZE;

/// Settlement records are returned untyped.
pub type SettlementList = List<Response>;

/// Settlement endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SettlementService<'a> {
    client: &'a PaystackClient,
}

impl<'a> SettlementService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Returns the first page of settlements.
    pub fn list(&self) -> Result<SettlementList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` settlements from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<SettlementList> {
        let path = paginate("/settlement", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
