//! Bulk charges of saved authorizations.

use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::{paginate, path_segment, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{List, Response};

use super::DEFAULT_PAGE_SIZE;

/// A batch of queued charges.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkChargeBatch {
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
    pub batch_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_charges: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(alias = "pending_charge", skip_serializing_if = "Option::is_none")]
    pub pending_charges: Option<i64>,
}

pub type BulkChargeBatchList = List<BulkChargeBatch>;

/// One authorization to charge in a batch.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkItem {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Bulk charge endpoints.
#[derive(Debug, Clone, Copy)]
pub struct BulkChargeService<'a> {
    client: &'a PaystackClient,
}

impl<'a> BulkChargeService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Queues a batch. The body is the bare JSON array of items.
    pub fn initiate(&self, items: &[BulkItem]) -> Result<BulkChargeBatch> {
        info!("Initiating bulk charge of {} items", items.len());
        self.client
            .call(Method::POST, "/bulkcharge", RequestBody::json(items)?)
    }

    /// Returns the first page of batches.
    pub fn list(&self) -> Result<BulkChargeBatchList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` batches from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<BulkChargeBatchList> {
        let path = paginate("/bulkcharge", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns a batch by id or batch code, with its progress counters.
    pub fn get(&self, batch_code: &str) -> Result<BulkChargeBatch> {
        let path = format!("/bulkcharge/{}", path_segment(batch_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the charges of a batch. Paystack sends them as an array, so
    /// the whole envelope comes back.
    pub fn get_batch_charges(&self, batch_code: &str) -> Result<Response> {
        let path = format!("/bulkcharge/{}/charges", path_segment(batch_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    pub fn pause(&self, batch_code: &str) -> Result<Response> {
        info!("Pausing bulk charge {batch_code}");
        let path = format!("/bulkcharge/pause/{}", path_segment(batch_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    pub fn resume(&self, batch_code: &str) -> Result<Response> {
        info!("Resuming bulk charge {batch_code}");
        let path = format!("/bulkcharge/resume/{}", path_segment(batch_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }
}
