//! Transfers to bank accounts and their recipients.

use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use crate::client::{paginate, path_segment, PaystackClient, RequestBody};
use crate::de;
use crate::error::Result;
use crate::models::{Expandable, List, Metadata, Response};

use super::DEFAULT_PAGE_SIZE;

/// Request to initiate a single transfer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRequest {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Recipient code.
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A Paystack transfer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
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
    pub source: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub transfer_code: Option<String>,
    /// Recipient id on initiation, the full recipient on fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Expandable<TransferRecipient>>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Value>,
}

pub type TransferList = List<Transfer>;

/// Bank account details of a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientDetails {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

/// A beneficiary of transfers. Must exist before a transfer references it.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRecipient {
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
    /// `nuban`, `mobile_money`, `basa`, ...
    #[serde(
        rename = "type",
        deserialize_with = "de::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_type: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub recipient_code: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RecipientDetails>,
}

pub type TransferRecipientList = List<TransferRecipient>;

/// One entry of a bulk transfer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkTransferItem {
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Several transfers sent in one request. Requires OTP to be disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkTransfer {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub transfers: Vec<BulkTransferItem>,
}

/// Transfer endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TransferService<'a> {
    client: &'a PaystackClient,
}

impl<'a> TransferService<'a> {
    pub fn new(client: &'a PaystackClient) -> Self {
        Self { client }
    }

    /// Initiates a transfer. When OTP is enabled the transfer stays pending
    /// until [`finalize`](Self::finalize) is called.
    pub fn initiate(&self, request: &TransferRequest) -> Result<Transfer> {
        info!(
            "Initiating transfer of {:?} to {:?}",
            request.amount, request.recipient
        );
        self.client
            .call(Method::POST, "/transfer", RequestBody::json(request)?)
    }

    /// Completes a transfer with the OTP sent to the business phone.
    pub fn finalize(&self, transfer_code: &str, otp: &str) -> Result<Response> {
        info!("Finalizing transfer {transfer_code}");
        let body = RequestBody::form([("transfer_code", transfer_code), ("otp", otp)]);
        self.client
            .call(Method::POST, "/transfer/finalize_transfer", body)
    }

    pub fn make_bulk_transfer(&self, request: &BulkTransfer) -> Result<Response> {
        info!("Initiating bulk transfer of {} items", request.transfers.len());
        self.client
            .call(Method::POST, "/transfer/bulk", RequestBody::json(request)?)
    }

    /// Returns a transfer by id or transfer code.
    pub fn get(&self, id_or_code: &str) -> Result<Transfer> {
        let path = format!("/transfer/{}", path_segment(id_or_code));
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Returns the first page of transfers.
    pub fn list(&self) -> Result<TransferList> {
        self.list_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` transfers from page `offset`.
    pub fn list_n(&self, count: u32, offset: u32) -> Result<TransferList> {
        let path = paginate("/transfer", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Creates a transfer recipient.
    pub fn create_recipient(&self, recipient: &TransferRecipient) -> Result<TransferRecipient> {
        info!("Creating transfer recipient {:?}", recipient.name);
        self.client.call(
            Method::POST,
            "/transferrecipient",
            RequestBody::json(recipient)?,
        )
    }

    /// Returns the first page of transfer recipients.
    pub fn list_recipients(&self) -> Result<TransferRecipientList> {
        self.list_recipients_n(DEFAULT_PAGE_SIZE, 0)
    }

    /// Returns `count` transfer recipients from page `offset`.
    pub fn list_recipients_n(&self, count: u32, offset: u32) -> Result<TransferRecipientList> {
        let path = paginate("/transferrecipient", count, offset);
        self.client.call(Method::GET, &path, RequestBody::Empty)
    }

    /// Sends the transfer OTP again. `reason` is `resend_otp` or `transfer`.
    pub fn resend_otp(&self, transfer_code: &str, reason: &str) -> Result<Response> {
        debug!("Resending OTP for transfer {transfer_code}");
        let body = RequestBody::form([("transfer_code", transfer_code), ("reason", reason)]);
        self.client.call(Method::POST, "/transfer/resend_otp", body)
    }

    /// Requires an OTP for every transfer.
    pub fn enable_otp(&self) -> Result<Response> {
        self.client
            .call(Method::POST, "/transfer/enable_otp", RequestBody::Empty)
    }

    /// Starts disabling OTP. Paystack sends an OTP that must be passed to
    /// [`finalize_otp_disable`](Self::finalize_otp_disable).
    pub fn disable_otp(&self) -> Result<Response> {
        self.client
            .call(Method::POST, "/transfer/disable_otp", RequestBody::Empty)
    }

    pub fn finalize_otp_disable(&self, otp: &str) -> Result<Response> {
        let body = RequestBody::form([("otp", otp)]);
        self.client
            .call(Method::POST, "/transfer/disable_otp_finalize", body)
    }
}
