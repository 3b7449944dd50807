//! One service per Paystack API resource.
//!
//! Every service is a thin façade over [`PaystackClient::call`]: it formats a
//! path, serializes the payload, and names the type the response decodes
//! into. Services borrow the client and hold no state of their own.

mod banks;
mod bulk_charges;
mod charges;
mod customers;
mod pages;
mod plans;
mod settlements;
mod subaccounts;
mod subscriptions;
mod transactions;
mod transfers;

pub use banks::{Bank, BankList, BankService, BvnRequest, BvnResponse};
pub use bulk_charges::{BulkChargeBatch, BulkChargeBatchList, BulkChargeService, BulkItem};
pub use charges::{BankAccount, Card, ChargeRequest, ChargeService};
pub use customers::{Customer, CustomerList, CustomerService, RiskAction};
pub use pages::{Page, PageList, PageService};
pub use plans::{Plan, PlanList, PlanService};
pub use settlements::{SettlementList, SettlementService};
pub use subaccounts::{SubAccount, SubAccountList, SubAccountService};
pub use subscriptions::{Subscription, SubscriptionList, SubscriptionRequest, SubscriptionService};
pub use transactions::{
    AuthorizationRequest, Transaction, TransactionList, TransactionRequest, TransactionService,
    TransactionTimeline,
};
pub use transfers::{
    BulkTransfer, BulkTransferItem, RecipientDetails, Transfer, TransferList, TransferRecipient,
    TransferRecipientList, TransferRequest, TransferService,
};

use crate::error::{Error, Result};

/// Page size used by the argument-less `list` methods.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Returns the id an update endpoint addresses, or fails before any request
/// is made.
fn require_id(id: Option<i64>, resource: &str) -> Result<i64> {
    id.ok_or_else(|| Error::InvalidRequest(format!("{resource} id is required for update")))
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
