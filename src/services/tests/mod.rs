//! Unit tests for the resource services.

mod bulk_charges_tests;
mod subaccounts_tests;

use crate::error::Error;

use super::require_id;

#[test]
fn require_id_passes_through_present_id() {
    assert_eq!(require_id(Some(7), "plan").unwrap(), 7);
}

#[test]
fn require_id_rejects_missing_id() {
    let err = require_id(None, "plan").unwrap_err();
    assert!(matches!(&err, Error::InvalidRequest(msg) if msg.contains("plan")));
}
