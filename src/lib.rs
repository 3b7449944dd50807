//! Paystack API client
//!
//! A blocking client binding for the Paystack REST API. The [`PaystackClient`]
//! owns the configuration and HTTP transport; each API resource is reached
//! through its own service type, borrowed from the client.
//!
//! ```no_run
//! use paystack::{Customer, PaystackClient};
//!
//! # fn main() -> paystack::Result<()> {
//! let client = PaystackClient::new("sk_test_xxx")?;
//!
//! let customer = client.customers().create(&Customer {
//!     email: Some("customer@example.com".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let plans = client.plans().list()?;
//! for plan in &plans.values {
//!     println!("{:?} {:?}", plan.name, plan.plan_code);
//! }
//! # let _ = customer;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod de;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod test_support;

pub use client::{ClientConfig, PaystackClient, RequestBody, DEFAULT_BASE_URL};
pub use error::{ApiError, Error, Result};
pub use models::{Authorization, Balance, Expandable, List, ListMeta, Metadata, Response};
pub use services::*;

/// HTTP methods accepted by [`PaystackClient::call`].
pub use reqwest::Method;
