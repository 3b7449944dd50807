//! Unit tests for the Paystack client.

mod misc_tests;
