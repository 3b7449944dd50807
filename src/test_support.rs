//! Helpers shared by the unit tests.

use serde_json::{json, Value};
use wiremock::MockServer;

use crate::client::{ClientConfig, PaystackClient};

pub(crate) const TEST_KEY: &str = "sk_test_key";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a client pointed at the mock server.
pub(crate) fn client_for(uri: &str) -> PaystackClient {
    PaystackClient::from_config(ClientConfig::new(TEST_KEY).with_base_url(uri)).unwrap()
}

/// Wraps `data` in a successful Paystack envelope.
pub(crate) fn envelope(data: Value) -> Value {
    json!({ "status": true, "message": "ok", "data": data })
}

/// Wraps `records` in a successful list envelope.
pub(crate) fn list_envelope(records: Value, per_page: u32, page: u32) -> Value {
    json!({
        "status": true,
        "message": "ok",
        "data": records,
        "meta": { "total": 1, "skipped": 0, "perPage": per_page, "page": page, "pageCount": 1 }
    })
}

/// Runs `f` against a fresh client on a blocking thread.
///
/// The blocking transport owns a runtime of its own, so it is created and
/// dropped off the test's async runtime.
pub(crate) async fn with_client<T, F>(server: &MockServer, f: F) -> T
where
    F: FnOnce(&PaystackClient) -> T + Send + 'static,
    T: Send + 'static,
{
    init_logging();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = client_for(&uri);
        f(&client)
    })
    .await
    .unwrap()
}
