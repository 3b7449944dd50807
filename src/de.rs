//! Loose field decoding for Paystack payloads.
//!
//! The API is not consistent about scalar encodings: the same field may come
//! back as `"10"` from one endpoint and `10` from another, booleans show up as
//! `0`/`1`, and absent values are sent as `null` or `""`.
//!
//! Numbers and booleans are decoded through `serde_with` adapters, applied
//! with `#[serde_as(as = "de::LooseNumber")]` / `#[serde_as(as = "de::LooseBool")]`.
//! Strings and metadata have no ready-made adapter and use the
//! `deserialize_with` functions below.
//!
//! Everything decodes to `Option<_>`; `null` and the empty string become
//! `None`. Structs using these must carry `#[serde(default)]` so that missing
//! fields also become `None`.

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;
use serde_with::formats::Flexible;
use serde_with::{BoolFromInt, NoneAsEmptyString, PickFirst, Same};

use crate::models::Metadata;

/// A number sent as a JSON number, a numeric string, `""` or `null`.
pub type LooseNumber = PickFirst<(Option<Same>, NoneAsEmptyString)>;

/// A boolean sent as `true`/`false`, as an integer (non-zero is `true`),
/// as the string `"true"`/`"false"`, as `""` or as `null`.
pub type LooseBool = PickFirst<(Option<Same>, Option<BoolFromInt<Flexible>>, NoneAsEmptyString)>;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accepts strings, numbers and booleans.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, found {}",
            kind(&other)
        ))),
    }
}

/// Accepts an object, or a string holding a JSON-encoded object.
///
/// Paystack fills unset metadata with `""`, `0` or other scalars; those
/// decode to `None` rather than failing the enclosing record.
pub fn metadata<'de, D>(deserializer: D) -> Result<Option<Metadata>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(Value::String(s)) => Ok(serde_json::from_str::<Metadata>(&s).ok()),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "de_tests.rs"]
mod tests;
