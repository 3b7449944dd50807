//! Types shared by several Paystack resources.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;

use crate::de;

/// Arbitrary key-value pairs attached to Paystack objects.
pub type Metadata = Map<String, Value>;

/// Untyped response payload, returned by action endpoints and endpoints
/// whose shape the vendor does not document precisely.
pub type Response = Map<String, Value>;

/// Pagination metadata returned alongside every list.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
}

/// A page of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    #[serde(default)]
    pub meta: ListMeta,
    #[serde(rename = "data", default, deserialize_with = "null_as_empty")]
    pub values: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            meta: ListMeta::default(),
            values: Vec::new(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A reference to another Paystack object.
///
/// Depending on the endpoint, Paystack returns related objects either as
/// their code, their numeric id, or fully expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(i64),
    Code(String),
    Object(T),
}

impl<T> Expandable<T> {
    /// The code, when the reference was not expanded.
    pub fn code(&self) -> Option<&str> {
        match self {
            Expandable::Code(code) => Some(code),
            _ => None,
        }
    }

    /// The numeric id, when the reference was not expanded.
    pub fn id(&self) -> Option<i64> {
        match self {
            Expandable::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// The expanded object.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// A reusable card or bank authorization.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authorization {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde_as(as = "de::LooseBool")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reusable: Option<bool>,
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Available balance in one currency, as returned by `GET /balance`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    #[serde(deserialize_with = "de::string", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde_as(as = "de::LooseNumber")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_decodes_meta_and_values() {
        let list: List<Balance> = serde_json::from_value(json!({
            "status": true,
            "message": "ok",
            "data": [{ "currency": "NGN", "balance": 1000 }],
            "meta": { "total": 1, "skipped": 0, "perPage": "10", "page": 1, "pageCount": 1 }
        }))
        .unwrap();

        assert_eq!(list.values.len(), 1);
        assert_eq!(list.meta.total, Some(1));
        assert_eq!(list.meta.per_page, Some(10));
        assert_eq!(list.meta.page_count, Some(1));
    }

    #[test]
    fn list_tolerates_null_data_and_missing_meta() {
        let list: List<Balance> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(list.values.is_empty());
        assert_eq!(list.meta, ListMeta::default());
    }

    #[test]
    fn expandable_keeps_each_shape() {
        let code: Expandable<Authorization> = serde_json::from_value(json!("AUTH_abc")).unwrap();
        let id: Expandable<Authorization> = serde_json::from_value(json!(42)).unwrap();
        let obj: Expandable<Authorization> =
            serde_json::from_value(json!({ "authorization_code": "AUTH_abc", "reusable": 1 }))
                .unwrap();

        assert_eq!(code.code(), Some("AUTH_abc"));
        assert_eq!(id.id(), Some(42));
        let auth = obj.as_object().unwrap();
        assert_eq!(auth.authorization_code.as_deref(), Some("AUTH_abc"));
        assert_eq!(auth.reusable, Some(true));
    }

    #[test]
    fn expandable_serializes_untagged() {
        let code: Expandable<Authorization> = Expandable::Code("AUTH_abc".to_string());
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("AUTH_abc"));
    }
}
