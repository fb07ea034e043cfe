use indexmap::IndexMap;
use serde::Serialize;

use crate::wire::{DecodeError, FromWire, WireObject};

/// Key/value annotations attached to most platform resources. Insertion
/// order is preserved so a payload re-encodes the way it arrived.
pub type Metadata = IndexMap<String, String>;

/// Paginated collection envelope. `has_more` and `url` are pagination
/// markers surfaced as plain fields; walking pages is the caller's
/// business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List<T> {
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T: FromWire> FromWire for List<T> {
    const RESOURCE: &'static str = "list";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(List {
            object: wire.require_str("object")?,
            data: wire.opt_record_list("data")?,
            has_more: wire.opt_bool("has_more")?,
            url: wire.opt_str("url")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::customers::Customer;
    use crate::wire::decode;

    #[test]
    fn test_list_preserves_element_order() {
        let list: List<Customer> = decode(&json!({
            "object": "list",
            "url": "/v1/customers",
            "has_more": false,
            "data": [
                {"id": "cus_1", "object": "customer"},
                {"id": "cus_2", "object": "customer"},
                {"id": "cus_3", "object": "customer"},
            ],
        }))
        .unwrap();
        let ids: Vec<&str> = list
            .data
            .as_deref()
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["cus_1", "cus_2", "cus_3"]);
    }

    #[test]
    fn test_list_without_data_stays_unset() {
        let list: List<Customer> = decode(&json!({"object": "list"})).unwrap();
        assert_eq!(list.data, None);
        assert_eq!(list.has_more, None);
        assert_eq!(list.url, None);
    }

    #[test]
    fn test_element_error_carries_index() {
        let err = decode::<List<Customer>>(&json!({
            "object": "list",
            "data": [
                {"id": "cus_1", "object": "customer"},
                {"object": "customer"},
            ],
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                resource: "list",
                path: "data[1].id".into(),
            }
        );
    }
}
