use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::Metadata;
use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Customer owning a subscription or portal session. Compact view with
/// the fields surfaced when the reference is expanded inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub object: String,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl FromWire for Customer {
    const RESOURCE: &'static str = "customer";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Customer {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            created: wire.opt_timestamp("created")?,
            email: wire.opt_str("email")?,
            name: wire.opt_str("name")?,
            description: wire.opt_str("description")?,
            phone: wire.opt_str("phone")?,
            livemode: wire.opt_bool("livemode")?,
            metadata: wire.opt_metadata("metadata")?,
        })
    }
}

impl Identified for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::{decode, encode};

    #[test]
    fn test_unknown_wire_fields_ignored() {
        let customer: Customer = decode(&json!({
            "id": "cus_123",
            "object": "customer",
            "email": "jo@example.com",
            "invoice_prefix": "A1B2C3",
            "next_invoice_sequence": 7,
        }))
        .unwrap();
        assert_eq!(customer.id, "cus_123");
        assert_eq!(customer.email.as_deref(), Some("jo@example.com"));
    }

    #[test]
    fn test_metadata_round_trips_in_order() {
        let payload = json!({
            "id": "cus_123",
            "object": "customer",
            "metadata": {"zeta": "1", "alpha": "2", "mid": "3"},
        });
        let customer: Customer = decode(&payload).unwrap();
        let keys: Vec<&str> = customer
            .metadata
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(encode(&customer).unwrap(), payload);
    }
}
