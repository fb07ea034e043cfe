use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::common::Metadata;
use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Tax rate applied to subscription items. `percentage` keeps the exact
/// wire digits instead of going through a float.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxRate {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percentage: Option<Decimal>,
}

impl FromWire for TaxRate {
    const RESOURCE: &'static str = "tax_rate";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(TaxRate {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            active: wire.opt_bool("active")?,
            created: wire.opt_timestamp("created")?,
            description: wire.opt_str("description")?,
            display_name: wire.opt_str("display_name")?,
            inclusive: wire.opt_bool("inclusive")?,
            jurisdiction: wire.opt_str("jurisdiction")?,
            livemode: wire.opt_bool("livemode")?,
            metadata: wire.opt_metadata("metadata")?,
            percentage: wire.opt_decimal("percentage")?,
        })
    }
}

impl Identified for TaxRate {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;
    use crate::wire::{decode, encode};

    #[test]
    fn test_percentage_keeps_exact_digits() {
        let payload = json!({
            "id": "txr_123",
            "object": "tax_rate",
            "display_name": "VAT",
            "inclusive": false,
            "percentage": 19.25,
        });
        let rate: TaxRate = decode(&payload).unwrap();
        assert_eq!(rate.percentage, Some(Decimal::from_str("19.25").unwrap()));
        assert_eq!(encode(&rate).unwrap(), payload);
    }

    #[test]
    fn test_percentage_rejects_strings() {
        let err = decode::<TaxRate>(&json!({
            "id": "txr_123",
            "object": "tax_rate",
            "percentage": "19.25",
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                resource: "tax_rate",
                path: "percentage".into(),
                expected: "decimal",
                actual: "string",
            }
        );
    }
}
