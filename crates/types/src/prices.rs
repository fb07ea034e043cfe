use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Metadata;
use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Invoicing frequency for recurring prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recurring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_count: Option<i64>,
}

/// Price a subscription item bills at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
}

impl FromWire for Recurring {
    const RESOURCE: &'static str = "recurring";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Recurring {
            interval: wire.opt_enum("interval")?,
            interval_count: wire.opt_i64("interval_count")?,
        })
    }
}

impl FromWire for Price {
    const RESOURCE: &'static str = "price";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Price {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            active: wire.opt_bool("active")?,
            currency: wire.opt_str("currency")?,
            unit_amount: wire.opt_i64("unit_amount")?,
            product: wire.opt_str("product")?,
            pricing_type: wire.opt_str("type")?,
            nickname: wire.opt_str("nickname")?,
            metadata: wire.opt_metadata("metadata")?,
            created: wire.opt_timestamp("created")?,
            recurring: wire.opt_record("recurring")?,
        })
    }
}

impl Identified for Price {
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
    fn test_recurring_price_round_trips() {
        let payload = json!({
            "id": "price_123",
            "object": "price",
            "active": true,
            "currency": "usd",
            "unit_amount": 1500,
            "product": "prod_123",
            "type": "recurring",
            "created": 1_700_000_000,
            "recurring": {"interval": "month", "interval_count": 3},
        });
        let price: Price = decode(&payload).unwrap();
        assert_eq!(
            price.recurring.as_ref().unwrap().interval,
            Some(PlanInterval::Month)
        );
        assert_eq!(encode(&price).unwrap(), payload);
    }

    #[test]
    fn test_interval_rejects_unknown_literal() {
        let err = decode::<Price>(&json!({
            "id": "price_123",
            "object": "price",
            "recurring": {"interval": "fortnight"},
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                resource: "price",
                path: "recurring.interval".into(),
                value: "fortnight".into(),
            }
        );
    }
}
