use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Coupon backing a discount. `percent_off` keeps exact wire digits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coupon {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percent_off: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Discount currently applied to a subscription or customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discount {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl FromWire for Coupon {
    const RESOURCE: &'static str = "coupon";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Coupon {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            amount_off: wire.opt_i64("amount_off")?,
            currency: wire.opt_str("currency")?,
            duration: wire.opt_str("duration")?,
            duration_in_months: wire.opt_i64("duration_in_months")?,
            name: wire.opt_str("name")?,
            percent_off: wire.opt_decimal("percent_off")?,
            valid: wire.opt_bool("valid")?,
        })
    }
}

impl FromWire for Discount {
    const RESOURCE: &'static str = "discount";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Discount {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            coupon: wire.opt_record("coupon")?,
            customer: wire.opt_str("customer")?,
            start: wire.opt_timestamp("start")?,
            end: wire.opt_timestamp("end")?,
            subscription: wire.opt_str("subscription")?,
        })
    }
}

impl Identified for Coupon {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Discount {
    fn id(&self) -> &str {
        &self.id
    }
}
