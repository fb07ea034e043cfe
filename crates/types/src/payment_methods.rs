use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Payment instrument attached to a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethod {
    pub id: String,
    pub object: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub brand: String,
    pub last4: String,
    pub exp_month: i64,
    pub exp_year: i64,
}

/// Legacy payment source. Identifier view only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FromWire for PaymentMethod {
    const RESOURCE: &'static str = "payment_method";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(PaymentMethod {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            method_type: wire.opt_str("type")?,
            created: wire.opt_timestamp("created")?,
            card: wire.opt_record("card")?,
            customer: wire.opt_str("customer")?,
            livemode: wire.opt_bool("livemode")?,
        })
    }
}

impl FromWire for Card {
    const RESOURCE: &'static str = "card";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Card {
            brand: wire.require_str("brand")?,
            last4: wire.require_str("last4")?,
            exp_month: wire.require_i64("exp_month")?,
            exp_year: wire.require_i64("exp_year")?,
        })
    }
}

impl FromWire for Source {
    const RESOURCE: &'static str = "source";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Source {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            currency: wire.opt_str("currency")?,
            status: wire.opt_str("status")?,
        })
    }
}

impl Identified for PaymentMethod {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Source {
    fn id(&self) -> &str {
        &self.id
    }
}
