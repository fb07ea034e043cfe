use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// How an invoice collects payment: charged to the default source, or
/// emailed with payment instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    ChargeAutomatically,
    SendInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

/// Invoice generated by a subscription. Compact view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub id: String,
    pub object: String,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl FromWire for Invoice {
    const RESOURCE: &'static str = "invoice";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Invoice {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            created: wire.opt_timestamp("created")?,
            currency: wire.opt_str("currency")?,
            customer: wire.opt_str("customer")?,
            number: wire.opt_str("number")?,
            paid: wire.opt_bool("paid")?,
            status: wire.opt_enum("status")?,
            subscription: wire.opt_str("subscription")?,
            total: wire.opt_i64("total")?,
        })
    }
}

impl Identified for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}
