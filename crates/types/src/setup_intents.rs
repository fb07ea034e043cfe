use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Intent collecting authentication for off-session payment, referenced by
/// a subscription while its latest invoice awaits one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupIntent {
    pub id: String,
    pub object: String,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl FromWire for SetupIntent {
    const RESOURCE: &'static str = "setup_intent";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SetupIntent {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            created: wire.opt_timestamp("created")?,
            customer: wire.opt_str("customer")?,
            status: wire.opt_str("status")?,
            usage: wire.opt_str("usage")?,
        })
    }
}

impl Identified for SetupIntent {
    fn id(&self) -> &str {
        &self.id
    }
}
