use serde::Serialize;

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, WireObject};

/// Connected account funds can be transferred to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FromWire for Account {
    const RESOURCE: &'static str = "account";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Account {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            country: wire.opt_str("country")?,
            email: wire.opt_str("email")?,
        })
    }
}

impl Identified for Account {
    fn id(&self) -> &str {
        &self.id
    }
}
