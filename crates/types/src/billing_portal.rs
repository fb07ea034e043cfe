//! Billing portal sessions.
//!
//! Short-lived sessions handing a customer off to the hosted billing
//! portal. The session's `url` is single-use and the whole record is
//! read-only once created.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::expandable::Identified;
use crate::wire::{DecodeError, FromWire, Maybe, WireObject};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingPortalSession {
    pub id: String,
    pub object: String,
    pub configuration: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub customer: String,
    pub livemode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    pub url: String,
}

impl FromWire for BillingPortalSession {
    const RESOURCE: &'static str = "billing_portal.session";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(BillingPortalSession {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            configuration: wire.require_str("configuration")?,
            created: wire.require_timestamp("created")?,
            customer: wire.require_str("customer")?,
            livemode: wire.require_bool("livemode")?,
            on_behalf_of: wire.opt_str("on_behalf_of")?,
            return_url: wire.opt_str("return_url")?,
            url: wire.require_str("url")?,
        })
    }
}

impl Identified for BillingPortalSession {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for opening a portal session for a customer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBillingPortalSessionRequest {
    pub customer: String,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub configuration: Maybe<String>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub on_behalf_of: Maybe<String>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub return_url: Maybe<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::wire::{decode, decode_slice, encode, encode_vec};

    fn session_payload() -> Value {
        json!({
            "id": "bps_123",
            "object": "billing_portal.session",
            "configuration": "bpc_123",
            "created": 1_700_000_000,
            "customer": "cus_123",
            "livemode": false,
            "return_url": "https://example.com/account",
            "url": "https://billing.example.com/p/session/bps_123",
        })
    }

    #[test]
    fn test_decode_session() {
        let session: BillingPortalSession = decode(&session_payload()).unwrap();
        assert_eq!(session.id, "bps_123");
        assert_eq!(session.configuration, "bpc_123");
        assert_eq!(session.created.timestamp(), 1_700_000_000);
        assert_eq!(session.customer, "cus_123");
        assert!(!session.livemode);
        assert_eq!(session.on_behalf_of, None);
        assert_eq!(
            session.return_url.as_deref(),
            Some("https://example.com/account")
        );
    }

    #[test]
    fn test_byte_round_trip() {
        let bytes = serde_json::to_vec(&session_payload()).unwrap();
        let session: BillingPortalSession = decode_slice(&bytes).unwrap();
        assert_eq!(session.id, "bps_123");

        let re_encoded = encode_vec(&session).unwrap();
        let again: BillingPortalSession = decode_slice(&re_encoded).unwrap();
        assert_eq!(again, session);
    }

    #[test]
    fn test_encode_reproduces_payload() {
        let session: BillingPortalSession = decode(&session_payload()).unwrap();
        assert_eq!(encode(&session).unwrap(), session_payload());
    }

    #[test]
    fn test_missing_url_is_error() {
        let mut payload = session_payload();
        payload.as_object_mut().unwrap().remove("url");
        let err = decode::<BillingPortalSession>(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                resource: "billing_portal.session",
                path: "url".into(),
            }
        );
    }

    #[test]
    fn test_livemode_type_mismatch() {
        let mut payload = session_payload();
        payload["livemode"] = json!("false");
        let err = decode::<BillingPortalSession>(&payload).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                resource: "billing_portal.session",
                path: "livemode".into(),
                expected: "boolean",
                actual: "string",
            }
        );
    }

    #[test]
    fn test_create_request_omits_absent_fields() {
        let request = CreateBillingPortalSessionRequest {
            customer: "cus_123".into(),
            return_url: Maybe::Value("https://example.com/account".into()),
            ..Default::default()
        };
        assert_eq!(
            encode(&request).unwrap(),
            json!({
                "customer": "cus_123",
                "return_url": "https://example.com/account",
            })
        );
    }
}
