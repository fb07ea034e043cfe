//! Expandable references.
//!
//! Relation fields are delivered either as a bare identifier string or,
//! when the caller asked for expansion at request time, as the embedded
//! resource itself. Both shapes land in one slot so the identifier stays
//! accessible no matter which one arrived.

use serde::Serialize;

/// A record that carries its own wire identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Identified> Expandable<T> {
    /// The identifier, regardless of which shape was delivered.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(record) => record.id(),
        }
    }
}

impl<T> Expandable<T> {
    /// The embedded record, when the reference was expanded.
    pub fn object(&self) -> Option<&T> {
        match self {
            Expandable::Object(record) => Some(record),
            Expandable::Id(_) => None,
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Object(record) => Some(*record),
            Expandable::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::customers::Customer;
    use crate::wire::{decode, encode};

    fn expanded_customer() -> Expandable<Customer> {
        Expandable::Object(Box::new(
            decode(&json!({
                "id": "cus_123",
                "object": "customer",
                "email": "jo@example.com",
            }))
            .unwrap(),
        ))
    }

    #[test]
    fn test_id_variant_exposes_identifier() {
        let reference: Expandable<Customer> = Expandable::Id("cus_123".into());
        assert_eq!(reference.id(), "cus_123");
        assert!(reference.object().is_none());
    }

    #[test]
    fn test_object_variant_exposes_identifier_and_record() {
        let reference = expanded_customer();
        assert_eq!(reference.id(), "cus_123");
        assert_eq!(
            reference.object().unwrap().email.as_deref(),
            Some("jo@example.com")
        );
    }

    #[test]
    fn test_encodes_as_bare_string_or_object() {
        let bare: Expandable<Customer> = Expandable::Id("cus_123".into());
        assert_eq!(encode(&bare).unwrap(), json!("cus_123"));

        let expanded = encode(&expanded_customer()).unwrap();
        assert_eq!(expanded["id"], json!("cus_123"));
        assert_eq!(expanded["email"], json!("jo@example.com"));
    }
}
