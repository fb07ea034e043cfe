//! Wire codec: decodes JSON payloads into typed records and encodes them
//! back.
//!
//! Decoding is schema-driven: each resource implements [`FromWire`] and
//! pulls its fields out of a [`WireObject`] with typed accessors. A field
//! that is absent or explicitly `null` on the wire is unset; required
//! accessors turn unset into [`DecodeError::MissingRequiredField`]. Wire
//! keys the schema does not know are ignored, so server-side additions do
//! not break decoding. The first failing field wins and no partial record
//! is ever returned.
//!
//! Encoding goes through `serde::Serialize` on the record, with unset
//! optionals omitted, so `decode(encode(x)) == x` for every record in this
//! crate.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::common::Metadata;
use crate::expandable::Expandable;

/// Why a payload could not be decoded.
///
/// Nested failures are re-anchored while they bubble up, so `resource` is
/// the type the caller asked for and `path` is the full dotted/indexed
/// route to the offending field, e.g.
/// `items.data[0].price.recurring.interval`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{resource}: missing required field `{path}`")]
    MissingRequiredField {
        resource: &'static str,
        path: String,
    },
    #[error("{resource}: field `{path}` expected {expected}, found {actual}")]
    TypeMismatch {
        resource: &'static str,
        path: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{resource}: field `{path}` has unknown value `{value}`")]
    UnknownEnumValue {
        resource: &'static str,
        path: String,
        value: String,
    },
    #[error("{resource}: field `{path}` is not a Unix timestamp: `{value}`")]
    MalformedTimestamp {
        resource: &'static str,
        path: String,
        value: String,
    },
    #[error("payload is not valid JSON: {0}")]
    Parse(String),
}

impl DecodeError {
    /// Re-anchors an error raised inside a nested record so that it names
    /// the enclosing resource and the path from it.
    fn nested(self, resource: &'static str, prefix: &str) -> Self {
        let rebase = |path: String| {
            if path.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{path}")
            }
        };
        match self {
            DecodeError::MissingRequiredField { path, .. } => DecodeError::MissingRequiredField {
                resource,
                path: rebase(path),
            },
            DecodeError::TypeMismatch {
                path,
                expected,
                actual,
                ..
            } => DecodeError::TypeMismatch {
                resource,
                path: rebase(path),
                expected,
                actual,
            },
            DecodeError::UnknownEnumValue { path, value, .. } => DecodeError::UnknownEnumValue {
                resource,
                path: rebase(path),
                value,
            },
            DecodeError::MalformedTimestamp { path, value, .. } => {
                DecodeError::MalformedTimestamp {
                    resource,
                    path: rebase(path),
                    value,
                }
            }
            DecodeError::Parse(message) => DecodeError::Parse(message),
        }
    }
}

/// Encoding failed before reaching the wire. Not expected for the types in
/// this crate; surfaced instead of panicking.
#[derive(Debug, thiserror::Error)]
#[error("wire encoding failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A resource that knows how to build itself from a wire object.
///
/// `RESOURCE` is the schema name reported in decode errors.
pub trait FromWire: Sized {
    const RESOURCE: &'static str;

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError>;
}

/// Decodes an already-parsed JSON value into a record.
pub fn decode<T: FromWire>(payload: &Value) -> Result<T, DecodeError> {
    let Value::Object(fields) = payload else {
        return Err(DecodeError::TypeMismatch {
            resource: T::RESOURCE,
            path: String::new(),
            expected: "object",
            actual: json_type_name(payload),
        });
    };
    T::from_wire(&WireObject::new(T::RESOURCE, fields))
}

/// Decodes a raw JSON byte payload into a record.
pub fn decode_slice<T: FromWire>(bytes: &[u8]) -> Result<T, DecodeError> {
    let payload: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Parse(err.to_string()))?;
    decode(&payload)
}

/// Encodes a record into its wire JSON value.
pub fn encode<T: Serialize>(record: &T) -> Result<Value, EncodeError> {
    Ok(serde_json::to_value(record)?)
}

/// Encodes a record into wire JSON bytes.
pub fn encode_vec<T: Serialize>(record: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(record)?)
}

/// Borrowed view of one wire JSON object, tagged with the resource name
/// used in decode errors.
pub struct WireObject<'a> {
    resource: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> WireObject<'a> {
    pub fn new(resource: &'static str, fields: &'a Map<String, Value>) -> Self {
        WireObject { resource, fields }
    }

    fn missing(&self, key: &str) -> DecodeError {
        DecodeError::MissingRequiredField {
            resource: self.resource,
            path: key.to_string(),
        }
    }

    fn mismatch(&self, path: &str, expected: &'static str, value: &Value) -> DecodeError {
        DecodeError::TypeMismatch {
            resource: self.resource,
            path: path.to_string(),
            expected,
            actual: json_type_name(value),
        }
    }

    /// Raw value for `key`. Explicit `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn require(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.get(key).ok_or_else(|| self.missing(key))
    }

    pub fn require_str(&self, key: &str) -> Result<String, DecodeError> {
        let value = self.require(key)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(key, "string", value))
    }

    pub fn opt_str(&self, key: &str) -> Result<Option<String>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_owned()))
                .ok_or_else(|| self.mismatch(key, "string", value)),
        }
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, DecodeError> {
        let value = self.require(key)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(key, "boolean", value))
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "boolean", value)),
        }
    }

    pub fn require_i64(&self, key: &str) -> Result<i64, DecodeError> {
        let value = self.require(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(key, "integer", value))
    }

    pub fn opt_i64(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "integer", value)),
        }
    }

    pub fn opt_u64(&self, key: &str) -> Result<Option<u64>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "unsigned integer", value)),
        }
    }

    pub fn opt_u32(&self, key: &str) -> Result<Option<u32>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.mismatch(key, "unsigned integer", value)),
        }
    }

    fn timestamp_value(&self, key: &str, value: &Value) -> Result<DateTime<Utc>, DecodeError> {
        let malformed = || DecodeError::MalformedTimestamp {
            resource: self.resource,
            path: key.to_string(),
            value: match value {
                Value::String(raw) => raw.clone(),
                other => other.to_string(),
            },
        };
        let seconds = value.as_i64().ok_or_else(malformed)?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(malformed)
    }

    /// Required timestamp, wire-encoded as integer Unix epoch seconds.
    pub fn require_timestamp(&self, key: &str) -> Result<DateTime<Utc>, DecodeError> {
        let value = self.require(key)?;
        self.timestamp_value(key, value)
    }

    pub fn opt_timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => self.timestamp_value(key, value).map(Some),
        }
    }

    /// Optional decimal, decoded from the exact wire digits rather than
    /// through `f64`.
    pub fn opt_decimal(&self, key: &str) -> Result<Option<Decimal>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => match value {
                Value::Number(number) => Decimal::from_str(&number.to_string())
                    .map(Some)
                    .map_err(|_| self.mismatch(key, "decimal", value)),
                _ => Err(self.mismatch(key, "decimal", value)),
            },
        }
    }

    pub fn opt_metadata(&self, key: &str) -> Result<Option<Metadata>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Value::Object(entries) = value else {
            return Err(self.mismatch(key, "object", value));
        };
        let mut metadata = Metadata::with_capacity(entries.len());
        for (name, entry) in entries {
            let Value::String(text) = entry else {
                return Err(self.mismatch(&format!("{key}.{name}"), "string", entry));
            };
            metadata.insert(name.clone(), text.clone());
        }
        Ok(Some(metadata))
    }

    fn enum_value<E: DeserializeOwned>(&self, path: &str, value: &Value) -> Result<E, DecodeError> {
        let Value::String(raw) = value else {
            return Err(self.mismatch(path, "string", value));
        };
        serde_json::from_value(value.clone()).map_err(|_| DecodeError::UnknownEnumValue {
            resource: self.resource,
            path: path.to_string(),
            value: raw.clone(),
        })
    }

    /// Optional closed enumeration. The wire literal must match one of the
    /// known values exactly, case sensitively.
    pub fn opt_enum<E: DeserializeOwned>(&self, key: &str) -> Result<Option<E>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => self.enum_value(key, value).map(Some),
        }
    }

    pub fn opt_enum_list<E: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Vec<E>>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Value::Array(items) = value else {
            return Err(self.mismatch(key, "array", value));
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            decoded.push(self.enum_value(&format!("{key}[{index}]"), item)?);
        }
        Ok(Some(decoded))
    }

    fn record_value<T: FromWire>(&self, path: &str, value: &Value) -> Result<T, DecodeError> {
        let Value::Object(fields) = value else {
            return Err(self.mismatch(path, "object", value));
        };
        T::from_wire(&WireObject::new(T::RESOURCE, fields))
            .map_err(|err| err.nested(self.resource, path))
    }

    /// Optional nested record, decoded recursively.
    pub fn opt_record<T: FromWire>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => self.record_value(key, value).map(Some),
        }
    }

    /// Optional list of nested records, wire order preserved.
    pub fn opt_record_list<T: FromWire>(
        &self,
        key: &str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Value::Array(items) = value else {
            return Err(self.mismatch(key, "array", value));
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            decoded.push(self.record_value(&format!("{key}[{index}]"), item)?);
        }
        Ok(Some(decoded))
    }

    /// Optional expandable reference: a wire string becomes the identifier
    /// variant, a wire object is decoded as the referenced record.
    pub fn opt_expandable<T: FromWire>(
        &self,
        key: &str,
    ) -> Result<Option<Expandable<T>>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(id)) => Ok(Some(Expandable::Id(id.clone()))),
            Some(value @ Value::Object(_)) => self
                .record_value(key, value)
                .map(|record| Some(Expandable::Object(Box::new(record)))),
            Some(value) => Err(self.mismatch(key, "string or object", value)),
        }
    }
}

/// Request-payload optional with three states: leave the field out of the
/// request, send an explicit `null`, or send a value.
///
/// Pair with `#[serde(skip_serializing_if = "Maybe::is_absent")]` so that
/// `Absent` fields stay off the wire entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<T> {
    Absent,
    Null,
    Value(T),
}

// Hand-written so `Maybe<T>: Default` does not demand `T: Default`.
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Value(value)
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(value) => value.serialize(serializer),
        }
    }
}

/// Serde adapter for `Maybe<DateTime<Utc>>` request fields, wire-encoded
/// as epoch seconds.
pub mod maybe_ts_seconds {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    use super::Maybe;

    pub fn serialize<S: Serializer>(
        field: &Maybe<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match field {
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(instant) => serializer.serialize_i64(instant.timestamp()),
        }
    }
}

/// Serde adapter for `Maybe<Decimal>` request fields, wire-encoded as an
/// exact JSON number.
pub mod maybe_decimal {
    use rust_decimal::Decimal;
    use serde::Serializer;

    use super::Maybe;

    pub fn serialize<S: Serializer>(
        field: &Maybe<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match field {
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(value) => {
                rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
            }
        }
    }
}
