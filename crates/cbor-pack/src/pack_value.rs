//! [`PackValue`] — the value model accepted by the CBOR encoder.

use serde_json::Value as JsonValue;

use crate::cbor::CborError;

/// A value that can be encoded as CBOR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackValue {
    Null,
    Bool(bool),
    /// Signed integer; non-negative values encode as major type 0.
    Integer(i64),
    UInteger(u64),
    Array(Vec<PackValue>),
}

impl From<u64> for PackValue {
    fn from(v: u64) -> Self {
        PackValue::UInteger(v)
    }
}

impl From<i64> for PackValue {
    fn from(v: i64) -> Self {
        PackValue::Integer(v)
    }
}

impl From<bool> for PackValue {
    fn from(v: bool) -> Self {
        PackValue::Bool(v)
    }
}

impl From<&[u64]> for PackValue {
    fn from(values: &[u64]) -> Self {
        PackValue::Array(values.iter().copied().map(PackValue::UInteger).collect())
    }
}

impl TryFrom<&JsonValue> for PackValue {
    type Error = CborError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Ok(PackValue::Null),
            JsonValue::Bool(b) => Ok(PackValue::Bool(*b)),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(PackValue::UInteger(u))
                } else if let Some(i) = n.as_i64() {
                    Ok(PackValue::Integer(i))
                } else {
                    Err(CborError::Unsupported("floating point number"))
                }
            }
            JsonValue::String(_) => Err(CborError::Unsupported("text string")),
            JsonValue::Array(items) => items
                .iter()
                .map(PackValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(PackValue::Array),
            JsonValue::Object(_) => Err(CborError::Unsupported("map")),
        }
    }
}
