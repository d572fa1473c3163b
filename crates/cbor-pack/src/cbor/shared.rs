//! Convenience wrappers around [`CborEncoder`].

use crate::PackValue;

use super::{CborEncoder, CborError};

/// Encode a [`PackValue`] into CBOR bytes.
pub fn encode(data: &PackValue) -> Vec<u8> {
    let mut encoder = CborEncoder::new();
    encoder.encode(data)
}

/// Encode a `serde_json::Value` into CBOR bytes.
///
/// Fails with [`CborError::Unsupported`] for values outside the supported
/// subset (floats, strings, objects).
pub fn encode_json_to_cbor_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CborError> {
    let value = PackValue::try_from(value)?;
    Ok(encode(&value))
}
