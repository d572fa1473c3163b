//! Canonical CBOR encoding for the small values used in binary test fixtures.
//!
//! Only the subset of CBOR needed for fixtures is covered: unsigned and
//! negative integers, booleans, `null`, and definite-length arrays. Every
//! value is written in its preferred (shortest) serialization, so the output
//! is deterministic and byte-for-byte stable.

mod pack_value;

pub mod cbor;

pub use pack_value::PackValue;

pub use cbor::{encode, encode_json_to_cbor_bytes, CborEncoder, CborError};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_and_pack_value_paths_agree() {
        let via_json = encode_json_to_cbor_bytes(&json!([1, 2, 3])).expect("encode cbor");
        let via_value = encode(&PackValue::from(&[1u64, 2, 3][..]));
        assert_eq!(via_json, via_value);
        assert_eq!(via_value, vec![0x83, 0x01, 0x02, 0x03]);
    }
}
