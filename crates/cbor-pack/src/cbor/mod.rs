//! CBOR encoding.

mod constants;
mod encoder;
mod error;
mod shared;

pub use constants::*;
pub use encoder::CborEncoder;
pub use error::CborError;
pub use shared::{encode, encode_json_to_cbor_bytes};
