//! `CborEncoder` — canonical CBOR encoder.
//!
//! Integers, array lengths and negative integers all use the shortest
//! argument width that can hold them (RFC 8949 §4.2.1), so equal values
//! always encode to equal bytes.

use cbor_fixture_buffers::Writer;

use super::constants::*;
use crate::PackValue;

/// Canonical CBOR encoder.
///
/// The encoder owns a [`Writer`] and can be reused; every call to
/// [`CborEncoder::encode`] starts from an empty buffer.
pub struct CborEncoder {
    pub writer: Writer,
}

impl Default for CborEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encode a value and return the CBOR bytes.
    pub fn encode(&mut self, value: &PackValue) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    /// Encode a sequence of unsigned integers as a CBOR array.
    pub fn encode_u64_seq(&mut self, values: &[u64]) -> Vec<u8> {
        self.writer.reset();
        self.write_arr_hdr(values.len());
        for &value in values {
            self.write_u_integer(value);
        }
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &PackValue) {
        match value {
            PackValue::Null => self.write_null(),
            PackValue::Bool(b) => self.write_boolean(*b),
            PackValue::Integer(i) => self.write_integer(*i),
            PackValue::UInteger(u) => self.write_u_integer(*u),
            PackValue::Array(arr) => self.write_arr(arr),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(CBOR_NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { CBOR_TRUE } else { CBOR_FALSE });
    }

    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
        } else {
            self.encode_nint(int);
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.write_hdr(OVERLAY_UIN, uint);
    }

    /// Negative integers carry `-1 - n` as their argument.
    pub fn encode_nint(&mut self, int: i64) {
        let uint = (-1i64).wrapping_sub(int) as u64;
        self.write_hdr(OVERLAY_NIN, uint);
    }

    pub fn write_arr(&mut self, arr: &[PackValue]) {
        self.write_arr_hdr(arr.len());
        for item in arr {
            self.write_any(item);
        }
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        self.write_hdr(OVERLAY_ARR, length as u64);
    }

    /// Writes an initial byte for `overlay` with the shortest argument
    /// encoding of `arg`.
    fn write_hdr(&mut self, overlay: u8, arg: u64) {
        let w = &mut self.writer;
        if arg <= MAX_INLINE_ARG {
            w.u8(overlay | arg as u8);
        } else if arg <= 0xff {
            w.u8(overlay | MINOR_U8);
            w.u8(arg as u8);
        } else if arg <= 0xffff {
            w.u8u16(overlay | MINOR_U16, arg as u16);
        } else if arg <= 0xffff_ffff {
            w.u8u32(overlay | MINOR_U32, arg as u32);
        } else {
            w.u8u64(overlay | MINOR_U64, arg);
        }
    }
}
