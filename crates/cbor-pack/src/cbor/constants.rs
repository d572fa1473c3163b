//! CBOR constants (RFC 8949 §3).

// MAJOR type values (bits 7-5 of the initial byte)
pub const MAJOR_UIN: u8 = 0b000;
pub const MAJOR_NIN: u8 = 0b001;
pub const MAJOR_ARR: u8 = 0b100;
pub const MAJOR_TKN: u8 = 0b111;

// MAJOR type overlays (major shifted to bits 7-5)
pub const OVERLAY_UIN: u8 = MAJOR_UIN << 5;
pub const OVERLAY_NIN: u8 = MAJOR_NIN << 5;
pub const OVERLAY_ARR: u8 = MAJOR_ARR << 5;
pub const OVERLAY_TKN: u8 = MAJOR_TKN << 5;

/// Largest argument that fits in the minor bits of the initial byte.
pub const MAX_INLINE_ARG: u64 = 23;

// Minor values announcing a following 1, 2, 4 or 8 byte argument.
pub const MINOR_U8: u8 = 24;
pub const MINOR_U16: u8 = 25;
pub const MINOR_U32: u8 = 26;
pub const MINOR_U64: u8 = 27;

pub const CBOR_FALSE: u8 = OVERLAY_TKN | 20;
pub const CBOR_TRUE: u8 = OVERLAY_TKN | 21;
pub const CBOR_NULL: u8 = OVERLAY_TKN | 22;
