//! Binary buffer utilities for the CBOR fixture tools.
//!
//! # Overview
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`print_octets`] - Renders bytes as a short hex string for humans
//!
//! # Example
//!
//! ```
//! use cbor_fixture_buffers::{print_octets_default, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x82);
//! writer.u8(0x01);
//! writer.u8(0x02);
//! let data = writer.flush();
//!
//! assert_eq!(print_octets_default(&data), "82 01 02");
//! ```

mod print_octets;
mod writer;

pub use print_octets::{print_octets, print_octets_default};
pub use writer::Writer;
