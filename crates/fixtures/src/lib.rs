//! Writes small CBOR-encoded integer arrays to disk for use as test fixtures.
//!
//! # Example
//!
//! ```no_run
//! use cbor_fixtures::{write_all, FixtureConfig};
//!
//! for written in write_all(&FixtureConfig::default())? {
//!     if let Some(line) = written.announcement() {
//!         println!("{line}");
//!     }
//! }
//! # Ok::<(), cbor_fixtures::FixtureError>(())
//! ```

mod config;
mod error;
mod fixture;
mod writer;

pub mod logging;

pub use config::FixtureConfig;
pub use error::FixtureError;
pub use fixture::{Fixture, WrittenFixture, FIXTURES};
pub use writer::{write_all, write_fixture};
