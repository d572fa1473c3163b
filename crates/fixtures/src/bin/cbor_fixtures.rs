//! Writes `payload1.cbor`, `payload1long.cbor` and `payload2.cbor` into the
//! current directory.

use std::process::ExitCode;

use cbor_fixtures::{logging, write_all, FixtureConfig};
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    match write_all(&FixtureConfig::default()) {
        Ok(written) => {
            for line in written.iter().filter_map(|w| w.announcement()) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "fixture generation failed");
            eprintln!("cbor-fixtures: {err}");
            ExitCode::FAILURE
        }
    }
}
