//! Encode, write, report.

use std::fs::File;
use std::io::Write;

use tracing::{debug, info};

use crate::{Fixture, FixtureConfig, FixtureError, WrittenFixture, FIXTURES};

/// Encodes `fixture` and writes it to its file under `config.out_dir`.
///
/// The file is created if missing and truncated if present. The handle is
/// dropped before returning, on success and on failure alike. A failed write
/// may leave a truncated file behind.
pub fn write_fixture(
    config: &FixtureConfig,
    fixture: &Fixture,
) -> Result<WrittenFixture, FixtureError> {
    let bytes = fixture.encode();
    debug!(file = fixture.file_name, len = bytes.len(), "encoded fixture");

    let path = config.path_for(fixture.file_name);
    let io_err = |source| FixtureError::Io {
        path: path.clone(),
        source,
    };
    let mut file = File::create(&path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    drop(file);

    info!(path = %path.display(), "wrote fixture");
    Ok(WrittenFixture {
        path,
        bytes,
        label: fixture.label,
    })
}

/// Writes every entry of [`FIXTURES`] in order.
///
/// Stops at the first failure: files written before it stay on disk, later
/// ones are never created.
pub fn write_all(config: &FixtureConfig) -> Result<Vec<WrittenFixture>, FixtureError> {
    FIXTURES
        .iter()
        .map(|fixture| write_fixture(config, fixture))
        .collect()
}
