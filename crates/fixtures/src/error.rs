use std::path::PathBuf;

use thiserror::Error;

/// Error type for fixture writing. Fixture values always encode.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
