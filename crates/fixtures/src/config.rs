use std::path::PathBuf;

/// Where fixture files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub out_dir: PathBuf,
}

impl Default for FixtureConfig {
    /// The current working directory.
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl FixtureConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}
