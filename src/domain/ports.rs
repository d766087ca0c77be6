use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Line-oriented file access used by the file adapter and the shell.
pub trait Storage {
    /// Resolve a user-supplied path against the storage root.
    fn resolve(&self, path: &Path) -> PathBuf;

    /// Check that `path` exists and can be opened for reading.
    fn probe(&self, path: &Path) -> Result<()>;

    /// Read every line of `path`, without line terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Write `lines` to `path`, one per line, replacing any previous content.
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<PathBuf>;
}
