use crate::core::cipher;
use crate::domain::model::{Mode, Shift};
use crate::domain::ports::Storage;
use crate::utils::error::{CipherError, Result};
use std::path::{Path, PathBuf};

/// Result of running the cipher over a file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Lines were produced and written to `path`.
    Written { path: PathBuf, lines: Vec<String> },
    /// The file had no lines; the output file was left alone.
    Empty,
    /// The input could not be read, or the output could not be written.
    Failed(CipherError),
}

/// Runs the cipher line by line over files held in a [`Storage`].
pub struct FileAdapter<'a, S: Storage> {
    storage: &'a S,
    output_path: PathBuf,
}

impl<'a, S: Storage> FileAdapter<'a, S> {
    pub fn new(storage: &'a S, output_path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            output_path: output_path.into(),
        }
    }

    /// Read `path` and transform every line. Lines are trimmed and
    /// lowercased first. A read error yields no lines at all.
    pub fn transform(&self, path: &Path, mode: Mode, shift: Shift) -> Result<Vec<String>> {
        let lines = self.storage.read_lines(path)?;

        Ok(lines
            .iter()
            .map(|line| cipher::apply(&line.trim().to_lowercase(), shift, mode))
            .collect())
    }

    /// Persist `lines` to the output file. Nothing is written for an empty slice.
    pub fn write_results(&self, lines: &[String]) -> Result<Option<PathBuf>> {
        if lines.is_empty() {
            return Ok(None);
        }
        self.storage.write_lines(&self.output_path, lines).map(Some)
    }

    pub fn run(&self, path: &Path, mode: Mode, shift: Shift) -> FileOutcome {
        let lines = match self.transform(path, mode, shift) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("Could not {} {}: {}", mode, path.display(), e);
                return FileOutcome::Failed(e);
            }
        };

        match self.write_results(&lines) {
            Ok(Some(path)) => {
                tracing::info!("Wrote {} lines to {}", lines.len(), path.display());
                FileOutcome::Written { path, lines }
            }
            Ok(None) => {
                tracing::info!("{} has no lines, nothing written", path.display());
                FileOutcome::Empty
            }
            Err(e) => {
                tracing::error!("Failed to write {}: {}", self.output_path.display(), e);
                FileOutcome::Failed(e)
            }
        }
    }
}
