use crate::domain::ports::Storage;
use crate::utils::error::{CipherError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Storage on the local filesystem. Relative paths are taken from `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn open(&self, path: &Path) -> Result<File> {
        let full_path = self.resolve(path);
        let display = path.display().to_string();

        let file = File::open(&full_path).map_err(|e| read_error(display.clone(), e))?;
        let metadata = file.metadata().map_err(|e| read_error(display.clone(), e))?;
        if metadata.is_dir() {
            return Err(CipherError::FileUnreadable {
                path: display,
                source: io::Error::other("is a directory"),
            });
        }
        Ok(file)
    }
}

fn read_error(path: String, e: io::Error) -> CipherError {
    if e.kind() == io::ErrorKind::NotFound {
        CipherError::FileNotFound { path }
    } else {
        CipherError::FileUnreadable { path, source: e }
    }
}

impl Storage for LocalStorage {
    fn resolve(&self, path: &Path) -> PathBuf {
        // join() keeps absolute paths as they are
        self.base_path.join(path)
    }

    fn probe(&self, path: &Path) -> Result<()> {
        self.open(path).map(drop)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = self.open(path)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| read_error(path.display().to_string(), e))?;

        tracing::debug!("Read {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<PathBuf> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&full_path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} lines to {}", lines.len(), full_path.display());
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.probe(Path::new("nope.txt")).unwrap_err();
        assert!(matches!(err, CipherError::FileNotFound { .. }));

        let err = storage.read_lines(Path::new("nope.txt")).unwrap_err();
        assert!(matches!(err, CipherError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.probe(Path::new("sub")).unwrap_err();
        assert!(matches!(err, CipherError::FileUnreadable { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, 0x00, b'\n']).unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_lines(Path::new("bin.dat")).unwrap_err();
        assert!(matches!(err, CipherError::FileUnreadable { .. }));
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let target = Path::new("out/results.txt");

        storage
            .write_lines(target, &["ONE".to_string(), "TWO".to_string(), "THREE".to_string()])
            .unwrap();
        let written = storage.write_lines(target, &["FOUR".to_string()]).unwrap();

        assert_eq!(std::fs::read_to_string(written).unwrap(), "FOUR\n");
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("abs.txt");
        std::fs::write(&file, "a\nb\n").unwrap();

        let storage = LocalStorage::new("/definitely/not/here");
        assert_eq!(storage.read_lines(&file).unwrap(), vec!["a", "b"]);
    }
}
