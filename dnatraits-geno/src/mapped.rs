//! Read-only memory mapping scoped to a value's lifetime.
//!
//! The mapping is released when the [`MappedFile`] drops, so every exit from
//! a parse (success, early return or `?`) unmaps the file.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::trace;

use crate::error::ParseError;

#[derive(Debug)]
pub struct MappedFile {
    path: PathBuf,
    /// `None` for an empty file, which cannot be mapped on every platform.
    map: Option<Mmap>,
}

impl MappedFile {
    /// Map `path` read-only. Any failure to open, stat or map the file is
    /// reported as [`ParseError::FileOpen`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let open_error = |source: std::io::Error| ParseError::FileOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        let len = file.metadata().map_err(open_error)?.len();
        if len == 0 {
            return Ok(Self {
                path: path.to_path_buf(),
                map: None,
            });
        }

        // SAFETY: the mapping is read-only and lives no longer than `self`;
        // the file must not be truncated by another process while mapped.
        let map = unsafe { Mmap::map(&file) }.map_err(open_error)?;

        // Access hint only; a refusal does not affect correctness.
        #[cfg(unix)]
        let _ = map.advise(memmap2::Advice::Sequential);

        trace!(path = %path.display(), bytes = len, "mapped file");
        Ok(Self {
            path: path.to_path_buf(),
            map: Some(map),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

impl Drop for MappedFile {
    fn drop(&mut self) {
        if self.map.is_some() {
            trace!(path = %self.path.display(), "unmapping file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_map_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"rs1\t1\t100\tAA\n").unwrap();
        file.flush().unwrap();

        let mapped = MappedFile::open(file.path()).unwrap();
        assert_eq!(mapped.bytes(), b"rs1\t1\t100\tAA\n");
        assert_eq!(mapped.len(), 13);
        assert_eq!(mapped.path(), file.path());
    }

    #[test]
    fn test_empty_file_maps_to_empty_slice() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mapped = MappedFile::open(file.path()).unwrap();
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MappedFile::open(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ParseError::FileOpen { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
