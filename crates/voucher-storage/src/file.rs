use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use voucher_core::{ExistingCodes, LoaderError};

/// Reads issued codes from a newline-delimited file.
///
/// The file is read again on every [`load`](ExistingCodes::load), so codes
/// appended between batches are picked up. Surrounding whitespace is trimmed
/// and blank lines are skipped. A file that is not UTF-8 is
/// [`LoaderError::InvalidData`]. The pattern argument is ignored: one file
/// holds one code space.
#[derive(Debug, Clone)]
pub struct FileCodes {
    path: PathBuf,
    missing_ok: bool,
}

impl FileCodes {
    /// A missing file is an error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing_ok: false,
        }
    }

    /// A missing file counts as an empty code space.
    pub fn missing_ok(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing_ok: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExistingCodes for FileCodes {
    fn load(&self, _pattern: &str) -> Result<HashSet<String>, LoaderError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound && self.missing_ok => {
                debug!(
                    path = %self.path.display(),
                    "existing codes file not found, treating as empty"
                );
                return Ok(HashSet::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(LoaderError::InvalidData(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
            Err(e) => {
                return Err(LoaderError::Io(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let codes: HashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        debug!(path = %self.path.display(), count = codes.len(), "loaded existing codes");
        Ok(codes)
    }
}
