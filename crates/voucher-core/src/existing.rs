use crate::error::LoaderError;
use std::collections::HashSet;

/// Supplies the codes already issued for a pattern.
///
/// The generator calls [`load`](ExistingCodes::load) once per batch and only
/// reads the returned set. Keeping it in sync with issued codes is the
/// provider's job: two batches running against the same provider only see
/// each other's codes if the caller records them in between.
pub trait ExistingCodes: Send + Sync {
    fn load(&self, pattern: &str) -> Result<HashSet<String>, LoaderError>;
}

/// A provider for code spaces with no history.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExistingCodes;

impl ExistingCodes for NoExistingCodes {
    fn load(&self, _pattern: &str) -> Result<HashSet<String>, LoaderError> {
        Ok(HashSet::new())
    }
}

impl<F> ExistingCodes for F
where
    F: Fn(&str) -> Result<HashSet<String>, LoaderError> + Send + Sync,
{
    fn load(&self, pattern: &str) -> Result<HashSet<String>, LoaderError> {
        self(pattern)
    }
}
