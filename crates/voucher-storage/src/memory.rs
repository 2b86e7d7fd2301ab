use dashmap::DashMap;
use std::collections::HashSet;
use voucher_core::{ExistingCodes, LoaderError};

/// In-memory ledger of issued codes, keyed by pattern.
///
/// DashMap shards its locks, so batches for different patterns can record
/// and load concurrently without blocking each other. The generator only
/// reads from it; callers record the codes they hand out.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCodes {
    storage: DashMap<String, HashSet<String>>,
}

impl InMemoryCodes {
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a ledger with room for the given number of patterns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Records one code. Returns `false` if it was already recorded.
    pub fn insert(&self, pattern: &str, code: impl Into<String>) -> bool {
        self.storage
            .entry(pattern.to_owned())
            .or_default()
            .insert(code.into())
    }

    pub fn extend<I>(&self, pattern: &str, codes: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.storage
            .entry(pattern.to_owned())
            .or_default()
            .extend(codes.into_iter().map(Into::into));
    }

    /// Number of codes recorded for `pattern`.
    pub fn len(&self, pattern: &str) -> usize {
        self.storage.get(pattern).map_or(0, |codes| codes.len())
    }

    pub fn is_empty(&self, pattern: &str) -> bool {
        self.len(pattern) == 0
    }
}

impl ExistingCodes for InMemoryCodes {
    fn load(&self, pattern: &str) -> Result<HashSet<String>, LoaderError> {
        Ok(self
            .storage
            .get(pattern)
            .map(|codes| codes.value().clone())
            .unwrap_or_default())
    }
}
