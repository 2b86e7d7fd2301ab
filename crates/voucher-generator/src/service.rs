use crate::capacity;
use crate::emitter::Emitter;
use crate::error::Result;
use rand::Rng;
use tracing::{debug, info};
use voucher_core::{ExistingCodes, GeneratorOptions, Pattern};

/// Generates batches of unique codes for a pattern.
///
/// Wraps the options and an [`ExistingCodes`] provider to handle:
/// - loading the codes already issued for the pattern
/// - the capacity check or variable run sizing
/// - drawing until the batch is complete
///
/// Note: the provider is only read. Recording the returned codes, and
/// serializing concurrent batches over the same code space, is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct CodeGenerator<L> {
    options: GeneratorOptions,
    existing: L,
}

impl<L: ExistingCodes> CodeGenerator<L> {
    pub fn new(options: GeneratorOptions, existing: L) -> Self {
        Self { options, existing }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates `how_many` distinct codes using the thread-local generator.
    pub fn generate(&self, pattern: &str, how_many: usize) -> Result<Vec<String>> {
        self.generate_with_rng(pattern, how_many, &mut rand::rng())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied generator,
    /// e.g. a seeded one for reproducible batches.
    ///
    /// Either the whole batch is returned or nothing is: capacity and provider
    /// failures surface before the first code is drawn.
    pub fn generate_with_rng<R: Rng>(
        &self,
        pattern: &str,
        how_many: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        if how_many == 0 {
            debug!(pattern, "empty batch requested");
            return Ok(Vec::new());
        }

        let pattern = Pattern::parse(pattern);
        let existing = self.existing.load(pattern.as_str())?;

        let lengths = capacity::plan(
            &pattern,
            how_many as u64,
            existing.len() as u64,
            &self.options,
        )?;

        let emitter = Emitter::new(&pattern, &lengths, &self.options);
        let codes = emitter.fill(how_many, &existing, self.options.max_attempts(), rng)?;

        info!(pattern = %pattern, count = codes.len(), "generated codes");
        Ok(codes)
    }
}
