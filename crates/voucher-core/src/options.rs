use crate::alphabet::Alphabet;
use tracing::warn;
use typed_builder::TypedBuilder;

const MIN_SPARSITY: f64 = 1.0;

/// Configures a single code generation call.
///
/// ```ignore
/// let options = GeneratorOptions::builder()
///     .numeric(Alphabet::new("01234567")?)
///     .sparsity(10.0)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct GeneratorOptions {
    /// Alphabet for `#` and `#+`.
    #[builder(default = Alphabet::numeric())]
    numeric: Alphabet,
    /// Alphabet for `*` and `*+`.
    #[builder(default = Alphabet::alphanumeric())]
    alphanumeric: Alphabet,
    /// Multiplier applied to requested and existing counts before they are
    /// compared with the permutation space. Values below 1 are raised to 1.
    #[builder(default = MIN_SPARSITY, setter(transform = |sparsity: f64| clamp_sparsity(sparsity)))]
    sparsity: f64,
    /// Upper bound on candidate draws per call. `None` retries until the batch
    /// is complete.
    #[builder(default, setter(strip_option(fallback = max_attempts_opt)))]
    max_attempts: Option<u64>,
}

impl GeneratorOptions {
    pub fn numeric(&self) -> &Alphabet {
        &self.numeric
    }

    pub fn alphanumeric(&self) -> &Alphabet {
        &self.alphanumeric
    }

    pub fn sparsity(&self) -> f64 {
        self.sparsity
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn clamp_sparsity(sparsity: f64) -> f64 {
    // `!(x >= 1.0)` also catches NaN.
    if !(sparsity >= MIN_SPARSITY) {
        warn!(sparsity, min = MIN_SPARSITY, "sparsity below minimum, clamping");
        return MIN_SPARSITY;
    }
    sparsity
}
