use thiserror::Error;
use voucher_core::LoaderError;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// The pattern cannot hold the requested batch next to the existing codes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "cannot generate {requested} codes: pattern allows at most {max} at sparsity {sparsity} \
     and {existing} are already issued"
)]
pub struct CapacityError {
    /// Codes asked for.
    pub requested: u64,
    /// Permutation space divided by sparsity.
    pub max: u128,
    /// Codes returned by the existing-codes provider.
    pub existing: u64,
    pub sparsity: f64,
}

#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("gave up after {attempts} attempts with {produced} unique codes")]
    Exhausted { attempts: u64, produced: usize },
}
