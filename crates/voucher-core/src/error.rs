use thiserror::Error;

/// Errors related to the core types of the code generator.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

/// Errors raised by an [`ExistingCodes`](crate::ExistingCodes) provider.
///
/// The generator never inspects these, it hands them back to the caller.
#[derive(Debug, Clone, Error)]
pub enum LoaderError {
    #[error("existing codes backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read existing codes: {0}")]
    Io(String),
    #[error("existing codes are invalid: {0}")]
    InvalidData(String),
}
