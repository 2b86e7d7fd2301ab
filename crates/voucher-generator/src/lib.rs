//! Unique code generation from placeholder patterns.
//!
//! A pattern mixes literal text with placeholders that are replaced by random
//! characters. The [`capacity`] module decides whether the pattern can hold
//! the requested batch (or how long its variable runs must be), and the
//! [`emitter`] draws codes until the batch is complete and free of
//! collisions with previously issued codes.
//!
//! ```ignore
//! let codes = voucher_generator::generate_codes("V-#+", 50, &GeneratorOptions::default())?;
//! ```

pub mod capacity;
pub mod emitter;
pub mod error;
pub mod service;

pub use emitter::{random_chars, random_chars_str, Emitter};
pub use error::{CapacityError, GenerateError};
pub use service::CodeGenerator;

use voucher_core::{GeneratorOptions, NoExistingCodes};

/// Generates `how_many` distinct codes for a code space with no history.
pub fn generate_codes(
    pattern: &str,
    how_many: usize,
    options: &GeneratorOptions,
) -> error::Result<Vec<String>> {
    CodeGenerator::new(options.clone(), NoExistingCodes).generate(pattern, how_many)
}
