//! Core types and traits for the Voucher code generator.
//!
//! This crate provides the pattern scanner, alphabets, generator options and
//! the collaborator trait used to look up previously issued codes. The
//! planning and emission logic lives in `voucher_generator`.

pub mod alphabet;
pub mod error;
pub mod existing;
pub mod options;
pub mod pattern;

pub use alphabet::Alphabet;
pub use error::{CoreError, LoaderError};
pub use existing::{ExistingCodes, NoExistingCodes};
pub use options::GeneratorOptions;
pub use pattern::{CharClass, Pattern, Placeholder, PlaceholderCounts, Segment, Width};
