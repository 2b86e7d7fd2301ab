//! Ready-made [`ExistingCodes`](voucher_core::ExistingCodes) providers.

pub mod file;
pub mod memory;

pub use file::FileCodes;
pub use memory::InMemoryCodes;
