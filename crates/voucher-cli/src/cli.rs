use clap::Parser;
use std::path::PathBuf;
use voucher_core::Alphabet;

pub const PATTERN_ENV: &str = "VOUCHER_PATTERN";
pub const COUNT_ENV: &str = "VOUCHER_COUNT";
pub const SPARSITY_ENV: &str = "VOUCHER_SPARSITY";
pub const NUMERIC_CHARS_ENV: &str = "VOUCHER_NUMERIC_CHARS";
pub const ALPHANUMERIC_CHARS_ENV: &str = "VOUCHER_ALPHANUMERIC_CHARS";
pub const EXISTING_FILE_ENV: &str = "VOUCHER_EXISTING_FILE";
pub const MAX_ATTEMPTS_ENV: &str = "VOUCHER_MAX_ATTEMPTS";

pub const DEFAULT_COUNT: &str = "1";
pub const DEFAULT_SPARSITY: &str = "1";

/// Generate unique codes from a pattern.
///
/// `#` draws one digit, `*` one alphanumeric character, and `#+` / `*+` a run
/// sized to fit the requested count. Everything else is copied as is.
#[derive(Debug, Parser)]
#[command(name = "voucher")]
pub struct CLI {
    #[arg(env = PATTERN_ENV)]
    pub pattern: String,

    #[arg(short = 'n', long, env = COUNT_ENV, default_value = DEFAULT_COUNT)]
    pub count: usize,

    #[arg(long, env = SPARSITY_ENV, default_value = DEFAULT_SPARSITY)]
    pub sparsity: f64,

    #[arg(long, env = NUMERIC_CHARS_ENV)]
    pub numeric_chars: Option<Alphabet>,

    #[arg(long, env = ALPHANUMERIC_CHARS_ENV)]
    pub alphanumeric_chars: Option<Alphabet>,

    /// Newline-delimited file of codes already issued for this pattern.
    #[arg(long, env = EXISTING_FILE_ENV)]
    pub existing: Option<PathBuf>,

    /// Treat a missing `--existing` file as empty.
    #[arg(long, requires = "existing")]
    pub allow_missing: bool,

    #[arg(long, env = MAX_ATTEMPTS_ENV)]
    pub max_attempts: Option<u64>,
}
