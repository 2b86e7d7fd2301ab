//! Decides whether a pattern can hold a batch and how long variable runs get.
//!
//! Both paths scale the requested and existing counts by the sparsity
//! multiplier first, so a sparsity of 10 asks the pattern for ten times the
//! room the batch strictly needs.

use crate::error::CapacityError;
use tracing::{debug, info};
use voucher_core::{Alphabet, CharClass, GeneratorOptions, Pattern, PlaceholderCounts};

/// Number of distinct strings the fixed placeholders (`#`, `*`) can produce.
///
/// Each kind contributes `alphabet_len ^ count` and the kinds multiply. A kind
/// that does not occur contributes a factor of 1, so a pattern without
/// placeholders has exactly one permutation. This product also covers patterns
/// with a single placeholder kind, instead of counting that kind on its own,
/// which keeps `"##"` at 100 and `"FIXED"` at 1. Saturates at `u128::MAX`.
pub fn permutations(counts: &PlaceholderCounts, options: &GeneratorOptions) -> u128 {
    let numeric = space(options.numeric(), counts.numeric);
    let alphanumeric = space(options.alphanumeric(), counts.alphanumeric);
    numeric.saturating_mul(alphanumeric)
}

/// Fails when the fixed placeholders of `pattern` cannot hold `how_many` new
/// codes next to `existing` issued ones.
pub fn ensure_capacity(
    pattern: &Pattern,
    how_many: u64,
    existing: u64,
    options: &GeneratorOptions,
) -> Result<(), CapacityError> {
    let sparsity = options.sparsity();
    let possible = permutations(&pattern.counts(), options);
    let existing_scaled = scaled(existing, sparsity);
    let requested_scaled = scaled(how_many, sparsity);

    debug!(
        pattern = %pattern,
        possible,
        existing_scaled,
        requested_scaled,
        "checking fixed pattern capacity"
    );

    if possible.saturating_sub(existing_scaled) < requested_scaled {
        return Err(CapacityError {
            requested: how_many,
            max: (possible as f64 / sparsity).floor() as u128,
            existing,
            sparsity,
        });
    }

    Ok(())
}

/// Resolves a character count for every variable placeholder, in pattern
/// order.
///
/// The permutations the fixed placeholders cannot cover are split evenly
/// across the variable placeholders, and each one gets the shortest run whose
/// own alphabet covers its share. Every run is at least one character long.
/// This path never fails.
pub fn resolve_lengths(
    pattern: &Pattern,
    how_many: u64,
    existing: u64,
    options: &GeneratorOptions,
) -> Vec<usize> {
    let sparsity = options.sparsity();
    let counts = pattern.counts();
    let fixed = permutations(&counts, options);

    let deficit = scaled(how_many, sparsity)
        .saturating_add(scaled(existing, sparsity))
        .saturating_sub(fixed)
        .max(1);
    let variable = counts.variable().max(1) as u128;
    let per_placeholder = deficit.div_ceil(variable);

    pattern
        .variable_placeholders()
        .map(|placeholder| {
            let alphabet = alphabet_for(placeholder.class, options);
            min_length(alphabet.len(), per_placeholder)
        })
        .collect()
}

/// Runs the check matching the pattern's shape and returns the variable run
/// lengths (empty for fixed-only patterns).
pub fn plan(
    pattern: &Pattern,
    how_many: u64,
    existing: u64,
    options: &GeneratorOptions,
) -> Result<Vec<usize>, CapacityError> {
    if !pattern.has_variable_placeholder() {
        ensure_capacity(pattern, how_many, existing, options)?;
        info!(pattern = %pattern, how_many, existing, "fixed pattern has capacity");
        return Ok(Vec::new());
    }

    let lengths = resolve_lengths(pattern, how_many, existing, options);
    info!(
        pattern = %pattern,
        how_many,
        existing,
        lengths = ?lengths,
        "resolved variable placeholder lengths"
    );
    Ok(lengths)
}

pub(crate) fn alphabet_for(class: CharClass, options: &GeneratorOptions) -> &Alphabet {
    match class {
        CharClass::Numeric => options.numeric(),
        CharClass::Alphanumeric => options.alphanumeric(),
    }
}

fn space(alphabet: &Alphabet, count: usize) -> u128 {
    u32::try_from(count)
        .ok()
        .and_then(|exp| (alphabet.len() as u128).checked_pow(exp))
        .unwrap_or(u128::MAX)
}

fn scaled(count: u64, sparsity: f64) -> u128 {
    // Float to int `as` casts saturate.
    (count as f64 * sparsity).ceil() as u128
}

/// Smallest `len >= 1` with `base ^ len >= target`. `base` is at least 2.
fn min_length(base: usize, target: u128) -> usize {
    let base = base as u128;
    let mut len = 1;
    let mut covered = base;
    while covered < target {
        covered = covered.saturating_mul(base);
        len += 1;
    }
    len
}
