use crate::capacity::alphabet_for;
use crate::error::{GenerateError, Result};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;
use voucher_core::{Alphabet, GeneratorOptions, Pattern, Segment, Width};

/// Draws `count` characters uniformly from `alphabet`.
pub fn random_chars<R: Rng>(alphabet: &Alphabet, count: usize, rng: &mut R) -> String {
    let mut out = String::with_capacity(count);
    push_random(&mut out, alphabet.chars(), count, rng);
    out
}

/// Draws `count` characters uniformly from the characters of `alphabet` using
/// the thread-local generator. Unlike [`random_chars`] the alphabet is not
/// validated, so an empty one is fine as long as `count` is zero.
pub fn random_chars_str(alphabet: &str, count: usize) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(count);
    push_random(&mut out, &chars, count, &mut rand::rng());
    out
}

fn push_random<R: Rng>(out: &mut String, chars: &[char], count: usize, rng: &mut R) {
    for _ in 0..count {
        let idx = rng.random_range(0..chars.len());
        out.push(chars[idx]);
    }
}

#[derive(Debug)]
enum Piece<'a> {
    Literal(&'a str),
    Random { alphabet: &'a Alphabet, len: usize },
}

/// A pattern with every placeholder bound to its alphabet and run length.
#[derive(Debug)]
pub struct Emitter<'a> {
    pieces: Vec<Piece<'a>>,
    width: usize,
}

impl<'a> Emitter<'a> {
    /// Binds `pattern` to `options`. Variable placeholders take their run
    /// length from `lengths` in order; a missing entry means one character.
    pub fn new(pattern: &'a Pattern, lengths: &[usize], options: &'a GeneratorOptions) -> Self {
        let mut lengths = lengths.iter().copied();
        let pieces: Vec<Piece<'a>> = pattern
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Piece::Literal(text.as_str()),
                Segment::Placeholder(placeholder) => Piece::Random {
                    alphabet: alphabet_for(placeholder.class, options),
                    len: match placeholder.width {
                        Width::Single => 1,
                        Width::Variable => lengths.next().unwrap_or(1),
                    },
                },
            })
            .collect();

        let width = pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.len(),
                Piece::Random { len, .. } => *len,
            })
            .sum();

        Self { pieces, width }
    }

    /// Produces one candidate code.
    pub fn emit<R: Rng>(&self, rng: &mut R) -> String {
        let mut out = String::with_capacity(self.width);
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Random { alphabet, len } => {
                    push_random(&mut out, alphabet.chars(), *len, rng)
                }
            }
        }
        out
    }

    /// Emits candidates until `how_many` codes are collected that are neither
    /// in `existing` nor repeated. Codes come back in the order they were
    /// drawn.
    ///
    /// With `max_attempts` set, stops with [`GenerateError::Exhausted`] once
    /// that many candidates were drawn without completing the batch.
    pub fn fill<R: Rng>(
        &self,
        how_many: usize,
        existing: &HashSet<String>,
        max_attempts: Option<u64>,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let mut codes = Vec::with_capacity(how_many);
        let mut seen = HashSet::with_capacity(how_many);
        let mut attempts: u64 = 0;

        while codes.len() < how_many {
            if max_attempts.is_some_and(|max| attempts >= max) {
                return Err(GenerateError::Exhausted {
                    attempts,
                    produced: codes.len(),
                });
            }
            attempts += 1;

            let code = self.emit(rng);
            if existing.contains(&code) || !seen.insert(code.clone()) {
                continue;
            }
            codes.push(code);
        }

        debug!(
            attempts,
            collisions = attempts - how_many as u64,
            produced = codes.len(),
            "batch filled"
        );

        Ok(codes)
    }
}
