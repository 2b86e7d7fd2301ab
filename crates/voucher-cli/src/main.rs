mod cli;

use crate::cli::CLI;
use clap::Parser;
use std::io::{BufWriter, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use voucher_core::{Alphabet, ExistingCodes, GeneratorOptions, NoExistingCodes};
use voucher_generator::CodeGenerator;
use voucher_storage::FileCodes;

fn main() -> anyhow::Result<()> {
    // stdout carries only the codes
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::parse();

    info!(
        pattern = %config.pattern,
        count = config.count,
        sparsity = config.sparsity,
        existing = ?config.existing,
        "generating codes"
    );

    let options = build_options(&config);

    let codes = match &config.existing {
        Some(path) if config.allow_missing => run(options, FileCodes::missing_ok(path), &config)?,
        Some(path) => run(options, FileCodes::new(path), &config)?,
        None => run(options, NoExistingCodes, &config)?,
    };

    let mut out = BufWriter::new(std::io::stdout().lock());
    for code in codes {
        writeln!(out, "{}", code)?;
    }
    out.flush()?;

    Ok(())
}

fn build_options(config: &CLI) -> GeneratorOptions {
    let numeric = config.numeric_chars.clone().unwrap_or_else(Alphabet::numeric);
    let alphanumeric = config
        .alphanumeric_chars
        .clone()
        .unwrap_or_else(Alphabet::alphanumeric);

    GeneratorOptions::builder()
        .numeric(numeric)
        .alphanumeric(alphanumeric)
        .sparsity(config.sparsity)
        .max_attempts_opt(config.max_attempts)
        .build()
}

fn run<L: ExistingCodes>(
    options: GeneratorOptions,
    existing: L,
    config: &CLI,
) -> anyhow::Result<Vec<String>> {
    let generator = CodeGenerator::new(options, existing);
    debug!(
        sparsity = generator.options().sparsity(),
        max_attempts = ?generator.options().max_attempts(),
        "effective generator options"
    );
    Ok(generator.generate(&config.pattern, config.count)?)
}
