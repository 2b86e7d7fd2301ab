use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use voucher_core::{Alphabet, ExistingCodes, GeneratorOptions, Pattern};
use voucher_generator::{capacity, generate_codes, CodeGenerator, GenerateError};
use voucher_storage::InMemoryCodes;

fn is_unique(codes: &[String]) -> bool {
    codes.iter().collect::<HashSet<_>>().len() == codes.len()
}

#[test]
fn variable_numeric_scenario() {
    let options = GeneratorOptions::builder()
        .numeric(Alphabet::new("0123456789").unwrap())
        .build();
    let codes = generate_codes("V-#+", 50, &options).unwrap();

    assert_eq!(codes.len(), 50);
    assert!(is_unique(&codes));
    for code in &codes {
        let digits = code.strip_prefix("V-").expect("literal prefix kept");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn codes_avoid_the_ledger() {
    let ledger = InMemoryCodes::new();
    ledger.extend("##", (0..95).map(|n| format!("{:02}", n)));
    let generator = CodeGenerator::new(GeneratorOptions::default(), ledger);

    let codes = generator.generate("##", 5).unwrap();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["95", "96", "97", "98", "99"]);

    match generator.generate("##", 6).unwrap_err() {
        GenerateError::Capacity(err) => {
            assert_eq!(err.max, 100);
            assert_eq!(err.requested, 6);
            assert_eq!(err.existing, 95);
        }
        other => panic!("expected capacity error, got {other:?}"),
    }
}

#[test]
fn recording_batches_keeps_them_disjoint() {
    let ledger = InMemoryCodes::new();
    let pattern = "Q-**";
    let mut rng = StdRng::seed_from_u64(2024);

    let mut all = Vec::new();
    for _ in 0..5 {
        let generator = CodeGenerator::new(GeneratorOptions::default(), ledger.clone());
        let batch = generator.generate_with_rng(pattern, 100, &mut rng).unwrap();
        ledger.extend(pattern, batch.iter().cloned());
        all.extend(batch);
    }

    assert_eq!(all.len(), 500);
    assert!(is_unique(&all));
    assert_eq!(ledger.len(pattern), 500);
}

#[test]
fn variable_batch_avoids_the_ledger() {
    let pattern = "V#+";
    let ledger = InMemoryCodes::new();
    ledger.extend(pattern, (0..10).map(|n| format!("V{n}")));
    ledger.extend(pattern, (0..20).map(|n| format!("V{n:02}")));
    let existing = ledger.load(pattern).unwrap();

    // 50 requested + 30 issued - 1 fixed permutation = 79, two digits per run
    let options = GeneratorOptions::default();
    let lengths = capacity::resolve_lengths(&Pattern::parse(pattern), 50, 30, &options);
    assert_eq!(lengths, vec![2]);

    let generator = CodeGenerator::new(options, ledger);
    let codes = generator
        .generate_with_rng(pattern, 50, &mut StdRng::seed_from_u64(99))
        .unwrap();

    assert_eq!(codes.len(), 50);
    assert!(is_unique(&codes));
    for code in &codes {
        assert!(!existing.contains(code), "{code} was already issued");
        let digits = code.strip_prefix('V').expect("literal prefix kept");
        assert_eq!(digits.len(), 2);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn shape_matches_pattern() {
    let options = GeneratorOptions::builder()
        .numeric(Alphabet::new("13579").unwrap())
        .alphanumeric(Alphabet::new("XYZ").unwrap())
        .build();
    let codes = generate_codes("K#*-*+/#+", 200, &options).unwrap();

    assert!(is_unique(&codes));
    for code in codes {
        let chars: Vec<char> = code.chars().collect();
        assert_eq!(chars[0], 'K');
        assert!(options.numeric().contains(chars[1]));
        assert!(options.alphanumeric().contains(chars[2]));
        assert_eq!(chars[3], '-');

        let (alnum_run, num_run) = code[4..].split_once('/').unwrap();
        assert!(!alnum_run.is_empty() && !num_run.is_empty());
        assert!(alnum_run.chars().all(|c| options.alphanumeric().contains(c)));
        assert!(num_run.chars().all(|c| options.numeric().contains(c)));
    }
}

#[test]
fn sparsity_can_turn_success_into_failure() {
    let loose = GeneratorOptions::default();
    let sparse = GeneratorOptions::builder().sparsity(10.0).build();

    assert_eq!(generate_codes("###", 200, &loose).unwrap().len(), 200);
    let err = generate_codes("###", 200, &sparse).unwrap_err();
    assert!(matches!(err, GenerateError::Capacity(_)));
}

#[test]
fn sparsity_lengthens_variable_runs() {
    let pattern = Pattern::parse("A#+");
    let loose = GeneratorOptions::default();
    let sparse = GeneratorOptions::builder().sparsity(10.0).build();

    for how_many in [1, 10, 99, 1_000, 123_456] {
        let a = capacity::resolve_lengths(&pattern, how_many, 0, &loose);
        let b = capacity::resolve_lengths(&pattern, how_many, 0, &sparse);
        assert!(b[0] >= a[0]);
    }
}

#[test]
fn variable_lengths_never_shrink_as_requests_grow() {
    let pattern = Pattern::parse("A#+");
    let options = GeneratorOptions::default();
    let lengths: Vec<usize> = [1u64, 5, 50, 500, 5_000, 50_000, 5_000_000]
        .iter()
        .map(|&n| capacity::resolve_lengths(&pattern, n, 0, &options)[0])
        .collect();

    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(lengths.last(), Some(&7));
}

#[test]
fn degenerate_pattern() {
    let options = GeneratorOptions::default();
    assert_eq!(generate_codes("FIXED", 1, &options).unwrap(), vec!["FIXED"]);
    assert!(generate_codes("FIXED", 2, &options).is_err());
    assert!(generate_codes("FIXED", 0, &options).unwrap().is_empty());
}
