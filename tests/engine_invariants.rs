use lcs_bench::hirschberg::split::choose_split;
use lcs_bench::{ClassicEngine, HirschbergBuilder, HirschbergEngine, LcsError, LcsSolver};

#[test]
fn exact_base_size_is_solved_without_splitting() {
    for k in [1usize, 2, 5, 8] {
        let x: Vec<u8> = (0..k).map(|i| b"ACGT"[i % 4]).collect();
        let y: Vec<u8> = (0..k).map(|i| b"TGCA"[i % 4]).collect();
        let mut engine = HirschbergEngine::new(k).unwrap();
        let lcs = engine.lcs(&x, &y).unwrap();
        let stats = engine.stats();
        assert_eq!(stats.splits, 0, "k = {k}");
        assert_eq!(stats.base_cases, 1, "k = {k}");
        assert_eq!(lcs.length, ClassicEngine::new().lcs_len(&x, &y).unwrap());
    }
}

#[test]
fn one_over_base_in_either_dimension_splits() {
    let k = 4;
    let mut engine = HirschbergEngine::new(k).unwrap();

    engine.lcs(b"ACGTA", b"ACGT").unwrap();
    assert!(engine.stats().splits >= 1);

    engine.lcs(b"ACGT", b"ACGTA").unwrap();
    assert!(engine.stats().splits >= 1);

    engine.lcs(b"ACGT", b"ACGT").unwrap();
    assert_eq!(engine.stats().splits, 0);
}

#[test]
fn split_ties_pick_the_smallest_k() {
    // X = "AB", Y = "BA", base 1: forward profile of "A" against "BA" is
    // [0, 0, 1]; backward profile of "B" against "AB" is [0, 0, 1]. Both
    // k = 0 and k = 2 reach the maximum of 1.
    assert_eq!(choose_split(&[0, 0, 1], &[0, 0, 1]), 0);

    let mut engine = HirschbergEngine::new(1).unwrap();
    let first = engine.lcs(b"AB", b"BA").unwrap();
    assert_eq!(first.symbols, b"B");
    for _ in 0..5 {
        assert_eq!(engine.lcs(b"AB", b"BA").unwrap(), first);
    }

    // The classic engine resolves the same ambiguity differently but is
    // equally optimal.
    let classic = ClassicEngine::new().lcs(b"AB", b"BA").unwrap();
    assert_eq!(classic.symbols, b"A");
    assert_eq!(classic.length, first.length);
}

#[test]
fn repeated_runs_are_identical() {
    let x = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let y = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    let mut classic = ClassicEngine::new();
    let mut linear = HirschbergEngine::new(3).unwrap();
    let a0 = classic.lcs(x, y).unwrap();
    let b0 = linear.lcs(x, y).unwrap();
    for _ in 0..4 {
        assert_eq!(classic.lcs(x, y).unwrap(), a0);
        assert_eq!(linear.lcs(x, y).unwrap(), b0);
    }
}

#[test]
fn no_leakage_after_a_different_run() {
    let mut linear = HirschbergEngine::new(2).unwrap();
    let before = linear.lcs(b"ABAB", b"BABA").unwrap();
    linear.lcs(b"GATTACAGATTACA", b"TTTTTTT").unwrap();
    linear.lcs(b"ZZZ", b"").unwrap();
    assert_eq!(linear.lcs(b"ABAB", b"BABA").unwrap(), before);
}

#[test]
fn oversized_classic_table_is_an_error() {
    assert!(matches!(
        ClassicEngine::with_capacity(usize::MAX, 0),
        Err(LcsError::Allocation { .. })
    ));
    assert!(matches!(
        ClassicEngine::with_capacity(1 << 40, 1 << 30),
        Err(LcsError::Allocation { .. })
    ));

    let mut engine = ClassicEngine::with_capacity(8, 8).unwrap();
    assert!(matches!(
        engine.reserve(1 << 40, 1 << 30),
        Err(LcsError::Allocation { .. })
    ));
    assert_eq!(engine.lcs_len(b"ABCBDAB", b"BDCABA").unwrap(), 4);
}

#[test]
fn oversized_hirschberg_scratch_is_an_error() {
    assert!(matches!(
        HirschbergEngine::with_capacity(0, usize::MAX, 4),
        Err(LcsError::Allocation { .. })
    ));
    assert!(matches!(
        HirschbergEngine::new(5_000_000_000),
        Err(LcsError::Allocation { what: "base-case grid", .. })
    ));
    assert!(matches!(
        HirschbergBuilder::new().with_base(usize::MAX).build(),
        Err(LcsError::Allocation { .. })
    ));
}

#[test]
fn failed_growth_leaves_engine_usable() {
    let mut engine = HirschbergEngine::with_capacity(8, 8, 2).unwrap();
    let before = engine.lcs(b"ABCBDAB", b"BDCABA").unwrap();

    assert!(matches!(
        engine.reserve(usize::MAX / 2, usize::MAX / 2),
        Err(LcsError::Allocation { .. })
    ));

    let after = engine.lcs(b"ABCBDAB", b"BDCABA").unwrap();
    assert_eq!(after, before);
    let x = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let y = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    assert_eq!(
        engine.lcs_len(x, y).unwrap(),
        ClassicEngine::new().lcs_len(x, y).unwrap()
    );
}
