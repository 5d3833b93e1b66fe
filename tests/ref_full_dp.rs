use lcs_bench::{utils::is_subsequence, ClassicEngine, HirschbergEngine, LcsSolver};
use proptest::prelude::*;

fn full_lcs_len(s: &[u8], t: &[u8]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + if s[i - 1] == t[j - 1] { 1 } else { 0 };
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}

fn longer_first<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn classic_matches_full_dp(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
        let (x, y) = longer_first(a.as_bytes(), b.as_bytes());
        let lcs = ClassicEngine::new().lcs(x, y).unwrap();
        prop_assert_eq!(lcs.length, full_lcs_len(x, y));
        prop_assert!(is_subsequence(&lcs.symbols, x));
        prop_assert!(is_subsequence(&lcs.symbols, y));
    }

    #[test]
    fn hirschberg_matches_classic(
        a in "[ACGT]{0,40}",
        b in "[ACGT]{0,40}",
        base in 1usize..8,
    ) {
        let (x, y) = longer_first(a.as_bytes(), b.as_bytes());
        let expected = ClassicEngine::new().lcs_len(x, y).unwrap();
        let mut engine = HirschbergEngine::new(base).unwrap();
        let lcs = engine.lcs(x, y).unwrap();
        prop_assert_eq!(lcs.length, expected);
        prop_assert_eq!(lcs.symbols.len(), expected);
        prop_assert!(is_subsequence(&lcs.symbols, x));
        prop_assert!(is_subsequence(&lcs.symbols, y));
        prop_assert_eq!(engine.lcs_len(x, y).unwrap(), expected);
    }

    #[test]
    fn hirschberg_handles_shorter_x(a in "[AB]{0,12}", b in "[AB]{13,30}", base in 1usize..4) {
        let mut engine = HirschbergEngine::new(base).unwrap();
        let lcs = engine.lcs(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert_eq!(lcs.length, full_lcs_len(a.as_bytes(), b.as_bytes()));
    }

    #[test]
    fn recursion_depth_is_logarithmic(a in "[ACGT]{1,64}", b in "[ACGT]{0,64}") {
        let mut engine = HirschbergEngine::new(1).unwrap();
        engine.lcs_len(a.as_bytes(), b.as_bytes()).unwrap();
        let m = a.len();
        let bound = (usize::BITS - (m - 1).leading_zeros()) as usize; // ceil(log2 m)
        prop_assert!(engine.stats().max_depth <= bound + 1);
    }
}
