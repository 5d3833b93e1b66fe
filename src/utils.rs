//! Assorted utilities and helpers.

/// Default base-case threshold for the Hirschberg engine.
pub const DEFAULT_BASE_N: usize = 32;

/// Largest `k` with `2^k <= n`; `0` for `n <= 1`.
#[inline]
pub fn floor_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - 1 - n.leading_zeros()
    }
}

/// True if `needle` occurs in `haystack` in order (not necessarily contiguous).
pub fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}

/// Render seconds as `"{h}h {m}m {s}s"`, rounding to the nearest second.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h}h {m}m {s}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_floor_behavior() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(32), 5);
        assert_eq!(floor_log2(33), 5);
        assert_eq!(floor_log2(1 << 20), 20);
    }

    #[test]
    fn subsequence_checks() {
        assert!(is_subsequence(b"", b""));
        assert!(is_subsequence(b"", b"ABC"));
        assert!(is_subsequence(b"BCBA", b"ABCBDAB"));
        assert!(is_subsequence(b"BCBA", b"BDCABA"));
        assert!(is_subsequence(b"BDAB", b"ABCBDAB"));
        assert!(!is_subsequence(b"AA", b"A"));
        assert!(!is_subsequence(b"CA", b"AC"));
    }

    #[test]
    fn hms_rounds_to_nearest_second() {
        assert_eq!(format_hms(0.0), "0h 0m 0s");
        assert_eq!(format_hms(0.49), "0h 0m 0s");
        assert_eq!(format_hms(0.5), "0h 0m 1s");
        assert_eq!(format_hms(61.2), "0h 1m 1s");
        assert_eq!(format_hms(3_725.0), "1h 2m 5s");
        assert_eq!(format_hms(-3.0), "0h 0m 0s");
    }
}
