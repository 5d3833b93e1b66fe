//! Forward scan: the linear-space LCS score profile of one sub-problem.
//!
//! For sub-sequences `a` (length `m`) and `b` (length `n`) the scan produces
//! `L[0..=n]` where `L[j] = LCS(a, b[..j])`. Only the previous and current DP
//! rows are live at any time.

/// Two rotating DP rows of width `n + 1`.
///
/// Invariant at the start of every scan: `prev[..=n]` and `curr[..=n]` are
/// zero, so nothing from an earlier scan can leak into column 0.
#[derive(Debug, Default)]
pub struct RowPair {
    prev: Vec<u32>,
    curr: Vec<u32>,
}

impl RowPair {
    /// Rows pre-sized to `width` cells each.
    pub fn with_width(width: usize) -> Self {
        Self {
            prev: vec![0; width],
            curr: vec![0; width],
        }
    }

    pub(crate) fn from_buffers(prev: Vec<u32>, curr: Vec<u32>) -> Self {
        debug_assert_eq!(prev.len(), curr.len());
        Self { prev, curr }
    }

    /// Cells available in each row.
    pub fn width(&self) -> usize {
        self.curr.len()
    }

    /// Zero the first `width` cells of both rows, growing them if needed.
    pub fn reset(&mut self, width: usize) {
        if self.curr.len() < width {
            self.prev.resize(width, 0);
            self.curr.resize(width, 0);
        }
        self.prev[..width].fill(0);
        self.curr[..width].fill(0);
    }

    /// The current row becomes the previous one.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    /// Current row, as left by the last scan.
    pub fn current(&self) -> &[u32] {
        &self.curr
    }

    /// Compute the score profile of `a` against every prefix of `b` into
    /// `profile[..=b.len()]`.
    ///
    /// # Panics
    /// Panics if `profile` is shorter than `b.len() + 1`.
    pub fn scan(&mut self, a: &[u8], b: &[u8], profile: &mut [u32]) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("forward_scan", m = a.len(), n = b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n = b.len();
        self.reset(n + 1);

        for &ca in a {
            self.swap();
            let (prev, curr) = (&self.prev, &mut self.curr);
            curr[0] = 0;
            for j in 1..=n {
                curr[j] = if ca == b[j - 1] {
                    prev[j - 1] + 1
                } else {
                    curr[j - 1].max(prev[j])
                };
            }
        }

        profile[..=n].copy_from_slice(&self.curr[..=n]);
    }
}

#[cfg(test)]
mod tests {
    use super::RowPair;

    fn profile(a: &[u8], b: &[u8]) -> Vec<u32> {
        let mut rows = RowPair::default();
        let mut out = vec![0; b.len() + 1];
        rows.scan(a, b, &mut out);
        out
    }

    #[test]
    fn basic_profiles() {
        assert_eq!(profile(b"", b""), vec![0]);
        assert_eq!(profile(b"A", b""), vec![0]);
        assert_eq!(profile(b"", b"A"), vec![0, 0]);
        assert_eq!(profile(b"A", b"A"), vec![0, 1]);
        assert_eq!(profile(b"A", b"B"), vec![0, 0]);
        assert_eq!(profile(b"ABCB", b"BDCABA"), vec![0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn stale_rows_do_not_leak_into_next_scan() {
        let mut rows = RowPair::with_width(8);
        let mut out = vec![0; 8];
        rows.scan(b"AAAAAAA", b"AAAAAAA", &mut out);
        assert_eq!(out[7], 7);

        let mut small = vec![0; 3];
        rows.scan(b"XY", b"ZW", &mut small);
        assert_eq!(small, vec![0, 0, 0]);
        assert!(rows.current()[..3].iter().all(|&v| v == 0));
    }

    #[test]
    fn rows_grow_on_demand() {
        let mut rows = RowPair::with_width(2);
        let mut out = vec![0; 5];
        rows.scan(b"ABCD", b"ABCD", &mut out);
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
        assert!(rows.width() >= 5);
    }
}
