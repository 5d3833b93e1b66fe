//! Recursive splitter: Hirschberg's divide step.
//!
//! Sub-problems are described by [`Span`]s into the immutable X/Y sequences
//! and their reversed copies, so recursion never copies symbols.
//!
//! Cases, in order:
//! 1. `n == 0` (or `m == 0`): nothing to emit.
//! 2. `m <= base && n <= base`: bounded DP in the [`BaseGrid`].
//! 3. `m == 1`: emit X's symbol if it occurs anywhere in Y.
//! 4. Otherwise split X at `m / 2`, pick the split point `k` in Y from the
//!    forward and backward profiles, and recurse left then right.

use super::grid::BaseGrid;
use super::scan::RowPair;

/// Half-open sub-range `[start, start + len)` of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn whole(seq: &[u8]) -> Self {
        Self::new(0, seq.len())
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The span's symbols in `seq`.
    #[inline]
    pub fn of<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        &seq[self.start..self.end()]
    }

    /// The span's symbols, back to front, read from `rev` (the reverse of the
    /// sequence the span indexes).
    #[inline]
    pub fn reversed_of<'a>(&self, rev: &'a [u8]) -> &'a [u8] {
        let total = rev.len();
        &rev[total - self.end()..total - self.start]
    }

    /// Split into the first `at` symbols and the rest.
    #[inline]
    pub fn split_at(&self, at: usize) -> (Span, Span) {
        debug_assert!(at <= self.len);
        (
            Span::new(self.start, at),
            Span::new(self.start + at, self.len - at),
        )
    }
}

/// Counters describing the shape of one recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    pub splits: usize,
    pub base_cases: usize,
    pub single_rows: usize,
    pub max_depth: usize,
}

/// Split point `k` in `[0, n]` maximizing `fwd[k] + bwd[n - k]`.
///
/// `fwd` and `bwd` must both have length `n + 1`. The smallest maximizing
/// `k` wins: the candidate is only replaced on a strictly greater total.
pub fn choose_split(fwd: &[u32], bwd: &[u32]) -> usize {
    debug_assert_eq!(fwd.len(), bwd.len());
    let n = fwd.len() - 1;
    let mut best_k = 0;
    let mut best = fwd[0] + bwd[n];
    for k in 1..=n {
        let total = fwd[k] + bwd[n - k];
        if total > best {
            best = total;
            best_k = k;
        }
    }
    best_k
}

/// Borrowed view of an engine's state for one top-level computation.
pub(crate) struct Splitter<'a> {
    pub x: &'a [u8],
    pub y: &'a [u8],
    pub xr: &'a [u8],
    pub yr: &'a [u8],
    pub rows: &'a mut RowPair,
    pub fwd: &'a mut [u32],
    pub bwd: &'a mut [u32],
    pub grid: &'a mut BaseGrid,
    pub out: &'a mut Vec<u8>,
    pub stats: &'a mut SplitStats,
}

impl Splitter<'_> {
    pub fn run(&mut self) {
        let xs = Span::whole(self.x);
        let ys = Span::whole(self.y);
        self.solve(xs, ys, 0);
    }

    fn solve(&mut self, xs: Span, ys: Span, depth: usize) {
        let (m, n) = (xs.len, ys.len);
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if n == 0 || m == 0 {
            return;
        }

        let base = self.grid.base();
        if m <= base && n <= base {
            self.stats.base_cases += 1;
            self.grid.emit(xs.of(self.x), ys.of(self.y), self.out);
            return;
        }

        if m == 1 {
            self.stats.single_rows += 1;
            let symbol = self.x[xs.start];
            if ys.of(self.y).contains(&symbol) {
                self.out.push(symbol);
            }
            return;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("split", m, n, depth);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.stats.splits += 1;
        let (left, right) = xs.split_at(m / 2);

        self.rows.scan(left.of(self.x), ys.of(self.y), self.fwd);
        self.rows
            .scan(right.reversed_of(self.xr), ys.reversed_of(self.yr), self.bwd);
        let k = choose_split(&self.fwd[..=n], &self.bwd[..=n]);

        let (y_left, y_right) = ys.split_at(k);
        self.solve(left, y_left, depth + 1);
        self.solve(right, y_right, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_views() {
        let seq = b"ABCDEF";
        let rev: Vec<u8> = seq.iter().rev().copied().collect();
        let s = Span::new(1, 3);
        assert_eq!(s.of(seq), b"BCD");
        assert_eq!(s.reversed_of(&rev), b"DCB");
        assert_eq!(Span::whole(seq).reversed_of(&rev), b"FEDCBA");
        assert_eq!(Span::new(6, 0).reversed_of(&rev), b"");
    }

    #[test]
    fn span_split() {
        let (l, r) = Span::new(2, 5).split_at(2);
        assert_eq!(l, Span::new(2, 2));
        assert_eq!(r, Span::new(4, 3));
        assert_eq!(r.end(), 7);
    }

    #[test]
    fn split_prefers_smallest_k_on_ties() {
        // Totals: k=0 -> 0+2, k=1 -> 1+1, k=2 -> 2+0; all tie at 2.
        assert_eq!(choose_split(&[0, 1, 2], &[0, 1, 2]), 0);
        // Totals: 1, 3, 3, 2.
        assert_eq!(choose_split(&[0, 1, 2, 2], &[0, 1, 2, 1]), 1);
    }

    #[test]
    fn split_all_zero_profiles_pick_zero() {
        assert_eq!(choose_split(&[0, 0, 0, 0], &[0, 0, 0, 0]), 0);
    }

    #[test]
    fn split_strict_maximum() {
        assert_eq!(choose_split(&[0, 0, 0, 3], &[0, 0, 0, 0]), 3);
        assert_eq!(choose_split(&[0], &[0]), 0);
    }
}
