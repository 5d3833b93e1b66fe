//! Classic quadratic-space LCS engine.
//!
//! Builds the full `(n+1) × (m+1)` score table `len[j][i]` (row `j` over Y,
//! column `i` over X), reads the length off `len[n][m]` and optionally
//! backtracks one subsequence. This is the correctness oracle for the
//! linear-space [`HirschbergEngine`](crate::hirschberg::HirschbergEngine).

use crate::error::{table_cells, try_alloc, LcsError, Result};
use crate::traits::{Lcs, LcsSolver};

/// Dense score table, row-major over Y.
///
/// Invariant after [`fill`](Self::fill): row 0 and column 0 are zero and every
/// other cell obeys the LCS recurrence for `X[..i]` vs `Y[..j]`.
#[derive(Debug, Default)]
pub struct ScoreTable {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl ScoreTable {
    /// Allocate a table for `|X| = m`, `|Y| = n`.
    pub fn new(m: usize, n: usize) -> Result<Self> {
        let mut table = Self::default();
        table.reset(m, n)?;
        Ok(table)
    }

    /// Resize for a new run, keeping the allocation when it is large enough.
    ///
    /// An unrepresentable size leaves the table untouched; a failed
    /// allocation releases the previous contents and leaves it empty.
    pub fn reset(&mut self, m: usize, n: usize) -> Result<()> {
        let len = table_cells("score table", n, m)?;
        if self.cells.capacity() < len {
            self.cells = Vec::new();
            self.rows = 0;
            self.cols = 0;
            self.cells = try_alloc("score table", len, 0u32)?;
        } else {
            self.cells.clear();
            self.cells.resize(len, 0);
        }
        self.rows = n + 1;
        self.cols = m + 1;
        Ok(())
    }

    #[inline]
    pub fn get(&self, j: usize, i: usize) -> u32 {
        self.cells[j * self.cols + i]
    }

    #[inline]
    fn set(&mut self, j: usize, i: usize, v: u32) {
        self.cells[j * self.cols + i] = v;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Fill every cell for `x` (columns) against `y` (rows).
    pub fn fill(&mut self, x: &[u8], y: &[u8]) {
        debug_assert_eq!(self.cols, x.len() + 1);
        debug_assert_eq!(self.rows, y.len() + 1);

        for i in 0..self.cols {
            self.set(0, i, 0);
        }
        for j in 0..self.rows {
            self.set(j, 0, 0);
        }

        for (j, &cy) in y.iter().enumerate().map(|(j, c)| (j + 1, c)) {
            for (i, &cx) in x.iter().enumerate().map(|(i, c)| (i + 1, c)) {
                let v = if cx == cy {
                    self.get(j - 1, i - 1) + 1
                } else {
                    let up = self.get(j - 1, i);
                    let left = self.get(j, i - 1);
                    if up > left {
                        up
                    } else {
                        left
                    }
                };
                self.set(j, i, v);
            }
        }
    }

    /// Walk back from `(n, m)` and return one LCS, left to right.
    ///
    /// Match: diagonal. Otherwise move up only when the cell above is
    /// strictly greater, else move left.
    pub fn backtrack(&self, x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.get(y.len(), x.len()) as usize);
        let (mut i, mut j) = (x.len(), y.len());
        while i > 0 && j > 0 {
            if x[i - 1] == y[j - 1] {
                out.push(x[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.get(j - 1, i) > self.get(j, i - 1) {
                j -= 1;
            } else {
                i -= 1;
            }
        }
        out.reverse();
        out
    }
}

/// Full-table engine. Requires `|X| >= |Y|`.
#[derive(Debug, Default)]
pub struct ClassicEngine {
    table: ScoreTable,
}

impl ClassicEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the table for a session whose pairs fit in `m × n`.
    pub fn with_capacity(m: usize, n: usize) -> Result<Self> {
        if m < n {
            return Err(LcsError::ShorterFirst { m, n });
        }
        Ok(Self {
            table: ScoreTable::new(m, n)?,
        })
    }

    /// Size the table for pairs up to `m × n`. After a failure the next run
    /// sizes the table afresh.
    pub fn reserve(&mut self, m: usize, n: usize) -> Result<()> {
        if m < n {
            return Err(LcsError::ShorterFirst { m, n });
        }
        self.table.reset(m, n)
    }

    /// Score table of the most recent run.
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    fn prepare(&mut self, x: &[u8], y: &[u8]) -> Result<()> {
        if x.len() < y.len() {
            return Err(LcsError::ShorterFirst {
                m: x.len(),
                n: y.len(),
            });
        }
        self.table.reset(x.len(), y.len())?;
        self.table.fill(x, y);
        Ok(())
    }
}

impl LcsSolver for ClassicEngine {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn lcs_len(&mut self, x: &[u8], y: &[u8]) -> Result<usize> {
        self.prepare(x, y)?;
        Ok(self.table.get(y.len(), x.len()) as usize)
    }

    fn lcs(&mut self, x: &[u8], y: &[u8]) -> Result<Lcs> {
        self.prepare(x, y)?;
        let symbols = self.table.backtrack(x, y);
        Ok(Lcs {
            length: symbols.len(),
            symbols,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_borders_are_zero() {
        let mut t = ScoreTable::new(3, 2).unwrap();
        t.fill(b"ABC", b"BC");
        for i in 0..t.cols() {
            assert_eq!(t.get(0, i), 0);
        }
        for j in 0..t.rows() {
            assert_eq!(t.get(j, 0), 0);
        }
        assert_eq!(t.get(2, 3), 2);
    }

    #[test]
    fn textbook_pair() {
        let mut engine = ClassicEngine::new();
        let lcs = engine.lcs(b"ABCBDAB", b"BDCABA").unwrap();
        assert_eq!(lcs.length, 4);
        assert_eq!(engine.lcs_len(b"ABCBDAB", b"BDCABA").unwrap(), 4);
    }

    #[test]
    fn left_wins_ties_in_backtracking() {
        // X = "AB", Y = "BA": both "A" and "B" are optimal. From (2,2) with a
        // mismatch, above (len[1][2] = 1) equals left (len[2][1] = 1), so we
        // move left and end up matching the 'A'.
        let mut engine = ClassicEngine::new();
        let lcs = engine.lcs(b"AB", b"BA").unwrap();
        assert_eq!(lcs.symbols, b"A");
    }

    #[test]
    fn shorter_x_is_rejected() {
        let mut engine = ClassicEngine::new();
        let err = engine.lcs_len(b"AB", b"ABC").unwrap_err();
        assert!(matches!(err, LcsError::ShorterFirst { m: 2, n: 3 }));
        assert!(ClassicEngine::with_capacity(2, 3).is_err());
    }

    #[test]
    fn empty_y_yields_zero() {
        let mut engine = ClassicEngine::new();
        assert_eq!(engine.lcs(b"ABC", b"").unwrap(), Lcs::empty());
    }

    #[test]
    fn table_is_reused_across_shrinking_runs() {
        let mut engine = ClassicEngine::with_capacity(8, 8).unwrap();
        assert_eq!(engine.lcs_len(b"GATTACA", b"GATTACA").unwrap(), 7);
        assert_eq!(engine.lcs_len(b"ABC", b"DEF").unwrap(), 0);
        assert_eq!(engine.table().rows(), 4);
        assert_eq!(engine.table().cols(), 4);
    }
}
