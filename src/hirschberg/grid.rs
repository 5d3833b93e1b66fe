//! Bounded base-case grid used by the recursive splitter.
//!
//! A single `(base+1) × (base+1)` buffer is allocated once per engine and
//! reused by every base-case invocation. Cell `(row, col)` lives at
//! `row * (base + 1) + col`; rows index Y, columns index X.

use crate::error::{table_cells, try_alloc, Result};

/// Pooled scratch table for sub-problems of at most `base × base` symbols.
#[derive(Debug)]
pub struct BaseGrid {
    cells: Vec<u32>,
    base: usize,
}

impl BaseGrid {
    /// Allocate the grid for threshold `base` (must be positive).
    pub fn new(base: usize) -> Result<Self> {
        debug_assert!(base > 0, "base-case threshold must be positive");
        let cells = table_cells("base-case grid", base, base)?;
        Ok(Self {
            cells: try_alloc("base-case grid", cells, 0u32)?,
            base,
        })
    }

    /// Largest sub-problem side the grid can hold.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Total cells; fixed for the lifetime of the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row <= self.base && col <= self.base);
        row * (self.base + 1) + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, v: u32) {
        let idx = self.index(row, col);
        self.cells[idx] = v;
    }

    /// Fill the `(|y|+1) × (|x|+1)` corner of the grid for `x` against `y`.
    ///
    /// Only the corner is written; cells outside it keep whatever an earlier
    /// invocation left there and are never read.
    pub fn fill(&mut self, x: &[u8], y: &[u8]) {
        let (m, n) = (x.len(), y.len());
        debug_assert!(m <= self.base && n <= self.base);

        for i in 0..=m {
            self.set(0, i, 0);
        }
        for j in 0..=n {
            self.set(j, 0, 0);
        }
        for j in 1..=n {
            for i in 1..=m {
                let v = if x[i - 1] == y[j - 1] {
                    self.get(j - 1, i - 1) + 1
                } else {
                    self.get(j - 1, i).max(self.get(j, i - 1))
                };
                self.set(j, i, v);
            }
        }
    }

    /// Solve `x` against `y` and append the LCS to `out`, left to right.
    ///
    /// Symbols are discovered back to front, then the appended segment is
    /// reversed in place.
    pub fn emit(&mut self, x: &[u8], y: &[u8], out: &mut Vec<u8>) {
        self.fill(x, y);

        let start = out.len();
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
        out[start..].reverse();
    }
}
