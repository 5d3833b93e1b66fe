//! Hirschberg's linear-space LCS engine.
//!
//! The engine is a session context: it owns every piece of mutable scratch
//! (reversed copies of X and Y, the two rotating scan rows, both score
//! profiles, the pooled base-case grid and the output buffer). Each call
//! resets that scratch before reading it, so one engine can serve any number
//! of runs without state leaking between them.
//!
//! Auxiliary space is `O(m + n)` plus the fixed `(base+1)²` grid; time is
//! `O(mn)`.
//!
//! ```
//! use lcs_bench::{HirschbergEngine, LcsSolver};
//!
//! let mut engine = HirschbergEngine::new(2).unwrap();
//! let lcs = engine.lcs(b"ABAB", b"BABA").unwrap();
//! assert_eq!(lcs.length, 3);
//! ```

pub mod grid;
pub mod scan;
pub mod split;

use crate::error::{table_cells, try_alloc, LcsError, Result};
use crate::traits::{Lcs, LcsSolver};
use crate::utils::floor_log2;

use self::grid::BaseGrid;
use self::scan::RowPair;
use self::split::{SplitStats, Splitter};

/// Linear-space engine with a configurable base-case threshold.
#[derive(Debug)]
pub struct HirschbergEngine {
    grid: BaseGrid,
    rows: RowPair,
    fwd: Vec<u32>,
    bwd: Vec<u32>,
    xr: Vec<u8>,
    yr: Vec<u8>,
    out: Vec<u8>,
    stats: SplitStats,
    cap_m: usize,
    cap_n: usize,
}

/// Scratch for one engine, committed only once every buffer is reserved.
struct Scratch {
    rows: RowPair,
    fwd: Vec<u32>,
    bwd: Vec<u32>,
    xr: Vec<u8>,
    yr: Vec<u8>,
    out: Vec<u8>,
}

impl Scratch {
    fn reserve(m: usize, n: usize) -> Result<Self> {
        let width = table_cells("scan row", n, 0)?;
        let rows = RowPair::from_buffers(
            try_alloc("scan row", width, 0u32)?,
            try_alloc("scan row", width, 0u32)?,
        );
        let mut scratch = Self {
            rows,
            fwd: try_alloc("forward profile", width, 0u32)?,
            bwd: try_alloc("backward profile", width, 0u32)?,
            xr: try_alloc("reversed X", m, 0u8)?,
            yr: try_alloc("reversed Y", n, 0u8)?,
            out: try_alloc("output", m.min(n), 0u8)?,
        };
        scratch.out.clear();
        Ok(scratch)
    }
}

impl HirschbergEngine {
    /// Engine with base-case threshold `base`. Scratch grows on first use.
    pub fn new(base: usize) -> Result<Self> {
        Self::with_capacity(0, 0, base)
    }

    /// Engine pre-sized for pairs with `|X| <= m` and `|Y| <= n`.
    ///
    /// A zero `base` is a [`LcsError::Config`] error; oversized requests are
    /// [`LcsError::Allocation`] errors.
    pub fn with_capacity(m: usize, n: usize, base: usize) -> Result<Self> {
        if base == 0 {
            return Err(LcsError::Config(
                "base-case threshold must be positive".to_string(),
            ));
        }
        let grid = BaseGrid::new(base)?;
        let scratch = Scratch::reserve(m, n)?;
        log::debug!(
            "hirschberg scratch reserved: m = {m}, n = {n}, base = {base} ({} grid cells)",
            grid.len()
        );
        Ok(Self {
            grid,
            rows: scratch.rows,
            fwd: scratch.fwd,
            bwd: scratch.bwd,
            xr: scratch.xr,
            yr: scratch.yr,
            out: scratch.out,
            stats: SplitStats::default(),
            cap_m: m,
            cap_n: n,
        })
    }

    /// Base-case threshold.
    pub fn base(&self) -> usize {
        self.grid.base()
    }

    /// Recursion counters of the most recent run.
    pub fn stats(&self) -> SplitStats {
        self.stats
    }

    /// Grow scratch to hold pairs up to `m × n`. Existing buffers are only
    /// replaced once every new one has been reserved, so a failure leaves the
    /// engine as it was.
    pub fn reserve(&mut self, m: usize, n: usize) -> Result<()> {
        if m <= self.cap_m && n <= self.cap_n {
            return Ok(());
        }
        let (cap_m, cap_n) = (m.max(self.cap_m), n.max(self.cap_n));
        log::debug!("hirschberg scratch grows to m = {cap_m}, n = {cap_n}");
        let scratch = Scratch::reserve(cap_m, cap_n)?;
        self.cap_m = cap_m;
        self.cap_n = cap_n;
        self.rows = scratch.rows;
        self.fwd = scratch.fwd;
        self.bwd = scratch.bwd;
        self.xr = scratch.xr;
        self.yr = scratch.yr;
        self.out = scratch.out;
        Ok(())
    }

    /// Grow scratch for a pair larger than anything seen so far, then reset
    /// every per-run buffer.
    fn prepare(&mut self, x: &[u8], y: &[u8]) -> Result<()> {
        self.reserve(x.len(), y.len())?;

        self.xr.clear();
        self.xr.extend(x.iter().rev());
        self.yr.clear();
        self.yr.extend(y.iter().rev());
        self.out.clear();
        self.stats = SplitStats::default();
        Ok(())
    }

    fn compute(&mut self, x: &[u8], y: &[u8]) -> Result<()> {
        self.prepare(x, y)?;
        let mut splitter = Splitter {
            x,
            y,
            xr: &self.xr,
            yr: &self.yr,
            rows: &mut self.rows,
            fwd: &mut self.fwd,
            bwd: &mut self.bwd,
            grid: &mut self.grid,
            out: &mut self.out,
            stats: &mut self.stats,
        };
        splitter.run();

        debug_assert!(self.stats.max_depth <= floor_log2(x.len()) as usize + 2);
        log::trace!(
            "hirschberg: |X| = {}, |Y| = {}, lcs = {}, {:?}",
            x.len(),
            y.len(),
            self.out.len(),
            self.stats
        );
        Ok(())
    }
}

impl LcsSolver for HirschbergEngine {
    fn name(&self) -> &'static str {
        "hirschberg"
    }

    fn lcs_len(&mut self, x: &[u8], y: &[u8]) -> Result<usize> {
        self.compute(x, y)?;
        Ok(self.out.len())
    }

    fn lcs(&mut self, x: &[u8], y: &[u8]) -> Result<Lcs> {
        self.compute(x, y)?;
        Ok(Lcs {
            length: self.out.len(),
            symbols: self.out.clone(),
        })
    }
}
