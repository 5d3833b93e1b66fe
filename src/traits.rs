//! Core trait shared by the LCS engines.
//!
//! Both the quadratic [`ClassicEngine`](crate::classic::ClassicEngine) and the
//! linear-space [`HirschbergEngine`](crate::hirschberg::HirschbergEngine)
//! implement [`LcsSolver`], so the run harness can drive either one as an
//! interchangeable workload.
//!
//! An engine is a *session context*: it owns its scratch buffers, resets them
//! at the start of every call and may be invoked any number of times.

use crate::error::Result;

/// Result of one LCS computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcs {
    /// Length of the longest common subsequence.
    pub length: usize,
    /// The reconstructed subsequence, left to right. Always `length` symbols.
    pub symbols: Vec<u8>,
}

impl Lcs {
    pub fn empty() -> Self {
        Self {
            length: 0,
            symbols: Vec::new(),
        }
    }

    /// Lossy text view, useful for byte-alphabet inputs.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.symbols).into_owned()
    }
}

/// An LCS engine driven by the run harness.
///
/// Semantics:
/// - `x` is X (length `m`), `y` is Y (length `n`).
/// - Lengths reported by [`lcs_len`](Self::lcs_len) and [`lcs`](Self::lcs)
///   must agree for identical inputs, and must agree across engines.
/// - Mutable scratch is overwritten before it is read, so repeated calls on
///   the same input return identical results.
pub trait LcsSolver {
    /// Short engine name used in reports ("classic", "hirschberg").
    fn name(&self) -> &'static str;

    /// Compute only the LCS length.
    fn lcs_len(&mut self, x: &[u8], y: &[u8]) -> Result<usize>;

    /// Compute the LCS length together with one reconstructed subsequence.
    fn lcs(&mut self, x: &[u8], y: &[u8]) -> Result<Lcs>;
}
