//! Longest Common Subsequence engines as benchmark workloads.
//!
//! This crate provides two interchangeable LCS engines whose running time and
//! memory footprint are measured while the process competes for memory with
//! external load generators:
//!
//! - [`ClassicEngine`]: the textbook `Θ(mn)` time and space table, used as the
//!   correctness oracle.
//! - [`HirschbergEngine`]: Hirschberg's divide-and-conquer algorithm, `Θ(mn)`
//!   time with `Θ(m + n)` auxiliary space plus a fixed, pooled base-case grid.
//!
//! Both implement [`LcsSolver`] and return identical lengths for identical
//! input. The [`harness`] drives either one over a [`SequenceStore`] session
//! and samples process resources around each run.
//!
//! ## Quick start
//! ```
//! use lcs_bench::{ClassicEngine, HirschbergBuilder, LcsSolver};
//!
//! let x = b"ABCBDAB";
//! let y = b"BDCABA";
//!
//! let mut classic = ClassicEngine::new();
//! let mut linear = HirschbergBuilder::new().with_base(2).build().unwrap();
//!
//! let a = classic.lcs(x, y).unwrap();
//! let b = linear.lcs(x, y).unwrap();
//! assert_eq!(a.length, 4);
//! assert_eq!(a.length, b.length);
//! ```
//!
//! ## Tie-breaking
//! Several LCS strings may be optimal. Reconstruction is deterministic:
//! backtracking takes the diagonal on a match and otherwise moves "up" only
//! when strictly better, else "left"; the Hirschberg split point is the
//! smallest `k` achieving the maximal combined score.

pub mod builder;
pub mod classic;
pub mod config;
pub mod error;
pub mod harness;
pub mod hirschberg;
pub mod sequence;
pub mod telemetry;
pub mod traits;
pub mod utils;

pub use crate::builder::HirschbergBuilder;
pub use crate::classic::ClassicEngine;
pub use crate::error::{LcsError, Result};
pub use crate::hirschberg::HirschbergEngine;
pub use crate::sequence::{SequencePair, SequenceStore};
pub use crate::traits::{Lcs, LcsSolver};
