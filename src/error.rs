//! Error taxonomy shared by the sequence store, both engines and the harness.
//!
//! Algorithmic invariant violations are not represented here: they are
//! guarded with `debug_assert!` and exercised by tests.

use std::fmt;
use std::io;

/// Every way a benchmark session can fail before or during a run.
#[derive(Debug)]
pub enum LcsError {
    /// Missing or contradictory configuration, detected before any engine call.
    Config(String),
    /// The classic engine requires `|X| >= |Y|`.
    ShorterFirst { m: usize, n: usize },
    /// A scratch buffer could not be reserved.
    Allocation { what: &'static str, bytes: usize },
    /// Malformed session data. `pair` is 1-based; `0` means the session header.
    Parse { pair: usize, message: String },
    /// Underlying reader or file failure.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, LcsError>;

impl LcsError {
    pub(crate) fn parse(pair: usize, message: impl Into<String>) -> Self {
        LcsError::Parse {
            pair,
            message: message.into(),
        }
    }
}

impl fmt::Display for LcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LcsError::Config(msg) => write!(f, "configuration error: {msg}"),
            LcsError::ShorterFirst { m, n } => {
                write!(f, "m < n! (|X| = {m}, |Y| = {n}); X must be the longer sequence")
            }
            LcsError::Allocation { what, bytes } => {
                write!(f, "memory allocation failed for {what} ({bytes} bytes)")
            }
            LcsError::Parse { pair: 0, message } => {
                write!(f, "failed to read session header: {message}")
            }
            LcsError::Parse { pair, message } => {
                write!(f, "failed to read sequence pair {pair}: {message}")
            }
            LcsError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for LcsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LcsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LcsError {
    fn from(err: io::Error) -> Self {
        LcsError::Io(err)
    }
}

/// Reserve exactly `len` elements in a fresh vector, reporting failure as
/// [`LcsError::Allocation`] instead of aborting the process.
pub(crate) fn try_alloc<T: Clone>(what: &'static str, len: usize, fill: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| LcsError::Allocation {
            what,
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    buf.resize(len, fill);
    Ok(buf)
}

/// Cells of a `(rows + 1) × (cols + 1)` table, or [`LcsError::Allocation`]
/// when the count does not fit in `usize`.
pub(crate) fn table_cells(what: &'static str, rows: usize, cols: usize) -> Result<usize> {
    rows.checked_add(1)
        .zip(cols.checked_add(1))
        .and_then(|(r, c)| r.checked_mul(c))
        .ok_or(LcsError::Allocation {
            what,
            bytes: usize::MAX,
        })
}
