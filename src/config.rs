//! Session configuration: where the sequences come from and how many runs.
//!
//! The command-line `LENGTH` argument selects the input mode:
//! - `LENGTH > 0`: both capacities are `LENGTH`; the session is on stdin.
//! - `LENGTH == 0`: stdin starts with an `m n` capacity header.
//! - `LENGTH == -1`: X and Y come from two separate files.

use std::io::BufRead;
use std::path::PathBuf;

use crate::error::{LcsError, Result};
use crate::sequence::{read_capacity_header, read_file_capacity, Capacity, SequenceStore};

/// Where a session's sequences are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Session on stdin, both sides bounded by the given length.
    Fixed(usize),
    /// Session on stdin preceded by an `m n` header.
    StdinHeader,
    /// One file per side, each with a leading length header.
    SeparateFiles { x: PathBuf, y: PathBuf },
}

impl InputMode {
    /// Resolve the mode from the `LENGTH` argument and optional file paths.
    pub fn resolve(length: i64, x_file: Option<PathBuf>, y_file: Option<PathBuf>) -> Result<Self> {
        match length {
            -1 => match (x_file, y_file) {
                (Some(x), Some(y)) => Ok(InputMode::SeparateFiles { x, y }),
                _ => Err(LcsError::Config(
                    "length -1 requires both --x-file and --y-file".to_string(),
                )),
            },
            0 => Ok(InputMode::StdinHeader),
            n if n > 0 => Ok(InputMode::Fixed(n as usize)),
            n => Err(LcsError::Config(format!(
                "invalid sequence length {n}; expected a positive length, 0 or -1"
            ))),
        }
    }
}

/// Everything needed to load a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: InputMode,
    pub runs: usize,
}

impl SessionConfig {
    pub fn new(mode: InputMode, runs: usize) -> Result<Self> {
        if runs == 0 {
            return Err(LcsError::Config("number of runs must be at least 1".to_string()));
        }
        Ok(Self { mode, runs })
    }

    /// Declared capacities, reading the stdin header when the mode needs one.
    ///
    /// For [`InputMode::StdinHeader`] this consumes the header line from
    /// `stdin`, which must then be passed on to [`load`](Self::load).
    pub fn capacity<R: BufRead>(&self, stdin: &mut R) -> Result<Capacity> {
        match &self.mode {
            InputMode::Fixed(n) => Ok(Capacity::square(*n)),
            InputMode::StdinHeader => read_capacity_header(stdin),
            InputMode::SeparateFiles { x, y } => read_file_capacity(x, y),
        }
    }

    /// Read all pairs of the session.
    pub fn load<R: BufRead>(&self, stdin: R, capacity: Capacity) -> Result<SequenceStore> {
        match &self.mode {
            InputMode::Fixed(_) | InputMode::StdinHeader => {
                SequenceStore::read_session(stdin, self.runs, capacity)
            }
            InputMode::SeparateFiles { x, y } => SequenceStore::read_separate(x, y, self.runs),
        }
    }
}
