//! Sequence Store: the alphabet and the `(X, Y)` pairs of one benchmark session.
//!
//! Two input formats are supported.
//!
//! A *session* read from one stream:
//! ```text
//! alphabet: ACGT
//!
//! sequence pair 1:
//!
//! X = ACCGGT
//! Y = ACGT
//! ```
//! repeated for every pair, optionally preceded by an `m n` capacity header.
//!
//! *Separate files*: one file per side, each starting with an integer length
//! header followed by whitespace-separated sequences.
//!
//! Pairs are positional, so any malformed pair aborts the whole session.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{LcsError, Result};

/// Maximum number of distinct symbols (one per byte value).
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Declared symbol set of a session. Descriptive only: engines compare raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Distinct bytes of `declared`, in first-seen order.
    pub fn from_declared(declared: &[u8]) -> Self {
        let mut seen = [false; MAX_ALPHABET_SIZE];
        let symbols = declared
            .iter()
            .copied()
            .filter(|&b| !std::mem::replace(&mut seen[b as usize], true))
            .collect();
        Self { symbols }
    }

    /// Alphabet observed across every sequence of `pairs`.
    pub fn observed(pairs: &[SequencePair]) -> Self {
        let mut seen = [false; MAX_ALPHABET_SIZE];
        for pair in pairs {
            for &b in pair.x.iter().chain(pair.y.iter()) {
                seen[b as usize] = true;
            }
        }
        let symbols = (0..=u8::MAX).filter(|&b| seen[b as usize]).collect();
        Self { symbols }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Upper bounds on |X| (`m`) and |Y| (`n`) for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub m: usize,
    pub n: usize,
}

impl Capacity {
    pub fn square(n: usize) -> Self {
        Self { m: n, n }
    }

    /// Classic-engine precondition on the declared lengths.
    pub fn ensure_longer_first(&self) -> Result<()> {
        if self.m < self.n {
            return Err(LcsError::ShorterFirst {
                m: self.m,
                n: self.n,
            });
        }
        Ok(())
    }
}

/// One `(X, Y)` input pair. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

impl SequencePair {
    pub fn new(x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn m(&self) -> usize {
        self.x.len()
    }

    pub fn n(&self) -> usize {
        self.y.len()
    }
}

/// All pairs of one session plus their alphabet and declared capacity.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    alphabet: Alphabet,
    capacity: Capacity,
    pairs: Vec<SequencePair>,
}

impl SequenceStore {
    /// Build a store from in-memory pairs; capacity is the observed maximum.
    pub fn from_pairs(pairs: Vec<SequencePair>) -> Self {
        let capacity = Capacity {
            m: pairs.iter().map(SequencePair::m).max().unwrap_or(0),
            n: pairs.iter().map(SequencePair::n).max().unwrap_or(0),
        };
        Self {
            alphabet: Alphabet::observed(&pairs),
            capacity,
            pairs,
        }
    }

    /// Read `runs` pairs in session format.
    ///
    /// Lines are read as raw bytes: any byte other than ASCII whitespace is
    /// a valid symbol.
    pub fn read_session<R: BufRead>(reader: R, runs: usize, capacity: Capacity) -> Result<Self> {
        let mut lines = SessionLines::new(reader);

        let header = lines
            .next_content()?
            .ok_or_else(|| LcsError::parse(0, "missing alphabet line"))?;
        let declared = header.strip_prefix(b"alphabet:").ok_or_else(|| {
            LcsError::parse(0, format!("expected 'alphabet:', found '{}'", lossy(&header)))
        })?;
        let alphabet = Alphabet::from_declared(trim_ascii(declared));

        let mut pairs = Vec::with_capacity(runs);
        for idx in 1..=runs {
            let label = lines
                .next_content()?
                .ok_or_else(|| LcsError::parse(idx, "premature end of input"))?;
            let number = parse_pair_label(&label).ok_or_else(|| {
                LcsError::parse(
                    idx,
                    format!("expected 'sequence pair {idx}:', found '{}'", lossy(&label)),
                )
            })?;
            if number != idx {
                log::warn!("sequence pair labelled {number} read at position {idx}");
            }

            let x = read_assignment(&mut lines, idx, b'X', capacity.m)?;
            let y = read_assignment(&mut lines, idx, b'Y', capacity.n)?;
            pairs.push(SequencePair { x, y });
        }

        log::debug!(
            "read {} sequence pair(s), alphabet of {} symbol(s)",
            pairs.len(),
            alphabet.len()
        );
        Ok(Self {
            alphabet,
            capacity,
            pairs,
        })
    }

    /// Read `runs` X sequences and `runs` Y sequences from two files.
    pub fn read_separate(x_path: &Path, y_path: &Path, runs: usize) -> Result<Self> {
        let (m, xs) = read_sequence_file(x_path, runs)?;
        let (n, ys) = read_sequence_file(y_path, runs)?;

        let mut pairs = Vec::with_capacity(runs);
        for (idx, (x, y)) in xs.into_iter().zip(ys).enumerate() {
            if x.len() > m {
                return Err(LcsError::parse(
                    idx + 1,
                    format!("|X| = {} exceeds declared length {m}", x.len()),
                ));
            }
            if y.len() > n {
                return Err(LcsError::parse(
                    idx + 1,
                    format!("|Y| = {} exceeds declared length {n}", y.len()),
                ));
            }
            log::debug!("pair {}: |X| = {}, |Y| = {}", idx + 1, x.len(), y.len());
            pairs.push(SequencePair { x, y });
        }

        Ok(Self {
            alphabet: Alphabet::observed(&pairs),
            capacity: Capacity { m, n },
            pairs,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn pairs(&self) -> &[SequencePair] {
        &self.pairs
    }

    pub fn pair(&self, idx: usize) -> Option<&SequencePair> {
        self.pairs.get(idx)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Read the `m n` capacity header that precedes a session on stdin.
pub fn read_capacity_header<R: BufRead>(reader: &mut R) -> Result<Capacity> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(LcsError::parse(0, "cannot read sequence lengths"));
        }
        if !trim_ascii(&line).is_empty() {
            break;
        }
    }
    let mut fields = tokens(&line).map(parse_usize);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Some(m)), Some(Some(n)), None) => Ok(Capacity { m, n }),
        _ => Err(LcsError::parse(
            0,
            format!(
                "cannot read sequence lengths from '{}'",
                lossy(trim_ascii(&line))
            ),
        )),
    }
}

/// Read only the leading length headers of the two separate files.
pub fn read_file_capacity(x_path: &Path, y_path: &Path) -> Result<Capacity> {
    Ok(Capacity {
        m: read_length_header(x_path)?,
        n: read_length_header(y_path)?,
    })
}

fn read_length_header(path: &Path) -> Result<usize> {
    let data = fs::read(path)?;
    parse_length_header(&data, path)
}

fn parse_length_header(data: &[u8], path: &Path) -> Result<usize> {
    tokens(data).next().and_then(parse_usize).ok_or_else(|| {
        LcsError::parse(
            0,
            format!("cannot read sequence length from {}", path.display()),
        )
    })
}

fn read_sequence_file(path: &Path, runs: usize) -> Result<(usize, Vec<Vec<u8>>)> {
    let data = fs::read(path)?;
    let declared = parse_length_header(&data, path)?;
    let seqs: Vec<Vec<u8>> = tokens(&data).skip(1).take(runs).map(<[u8]>::to_vec).collect();
    if seqs.len() < runs {
        return Err(LcsError::parse(
            seqs.len() + 1,
            format!("premature end of {}", path.display()),
        ));
    }
    Ok((declared, seqs))
}

/// Non-empty runs of bytes separated by ASCII whitespace.
fn tokens(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(u8::is_ascii_whitespace)
        .filter(|tok| !tok.is_empty())
}

fn trim_ascii(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &data[start..end]
}

fn parse_usize(tok: &[u8]) -> Option<usize> {
    std::str::from_utf8(tok).ok()?.parse().ok()
}

fn lossy(data: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(data)
}

/// Line source that skips blank separator lines.
struct SessionLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> SessionLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    fn next_content(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            let line = trim_ascii(&self.buf);
            if !line.is_empty() {
                return Ok(Some(line.to_vec()));
            }
        }
    }
}

fn parse_pair_label(line: &[u8]) -> Option<usize> {
    let rest = trim_ascii(line.strip_prefix(b"sequence")?);
    let rest = trim_ascii(rest.strip_prefix(b"pair")?);
    let number = rest.strip_suffix(b":")?;
    parse_usize(trim_ascii(number))
}

fn read_assignment<R: BufRead>(
    lines: &mut SessionLines<R>,
    pair: usize,
    name: u8,
    limit: usize,
) -> Result<Vec<u8>> {
    let side = char::from(name);
    let line = lines
        .next_content()?
        .ok_or_else(|| LcsError::parse(pair, format!("premature end of input before {side}")))?;
    let value = line
        .strip_prefix(&[name])
        .map(trim_ascii)
        .and_then(|rest| rest.strip_prefix(b"="))
        .map(trim_ascii)
        .ok_or_else(|| {
            LcsError::parse(
                pair,
                format!("expected '{side} = ...', found '{}'", lossy(&line)),
            )
        })?;
    if tokens(value).count() > 1 {
        return Err(LcsError::parse(
            pair,
            format!("{side} contains whitespace inside the sequence"),
        ));
    }
    if value.len() > limit {
        return Err(LcsError::parse(
            pair,
            format!("|{side}| = {} exceeds declared length {limit}", value.len()),
        ));
    }
    Ok(value.to_vec())
}
