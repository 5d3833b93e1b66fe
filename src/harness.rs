//! Run harness: drives one engine over every pair of a session, one run at
//! a time, timing each call and sampling resources around it.
//!
//! Runs are strictly sequential. Run `k + 1` starts only after run `k`'s
//! engine call has returned; the engine resets its own scratch on entry.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::sequence::SequenceStore;
use crate::telemetry::{render_final, ResourceDelta, ResourceProbe, SessionTimes};
use crate::traits::LcsSolver;

/// Outcome of a single run.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// 1-based run number; run `k` uses pair `k`.
    pub run: usize,
    pub length: usize,
    /// Reconstructed subsequence, when requested.
    pub symbols: Option<Vec<u8>>,
    pub wall: Duration,
    pub resources: ResourceDelta,
}

/// All runs of one session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub engine: &'static str,
    pub records: Vec<RunRecord>,
}

impl SessionReport {
    /// Length reported by the last run (what the final summary prints).
    pub fn last_length(&self) -> Option<usize> {
        self.records.last().map(|r| r.length)
    }

    /// Wall and CPU time summed over every run.
    pub fn totals(&self) -> SessionTimes {
        self.records
            .iter()
            .fold(SessionTimes::default(), |acc, r| SessionTimes {
                wall: acc.wall + r.wall,
                user: acc.user + r.resources.cpu.user,
                system: acc.system + r.resources.cpu.system,
            })
    }

    /// [`totals`](Self::totals) divided by the number of runs.
    pub fn averages(&self) -> SessionTimes {
        let runs = match u32::try_from(self.records.len()) {
            Ok(0) => return SessionTimes::default(),
            Ok(runs) => runs,
            Err(_) => u32::MAX,
        };
        let total = self.totals();
        SessionTimes {
            wall: total.wall / runs,
            user: total.user / runs,
            system: total.system / runs,
        }
    }

    pub fn render_final(&self) -> String {
        render_final(
            self.last_length().unwrap_or(0),
            &self.totals(),
            &self.averages(),
        )
    }
}

/// Sequential driver for one [`LcsSolver`].
pub struct RunHarness<'s, S: LcsSolver> {
    solver: &'s mut S,
    probe: Option<ResourceProbe>,
    keep_symbols: bool,
}

impl<'s, S: LcsSolver> RunHarness<'s, S> {
    pub fn new(solver: &'s mut S) -> Self {
        Self {
            solver,
            probe: None,
            keep_symbols: false,
        }
    }

    /// Sample process resources before and after every run.
    pub fn with_probe(mut self, probe: ResourceProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Reconstruct the subsequence instead of computing only its length.
    pub fn keep_symbols(mut self, keep: bool) -> Self {
        self.keep_symbols = keep;
        self
    }

    /// Run the engine once per pair. The first failing run aborts the session.
    pub fn run_session<F>(&mut self, store: &SequenceStore, mut on_run: F) -> Result<SessionReport>
    where
        F: FnMut(&RunRecord),
    {
        let engine = self.solver.name();
        let mut records = Vec::with_capacity(store.len());

        for (idx, pair) in store.pairs().iter().enumerate() {
            let run = idx + 1;
            log::debug!(
                "{engine} run {run}: |X| = {}, |Y| = {}",
                pair.m(),
                pair.n()
            );

            let before = self.probe.as_mut().map(ResourceProbe::snapshot);
            let start = Instant::now();
            let (length, symbols) = if self.keep_symbols {
                let lcs = self.solver.lcs(&pair.x, &pair.y)?;
                (lcs.length, Some(lcs.symbols))
            } else {
                (self.solver.lcs_len(&pair.x, &pair.y)?, None)
            };
            let wall = start.elapsed();
            let resources = match (before, self.probe.as_mut()) {
                (Some(before), Some(probe)) => probe.snapshot().delta_since(&before),
                _ => ResourceDelta::default(),
            };

            log::debug!("{engine} run {run}: length {length} in {wall:?}");
            let record = RunRecord {
                run,
                length,
                symbols,
                wall,
                resources,
            };
            on_run(&record);
            records.push(record);
        }

        Ok(SessionReport { engine, records })
    }
}
