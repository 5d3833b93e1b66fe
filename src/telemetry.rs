//! Per-run resource reporting.
//!
//! A thin reader over the host's process accounting: resident and virtual
//! memory plus cumulative disk I/O through `sysinfo`, user/system CPU time
//! and page faults through `getrusage`. Counters are sampled around each run
//! and printed as a human-readable report.

use std::fmt::Write as _;
use std::time::Duration;

use sysinfo::{get_current_pid, Pid, ProcessRefreshKind, System};

use crate::utils::format_hms;

/// CPU time and page faults of this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuUsage {
    pub user: Duration,
    pub system: Duration,
    pub minor_faults: u64,
    pub major_faults: u64,
}

impl CpuUsage {
    /// Cumulative counters of the calling process; zero when unavailable.
    #[cfg(unix)]
    pub fn current() -> Self {
        use nix::sys::resource::{getrusage, UsageWho};
        use nix::sys::time::TimeVal;

        fn duration(tv: TimeVal) -> Duration {
            Duration::from_secs(tv.tv_sec().max(0) as u64)
                + Duration::from_micros(tv.tv_usec().max(0) as u64)
        }

        match getrusage(UsageWho::RUSAGE_SELF) {
            Ok(usage) => Self {
                user: duration(usage.user_time()),
                system: duration(usage.system_time()),
                minor_faults: usage.minor_page_faults().max(0) as u64,
                major_faults: usage.major_page_faults().max(0) as u64,
            },
            Err(err) => {
                log::debug!("getrusage failed: {err}");
                Self::default()
            }
        }
    }

    #[cfg(not(unix))]
    pub fn current() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.user + self.system
    }

    /// Counters accumulated since `earlier`.
    pub fn since(&self, earlier: &CpuUsage) -> CpuUsage {
        CpuUsage {
            user: self.user.saturating_sub(earlier.user),
            system: self.system.saturating_sub(earlier.system),
            minor_faults: self.minor_faults.saturating_sub(earlier.minor_faults),
            major_faults: self.major_faults.saturating_sub(earlier.major_faults),
        }
    }
}

/// One sample of this process's resource counters. Sizes in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceSnapshot {
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub disk_read_bytes: u64,
    pub disk_written_bytes: u64,
    pub cpu: CpuUsage,
}

/// Change between two snapshots. Memory is reported as the later absolute
/// value; disk and CPU counters as deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceDelta {
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub resident_growth: i64,
    pub disk_read_bytes: u64,
    pub disk_written_bytes: u64,
    pub cpu: CpuUsage,
}

impl ResourceSnapshot {
    pub fn delta_since(&self, earlier: &ResourceSnapshot) -> ResourceDelta {
        ResourceDelta {
            resident_bytes: self.resident_bytes,
            virtual_bytes: self.virtual_bytes,
            resident_growth: self.resident_bytes as i64 - earlier.resident_bytes as i64,
            disk_read_bytes: self.disk_read_bytes.saturating_sub(earlier.disk_read_bytes),
            disk_written_bytes: self
                .disk_written_bytes
                .saturating_sub(earlier.disk_written_bytes),
            cpu: self.cpu.since(&earlier.cpu),
        }
    }
}

/// Samples the current process. Missing data reads as zero.
pub struct ResourceProbe {
    sys: System,
    pid: Option<Pid>,
}

impl ResourceProbe {
    pub fn new() -> Self {
        let pid = match get_current_pid() {
            Ok(pid) => Some(pid),
            Err(err) => {
                log::warn!("resource data unavailable: {err}");
                None
            }
        };
        Self {
            sys: System::new(),
            pid,
        }
    }

    pub fn snapshot(&mut self) -> ResourceSnapshot {
        let cpu = CpuUsage::current();
        let Some(pid) = self.pid else {
            return ResourceSnapshot {
                cpu,
                ..ResourceSnapshot::default()
            };
        };
        self.sys
            .refresh_process_specifics(pid, ProcessRefreshKind::new().with_disk_usage());
        match self.sys.process(pid) {
            Some(process) => {
                let disk = process.disk_usage();
                ResourceSnapshot {
                    resident_bytes: process.memory(),
                    virtual_bytes: process.virtual_memory(),
                    disk_read_bytes: disk.total_read_bytes,
                    disk_written_bytes: disk.total_written_bytes,
                    cpu,
                }
            }
            None => ResourceSnapshot {
                cpu,
                ..ResourceSnapshot::default()
            },
        }
    }
}

impl Default for ResourceProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall and CPU time of a session, either summed or averaged over its runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTimes {
    pub wall: Duration,
    pub user: Duration,
    pub system: Duration,
}

impl SessionTimes {
    pub fn total_cpu(&self) -> Duration {
        self.user + self.system
    }
}

fn mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn time_line(s: &mut String, label: &str, time: Duration) {
    let secs = time.as_secs_f64();
    let _ = writeln!(
        s,
        "  {:<24} {secs:.4} seconds ({})",
        format!("{label}:"),
        format_hms(secs)
    );
}

fn cpu_lines(s: &mut String, user: Duration, system: Duration) {
    time_line(s, "User time", user);
    time_line(s, "System time", system);
    time_line(s, "Total time", user + system);
}

/// "RUN k RESULTS" block for one run.
pub fn render_run(run: usize, length: usize, wall: Duration, res: &ResourceDelta) -> String {
    let mut s = String::new();
    let _ = writeln!(s);
    let _ = writeln!(s, "RUN {run} RESULTS");
    let _ = writeln!(s, "LCS length:                {length}");
    let _ = writeln!(s, "Time:");
    time_line(&mut s, "Wall time", wall);
    cpu_lines(&mut s, res.cpu.user, res.cpu.system);
    let _ = writeln!(s, "Disk I/O:");
    let _ = writeln!(
        s,
        "  Bytes read:              {:>12} ({:.1} MB)",
        res.disk_read_bytes,
        mib(res.disk_read_bytes)
    );
    let _ = writeln!(
        s,
        "  Bytes written:           {:>12} ({:.1} MB)",
        res.disk_written_bytes,
        mib(res.disk_written_bytes)
    );
    let _ = writeln!(s, "Memory Usage:");
    let _ = writeln!(
        s,
        "  Total (virtual):         {:>12} bytes ({:.1} MB)",
        res.virtual_bytes,
        mib(res.virtual_bytes)
    );
    let _ = writeln!(
        s,
        "  Resident (RSS):          {:>12} bytes ({:.1} MB)",
        res.resident_bytes,
        mib(res.resident_bytes)
    );
    let _ = writeln!(
        s,
        "  RSS growth:              {:>12} bytes",
        res.resident_growth
    );
    let _ = writeln!(s, "Page Faults:");
    let _ = writeln!(s, "  Minor:                   {:>12}", res.cpu.minor_faults);
    let _ = write!(s, "  Major:                   {:>12}", res.cpu.major_faults);
    s
}

/// "FINAL RESULTS" block for a whole session.
pub fn render_final(last_length: usize, total: &SessionTimes, average: &SessionTimes) -> String {
    let mut s = String::new();
    let _ = writeln!(s);
    let _ = writeln!(s, "FINAL RESULTS");
    let _ = writeln!(s, "LCS Length: {last_length}");
    let _ = writeln!(s, "Overall execution time:");
    time_line(&mut s, "Wall time", total.wall);
    cpu_lines(&mut s, total.user, total.system);
    let _ = writeln!(s, "Average per run:");
    time_line(&mut s, "Wall time", average.wall);
    cpu_lines(&mut s, average.user, average.system);
    s.truncate(s.trim_end().len());
    s
}
