use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

use lcs_bench::utils::is_subsequence;
use lcs_bench::{ClassicEngine, HirschbergBuilder, LcsSolver};

/// Scaling probe: run both LCS engines on growing inputs, verify the
/// linear-space engine against the full table and record time and memory.
#[derive(Parser)]
#[command(name = "scale_probe")]
#[command(version)]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest length solved by the classic engine as a baseline
    #[arg(long, value_name = "N", default_value_t = 4096)]
    verify_limit: usize,

    /// Hirschberg base-case threshold
    #[arg(long, value_name = "INT", default_value_t = 32)]
    base: usize,

    /// Largest length probed
    #[arg(long, value_name = "N", default_value_t = 16384)]
    max_len: usize,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    engine: &'static str,
    len: usize,
    lcs: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

fn main() -> Result<()> {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("LCS Scaling Probe: classic table vs Hirschberg linear space");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • classic runs up to length {}", options.verify_limit);
    eprintln!("  • hirschberg runs up to length {}, base case {}", options.max_len, options.base);
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let mut classic = ClassicEngine::new();
    let mut linear = HirschbergBuilder::new().with_base(options.base).build()?;

    let sizes: Vec<usize> = std::iter::successors(Some(256usize), |&n| n.checked_mul(2))
        .take_while(|&n| n <= options.max_len)
        .collect();

    for (idx, &len) in sizes.iter().enumerate() {
        eprint!("  [{}/{}] length {len}... ", idx + 1, sizes.len());
        let x = deterministic_dna(len, 0);
        let y = deterministic_dna(len, 1);

        let baseline = if len <= options.verify_limit {
            let m = measure(&mut classic, &x, &y, &mut sys, None);
            let baseline = m.lcs;
            measurements.push(m);
            Some(baseline)
        } else {
            None
        };

        let m = measure(&mut linear, &x, &y, &mut sys, baseline);
        eprintln!("lcs={}, time={:.3}s, status={}", m.lcs, m.wall_s, m.status.label());
        measurements.push(m);
    }

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.status, VerificationStatus::Failed))
        .count();
    eprintln!();
    if failed == 0 {
        eprintln!("✓ All verified runs matched the classic baseline.");
    } else {
        eprintln!("✗ {failed} run(s) disagreed with the classic baseline.");
    }

    match options.format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&measurements)?),
    }
    Ok(())
}

fn measure<S: LcsSolver>(
    engine: &mut S,
    x: &[u8],
    y: &[u8],
    sys: &mut System,
    baseline: Option<usize>,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let result = engine.lcs(x, y);
    let wall_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss_kib(sys).saturating_sub(before);

    let (lcs, status, detail) = match result {
        Err(err) => (0, VerificationStatus::Failed, Some(err.to_string())),
        Ok(lcs) if !is_subsequence(&lcs.symbols, x) || !is_subsequence(&lcs.symbols, y) => (
            lcs.length,
            VerificationStatus::Failed,
            Some("reconstruction is not a common subsequence".to_string()),
        ),
        Ok(lcs) => match baseline {
            Some(expected) if expected != lcs.length => (
                lcs.length,
                VerificationStatus::Failed,
                Some(format!("expected {expected}, got {}", lcs.length)),
            ),
            Some(_) => (lcs.length, VerificationStatus::Passed, None),
            None => (lcs.length, VerificationStatus::NotChecked, None),
        },
    };

    Measurement {
        engine: engine.name(),
        len: x.len(),
        lcs,
        wall_s,
        rss_delta_kib,
        status,
        detail,
    }
}

fn write_csv(measurements: &[Measurement]) {
    println!("engine,len,lcs,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.engine,
            m.len,
            m.lcs,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<10}  {:>8}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "engine", "len", "lcs", "wall_s", "rss_delta_kib", "status"
    );
    println!("{:-<10}  {:-<8}  {:-<8}  {:-<10}  {:-<14}  {:-<12}  {:-<12}", "", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<10}  {:>8}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.engine,
            m.len,
            m.lcs,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    let Ok(pid) = get_current_pid() else {
        return 0;
    };
    sys.refresh_process_specifics(pid, ProcessRefreshKind::new());
    sys.process(pid).map(|p| p.memory() / 1024).unwrap_or(0)
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + i / 3 + offset) % ALPHABET.len()])
        .collect()
}
