use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use lcs_bench::config::{InputMode, SessionConfig};
use lcs_bench::harness::{RunHarness, RunRecord};
use lcs_bench::sequence::{Capacity, SequenceStore};
use lcs_bench::telemetry::{render_run, ResourceProbe};
use lcs_bench::{ClassicEngine, HirschbergBuilder, LcsSolver};

#[derive(Parser)]
#[command(name = "lcs-bench")]
#[command(about = "Longest Common Subsequence workloads: classic DP and Hirschberg linear space", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full (n+1) x (m+1) table; requires m >= n
    Classic {
        #[command(flatten)]
        input: InputArgs,

        /// Print the reconstructed subsequence of every run
        #[arg(short, long)]
        verbose: bool,
    },

    /// Hirschberg's divide and conquer in linear space
    Hirschberg {
        #[command(flatten)]
        input: InputArgs,

        /// Base-case threshold; non-positive values fall back to 32
        #[arg(short, long, value_name = "INT", default_value_t = 32, allow_negative_numbers = true)]
        base: i64,

        /// Print the reconstructed subsequence of every run
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Sequence length; 0 reads "m n" from stdin, -1 reads --x-file/--y-file
    #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
    length: i64,

    /// Number of runs (one sequence pair per run)
    #[arg(value_name = "RUNS")]
    runs: usize,

    /// File of X sequences (LENGTH = -1)
    #[arg(long, value_name = "FILE")]
    x_file: Option<PathBuf>,

    /// File of Y sequences (LENGTH = -1)
    #[arg(long, value_name = "FILE")]
    y_file: Option<PathBuf>,
}

impl InputArgs {
    fn session(self) -> Result<SessionConfig> {
        let mode = InputMode::resolve(self.length, self.x_file, self.y_file)?;
        Ok(SessionConfig::new(mode, self.runs)?)
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Capacity first (it may consume the stdin header), then the pairs.
fn load_session(config: &SessionConfig) -> Result<(Capacity, SequenceStore)> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let capacity = config
        .capacity(&mut reader)
        .context("cannot read sequence lengths")?;
    let store = config
        .load(reader, capacity)
        .context("failed to read data")?;
    Ok((capacity, store))
}

fn print_banner() {
    println!("{}", "=".repeat(85));
    println!(
        "Program: {}",
        std::env::args().next().unwrap_or_else(|| "lcs-bench".to_string())
    );
}

fn print_run(record: &RunRecord, verbose: bool) {
    println!(
        "{}",
        render_run(record.run, record.length, record.wall, &record.resources)
    );
    if verbose {
        if let Some(symbols) = &record.symbols {
            println!("LCS: {}", String::from_utf8_lossy(symbols));
        }
    }
}

fn run<S: LcsSolver>(engine: &mut S, store: &SequenceStore, verbose: bool) -> Result<()> {
    let report = RunHarness::new(engine)
        .with_probe(ResourceProbe::new())
        .keep_symbols(verbose)
        .run_session(store, |record| print_run(record, verbose))
        .context("run aborted")?;
    println!("{}", report.render_final());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classic { input, verbose } => {
            init_logger(verbose);
            print_banner();
            let config = input.session()?;
            let (capacity, store) = load_session(&config)?;
            capacity.ensure_longer_first()?;

            let mut engine = ClassicEngine::with_capacity(capacity.m, capacity.n)
                .context("cannot allocate score table")?;
            println!("m = {}, n = {}", capacity.m, capacity.n);
            println!("Runs = {}", config.runs);
            log::info!("alphabet: {} symbol(s)", store.alphabet().len());
            run(&mut engine, &store, verbose)
        }

        Commands::Hirschberg {
            input,
            base,
            verbose,
        } => {
            init_logger(verbose);
            print_banner();
            let config = input.session()?;
            let (capacity, store) = load_session(&config)?;

            let builder = HirschbergBuilder::new()
                .with_requested_base(base)
                .with_capacity(capacity.m, capacity.n);
            if builder.base() as i64 != base {
                log::warn!("invalid base-case threshold {base}, using {}", builder.base());
            }
            let mut engine = builder.build().context("cannot allocate scratch buffers")?;
            println!("m = {}, n = {}", capacity.m, capacity.n);
            println!("Runs = {}, base case = {}", config.runs, engine.base());
            log::info!("alphabet: {} symbol(s)", store.alphabet().len());
            run(&mut engine, &store, verbose)
        }
    }
}
