//! keysort-bench - time the twelve keysort algorithms on bibliographic workloads
//!
//! Input is a TSV file with one record per line:
//!   year<TAB>title<TAB>author; author; ...
//! Without --input, synthetic records are generated from --seed.
//!
//! Workloads:
//!   title-length = lengths of the first --sample titles
//!   year-title   = records ordered by (year, normalized title)
//!   author-count = distinct authors ordered by number of appearances
//!
//! Every algorithm's output is checked against a stable std sort and the
//! results are printed fastest first.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use keysort::Algorithm;
use keysort::bench::{self, DEFAULT_SAMPLE, Measurement, Record, Workload};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WorkloadKind {
    All,
    TitleLength,
    YearTitle,
    AuthorCount,
}

#[derive(Parser)]
#[command(name = "keysort-bench")]
#[command(about = "Time the keysort algorithms on bibliographic workloads")]
struct Args {
    /// Input TSV file (year, title, authors). Synthetic data is used when omitted.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Number of synthetic records to generate when no input is given
    #[arg(short = 'n', long, default_value_t = 2000)]
    synthetic: usize,

    /// Seed for synthetic records
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How many title lengths the title-length workload measures
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE)]
    sample: usize,

    /// Workload to run
    #[arg(short = 'w', long, value_enum, default_value_t = WorkloadKind::All)]
    workload: WorkloadKind,

    /// Comma-separated algorithms to run (slugs or names). Default: all twelve.
    #[arg(short = 'a', long, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Sort descending
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let records = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Record::parse_all(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => bench::synthetic_records(args.synthetic, args.seed),
    };
    info!("loaded {} records", records.len());

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    let workloads = match args.workload {
        WorkloadKind::All => vec![
            Workload::title_lengths(&records, args.sample),
            Workload::year_title(&records),
            Workload::author_counts(&records),
        ],
        WorkloadKind::TitleLength => vec![Workload::title_lengths(&records, args.sample)],
        WorkloadKind::YearTitle => vec![Workload::year_title(&records)],
        WorkloadKind::AuthorCount => vec![Workload::author_counts(&records)],
    };

    for workload in &workloads {
        let measurements = bench::run(workload, &algorithms, args.reverse);
        print_ranking(workload, &bench::rank(measurements));
    }

    Ok(())
}

fn print_ranking(workload: &Workload, ranking: &[Measurement]) {
    println!(
        "\nRanking for {} (n={}), fastest first:",
        workload.name,
        workload.len()
    );
    for (i, m) in ranking.iter().enumerate() {
        println!(
            "{:>2}. {:<22}  {:>12.6}s  {}",
            i + 1,
            m.algorithm.name(),
            m.elapsed.as_secs_f64(),
            m.outcome
        );
    }
}
