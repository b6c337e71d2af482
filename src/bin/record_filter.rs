//! Filter tab-delimited records by substring-occurrence conditions.
//!
//! Reads up to `--limit` records from the input file, keeps those that
//! satisfy every `--condition`, and writes the accepted records together
//! with timing information to one result file per selected engine.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use textmatching::io::{read_records, write_results};
use textmatching::{Condition, ConditionSet, Engine, Record};

/// Search tab-delimited records for pattern-occurrence conditions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The tab-delimited input file.
    input: PathBuf,

    /// Maximum number of records to read.
    #[arg(short = 'n', long, default_value_t = 1000, value_parser = parse_limit)]
    limit: usize,

    /// A condition of the form FIELD:PATTERN[,PATTERN...]:COUNT; may be
    /// repeated. A record is kept only if, for every condition, the
    /// patterns occur at least COUNT times in total in field FIELD.
    #[arg(short, long = "condition", required = true)]
    conditions: Vec<Condition>,

    /// Matching engines to run; each engine writes its own result file.
    #[arg(long = "engine", value_enum, default_values_t = [Engine::Kmp, Engine::AhoCorasick])]
    engines: Vec<Engine>,

    /// Directory for the result files.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn parse_limit(arg: &str) -> Result<usize, String> {
    let limit: usize = arg.parse().map_err(|_| format!("not a number: {arg}"))?;
    if !(10..=1_000_000).contains(&limit) {
        return Err("limit must be between 10 and 1000000".to_owned());
    }
    Ok(limit)
}

fn result_file_name(engine: Engine) -> &'static str {
    match engine {
        Engine::Kmp => "kmp_results.txt",
        Engine::AhoCorasick => "ac_results.txt",
    }
}

fn run_engine(
    engine: Engine,
    records: &[Record],
    conditions: &ConditionSet,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let accepted: Vec<(usize, &Record)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| conditions.accepts(record, engine))
        .map(|(idx, record)| (idx + 1, record))
        .collect();
    let elapsed = start.elapsed();

    let path = out_dir.join(result_file_name(engine));
    write_results(&path, accepted.iter().copied(), elapsed)
        .with_context(|| format!("writing results to {}", path.display()))?;
    info!(%engine, n_accepted = accepted.len(), "search finished");
    println!(
        "{} search completed in {} ms. Found {} matching records.",
        engine,
        elapsed.as_millis(),
        accepted.len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let records = read_records(&args.input, args.limit)
        .with_context(|| format!("reading records from {}", args.input.display()))?;
    anyhow::ensure!(
        !records.is_empty(),
        "no records read from {}",
        args.input.display()
    );
    info!(n_records = records.len(), "records loaded");

    let conditions = ConditionSet::new(args.conditions);
    for &engine in &args.engines {
        run_engine(engine, &records, &conditions, &args.out_dir)?;
    }
    Ok(())
}
