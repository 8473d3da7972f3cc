use crate::engine::StepSink;
use crate::harness::{GenConfig, Harness};
use crate::model::{AlgorithmId, Value};
use crate::storage::HistoryStore;
use crate::text_summary;
use anyhow::Result;
use clap::Parser;
use std::collections::BTreeMap;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sortbench",
    version,
    about = "Instrumented sorting benchmarks with persisted run history"
)]
pub struct Cli {
    /// Algorithm to run (selection, bubble, insertion, merge, quick, heap, comb)
    #[arg(long)]
    pub algorithm: Option<AlgorithmId>,

    /// Run all seven algorithms against one sequence and print rankings
    #[arg(long)]
    pub all: bool,

    /// Comma-separated input sizes for a scaling sweep (e.g. 30,100,300)
    #[arg(long, value_delimiter = ',', value_parser = parse_positive)]
    pub scaling: Vec<usize>,

    /// Print averaged statistics from the persisted history and exit
    #[arg(long)]
    pub summary: bool,

    /// Generated sequence length
    #[arg(long, default_value_t = 160, value_parser = parse_positive)]
    pub size: usize,

    /// Inclusive upper bound for generated values
    #[arg(long, default_value_t = 500, value_parser = parse_positive_value)]
    pub max_value: Value,

    /// Seed for reproducible sequence generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print every sort step of a single run to stderr
    #[arg(long)]
    pub trace: bool,

    /// Override the history file location
    #[arg(long)]
    pub history_path: Option<std::path::PathBuf>,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err("must be positive".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_positive_value(s: &str) -> Result<Value, String> {
    match s.parse::<Value>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err("must be positive".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Step observer that mirrors every notification to stderr.
struct TraceSink;

impl StepSink for TraceSink {
    fn on_step(&mut self, arr: &[Value], a: usize, b: usize) {
        eprintln!("step ({a}, {b}): {arr:?}");
    }
}

/// Re-key an algorithm-indexed map by display name for JSON output, so the
/// keys match the persisted history file.
fn by_display_name<V: Clone>(map: &BTreeMap<AlgorithmId, V>) -> BTreeMap<&'static str, V> {
    map.iter()
        .map(|(id, v)| (id.display_name(), v.clone()))
        .collect()
}

pub fn run(args: Cli) -> Result<()> {
    let history_path = args
        .history_path
        .clone()
        .unwrap_or_else(HistoryStore::default_path);
    let history = HistoryStore::load(history_path);
    let gen = GenConfig {
        size: args.size,
        max_value: args.max_value,
        seed: args.seed,
    };
    let mut harness = Harness::new(gen, history);

    if args.summary {
        let summary = harness.get_history_summary();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&by_display_name(&summary))?);
        } else {
            for line in text_summary::build_history_summary(&summary).lines {
                println!("{line}");
            }
        }
        return Ok(());
    }

    if !args.scaling.is_empty() {
        harness.run_scaling_benchmark(&args.scaling);
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&by_display_name(harness.series()))?
            );
        } else {
            for line in text_summary::build_scaling_summary(harness.series()).lines {
                println!("{line}");
            }
        }
        return Ok(());
    }

    if args.all {
        let sequence = harness.sequence().to_vec();
        let results = harness.run_all(&sequence)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&by_display_name(&results))?);
        } else {
            for line in text_summary::build_comparison_summary(&results).lines {
                println!("{line}");
            }
        }
        eprintln!("Saved: {}", harness.history().path().display());
        return Ok(());
    }

    if let Some(id) = args.algorithm {
        if args.trace {
            harness.set_observer(Box::new(TraceSink));
        }
        let sequence = harness.sequence().to_vec();
        let stats = harness.run_single(id, &sequence, true)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", text_summary::run_line(&stats));
        }
        eprintln!("Saved: {}", harness.history().path().display());
        return Ok(());
    }

    anyhow::bail!("nothing to run: pass --algorithm <name>, --all, --scaling <sizes>, or --summary")
}
