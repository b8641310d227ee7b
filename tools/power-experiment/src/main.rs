//! Tool for running power estimation experiments over activity traces.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Builder;

use dynpower::config::ExperimentConfig;
use dynpower::experiment::{Experiment, ExperimentOutcome};
use dynpower::extra::csv_trace::CsvTrace;
use dynpower::extra::synthetic::{generate_synthetic_trace, SyntheticTraceConfig};
use dynpower::record::RecordSource;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Estimates dynamic power from activity counters and scores the regressors
struct Args {
    /// Path to YAML file with experiment configuration (defaults are used if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to CSV file with activity trace (a synthetic trace is generated if omitted)
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Number of records in the generated synthetic trace
    #[arg(short, long, default_value_t = 1000)]
    records: usize,

    /// Path to produced JSON file with metrics and per-row (actual, predicted) pairs
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExperimentConfig::from_file(path),
        None => Default::default(),
    };

    let outcome = match &args.trace {
        Some(path) => {
            let trace = CsvTrace::from_file(path)?;
            log::info!("read {} records from {}", trace.len(), path.display());
            Experiment::new(config, &trace).run()?
        }
        None => {
            let trace = generate_synthetic_trace(&SyntheticTraceConfig {
                records: args.records,
                ..Default::default()
            });
            log::info!("generated synthetic trace with {} records", trace.len());
            Experiment::new(config, &trace).run()?
        }
    };

    report(&outcome);

    if let Some(path) = &args.output {
        std::fs::File::create(path)?.write_all(serde_json::to_string_pretty(&outcome)?.as_bytes())?;
        log::info!("wrote results to {}", path.display());
    }
    Ok(())
}

fn report(outcome: &ExperimentOutcome) {
    for result in &outcome.results {
        println!("{}", result.model_name);
        match result.r_squared {
            Some(r_squared) => println!("  R2  : {}", r_squared),
            None => println!("  R2  : undefined"),
        }
        println!("  MSE : {}", result.mse);
    }
}
