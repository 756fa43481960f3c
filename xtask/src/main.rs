use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lazyseg workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the comparison suite (lazy tree vs Fenwick tree)
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also enable the `tracing` feature while benchmarking
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
}

/// Criterion groups emitted by `benches/suite.rs`.
const WORKLOADS: &[&str] = &["mixed_range_ops", "point_add_range_sum"];

const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Throughput {
    elements: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, tracing } => {
            if !report_only {
                run_suite(quick, tracing)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_suite(quick: bool, tracing: bool) -> Result<()> {
    println!("Running comparison suite...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", "suite"]);
    if tracing {
        cmd.args(["--features", "tracing"]);
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.5", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark suite failed with {status}");
    }
    println!("Finished suite in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // workload -> implementation -> ops/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for workload in WORKLOADS {
        let dir = criterion_dir.join(workload);
        let Ok(entries) = fs::read_dir(&dir) else {
            eprintln!("Warning: no results for {workload}");
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if name == "report" || !path.is_dir() {
                continue;
            }
            let ops = read_ops_per_sec(&path.join("new"))
                .with_context(|| format!("reading results for {workload}/{name}"))?;
            results.entry((*workload).to_string()).or_default().insert(name.to_string(), ops);
        }
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Range Tree Comparison Report")?;
    for (workload, impls) in &results {
        let fastest = impls.values().copied().fold(0.0_f64, f64::max);
        writeln!(file)?;
        writeln!(file, "## {workload}")?;
        writeln!(file)?;
        writeln!(file, "| Implementation | Ops/s | vs fastest |")?;
        writeln!(file, "|---|---|---|")?;
        for (name, ops) in impls {
            let rel = if fastest > 0.0 { ops / fastest } else { 0.0 };
            writeln!(file, "| {name} | {} | **{rel:.2}x** |", format_ops(*ops))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Throughput from a criterion `new/` directory, falling back to iterations
/// per second when the benchmark declared no element count.
fn read_ops_per_sec(dir: &Path) -> Result<f64> {
    let estimates: Estimates = serde_json::from_str(&fs::read_to_string(dir.join("estimates.json"))?)?;
    let elements = fs::read_to_string(dir.join("benchmark.json"))
        .ok()
        .and_then(|content| serde_json::from_str::<BenchmarkInfo>(&content).ok())
        .and_then(|info| info.throughput)
        .and_then(|t| t.elements)
        .unwrap_or(1.0);

    let time_ns = estimates.mean.point_estimate;
    if time_ns <= 0.0 {
        anyhow::bail!("non-positive mean estimate in {}", dir.display());
    }
    Ok(elements * 1e9 / time_ns)
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
