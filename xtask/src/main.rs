use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BENCH: &str = "traversal_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "halo-traverse workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save this run under
        #[arg(long, default_value = "current")]
        baseline: String,

        /// Baseline the other columns are compared against
        #[arg(long)]
        reference: Option<String>,

        /// Also build with the `tracing` feature enabled
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
}

/// `target/criterion/<group>/<id>/<baseline>/estimates.json`
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `target/criterion/<group>/<id>/<baseline>/benchmark.json`
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
}

/// workload -> baseline -> ops per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
            reference,
            tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline, tracing)?;
            }
            generate_report(reference.as_deref())?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str, tracing: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let mut build = Command::new("cargo");
    build.args(["build", "--bench", BENCH, "--release"]);
    if tracing {
        build.args(["--features", "tracing"]);
    }
    if !build.status()?.success() {
        bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Benchmarking into baseline: {baseline}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C opt-level=3 -C codegen-units=1");
    cmd.args(["bench", "--bench", BENCH]);
    if tracing {
        cmd.args(["--features", "tracing"]);
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--").arg("--save-baseline").arg(baseline);
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {BENCH}"))?;
    if !status.success() {
        bail!("Benchmark run failed for baseline {baseline}");
    }
    println!("Finished {baseline} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(reference: Option<&str>) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let baselines: Vec<String> = results
        .values()
        .flat_map(|m| m.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let reference = reference
        .map(str::to_owned)
        .or_else(|| baselines.first().cloned())
        .unwrap_or_default();

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "Throughput in visited nodes per second; ratios relative to `{reference}`.")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for baseline in &baselines {
        write!(file, " {baseline} (Ops/s) | vs {reference} |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in &baselines {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        let reference_ops = by_baseline.get(&reference).copied().unwrap_or(0.0);
        for baseline in &baselines {
            match by_baseline.get(baseline) {
                Some(&ops) => {
                    let rel = if reference_ops > 0.0 {
                        ops / reference_ops
                    } else {
                        0.0
                    };
                    write!(file, " {} | **{rel:.2}x** |", format_ops(ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
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

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
}

fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if dir_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        // Structure: .../<group>/<id>/<baseline>/estimates.json
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let (Some(baseline), Some(id)) = (dir_name(baseline_dir), dir_name(workload_dir)) else {
            continue;
        };
        // Criterion keeps its own copies under "new", "base" and "change".
        if matches!(baseline.as_str(), "report" | "new" | "base" | "change") || id == "report" {
            continue;
        }
        let group = workload_dir
            .parent()
            .and_then(dir_name)
            .unwrap_or_default();
        let workload = format!("{group}/{id}");

        let elements = fs::read_to_string(baseline_dir.join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<BenchmarkInfo>(&content).ok())
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n,
            });

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Malformed estimates in {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(baseline, elements * 1e9 / time_ns);
        }
    }
    Ok(())
}
