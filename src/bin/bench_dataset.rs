use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use dpllsat::bench::{BenchConfig, run_dataset};
use dpllsat::solver::BackendKind;

#[derive(Debug, Parser)]
#[command(name = "bench_dataset")]
struct Cli {
    #[arg(long)]
    dir: String,
    #[arg(long, default_value = "dpll")]
    backend: String,
    #[arg(long = "timeout_ms", default_value_t = 30000)]
    timeout_ms: u64,
    #[arg(long)]
    csv: String,
    #[arg(long, default_value_t = false)]
    progress: bool,
    #[arg(long, default_value_t = false)]
    no_verify: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run_from_args(&cli)
}

fn run_from_args(cli: &Cli) -> Result<()> {
    let cfg = BenchConfig {
        backend: cli.backend.parse::<BackendKind>()?,
        timeout: Duration::from_millis(cli.timeout_ms),
        verify: !cli.no_verify,
    };
    let rows = run_dataset(
        &PathBuf::from(&cli.dir),
        cfg,
        &PathBuf::from(&cli.csv),
        cli.progress,
    )?;
    println!("rows={}", rows.len());
    Ok(())
}
