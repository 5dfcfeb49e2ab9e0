mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::benchmark::BenchmarkArgs;
use commands::explain::ExplainArgs;
use commands::kpi::KpiArgs;
use commands::ma::MaScoreArgs;
use commands::narrative::NarrativeArgs;
use commands::report::ReportArgs;

/// Plain-language analysis of SME financial statements
#[derive(Parser)]
#[command(
    name = "evalium",
    version,
    about = "Plain-language analysis of SME financial statements",
    long_about = "A CLI for analysing company financial statements with decimal precision. \
                  Extracts KPIs, writes an Italian narrative, benchmarks against \
                  competitors and scores M&A attractiveness."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// YAML file with M&A thresholds (overridden by MA_* variables)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract KPIs, statuses and dashboard cards
    Kpi(KpiArgs),
    /// Generate the Italian financial narrative
    Narrative(NarrativeArgs),
    /// Compare a company with its competitors
    Benchmark(BenchmarkArgs),
    /// Score M&A attractiveness
    MaScore(MaScoreArgs),
    /// Full company analysis (KPIs, narrative, M&A score, benchmark)
    Report(ReportArgs),
    /// Explain a KPI in plain Italian
    Explain(ExplainArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Logs go to stderr so stdout carries only results.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json_logging {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();
    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Kpi(args) => commands::kpi::run_kpi(args),
        Commands::Narrative(args) => commands::narrative::run_narrative(args),
        Commands::Benchmark(args) => commands::benchmark::run_benchmark(args),
        Commands::MaScore(args) => config::load_config(config_path)
            .and_then(|config| commands::ma::run_ma_score(args, &config)),
        Commands::Report(args) => config::load_config(config_path)
            .and_then(|config| commands::report::run_report(args, &config)),
        Commands::Explain(args) => commands::explain::run_explain(args),
        Commands::Version => {
            println!("evalium {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
