//! Command-line entry point: analyze one policy URL and print the report.

use clap::Parser;
use policylens::config::AnalyzerConfig;
use policylens::pipeline::Pipeline;
use policylens::report;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "policylens", version, about = "Flag risky clauses in a privacy policy and translate the findings")]
struct Cli {
    /// URL of the privacy policy or terms page; prompted for when omitted
    url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("analysis aborted: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> policylens::Result<()> {
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };

    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let pipeline = Pipeline::new(config)?;
    let report = pipeline.run(&url).await?;

    if cli.json {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_text(&report));
    }
    Ok(())
}

fn prompt_for_url() -> policylens::Result<String> {
    print!("Enter the URL of the privacy policy or terms page: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let url = line.trim().to_string();
    if url.is_empty() {
        return Err(policylens::PolicyLensError::ConfigError(
            "no URL provided".into(),
        ));
    }
    Ok(url)
}
