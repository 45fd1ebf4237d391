use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use telegraph_annotation::{DocumentAnnotator, DocumentParser};
use telegraph_compression::CompressionPipeline;
use telegraph_core::config::{defaults, TelegraphConfig};
use telegraph_core::errors::TelegraphResult;
use telegraph_core::models::CompressionReport;
use telegraph_core::policy::RemovalPolicy;
use telegraph_tokens::TokenCounter;

use crate::cli::{Cli, Commands};

mod cli;

/// Annotated sample documents, embedded so `demo` needs no files on disk.
const EIFFEL_TOWER_JSON: &str = include_str!("samples/eiffel_tower.json");
const AMAZON_RAINFOREST_JSON: &str = include_str!("samples/amazon_rainforest.json");

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TELEGRAPH_LOG")
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn run(cli: Cli) -> TelegraphResult<()> {
    let config = load_config(cli.config.as_deref())?;
    let model = cli.model.unwrap_or_else(|| config.counter.model.clone());
    let policy = RemovalPolicy::from(&config.policy);
    let counter = TokenCounter::new(config.counter.cache_capacity);

    match cli.command {
        Commands::Demo => cmd_demo(&counter, &policy, &model),
        Commands::Compress { file, report, json } => {
            cmd_compress(&counter, &policy, &model, &file, report, json)
        }
        Commands::Count { file } => cmd_count(&counter, &model, &file),
    }
}

fn load_config(path: Option<&Path>) -> TelegraphResult<TelegraphConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            TelegraphConfig::from_toml(&content)
        }
        None => Ok(TelegraphConfig::default()),
    }
}

fn cmd_demo(counter: &TokenCounter, policy: &RemovalPolicy, model: &str) -> TelegraphResult<()> {
    for sample in [EIFFEL_TOWER_JSON, AMAZON_RAINFOREST_JSON] {
        let document = DocumentParser::parse_str(sample)?;
        let annotator = DocumentAnnotator::new(document);
        let report = CompressionPipeline::new(&annotator, counter)
            .with_policy(policy.clone())
            .with_model(model)
            .run(annotator.text())?;
        print_report(&report);
        println!();
    }
    Ok(())
}

fn cmd_compress(
    counter: &TokenCounter,
    policy: &RemovalPolicy,
    model: &str,
    file: &Path,
    report: bool,
    json: bool,
) -> TelegraphResult<()> {
    let document = DocumentParser::parse_file(file)?;
    let annotator = DocumentAnnotator::new(document);
    let result = CompressionPipeline::new(&annotator, counter)
        .with_policy(policy.clone())
        .with_model(model)
        .run(annotator.text())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if report {
        print_report(&result);
    } else {
        println!("{}", result.compressed_text);
    }
    Ok(())
}

fn cmd_count(counter: &TokenCounter, model: &str, file: &Path) -> TelegraphResult<()> {
    let document = DocumentParser::parse_file(file)?;
    let count = counter.count(&document.text, model)?;
    println!("{count}");
    Ok(())
}

fn print_report(report: &CompressionReport) {
    println!("Original Text:\n{}\n", report.original_text);
    println!("Compressed Text:\n{}\n", report.compressed_text);
    println!("Original Tokens: {}", report.original_tokens);
    println!("Compressed Tokens: {}", report.compressed_tokens);
    println!("Token Reduction: {:.1}%", report.reduction_pct);
}
