use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "telegraph")]
#[command(author, version, about = "Telegraphic text compression measured in real model tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Model identifier whose tokenizer measures the reduction (default: gpt-4)
    #[arg(short, long, global = true, env = "TELEGRAPH_MODEL")]
    pub model: Option<String>,

    /// Path to a TOML config overriding the removal policy and counter settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress the built-in sample documents and print their reports
    Demo,

    /// Compress an annotated-document JSON file
    Compress {
        /// Path to the annotated document
        file: PathBuf,

        /// Print the full before/after report instead of the compressed text
        #[arg(long)]
        report: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count the tokens of an annotated document's raw text
    Count {
        /// Path to the annotated document
        file: PathBuf,
    },
}
