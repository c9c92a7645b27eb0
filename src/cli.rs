use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-header-lint")]
#[command(about = "Scan source files for the required license header")]
#[command(version)]
pub struct Cli {
    /// Files and directories to check (directories are walked recursively)
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude patterns (glob patterns like "*.tmp" or "third_party")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Organization expected in the first copyright line
    #[arg(long)]
    pub copyright_holder: Option<String>,

    /// Exit with status 1 when violations were found
    #[arg(long)]
    pub strict: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Also list files that passed
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
