use clap::Parser;
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "scan")]
#[command(about = "Scan a directory for Terraform files")]
#[command(
    long_about = "Recursively scans a directory for .tf files and extracts the required \
                  Terraform version and provider requirements of each file."
)]
pub struct Config {
    /// Directory (or single .tf file) to scan
    pub root: PathBuf,

    /// Output format: text, json, yaml, csv
    #[arg(short, long, default_value = "text", value_parser = parse_output_format)]
    pub output: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip files excluded by .gitignore / .ignore files
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Report files that were skipped because they could not be read or parsed
    #[arg(long)]
    pub show_skipped: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: OutputFormat::Text,
            out: None,
            respect_gitignore: false,
            show_skipped: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse an output format name, case-insensitively. `yml` is accepted for YAML.
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(format!("invalid output format: {s} (choose text, json, yaml, csv)")),
    }
}
