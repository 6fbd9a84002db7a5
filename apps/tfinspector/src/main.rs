use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;
use tfinspector_scan::{Config, ScanResult};

#[derive(Parser)]
#[command(name = "tfinspector")]
#[command(about = "Analyze Terraform files for runtime and provider metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a directory for Terraform files
    Scan(Config),
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Scan(cfg) => {
            info!(
                "Scanning {} (using {} threads)",
                cfg.root.display(),
                rayon::current_num_threads()
            );

            let result = tfinspector_scan::run_scan(&cfg).context("scan failed")?;

            if cfg.show_skipped {
                print_skipped(&result)?;
            }

            if result.projects.is_empty() {
                return Err(empty_scan_error(&result));
            }

            match &cfg.out {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut out = BufWriter::new(file);
                    tfinspector_scan::render_output(&mut out, &result.projects, cfg.output)?;
                }
                None => {
                    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
                    let mut out = BufWriter::new(std::io::stdout());
                    tfinspector_scan::render_output(&mut out, &result.projects, cfg.output)?;
                }
            }

            print_footer(&result, start.elapsed().as_millis())?;
            Ok(())
        }
    }
}

fn empty_scan_error(result: &ScanResult) -> anyhow::Error {
    match result.skipped.len() {
        0 => anyhow!("no Terraform files found"),
        n => anyhow!(
            "no parsable Terraform files found ({} of {} files skipped)",
            n,
            result.files_analyzed
        ),
    }
}

fn print_skipped(result: &ScanResult) -> Result<()> {
    let mut stderr = std::io::stderr().lock();
    for skipped in &result.skipped {
        writeln!(stderr, "{} {}", "⚠".yellow().bold(), skipped.reason)?;
    }
    Ok(())
}

fn print_footer(result: &ScanResult, elapsed_ms: u128) -> Result<()> {
    let mut stderr = std::io::stderr().lock();
    writeln!(
        stderr,
        "\n{} Finished in {}ms on {} files (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.files_analyzed.to_string().cyan(),
        rayon::current_num_threads().to_string().cyan()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tfinspector_scan::SkippedFile;

    fn empty_result(skipped: usize) -> ScanResult {
        ScanResult {
            projects: Vec::new(),
            skipped: (0..skipped)
                .map(|i| SkippedFile {
                    path: PathBuf::from(format!("bad{i}.tf")),
                    reason: "syntax error".to_string(),
                })
                .collect(),
            files_analyzed: skipped,
        }
    }

    #[test]
    fn test_empty_scan_without_files() {
        let err = empty_scan_error(&empty_result(0));
        assert_eq!(err.to_string(), "no Terraform files found");
    }

    #[test]
    fn test_empty_scan_mentions_skipped_files() {
        let err = empty_scan_error(&empty_result(2));
        assert_eq!(err.to_string(), "no parsable Terraform files found (2 of 2 files skipped)");
    }
}
