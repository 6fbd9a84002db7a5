//! Terraform project scanning.
//!
//! This crate drives the extraction engine from `tfinspector_core` over a directory
//! tree and renders the resulting project records as text, JSON, YAML or CSV.
//!
//! # Examples
//!
//! ```no_run
//! use tfinspector_scan::{Config, OutputFormat, render_output, run_scan};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::new("./infra");
//! let result = run_scan(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! render_output(&mut stdout, &result.projects, OutputFormat::Json)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::{run_scan, scan_directory};
pub use config::{Config, OutputFormat, parse_output_format};
pub use reporter::{render_output, write_csv, write_json, write_text, write_yaml};
pub use tfinspector_core::{ProjectRecord, ProviderInfo, WalkError};
pub use types::{ScanResult, SkippedFile};
