use anyhow::Result;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::{
    path::{Path, PathBuf},
    thread,
};

use tfinspector_core::{
    CollectorConfig, FileError, ProjectRecord, WalkError, collect_terraform_files,
    parse_terraform_file,
};

use crate::{
    config::Config,
    types::{ScanResult, SkippedFile},
};

pub fn run_scan(cfg: &Config) -> Result<ScanResult> {
    info!("Starting Terraform scan of {}", cfg.root.display());

    let collector_cfg =
        CollectorConfig { root: cfg.root.clone(), respect_gitignore: cfg.respect_gitignore };
    let files = collect_terraform_files(&collector_cfg)?;
    info!("Found {} Terraform files", files.len());

    let files_analyzed = files.len();
    let (projects, failures) = parse_all(&files);

    let skipped: Vec<SkippedFile> = failures
        .into_iter()
        .map(|e| SkippedFile { path: e.path().to_path_buf(), reason: e.to_string() })
        .collect();

    info!("Scan complete. Parsed {} files, skipped {}", projects.len(), skipped.len());
    Ok(ScanResult { projects, skipped, files_analyzed })
}

/// Scan `root` and return one record per parsable Terraform file, in walk order.
///
/// Files that cannot be read or parsed are left out silently. Only a failure to walk
/// the tree is returned as an error.
pub fn scan_directory(root: &Path) -> Result<Vec<ProjectRecord>, WalkError> {
    let files = collect_terraform_files(&CollectorConfig::new(root))?;
    let (projects, _) = parse_all(&files);
    Ok(projects)
}

fn parse_all(files: &[PathBuf]) -> (Vec<ProjectRecord>, Vec<FileError>) {
    debug!("Parsing {} files in parallel", files.len());

    // Indexed collect keeps walk order regardless of which thread finishes first.
    let results: Vec<Result<ProjectRecord, FileError>> = files
        .par_iter()
        .map(|file| {
            trace!("Thread {:?} parsing: {}", thread::current().id(), file.display());
            parse_terraform_file(file)
        })
        .collect();

    let mut projects = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(project) => projects.push(project),
            Err(e) => {
                debug!("Skipping file: {}", e);
                failures.push(e);
            }
        }
    }
    (projects, failures)
}
