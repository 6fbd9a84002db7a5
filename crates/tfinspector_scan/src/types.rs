use std::path::PathBuf;

use tfinspector_core::ProjectRecord;

/// A candidate file left out of the results.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    /// One record per successfully parsed file, in walk order
    pub projects: Vec<ProjectRecord>,
    pub skipped: Vec<SkippedFile>,
    pub files_analyzed: usize,
}
