use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::{constants::TERRAFORM_FILE_SUFFIX, error::WalkError};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Honour `.gitignore` / `.ignore` files while walking
    pub respect_gitignore: bool,
}

impl CollectorConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), respect_gitignore: false }
    }
}

/// Collect every Terraform file under `cfg.root`, depth-first in lexical order.
///
/// Any error while listing a directory aborts the walk.
pub fn collect_terraform_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>, WalkError> {
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .git_ignore(cfg.respect_gitignore)
        .git_exclude(cfg.respect_gitignore)
        .ignore(cfg.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for res in walker {
        let dent = res.map_err(|source| WalkError { root: root.clone(), source })?;
        let p = dent.path();
        // Follows symlinks, so links to files count and links to directories don't.
        if !p.is_file() {
            continue;
        }
        if is_terraform_file(p) {
            trace!("Found Terraform file: {}", p.display());
            files.push(p.to_path_buf());
        } else {
            trace!("Skipping non-Terraform file: {}", p.display());
        }
    }

    debug!("Collected {} Terraform files", files.len());
    Ok(files)
}

pub fn is_terraform_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TERRAFORM_FILE_SUFFIX))
}
