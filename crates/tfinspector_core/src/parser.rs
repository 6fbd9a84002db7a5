use log::{debug, trace};
use std::{fs, path::Path};

use crate::{
    document,
    error::{FileError, SyntaxError},
    extractor::extract_project,
    types::ProjectRecord,
};

/// Parse already-loaded file contents into a project record for `path`.
pub fn parse_project(path: &Path, contents: &str) -> Result<ProjectRecord, SyntaxError> {
    let doc = document::parse(contents)?;
    let project = extract_project(&path.to_string_lossy(), &doc);
    debug!(
        "Parsed {}: runtime_version={:?}, {} providers",
        path.display(),
        project.runtime_version,
        project.providers.len()
    );
    Ok(project)
}

/// Read and parse one Terraform file.
pub fn parse_terraform_file(path: &Path) -> Result<ProjectRecord, FileError> {
    trace!("Parsing Terraform file: {}", path.display());
    let contents = fs::read_to_string(path)
        .map_err(|source| FileError::Read { path: path.to_path_buf(), source })?;
    parse_project(path, &contents)
        .map_err(|source| FileError::Syntax { path: path.to_path_buf(), source })
}
