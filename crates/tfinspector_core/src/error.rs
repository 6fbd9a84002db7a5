use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// File contents could not be parsed into a document.
#[derive(Debug, Clone, Error)]
#[error("syntax error: {message}")]
pub struct SyntaxError {
    pub message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Directory traversal cannot continue. Aborts the whole scan.
#[derive(Debug, Error)]
#[error("failed to walk {}: {source}", .root.display())]
pub struct WalkError {
    pub root: PathBuf,
    #[source]
    pub source: ignore::Error,
}

/// A single candidate file could not be turned into a project record.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. } | FileError::Syntax { path, .. } => path,
        }
    }
}
