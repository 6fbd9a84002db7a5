//! Core utilities for tfinspector.
//!
//! This crate provides the extraction engine for Terraform configuration trees:
//! - Walking a directory for `.tf` files in a stable order
//! - Parsing HCL into a typed document model
//! - Extracting `required_version` and provider requirements from a document
//! - De-duplicating providers declared in `required_providers` and `provider` blocks

mod collector;
mod constants;
mod document;
mod error;
mod extractor;
mod parser;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_terraform_files, is_terraform_file};
pub use constants::{
    PROVIDER_BLOCK, REQUIRED_PROVIDERS_BLOCK, REQUIRED_VERSION_ATTR, RUNTIME_BLOCK,
    TERRAFORM_FILE_SUFFIX, VERSION_FIELD,
};
pub use document::{Attribute, Block, Body, Document, Value, parse};
pub use error::{FileError, SyntaxError, WalkError};
pub use extractor::{collect_declarations, extract_project};
pub use parser::{parse_project, parse_terraform_file};
pub use types::{DeclarationSource, ProjectRecord, ProviderDeclaration, ProviderInfo};
