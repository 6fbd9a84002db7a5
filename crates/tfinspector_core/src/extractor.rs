use log::trace;

use crate::{
    constants::{
        PROVIDER_BLOCK, REQUIRED_PROVIDERS_BLOCK, REQUIRED_VERSION_ATTR, RUNTIME_BLOCK,
        VERSION_FIELD,
    },
    document::{Block, Document, Value},
    types::{DeclarationSource, ProjectRecord, ProviderDeclaration},
};

/// Build the project record for one parsed file.
///
/// `terraform` and `provider` blocks are visited in document order. The last
/// `required_version` seen wins; providers are de-duplicated by name with the first
/// declaration winning, whichever block shape it came from.
pub fn extract_project(path: &str, doc: &Document) -> ProjectRecord {
    let mut project = ProjectRecord::new(path);

    for block in doc.blocks_matching(&[RUNTIME_BLOCK]) {
        if let Some(version) = runtime_version(block) {
            trace!("Found required_version '{}' in {}", version, path);
            // An empty constraint still overwrites, and clears, an earlier one.
            project.runtime_version = (!version.is_empty()).then(|| version.to_string());
        }
    }

    for decl in collect_declarations(doc) {
        if !project.register_provider(&decl.name, decl.version) {
            trace!(
                "Ignoring repeated {:?} declaration of '{}' in {}",
                decl.source, decl.name, path
            );
        }
    }

    project
}

/// Every provider declaration in the document, in textual order.
pub fn collect_declarations(doc: &Document) -> Vec<ProviderDeclaration> {
    let mut decls = Vec::new();

    for block in doc.blocks_matching(&[RUNTIME_BLOCK, PROVIDER_BLOCK]) {
        if block.kind == RUNTIME_BLOCK {
            required_providers(block, &mut decls);
        } else if let Some(name) = block.first_label() {
            decls.push(ProviderDeclaration {
                name: name.to_string(),
                version: None,
                source: DeclarationSource::ProviderBlock,
            });
        } else {
            trace!("Skipping provider block without a label");
        }
    }

    decls
}

fn runtime_version(block: &Block) -> Option<&str> {
    block.body.attribute(REQUIRED_VERSION_ATTR).and_then(Value::as_primitive)
}

fn required_providers(block: &Block, decls: &mut Vec<ProviderDeclaration>) {
    for requirements in block.body.blocks_of(REQUIRED_PROVIDERS_BLOCK) {
        for attr in &requirements.body.attributes {
            let Some(fields) = attr.value.as_object() else {
                trace!("Skipping non-object requirement for '{}'", attr.name);
                continue;
            };
            let version = fields
                .get(VERSION_FIELD)
                .and_then(Value::as_primitive)
                .filter(|v| !v.is_empty())
                .map(String::from);
            decls.push(ProviderDeclaration {
                name: attr.name.clone(),
                version,
                source: DeclarationSource::Requirement,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;
    use crate::types::ProviderInfo;

    fn extract(src: &str) -> ProjectRecord {
        extract_project("main.tf", &parse(src).unwrap())
    }

    fn provider(name: &str, version: Option<&str>) -> ProviderInfo {
        ProviderInfo { name: name.to_string(), version: version.map(String::from) }
    }

    #[test]
    fn test_runtime_and_required_provider() {
        let project = extract(
            r#"
terraform {
  required_version = ">= 1.4.0"
  required_providers {
    azurerm = {
      source  = "hashicorp/azurerm"
      version = "3.0.0"
    }
  }
}
"#,
        );
        assert_eq!(project.path, "main.tf");
        assert_eq!(project.runtime_version.as_deref(), Some(">= 1.4.0"));
        assert_eq!(project.providers, vec![provider("azurerm", Some("3.0.0"))]);
    }

    #[test]
    fn test_multiple_required_providers_keep_declaration_order() {
        let project = extract(
            r#"
terraform {
  required_version = "~> 1.2.0"
  required_providers {
    azurerm = { source = "hashicorp/azurerm", version = "~> 3.0" }
    aws     = { source = "hashicorp/aws", version = ">= 5.0" }
  }
}
"#,
        );
        assert_eq!(
            project.providers,
            vec![provider("azurerm", Some("~> 3.0")), provider("aws", Some(">= 5.0"))]
        );
    }

    #[test]
    fn test_no_recognised_blocks() {
        let project = extract(
            r#"
variable "region" {
  default = "eu-west-1"
}

resource "null_resource" "x" {}
"#,
        );
        assert_eq!(project.runtime_version, None);
        assert!(project.providers.is_empty());
    }

    #[test]
    fn test_empty_file() {
        let project = extract("");
        assert_eq!(project.runtime_version, None);
        assert!(project.providers.is_empty());
    }

    #[test]
    fn test_provider_block_before_requirement_wins() {
        let project = extract(
            r#"
provider "azurerm" {
  features {}
}

terraform {
  required_providers {
    azurerm = { version = "3.0.0" }
  }
}
"#,
        );
        assert_eq!(project.providers, vec![provider("azurerm", None)]);
    }

    #[test]
    fn test_requirement_before_provider_block_wins() {
        let project = extract(
            r#"
terraform {
  required_providers {
    azurerm = { version = "3.0.0" }
  }
}

provider "azurerm" {}
provider "random" {}
"#,
        );
        assert_eq!(
            project.providers,
            vec![provider("azurerm", Some("3.0.0")), provider("random", None)]
        );
    }

    #[test]
    fn test_last_runtime_block_version_wins() {
        let project = extract(
            r#"
terraform {
  required_version = ">= 1.0"
}

terraform {
  required_version = ">= 1.5"
}

terraform {}
"#,
        );
        assert_eq!(project.runtime_version.as_deref(), Some(">= 1.5"));
    }

    #[test]
    fn test_later_empty_runtime_version_clears_earlier() {
        let project = extract(
            r#"
terraform {
  required_version = ">= 1.0"
}

terraform {
  required_version = ""
}
"#,
        );
        assert_eq!(project.runtime_version, None);
    }

    #[test]
    fn test_later_unsupported_runtime_version_keeps_earlier() {
        let project = extract(
            r#"
terraform {
  required_version = ">= 1.0"
}

terraform {
  required_version = var.terraform_version
}
"#,
        );
        assert_eq!(project.runtime_version.as_deref(), Some(">= 1.0"));
    }

    #[test]
    fn test_repeated_requirement_across_runtime_blocks() {
        let project = extract(
            r#"
terraform {
  required_providers {
    aws = { source = "hashicorp/aws" }
  }
}

terraform {
  required_providers {
    aws = { version = "5.0.0" }
  }
}
"#,
        );
        assert_eq!(project.providers, vec![provider("aws", None)]);
    }

    #[test]
    fn test_unlabeled_provider_block_skipped() {
        let project = extract("provider {}\n");
        assert!(project.providers.is_empty());
    }

    #[test]
    fn test_non_object_requirements_skipped() {
        let project = extract(
            r#"
terraform {
  required_providers {
    legacy = "~> 2.0"
    custom = var.provider_config
    aws = { version = "5.0.0" }
  }
}
"#,
        );
        assert_eq!(project.providers, vec![provider("aws", Some("5.0.0"))]);
    }

    #[test]
    fn test_non_primitive_versions_are_absent() {
        let project = extract(
            r#"
terraform {
  required_version = var.terraform_version
  required_providers {
    aws    = { version = ["5.0.0"] }
    google = { version = "" }
  }
}
"#,
        );
        assert_eq!(project.runtime_version, None);
        assert_eq!(project.providers, vec![provider("aws", None), provider("google", None)]);
    }

    #[test]
    fn test_collect_declarations_tags_sources() {
        let doc = parse(
            r#"
provider "aws" {}
terraform {
  required_providers {
    aws    = { version = "5.0.0" }
    google = {}
  }
}
"#,
        )
        .unwrap();
        let sources: Vec<(String, DeclarationSource)> =
            collect_declarations(&doc).into_iter().map(|d| (d.name, d.source)).collect();
        assert_eq!(
            sources,
            vec![
                ("aws".to_string(), DeclarationSource::ProviderBlock),
                ("aws".to_string(), DeclarationSource::Requirement),
                ("google".to_string(), DeclarationSource::Requirement),
            ]
        );
    }

    #[test]
    fn test_register_provider_is_first_wins() {
        let mut project = ProjectRecord::new("main.tf");
        assert!(project.register_provider("aws", None));
        assert!(!project.register_provider("aws", Some("5.0.0".to_string())));
        assert!(project.register_provider("google", Some("4.0".to_string())));
        assert_eq!(project.providers, vec![provider("aws", None), provider("google", Some("4.0"))]);
    }
}
