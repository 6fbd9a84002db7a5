use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    /// Version constraint, None when the provider is unconstrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    pub providers: Vec<ProviderInfo>,
}

impl ProjectRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), runtime_version: None, providers: Vec::new() }
    }

    /// Record a provider unless one with the same name is already present.
    ///
    /// The first registration of a name fixes its version, even when it is `None` and a
    /// later one carries a constraint. Returns whether the provider was added.
    pub fn register_provider(&mut self, name: &str, version: Option<String>) -> bool {
        if self.providers.iter().any(|p| p.name == name) {
            return false;
        }
        self.providers.push(ProviderInfo { name: name.to_string(), version });
        true
    }
}

/// Where a provider declaration was found within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationSource {
    /// An entry of `terraform { required_providers { ... } }`
    Requirement,
    /// A standalone `provider "<name>" { ... }` block
    ProviderBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDeclaration {
    pub name: String,
    pub version: Option<String>,
    pub source: DeclarationSource,
}
