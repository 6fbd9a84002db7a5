//! Names recognised in Terraform configuration files.

/// Suffix a file name must end with to be scanned (case-sensitive)
pub const TERRAFORM_FILE_SUFFIX: &str = ".tf";

/// Top-level block declaring the required Terraform version and providers
pub const RUNTIME_BLOCK: &str = "terraform";

/// Top-level block configuring a single provider, labeled with its name
pub const PROVIDER_BLOCK: &str = "provider";

/// Block nested in the runtime block that maps provider names to requirements
pub const REQUIRED_PROVIDERS_BLOCK: &str = "required_providers";

/// Attribute of the runtime block holding the version constraint
pub const REQUIRED_VERSION_ATTR: &str = "required_version";

/// Field of a required provider object holding its version constraint
pub const VERSION_FIELD: &str = "version";
