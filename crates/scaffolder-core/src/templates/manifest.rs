//! Template manifest types and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the manifest inside each template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Per-template manifest (templates/<name>/template.yaml)
///
/// The manifest only describes the template; it is never copied into a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse template manifest")
    }
}
