//! Where template trees come from: embedded in the binary or a local directory
//!
//! The bundled templates are compiled in with `include_dir`, so the binary
//! works from any working directory. A local directory with the same layout
//! (`simple/`, `bootstrap/`) can replace them during template development.

use super::manifest::{TemplateManifest, MANIFEST_FILE};
use crate::answers::TemplateKind;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use std::path::PathBuf;
use tokio::fs;

pub(crate) static BUNDLED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template source - either bundled with the binary or a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the source: explicit directory, then the product's env var, then bundled
    pub fn from_config<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Self {
        if let Some(path) = template_dir {
            return Self::Local(path);
        }
        match std::env::var(config.template_dir_env()) {
            Ok(path) if !path.trim().is_empty() => Self::Local(PathBuf::from(path)),
            _ => Self::Bundled,
        }
    }

    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Whether the source contains a directory for this template
    pub fn has_template(&self, kind: TemplateKind) -> bool {
        match self {
            TemplateSource::Bundled => BUNDLED_TEMPLATES.get_dir(kind.dir_name()).is_some(),
            TemplateSource::Local(path) => path.join(kind.dir_name()).is_dir(),
        }
    }

    /// Read and parse a template's manifest
    pub async fn manifest(&self, kind: TemplateKind) -> Result<TemplateManifest> {
        let relative = format!("{}/{}", kind.dir_name(), MANIFEST_FILE);
        let content = match self {
            TemplateSource::Bundled => BUNDLED_TEMPLATES
                .get_file(&relative)
                .and_then(|file| file.contents_utf8())
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Bundled template is missing {}", relative))?,
            TemplateSource::Local(path) => {
                let manifest_path = path.join(&relative);
                fs::read_to_string(&manifest_path)
                    .await
                    .with_context(|| format!("Failed to read {}", manifest_path.display()))?
            }
        };
        TemplateManifest::parse(&content)
            .with_context(|| format!("Invalid manifest for template '{}'", kind))
    }

    /// Human-readable description for log lines
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Bundled => "bundled templates".to_string(),
            TemplateSource::Local(path) => format!("local templates from {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_source_has_every_template() {
        for kind in TemplateKind::ALL {
            assert!(TemplateSource::Bundled.has_template(kind));
        }
    }

    #[tokio::test]
    async fn test_bundled_manifests_parse() {
        for kind in TemplateKind::ALL {
            let manifest = TemplateSource::Bundled.manifest(kind).await.unwrap();
            assert_eq!(manifest.name, kind.display_name());
            assert!(semver::Version::parse(&manifest.version).is_ok());
        }
    }

    #[tokio::test]
    async fn test_local_source_reads_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let simple = tmp.path().join("simple");
        std::fs::create_dir(&simple).unwrap();
        std::fs::write(
            simple.join(MANIFEST_FILE),
            "name: Local Simple\nversion: 9.9.9\n",
        )
        .unwrap();

        let source = TemplateSource::local(tmp.path().to_path_buf());
        assert!(source.has_template(TemplateKind::Simple));
        assert!(!source.has_template(TemplateKind::Bootstrap));

        let manifest = source.manifest(TemplateKind::Simple).await.unwrap();
        assert_eq!(manifest.name, "Local Simple");
        assert!(source.manifest(TemplateKind::Bootstrap).await.is_err());
    }
}
