//! Recursive template tree copying

use super::manifest::MANIFEST_FILE;
use super::source::{TemplateSource, BUNDLED_TEMPLATES};
use crate::answers::TemplateKind;
use anyhow::{Context, Result};
use include_dir::Dir;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy a template tree into the target directory, preserving its structure
///
/// Returns the copied file paths relative to the target, `/`-separated.
/// The template's own manifest is not copied.
pub async fn copy_template(
    source: &TemplateSource,
    kind: TemplateKind,
    target_dir: &Path,
) -> Result<Vec<String>> {
    match source {
        TemplateSource::Bundled => {
            let dir = BUNDLED_TEMPLATES
                .get_dir(kind.dir_name())
                .ok_or_else(|| anyhow::anyhow!("Template '{}' is not bundled", kind))?;
            copy_bundled(dir, target_dir).await
        }
        TemplateSource::Local(path) => copy_local(&path.join(kind.dir_name()), target_dir).await,
    }
}

async fn copy_bundled<'a>(template: &'a Dir<'a>, target_dir: &Path) -> Result<Vec<String>> {
    let mut copied_files = Vec::new();
    let mut pending: Vec<&'a Dir<'a>> = vec![template];

    while let Some(dir) = pending.pop() {
        let relative_dir = dir
            .path()
            .strip_prefix(template.path())
            .unwrap_or(dir.path());
        let target = target_dir.join(relative_dir);
        fs::create_dir_all(&target)
            .await
            .with_context(|| format!("Failed to create directory: {}", target.display()))?;

        for file in dir.files() {
            let relative = file.path().strip_prefix(template.path()).unwrap_or(file.path());
            if relative == Path::new(MANIFEST_FILE) {
                continue;
            }

            let target_path = target_dir.join(relative);
            fs::write(&target_path, file.contents())
                .await
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
            copied_files.push(to_slash(relative));
        }

        pending.extend(dir.dirs());
    }

    copied_files.sort();
    Ok(copied_files)
}

async fn copy_local(template_dir: &Path, target_dir: &Path) -> Result<Vec<String>> {
    if !template_dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_dir.display());
    }

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(template_dir).min_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to read template {}", template_dir.display()))?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .context("Template entry outside of template directory")?;
        let target_path = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
            continue;
        }

        if relative == Path::new(MANIFEST_FILE) {
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target_path)
            .await
            .with_context(|| format!("Failed to copy file: {}", entry.path().display()))?;
        copied_files.push(to_slash(relative));
    }

    copied_files.sort();
    Ok(copied_files)
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_bundled_simple() {
        let tmp = tempfile::tempdir().unwrap();

        let copied = copy_template(&TemplateSource::Bundled, TemplateKind::Simple, tmp.path())
            .await
            .unwrap();

        assert_eq!(copied, vec!["css/style.css", "index.html", "js/main.js"]);
        assert!(tmp.path().join("index.html").is_file());
        assert!(tmp.path().join("css/style.css").is_file());
        assert!(!tmp.path().join(MANIFEST_FILE).exists());
    }

    #[tokio::test]
    async fn test_copy_bundled_bootstrap_keeps_nested_assets() {
        let tmp = tempfile::tempdir().unwrap();

        let copied = copy_template(&TemplateSource::Bundled, TemplateKind::Bootstrap, tmp.path())
            .await
            .unwrap();

        assert!(copied.contains(&"img/logo.svg".to_string()));
        let index = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.contains("bootstrap"));
    }

    #[tokio::test]
    async fn test_copy_local_preserves_structure() {
        let templates = tempfile::tempdir().unwrap();
        let simple = templates.path().join("simple");
        std::fs::create_dir_all(simple.join("assets/fonts")).unwrap();
        std::fs::create_dir_all(simple.join("empty")).unwrap();
        std::fs::write(simple.join(MANIFEST_FILE), "name: x\nversion: 0.1.0\n").unwrap();
        std::fs::write(simple.join("index.html"), "<h1>local</h1>").unwrap();
        std::fs::write(simple.join("assets/fonts/a.woff2"), [0u8, 1, 2]).unwrap();

        let target = tempfile::tempdir().unwrap();
        let source = TemplateSource::local(templates.path().to_path_buf());
        let copied = copy_template(&source, TemplateKind::Simple, target.path())
            .await
            .unwrap();

        assert_eq!(copied, vec!["assets/fonts/a.woff2", "index.html"]);
        assert!(target.path().join("empty").is_dir());
        assert_eq!(
            std::fs::read(target.path().join("assets/fonts/a.woff2")).unwrap(),
            vec![0u8, 1, 2]
        );
        assert!(!target.path().join(MANIFEST_FILE).exists());
    }

    #[tokio::test]
    async fn test_copy_local_missing_template_fails() {
        let templates = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let source = TemplateSource::local(templates.path().to_path_buf());

        let err = copy_template(&source, TemplateKind::Bootstrap, target.path())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Template directory not found"));
    }
}
