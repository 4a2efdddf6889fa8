//! Answers collected from the question sequence, plus per-field validation

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Default project name offered by the prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Default author offered by the prompt
pub const DEFAULT_AUTHOR: &str = "NO_AUTHOR";

/// Bundled template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Bootstrap,
    Simple,
}

impl TemplateKind {
    /// All templates in prompt order
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Bootstrap, TemplateKind::Simple];

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Bootstrap => "Bootstrap",
            TemplateKind::Simple => "Simple",
        }
    }

    /// Directory name of the template inside a template source
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateKind::Bootstrap => "bootstrap",
            TemplateKind::Simple => "simple",
        }
    }

    /// Resolve a template name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bootstrap" => Some(TemplateKind::Bootstrap),
            "simple" => Some(TemplateKind::Simple),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Package managers that can install the companion tool globally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// All package managers in prompt order
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
    ];

    /// Binary name, also used as the display name
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Command that installs `package` globally
    pub fn global_install_command(&self, package: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm install -g {}", package),
            PackageManager::Yarn => format!("yarn global add {}", package),
            PackageManager::Pnpm => format!("pnpm add -g {}", package),
        }
    }

    /// Resolve a package manager name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The validated result of the question sequence
///
/// `template` and `package_manager` hold names rather than enums: the prompts
/// only offer known values, but names passed on the command line are resolved
/// when the corresponding step runs so an unknown name is reported there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub project_name: String,
    pub target_dir: PathBuf,
    pub author: String,
    pub template: String,
    pub use_servemon: bool,
    pub install_servemon: bool,
    pub package_manager: String,
}

impl AnswerSet {
    pub fn template_kind(&self) -> Option<TemplateKind> {
        TemplateKind::from_name(&self.template)
    }

    pub fn package_manager_kind(&self) -> Option<PackageManager> {
        PackageManager::from_name(&self.package_manager)
    }
}

/// Project name must contain something other than whitespace
pub fn validate_project_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Project name cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Author must contain something other than whitespace
pub fn validate_author(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Author name cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Target directory must not exist yet and must end in a plain name
pub fn validate_target_dir(path: &Path) -> Result<(), String> {
    // `new/..` or `.` would have its parents created before the leaf is checked
    if !matches!(path.components().next_back(), Some(Component::Normal(_))) {
        return Err(format!("{} must end with a directory name", path.display()));
    }
    // symlink_metadata so a dangling symlink still counts as taken
    if path.symlink_metadata().is_ok() {
        Err(format!("{} already exists", path.display()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_names_are_valid() {
        for value in ["a", "my-project", " padded ", "NO_AUTHOR", "ünïcode"] {
            assert!(validate_project_name(value).is_ok());
            assert!(validate_author(value).is_ok());
        }
    }

    #[test]
    fn test_empty_names_are_rejected_with_message() {
        for value in ["", "   ", "\t\n"] {
            let err = validate_project_name(value).unwrap_err();
            assert!(!err.is_empty());
            let err = validate_author(value).unwrap_err();
            assert!(!err.is_empty());
        }
    }

    #[test]
    fn test_target_dir_validation() {
        let tmp = tempfile::tempdir().unwrap();

        let fresh = tmp.path().join("site");
        assert!(validate_target_dir(&fresh).is_ok());

        let err = validate_target_dir(tmp.path()).unwrap_err();
        assert!(err.contains("already exists"));

        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        assert!(validate_target_dir(&file).is_err());
    }

    #[test]
    fn test_target_dir_must_end_in_a_name() {
        let tmp = tempfile::tempdir().unwrap();

        let err = validate_target_dir(&tmp.path().join("new/..")).unwrap_err();
        assert!(err.contains("must end with a directory name"));
        assert!(validate_target_dir(Path::new(".")).is_err());
        assert!(validate_target_dir(Path::new("")).is_err());
        assert!(!tmp.path().join("new").exists());

        assert!(validate_target_dir(&tmp.path().join("new/site")).is_ok());
    }

    #[test]
    fn test_template_names_resolve_case_insensitively() {
        assert_eq!(TemplateKind::from_name("Simple"), Some(TemplateKind::Simple));
        assert_eq!(
            TemplateKind::from_name("bootstrap"),
            Some(TemplateKind::Bootstrap)
        );
        assert_eq!(TemplateKind::from_name("Fancy"), None);
    }

    #[test]
    fn test_global_install_commands() {
        assert_eq!(
            PackageManager::Npm.global_install_command("servemon"),
            "npm install -g servemon"
        );
        assert_eq!(
            PackageManager::Yarn.global_install_command("servemon"),
            "yarn global add servemon"
        );
        assert_eq!(
            PackageManager::Pnpm.global_install_command("servemon"),
            "pnpm add -g servemon"
        );
        assert_eq!(PackageManager::from_name("bun"), None);
    }
}
