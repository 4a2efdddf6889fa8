//! Detection of Node.js and the package managers used to install servemon

use crate::answers::PackageManager;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// `name (version)` or `name (not installed)`
    pub fn summary(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Run `<binary> --version` and report what came back
fn detect(binary: &str, name: &'static str) -> RuntimeInfo {
    match Command::new(binary).arg("--version").output() {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    detect("node", "Node.js")
}

/// Check if a package manager is available
pub fn check_package_manager(manager: PackageManager) -> RuntimeInfo {
    detect(manager.name(), manager.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let info = detect("definitely-not-a-real-binary-4f1c", "Ghost");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.summary(), "Ghost (not installed)");
    }

    #[test]
    fn test_package_manager_check_uses_its_name() {
        let info = check_package_manager(PackageManager::Pnpm);
        assert_eq!(info.name, "pnpm");
    }

    #[test]
    fn test_summary_with_version() {
        let info = RuntimeInfo {
            name: "Node.js",
            version: Some("v20.11.0".to_string()),
            available: true,
        };
        assert_eq!(info.summary(), "Node.js (v20.11.0)");
    }
}
