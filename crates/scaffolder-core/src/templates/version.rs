//! Version comparison between the CLI and the templates it copies

use semver::Version;

/// Warn when a template expects a newer CLI than the one running
///
/// Unparseable versions (either side) never produce a warning.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = Version::parse(cli_version.trim_start_matches('v')).ok()?;
    let template_ver = Version::parse(template_version.trim_start_matches('v')).ok()?;

    if cli_ver < template_ver {
        Some(format!(
            "Template targets CLI {} or newer, you are running {}. Update with: {}",
            template_ver, cli_ver, upgrade_command
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install create-static-website --force";

    #[test]
    fn test_cli_older_than_template() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE).unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains(UPGRADE));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.2.0", "0.2.0", UPGRADE).is_none());
        assert!(check_compatibility("1.0.0", "0.2.0", UPGRADE).is_none());
    }

    #[test]
    fn test_leading_v_is_accepted() {
        assert!(check_compatibility("v0.1.0", "v0.3.0", UPGRADE).is_some());
    }

    #[test]
    fn test_invalid_versions() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "latest", UPGRADE).is_none());
    }
}
