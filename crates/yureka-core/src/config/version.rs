//! Version comparison between the running CLI and the one that initialized the project

use semver::Version;

/// Compare the CLI version against the version recorded in `yureka.config.json`
/// Returns a warning message if the project was initialized by a newer CLI
pub fn check_compatibility(
    cli_version: &str,
    project_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let project_ver = parse_version(project_version)?;

    if cli_ver < project_ver {
        Some(format!(
            "This project was initialized with Yureka UI {}, but you are running {}. \
             Consider updating: {}",
            project_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v`
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
