//! Command orchestration: `init`, `add` and `remove`
//!
//! Orchestrators sequence the probe, resolver, extension policy, file writes
//! and barrel updates. User interaction goes through the [`Prompter`] trait so
//! the flows can run against the terminal UI or a scripted test double.

pub mod add;
pub mod init;
pub mod remove;

use crate::catalog::{self, ComponentInfo};
use crate::config::{self, ProjectLayout, YurekaConfig};
use crate::error::YurekaError;
use anyhow::{Context, Result};
use walkdir::WalkDir;

pub use add::{add_component, AddOutcome, AddReport};
pub use init::{init_project, InitOptions, InitOutcome, InitReport};
pub use remove::{remove_component, RemoveOutcome, RemoveReport};

/// An option offered in a selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value returned when the option is picked
    pub value: String,
    pub label: String,
    pub hint: String,
}

/// Interactive collaborator used by the orchestrators
pub trait Prompter {
    /// Pick one of `choices`; `None` means the user cancelled
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<Option<String>>;

    /// Ask a yes/no question; cancelling counts as "no"
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Show a non-fatal warning
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Show an informational message
    fn info(&mut self, message: &str) -> Result<()>;
}

/// A directory under the generated root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledComponent {
    pub display_name: String,
    /// Catalog entry, or None for a component the user added by hand
    pub info: Option<&'static ComponentInfo>,
}

impl InstalledComponent {
    pub fn description(&self) -> &str {
        self.info.map_or("Custom component", |info| info.description)
    }
}

/// Fail unless `package.json` and the generated root both exist
pub fn validate_environment(layout: &ProjectLayout) -> Result<()> {
    if !layout.package_json().is_file() {
        return Err(YurekaError::MissingPackageJson(layout.root().to_path_buf()).into());
    }
    if !layout.ui_root().is_dir() {
        return Err(YurekaError::NotInitialized.into());
    }
    Ok(())
}

/// Component directories in the generated root, sorted by name
///
/// Hidden entries (staging areas) and `node_modules` are skipped.
pub fn installed_components(layout: &ProjectLayout) -> Result<Vec<InstalledComponent>> {
    let root = layout.ui_root();
    let mut components = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.starts_with('.') || name == "node_modules" {
            continue;
        }
        components.push(InstalledComponent {
            display_name: name.to_string(),
            info: catalog::by_display_name(name),
        });
    }

    components.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    Ok(components)
}

/// Warn when the project was initialized by a newer CLI
async fn warn_if_outdated(
    layout: &ProjectLayout,
    prompter: &mut dyn Prompter,
    cli_version: &str,
) -> Result<()> {
    let Some(project) = YurekaConfig::load(layout).await? else {
        return Ok(());
    };
    if let Some(warning) =
        config::check_compatibility(cli_version, &project.version, config::UPGRADE_COMMAND)
    {
        prompter.warn(&warning)?;
    }
    Ok(())
}
