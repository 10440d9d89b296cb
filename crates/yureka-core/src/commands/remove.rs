//! `remove`: delete an installed component and its barrel entry
//!
//! The directory delete and the barrel edit are two independent steps with no
//! rollback: if the barrel write fails, the directory is already gone and
//! the barrel keeps a stale export until the next successful remove.

use super::{installed_components, validate_environment, warn_if_outdated, Choice, Prompter};
use crate::barrel;
use crate::catalog;
use crate::config::ProjectLayout;
use crate::error::YurekaError;
use anyhow::Result;
use tokio::fs;
use tracing::debug;

/// What `remove` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReport {
    pub display_name: String,
    /// Export lines dropped across all barrels
    pub removed_entries: usize,
    /// The last component was removed and full teardown was offered
    pub teardown_offered: bool,
    /// The whole generated root was deleted
    pub torn_down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(RemoveReport),
    Cancelled,
    NothingInstalled,
}

/// Remove a component by catalog identifier, prompting when it is absent,
/// unknown, or not installed
pub async fn remove_component(
    layout: &ProjectLayout,
    request: Option<&str>,
    prompter: &mut dyn Prompter,
    cli_version: &str,
) -> Result<RemoveOutcome> {
    validate_environment(layout)?;
    warn_if_outdated(layout, prompter, cli_version).await?;

    let display_name = match requested_component(layout, request, prompter)? {
        Some(name) => name,
        None => match select_installed(layout, prompter)? {
            Selection::Picked(name) => name,
            Selection::Cancelled => return Ok(RemoveOutcome::Cancelled),
            Selection::Empty => return Ok(RemoveOutcome::NothingInstalled),
        },
    };

    let custom = if catalog::by_display_name(&display_name).is_some() {
        ""
    } else {
        "custom "
    };
    let confirmed = prompter.confirm(
        &format!(
            "Are you sure you want to remove the {}{} component?",
            custom, display_name
        ),
        false,
    )?;
    if !confirmed {
        prompter.info("Removal cancelled.")?;
        return Ok(RemoveOutcome::Cancelled);
    }

    let component_dir = layout.component_dir(&display_name);
    fs::remove_dir_all(&component_dir)
        .await
        .map_err(|e| YurekaError::remove(&component_dir, e))?;
    debug!(component = %display_name, "component directory removed");

    let ui_root = layout.ui_root();
    let mut removed_entries = 0;
    let mut has_entries = false;
    for path in barrel::find_existing(&ui_root) {
        let outcome = barrel::remove_entry(&path, &display_name).await?;
        removed_entries += outcome.removed;
        has_entries |= outcome.has_entries;
    }

    let teardown_offered = !has_entries && installed_components(layout)?.is_empty();
    let torn_down = teardown_offered
        && prompter.confirm(
            "No more components left. Do you want to remove Yureka UI completely?",
            false,
        )?;
    if torn_down {
        fs::remove_dir_all(&ui_root)
            .await
            .map_err(|e| YurekaError::remove(&ui_root, e))?;
        debug!("generated root removed");
    }

    Ok(RemoveOutcome::Removed(RemoveReport {
        display_name,
        removed_entries,
        teardown_offered,
        torn_down,
    }))
}

/// The requested component's display name, if it is known and installed
fn requested_component(
    layout: &ProjectLayout,
    request: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Option<String>> {
    let Some(id) = request else {
        return Ok(None);
    };

    let Some(info) = catalog::lookup(id) else {
        prompter.warn(&format!(
            "Component \"{}\" is not available in Yureka UI.",
            id
        ))?;
        return Ok(None);
    };

    if !layout.component_dir(info.display_name).is_dir() {
        prompter.warn(&format!(
            "Component \"{}\" is not installed in your project.",
            info.display_name
        ))?;
        return Ok(None);
    }

    Ok(Some(info.display_name.to_string()))
}

enum Selection {
    Picked(String),
    Cancelled,
    Empty,
}

fn select_installed(layout: &ProjectLayout, prompter: &mut dyn Prompter) -> Result<Selection> {
    let installed = installed_components(layout)?;
    if installed.is_empty() {
        return Ok(Selection::Empty);
    }

    let choices: Vec<Choice> = installed
        .iter()
        .map(|component| Choice {
            value: component.display_name.clone(),
            label: component.display_name.clone(),
            hint: component.description().to_string(),
        })
        .collect();

    // Only values from `installed` are accepted back
    Ok(
        match prompter.select("Select a component to remove", &choices)? {
            Some(name) if installed.iter().any(|c| c.display_name == name) => {
                Selection::Picked(name)
            }
            _ => Selection::Cancelled,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrel::HEADER;
    use crate::commands::testing::ScriptedPrompter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const CLI_VERSION: &str = "0.1.0";

    /// Project with the given component directories and a barrel exporting them
    fn project_with(components: &[&str]) -> (TempDir, ProjectLayout) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::create_dir_all(layout.ui_root()).unwrap();

        let mut barrel = HEADER.to_string();
        for name in components {
            std::fs::create_dir_all(layout.component_dir(name)).unwrap();
            barrel.push_str(&barrel::export_line(name));
            barrel.push('\n');
        }
        std::fs::write(layout.ui_root().join("index.js"), barrel).unwrap();
        (dir, layout)
    }

    async fn remove(
        layout: &ProjectLayout,
        request: Option<&str>,
        prompter: &mut ScriptedPrompter,
    ) -> RemoveOutcome {
        remove_component(layout, request, prompter, CLI_VERSION)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_declined_confirmation_keeps_component() {
        let (_dir, layout) = project_with(&["Button"]);
        let mut prompter = ScriptedPrompter::default().confirm_then(false);

        assert_eq!(
            remove(&layout, Some("button"), &mut prompter).await,
            RemoveOutcome::Cancelled
        );
        assert!(layout.component_dir("Button").is_dir());
    }

    #[tokio::test]
    async fn test_remove_keeps_similar_names() {
        let (_dir, layout) = project_with(&["ButtonGroup", "Button", "Card"]);
        let mut prompter = ScriptedPrompter::default().confirm_then(true);

        let outcome = remove(&layout, Some("button"), &mut prompter).await;
        assert_eq!(
            outcome,
            RemoveOutcome::Removed(RemoveReport {
                display_name: "Button".to_string(),
                removed_entries: 1,
                teardown_offered: false,
                torn_down: false,
            })
        );

        let content = std::fs::read_to_string(layout.ui_root().join("index.js")).unwrap();
        assert_eq!(barrel::entries(&content), vec!["ButtonGroup", "Card"]);
        assert!(layout.component_dir("ButtonGroup").is_dir());
    }

    #[tokio::test]
    async fn test_not_installed_falls_back_to_selection() {
        let (_dir, layout) = project_with(&["Card"]);
        let mut prompter = ScriptedPrompter::default()
            .select_then(Some("Card"))
            .confirm_then(true)
            .confirm_then(false);

        let RemoveOutcome::Removed(report) = remove(&layout, Some("modal"), &mut prompter).await
        else {
            panic!("expected a removal");
        };
        assert_eq!(report.display_name, "Card");
        assert!(prompter.warnings[0].contains("not installed"));
    }

    #[tokio::test]
    async fn test_custom_component_can_be_removed_via_selection() {
        let (_dir, layout) = project_with(&["Fancy", "Card"]);
        let mut prompter = ScriptedPrompter::default()
            .select_then(Some("Fancy"))
            .confirm_then(true);

        let RemoveOutcome::Removed(report) = remove(&layout, None, &mut prompter).await else {
            panic!("expected a removal");
        };
        assert_eq!(report.display_name, "Fancy");
        assert!(prompter.asked.iter().any(|q| q.contains("custom Fancy")));
        assert!(!layout.component_dir("Fancy").exists());
    }

    #[tokio::test]
    async fn test_nothing_installed() {
        let (_dir, layout) = project_with(&[]);
        let mut prompter = ScriptedPrompter::default();
        assert_eq!(
            remove(&layout, None, &mut prompter).await,
            RemoveOutcome::NothingInstalled
        );
    }

    #[tokio::test]
    async fn test_last_component_teardown_confirmed() {
        let (_dir, layout) = project_with(&["Toast"]);
        let mut prompter = ScriptedPrompter::default()
            .confirm_then(true)
            .confirm_then(true);

        let RemoveOutcome::Removed(report) = remove(&layout, Some("toast"), &mut prompter).await
        else {
            panic!("expected a removal");
        };
        assert!(report.teardown_offered);
        assert!(report.torn_down);
        assert!(!layout.ui_root().exists());
    }
}
