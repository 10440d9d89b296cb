//! `add`: install a component into the generated root
//!
//! Files are assembled in a hidden staging directory and only moved into
//! place once every file has been written, so a failed write never leaves a
//! half-populated component behind. The barrel is updated after the move.

use super::{validate_environment, warn_if_outdated, Choice, Prompter};
use crate::barrel;
use crate::catalog::{self, ComponentInfo};
use crate::config::ProjectLayout;
use crate::error::YurekaError;
use crate::project::ProjectConfig;
use crate::templates::{TemplateFile, TemplateOrigin, TemplateResolver};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// What `add` did
#[derive(Debug, Clone)]
pub struct AddReport {
    pub component: &'static ComponentInfo,
    pub project: ProjectConfig,
    pub origin: TemplateOrigin,
    pub component_dir: PathBuf,
    /// File names written into the component directory
    pub files: Vec<String>,
    pub barrel: PathBuf,
    /// False when the barrel already exported the component
    pub barrel_updated: bool,
    /// True when an existing component directory was overwritten
    pub replaced: bool,
}

#[derive(Debug, Clone)]
pub enum AddOutcome {
    Added(AddReport),
    Cancelled,
}

/// Add a component by catalog identifier, prompting when it is absent or unknown
pub async fn add_component(
    layout: &ProjectLayout,
    resolver: &TemplateResolver,
    request: Option<&str>,
    prompter: &mut dyn Prompter,
    cli_version: &str,
) -> Result<AddOutcome> {
    let Some(info) = choose_component(request, prompter)? else {
        return Ok(AddOutcome::Cancelled);
    };

    validate_environment(layout)?;
    warn_if_outdated(layout, prompter, cli_version).await?;

    let project = ProjectConfig::detect(layout);
    let name = info.display_name;
    let resolved = resolver.resolve(
        name,
        project.uses_style_framework,
        project.typed_templates(),
        project.source_extension,
    )?;

    let index_ext = project.manifest_extension();
    let mut files = resolved.files;
    files.push(TemplateFile {
        name: format!("index{}", index_ext),
        content: format!("export {{ default }} from './{}';\n", name),
    });

    let replaced = install_files(layout, name, &files).await?;

    let barrel = barrel::locate(&layout.ui_root(), index_ext);
    let barrel_updated = barrel::add_entry(&barrel, name).await?;

    Ok(AddOutcome::Added(AddReport {
        component: info,
        project,
        origin: resolved.origin,
        component_dir: layout.component_dir(name),
        files: files.into_iter().map(|f| f.name).collect(),
        barrel,
        barrel_updated,
        replaced,
    }))
}

/// Resolve the request against the catalog, falling back to a selection prompt
fn choose_component(
    request: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Option<&'static ComponentInfo>> {
    if let Some(id) = request {
        match catalog::lookup(id) {
            Some(info) => return Ok(Some(info)),
            None => prompter.warn(&format!(
                "Component \"{}\" is not available in Yureka UI.",
                id
            ))?,
        }
    }

    let choices: Vec<Choice> = catalog::all()
        .iter()
        .map(|info| Choice {
            value: info.id.to_string(),
            label: info.display_name.to_string(),
            hint: info.description.to_string(),
        })
        .collect();

    let selected = prompter.select("Select a component to add", &choices)?;
    Ok(selected.as_deref().and_then(catalog::lookup))
}

/// Write `files` into the component directory via a staging directory
///
/// Returns whether an existing component directory was replaced.
async fn install_files(
    layout: &ProjectLayout,
    display_name: &str,
    files: &[TemplateFile],
) -> Result<bool> {
    let staging = layout.staging_dir(display_name);
    let target = layout.component_dir(display_name);

    if staging.exists() {
        fs::remove_dir_all(&staging)
            .await
            .map_err(|e| YurekaError::remove(&staging, e))?;
    }
    fs::create_dir_all(&staging)
        .await
        .map_err(|e| YurekaError::write(&staging, e))?;

    if let Err(e) = write_files(&staging, files).await {
        let _ = fs::remove_dir_all(&staging).await;
        return Err(e);
    }

    let backup = if target.exists() {
        let backup = layout.backup_dir(display_name);
        if let Err(e) = park_existing(&target, &backup).await {
            let _ = fs::remove_dir_all(&staging).await;
            return Err(e);
        }
        Some(backup)
    } else {
        None
    };

    if let Err(e) = fs::rename(&staging, &target).await {
        if let Some(backup) = &backup {
            let _ = fs::rename(backup, &target).await;
        }
        let _ = fs::remove_dir_all(&staging).await;
        return Err(YurekaError::write(&target, e).into());
    }

    // The new component is live; a leftover backup must not block the export
    if let Some(backup) = &backup {
        if let Err(e) = fs::remove_dir_all(backup).await {
            warn!(path = %backup.display(), error = %e, "failed to remove replaced component");
        }
    }

    debug!(component = display_name, replaced = backup.is_some(), "component installed");
    Ok(backup.is_some())
}

/// Move the live component aside so the staged one can take its place
async fn park_existing(target: &Path, backup: &Path) -> Result<()> {
    if backup.exists() {
        fs::remove_dir_all(backup)
            .await
            .map_err(|e| YurekaError::remove(backup, e))?;
    }
    fs::rename(target, backup)
        .await
        .map_err(|e| YurekaError::write(backup, e))?;
    Ok(())
}

async fn write_files(dir: &Path, files: &[TemplateFile]) -> Result<()> {
    for file in files {
        let path = dir.join(&file.name);
        fs::write(&path, &file.content)
            .await
            .map_err(|e| YurekaError::write(&path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedPrompter;
    use tempfile::TempDir;

    const CLI_VERSION: &str = "0.1.0";

    fn initialized_project(package_json: &str) -> (TempDir, ProjectLayout) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), package_json).unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::create_dir_all(layout.ui_root()).unwrap();
        (dir, layout)
    }

    async fn add(
        layout: &ProjectLayout,
        request: Option<&str>,
        prompter: &mut ScriptedPrompter,
    ) -> AddOutcome {
        add_component(
            layout,
            &TemplateResolver::default(),
            request,
            prompter,
            CLI_VERSION,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_component_falls_back_to_selection() {
        let (_dir, layout) = initialized_project("{}");
        let mut prompter = ScriptedPrompter::default().select_then(Some("card"));

        let AddOutcome::Added(report) = add(&layout, Some("acordion"), &mut prompter).await else {
            panic!("expected component to be added");
        };
        assert_eq!(report.component.display_name, "Card");
        assert_eq!(prompter.warnings.len(), 1);
        assert!(prompter.warnings[0].contains("acordion"));
    }

    #[tokio::test]
    async fn test_cancelled_selection_writes_nothing() {
        let (_dir, layout) = initialized_project("{}");
        let mut prompter = ScriptedPrompter::default().select_then(None);

        let outcome = add(&layout, None, &mut prompter).await;
        assert!(matches!(outcome, AddOutcome::Cancelled));
        assert!(!barrel::barrel_path(&layout.ui_root(), crate::project::SourceExtension::Js)
            .exists());
    }

    #[tokio::test]
    async fn test_uninitialized_project_is_fatal() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let layout = ProjectLayout::new(dir.path());
        let mut prompter = ScriptedPrompter::default();

        let err = add_component(
            &layout,
            &TemplateResolver::default(),
            Some("button"),
            &mut prompter,
            CLI_VERSION,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<YurekaError>(),
            Some(YurekaError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_reinstall_replaces_directory_and_leaves_no_staging() {
        let (_dir, layout) = initialized_project("{}");
        let mut prompter = ScriptedPrompter::default();

        add(&layout, Some("button"), &mut prompter).await;
        let stray = layout.component_dir("Button").join("notes.txt");
        std::fs::write(&stray, "stale").unwrap();

        let AddOutcome::Added(report) = add(&layout, Some("button"), &mut prompter).await else {
            panic!("expected component to be added");
        };
        assert!(report.replaced);
        assert!(!report.barrel_updated);
        assert!(!stray.exists());
        assert!(!layout.staging_dir("Button").exists());
        assert!(!layout.backup_dir("Button").exists());
    }

    #[tokio::test]
    async fn test_newer_project_version_warns() {
        let (_dir, layout) = initialized_project("{}");
        std::fs::write(layout.config_file(), r#"{ "version": "9.0.0" }"#).unwrap();
        let mut prompter = ScriptedPrompter::default();

        add(&layout, Some("toggle"), &mut prompter).await;
        assert!(prompter.warnings.iter().any(|w| w.contains("9.0.0")));
    }

    #[tokio::test]
    async fn test_ts_convention_uses_js_index() {
        let (dir, layout) = initialized_project(r#"{ "devDependencies": { "typescript": "5" } }"#);
        std::fs::write(dir.path().join("components/utils.ts"), "").unwrap();
        let mut prompter = ScriptedPrompter::default();

        let AddOutcome::Added(report) = add(&layout, Some("select"), &mut prompter).await else {
            panic!("expected component to be added");
        };
        assert!(report.files.contains(&"Select.ts".to_string()));
        assert!(report.files.contains(&"index.js".to_string()));
        assert_eq!(report.barrel, layout.ui_root().join("index.js"));
    }

    /// Existing `Card` install with its barrel entry, for failure tests
    fn project_with_card() -> (TempDir, ProjectLayout, String) {
        let (dir, layout) = initialized_project("{}");
        std::fs::create_dir_all(layout.component_dir("Card")).unwrap();
        let barrel = format!("{}{}\n", barrel::HEADER, barrel::export_line("Card"));
        std::fs::write(layout.ui_root().join("index.js"), &barrel).unwrap();
        (dir, layout, barrel)
    }

    async fn add_err(layout: &ProjectLayout, request: &str) -> anyhow::Error {
        add_component(
            layout,
            &TemplateResolver::default(),
            Some(request),
            &mut ScriptedPrompter::default(),
            CLI_VERSION,
        )
        .await
        .unwrap_err()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_move_into_place_cleans_staging() {
        let (dir, layout, barrel) = project_with_card();
        // A dangling link where the component directory goes cannot be replaced by a directory
        std::os::unix::fs::symlink(dir.path().join("missing"), layout.component_dir("Button"))
            .unwrap();

        let err = add_err(&layout, "button").await;
        assert!(matches!(
            err.downcast_ref::<YurekaError>(),
            Some(YurekaError::Write { .. })
        ));
        assert!(!layout.staging_dir("Button").exists());
        assert!(std::fs::symlink_metadata(layout.component_dir("Button"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(
            std::fs::read_to_string(layout.ui_root().join("index.js")).unwrap(),
            barrel
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_read_only_root_leaves_live_tree_untouched() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, layout, barrel) = project_with_card();
        let card_file = layout.component_dir("Card").join("Card.js");
        std::fs::write(&card_file, "hand edited").unwrap();

        let ui_root = layout.ui_root();
        std::fs::set_permissions(&ui_root, std::fs::Permissions::from_mode(0o555)).unwrap();
        let writable = std::fs::write(ui_root.join(".writable"), "").is_ok();
        if writable {
            // Permission bits are not enforced for this user (e.g. root)
            std::fs::set_permissions(&ui_root, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let err = add_err(&layout, "card").await;
        std::fs::set_permissions(&ui_root, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(
            err.downcast_ref::<YurekaError>(),
            Some(YurekaError::Write { .. })
        ));
        assert!(!layout.staging_dir("Card").exists());
        assert_eq!(std::fs::read_to_string(&card_file).unwrap(), "hand edited");
        assert_eq!(std::fs::read_to_string(ui_root.join("index.js")).unwrap(), barrel);
    }

    #[tokio::test]
    async fn test_failed_park_cleans_staging_and_keeps_component() {
        let (_dir, layout, barrel) = project_with_card();
        let card_file = layout.component_dir("Card").join("Card.js");
        std::fs::write(&card_file, "hand edited").unwrap();
        // A stray file where the backup directory goes
        std::fs::write(layout.backup_dir("Card"), "").unwrap();

        let err = add_err(&layout, "card").await;
        assert!(matches!(
            err.downcast_ref::<YurekaError>(),
            Some(YurekaError::Remove { .. })
        ));
        assert!(!layout.staging_dir("Card").exists());
        assert_eq!(std::fs::read_to_string(&card_file).unwrap(), "hand edited");
        assert_eq!(
            std::fs::read_to_string(layout.ui_root().join("index.js")).unwrap(),
            barrel
        );
    }
}
