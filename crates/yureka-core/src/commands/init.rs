//! `init`: prepare a project for Yureka UI components

use super::Prompter;
use crate::barrel;
use crate::config::{ProjectLayout, YurekaConfig};
use crate::error::YurekaError;
use crate::project::{PackageInstaller, ProjectConfig, ProjectProbe};
use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;

/// Runtime packages every generated component imports
const PEER_DEPENDENCIES: &[&str] = &["react", "react-dom"];

#[derive(Debug, Clone)]
pub struct InitOptions {
    pub cli_version: String,
    /// Offer to install missing peer dependencies
    pub install_dependencies: bool,
}

#[derive(Debug, Clone)]
pub struct InitReport {
    pub project: ProjectConfig,
    pub barrel: PathBuf,
    /// Peer dependencies that were absent from package.json
    pub missing_peers: Vec<String>,
    pub installed_peers: bool,
}

#[derive(Debug, Clone)]
pub enum InitOutcome {
    Initialized(InitReport),
    AlreadyInitialized,
}

/// Create the generated root, its config and an empty barrel
///
/// `installer` is only used when peers are missing, installation is enabled
/// and the user agrees.
pub async fn init_project(
    layout: &ProjectLayout,
    prompter: &mut dyn Prompter,
    options: &InitOptions,
    installer: Option<&PackageInstaller>,
) -> Result<InitOutcome> {
    let probe = ProjectProbe::new(layout);
    if !probe.has_package_manifest() {
        return Err(YurekaError::MissingPackageJson(layout.root().to_path_buf()).into());
    }

    if layout.config_file().is_file() {
        return Ok(InitOutcome::AlreadyInitialized);
    }

    let ui_root = layout.ui_root();
    fs::create_dir_all(&ui_root)
        .await
        .map_err(|e| YurekaError::write(&ui_root, e))?;
    YurekaConfig::new(&options.cli_version).save(layout).await?;

    let project = ProjectConfig::detect(layout);
    let barrel = barrel::locate(&ui_root, project.manifest_extension());
    barrel::ensure(&barrel).await?;

    let missing_peers: Vec<String> = match probe.package_manifest() {
        Some(manifest) => {
            let present = manifest.dependency_names();
            PEER_DEPENDENCIES
                .iter()
                .filter(|name| !present.contains(*name))
                .map(|name| name.to_string())
                .collect()
        }
        None => Vec::new(),
    };

    let installed_peers =
        install_peers(&missing_peers, prompter, options, installer).await?;

    Ok(InitOutcome::Initialized(InitReport {
        project,
        barrel,
        missing_peers,
        installed_peers,
    }))
}

async fn install_peers(
    missing: &[String],
    prompter: &mut dyn Prompter,
    options: &InitOptions,
    installer: Option<&PackageInstaller>,
) -> Result<bool> {
    if missing.is_empty() {
        return Ok(false);
    }

    let Some(installer) = installer.filter(|_| options.install_dependencies) else {
        prompter.warn(&format!(
            "Missing dependencies: {}. Install them before using components.",
            missing.join(", ")
        ))?;
        return Ok(false);
    };

    let confirmed = prompter.confirm(
        &format!(
            "Install missing dependencies ({}) with {}?",
            missing.join(", "),
            installer.manager()
        ),
        true,
    )?;
    if !confirmed {
        prompter.info(&format!(
            "Skipped. Run this when you are ready: {}",
            installer.manager().install_command(missing, false)
        ))?;
        return Ok(false);
    }

    // The project is already initialized; a failed install is reported, not fatal
    match installer.install(missing, false).await {
        Ok(()) => Ok(true),
        Err(e) => {
            prompter.warn(&format!("{:#}", e))?;
            Ok(false)
        }
    }
}
