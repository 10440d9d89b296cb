//! Package manager detection and dependency installation
//!
//! The installer shells out to whichever package manager the project's
//! lockfile points at and streams its output back to the terminal.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::debug;

/// Timeout for a dependency installation (5 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Lockfiles in detection order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Detect the package manager from lockfiles in the project root, defaulting to npm
    pub fn detect(root: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| root.join(lockfile).is_file())
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    /// Binary name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments that install `packages`, optionally as development dependencies
    pub fn install_args(&self, packages: &[String], dev: bool) -> Vec<String> {
        let (verb, dev_flag) = match self {
            PackageManager::Npm => ("install", "--save-dev"),
            PackageManager::Yarn => ("add", "-D"),
            PackageManager::Pnpm => ("add", "-D"),
            PackageManager::Bun => ("add", "-d"),
        };

        let mut args = vec![verb.to_string()];
        if dev {
            args.push(dev_flag.to_string());
        }
        args.extend(packages.iter().cloned());
        args
    }

    /// The full command line, for display and manual fallback instructions
    pub fn install_command(&self, packages: &[String], dev: bool) -> String {
        let mut parts = vec![self.program().to_string()];
        parts.extend(self.install_args(packages, dev));
        parts.join(" ")
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Installs packages into the host project
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    manager: PackageManager,
    project_root: PathBuf,
}

impl PackageInstaller {
    pub fn new(manager: PackageManager, project_root: impl Into<PathBuf>) -> Self {
        Self {
            manager,
            project_root: project_root.into(),
        }
    }

    /// Installer for whichever package manager the project uses
    pub fn detect(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let manager = PackageManager::detect(&project_root);
        debug!(%manager, "package manager detected");
        Self::new(manager, project_root)
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Install the given packages, streaming the package manager's output
    pub async fn install(&self, packages: &[String], dev: bool) -> Result<()> {
        let cmd = self.manager.install_command(packages, dev);
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new(self.manager.program())
            .args(self.manager.install_args(packages, dev))
            .current_dir(&self.project_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!(
                    "Failed to start {}. Please install manually: {}",
                    self.manager, cmd
                )
            })?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            let mut stderr_open = true;
            loop {
                tokio::select! {
                    line = stdout_reader.next_line() => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => break,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                break;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Installation timed out after {} seconds.\n\
                 Please install manually: {}",
                INSTALL_TIMEOUT.as_secs(),
                cmd
            );
        }

        match timeout(Duration::from_secs(10), child.wait()).await {
            Ok(Ok(status)) => {
                println!();
                if status.success() {
                    Ok(())
                } else {
                    anyhow::bail!(
                        "{} exited with code {}.\n\
                         Please install manually: {}",
                        self.manager,
                        status.code().unwrap_or(-1),
                        cmd
                    );
                }
            }
            Ok(Err(e)) => anyhow::bail!("Failed to wait for {}: {}", self.manager, e),
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!(
                    "{} did not exit. Please install manually: {}",
                    self.manager,
                    cmd
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn packages() -> Vec<String> {
        vec!["react".to_string(), "react-dom".to_string()]
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        let dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_detect_from_lockfile() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bun.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Bun);
    }

    #[test]
    fn test_install_commands() {
        assert_eq!(
            PackageManager::Npm.install_command(&packages(), false),
            "npm install react react-dom"
        );
        assert_eq!(
            PackageManager::Npm.install_command(&packages(), true),
            "npm install --save-dev react react-dom"
        );
        assert_eq!(
            PackageManager::Yarn.install_command(&packages(), true),
            "yarn add -D react react-dom"
        );
        assert_eq!(
            PackageManager::Pnpm.install_command(&packages(), false),
            "pnpm add react react-dom"
        );
        assert_eq!(
            PackageManager::Bun.install_command(&packages(), true),
            "bun add -d react react-dom"
        );
    }
}
