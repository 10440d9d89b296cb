//! Project layout and the persisted `yureka.config.json`
//!
//! Detected project traits (styling, type checking) are never stored here:
//! they are probed again on every run because the host project can change
//! between invocations.

pub mod settings;
pub mod version;

use std::path::{Path, PathBuf};

pub use settings::YurekaConfig;
pub use version::check_compatibility;

/// Host directory that holds UI components
pub const COMPONENTS_DIR: &str = "components";

/// Name of the generated root inside [`COMPONENTS_DIR`]
pub const UI_DIR: &str = "yureka-ui";

/// Config file written by `init` inside the generated root
pub const CONFIG_FILE: &str = "yureka.config.json";

/// Environment variable that points the resolver at a local template directory
pub const TEMPLATE_DIR_ENV: &str = "YUREKA_TEMPLATE_DIR";

/// Command users are told to run when the project is not initialized
pub const INIT_COMMAND: &str = "npx yureka@latest init";

/// Command shown when the project was initialized by a newer CLI
pub const UPGRADE_COMMAND: &str = "npm install -g yureka@latest";

/// Paths of everything the tool reads or writes, relative to one project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the current working directory
    pub fn from_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// The host's `components/` directory
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    /// `components/yureka-ui/`
    pub fn ui_root(&self) -> PathBuf {
        self.components_dir().join(UI_DIR)
    }

    pub fn component_dir(&self, display_name: &str) -> PathBuf {
        self.ui_root().join(display_name)
    }

    /// Hidden sibling directory a component is assembled in before it goes live
    pub fn staging_dir(&self, display_name: &str) -> PathBuf {
        self.ui_root().join(format!(".{}.staging", display_name))
    }

    /// Hidden sibling a replaced component is parked in until the new one is live
    pub fn backup_dir(&self, display_name: &str) -> PathBuf {
        self.ui_root().join(format!(".{}.previous", display_name))
    }

    pub fn config_file(&self) -> PathBuf {
        self.ui_root().join(CONFIG_FILE)
    }

    /// Both directories whose files decide the extension convention
    pub fn convention_dirs(&self) -> [PathBuf; 2] {
        [self.components_dir(), self.ui_root()]
    }
}
