//! Host project inspection
//!
//! This module provides:
//! - Styling and type-checking detection ([`ProjectProbe`])
//! - The file extension policy for generated files
//! - Package manager detection and dependency installation

pub mod extension;
pub mod packages;
pub mod probe;

use crate::config::ProjectLayout;

pub use extension::{choose_source_extension, SourceExtension};
pub use packages::{PackageInstaller, PackageManager};
pub use probe::{PackageManifest, ProjectProbe};

/// Snapshot of the host project's configuration, recomputed on every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectConfig {
    pub uses_style_framework: bool,
    pub uses_static_types: bool,
    pub source_extension: SourceExtension,
}

impl ProjectConfig {
    /// Probe the project and apply the extension policy
    pub fn detect(layout: &ProjectLayout) -> Self {
        let probe = ProjectProbe::new(layout);
        let uses_style_framework = probe.detect_style_framework();
        let uses_static_types = probe.detect_type_system();
        let source_extension =
            choose_source_extension(&layout.convention_dirs(), uses_static_types);

        Self {
            uses_style_framework,
            uses_static_types,
            source_extension,
        }
    }

    /// Whether templates should be typed; follows the chosen extension, not the probe
    pub fn typed_templates(&self) -> bool {
        self.source_extension.is_typed()
    }

    pub fn manifest_extension(&self) -> SourceExtension {
        self.source_extension.manifest_extension()
    }
}
