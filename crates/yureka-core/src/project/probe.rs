//! Shallow detection of the host project's styling and type-checking setup
//!
//! Every probe reads straight from disk and fails open: an unreadable or
//! malformed `package.json` counts as "not detected" rather than an error.

use crate::config::ProjectLayout;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use tracing::debug;

/// Package that marks a project as using the utility-class framework
const STYLE_FRAMEWORK_PACKAGE: &str = "tailwindcss";

/// Framework config files checked at the project root
const STYLE_FRAMEWORK_CONFIGS: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.ts",
    "tailwind.config.mjs",
];

/// Global stylesheets that may carry framework directives
const GLOBAL_STYLESHEETS: &[&str] = &[
    "src/styles/globals.css",
    "styles/globals.css",
    "app/globals.css",
    "src/app/globals.css",
];

/// Tokens that only appear in stylesheets processed by the framework
const STYLE_FRAMEWORK_DIRECTIVES: &[&str] = &["@tailwind", "@apply", "@import \"tailwindcss\""];

const TYPE_CHECKER_PACKAGE: &str = "typescript";
const TYPE_CHECKER_CONFIG: &str = "tsconfig.json";

/// The dependency sections of `package.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default)]
    pub dev_dependencies: Option<BTreeMap<String, serde_json::Value>>,
}

impl PackageManifest {
    /// Parse manifest content; returns None for malformed JSON
    pub fn parse(content: &str) -> Option<Self> {
        match serde_json::from_str(content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                debug!(error = %e, "package.json could not be parsed");
                None
            }
        }
    }

    /// Whether a package is listed in runtime or development dependencies
    pub fn has_dependency(&self, name: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|deps| deps.contains_key(name))
    }

    /// Combined runtime and development dependency names, deduplicated and sorted
    pub fn dependency_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .flat_map(|deps| deps.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Reads the host project to classify it; holds no state between calls
#[derive(Debug, Clone, Copy)]
pub struct ProjectProbe<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> ProjectProbe<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn has_package_manifest(&self) -> bool {
        self.layout.package_json().is_file()
    }

    /// Read and parse `package.json`, if present and well-formed
    pub fn package_manifest(&self) -> Option<PackageManifest> {
        let path = self.layout.package_json();
        let content = fs::read_to_string(&path)
            .map_err(|e| debug!(path = %path.display(), error = %e, "package.json unreadable"))
            .ok()?;
        PackageManifest::parse(&content)
    }

    /// Whether the project uses the utility-class styling framework
    ///
    /// Checks, in order: the dependency set, root config files, then
    /// framework directives in well-known global stylesheets.
    pub fn detect_style_framework(&self) -> bool {
        let Some(manifest) = self.package_manifest() else {
            return false;
        };

        if manifest.has_dependency(STYLE_FRAMEWORK_PACKAGE) {
            debug!("style framework found in dependencies");
            return true;
        }

        let root = self.layout.root();
        if let Some(config) = STYLE_FRAMEWORK_CONFIGS
            .iter()
            .find(|name| root.join(name).is_file())
        {
            debug!(config, "style framework config file found");
            return true;
        }

        for stylesheet in GLOBAL_STYLESHEETS {
            let Ok(content) = fs::read_to_string(root.join(stylesheet)) else {
                continue;
            };
            if STYLE_FRAMEWORK_DIRECTIVES
                .iter()
                .any(|token| content.contains(token))
            {
                debug!(stylesheet, "style framework directive found");
                return true;
            }
        }

        false
    }

    /// Whether the project has static type checking enabled
    pub fn detect_type_system(&self) -> bool {
        if self.layout.root().join(TYPE_CHECKER_CONFIG).is_file() {
            debug!("type checker config found");
            return true;
        }

        self.package_manifest()
            .is_some_and(|manifest| manifest.has_dependency(TYPE_CHECKER_PACKAGE))
    }
}
