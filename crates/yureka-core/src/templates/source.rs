//! Where component templates are read from
//!
//! Templates normally come from the set compiled into the binary. A local
//! directory with the same `<variant>/<Name><ext>` layout can replace it,
//! which is how new templates are developed and tested.

use super::variant::VariantKey;
use crate::config::TEMPLATE_DIR_ENV;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Templates compiled into the binary: (variant, file name, content)
const BUNDLED: &[(VariantKey, &str, &str)] = &[
    (
        VariantKey::Tailwind,
        "Button.js",
        include_str!("../../templates/tailwind/Button.js"),
    ),
    (
        VariantKey::NonTailwind,
        "Button.js",
        include_str!("../../templates/non-tailwind/Button.js"),
    ),
    (
        VariantKey::NonTailwind,
        "Button.module.css",
        include_str!("../../templates/non-tailwind/Button.module.css"),
    ),
    (
        VariantKey::NonTailwindTs,
        "Button.tsx",
        include_str!("../../templates/non-tailwind-ts/Button.tsx"),
    ),
    (
        VariantKey::NonTailwindTs,
        "Button.module.css",
        include_str!("../../templates/non-tailwind-ts/Button.module.css"),
    ),
];

/// Template source - either the bundled set or a local directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    #[default]
    Bundled,
    Local(PathBuf),
}

impl TemplateSource {
    /// Create a local template source from a path
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    /// Pick the source: an explicit directory, then the environment override, then bundled
    pub fn from_override(template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| {
                std::env::var_os(TEMPLATE_DIR_ENV)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::Local)
            .unwrap_or_default()
    }

    /// Read one template file, or None if this source does not have it
    pub fn read(&self, key: VariantKey, file_name: &str) -> Result<Option<String>> {
        match self {
            TemplateSource::Bundled => Ok(BUNDLED
                .iter()
                .find(|(k, name, _)| *k == key && *name == file_name)
                .map(|(_, _, content)| content.to_string())),
            TemplateSource::Local(root) => {
                let path = root.join(key.dir_name()).join(file_name);
                if !path.is_file() {
                    return Ok(None);
                }
                std::fs::read_to_string(&path)
                    .map(Some)
                    .with_context(|| format!("Failed to read template {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_button_variants() {
        let source = TemplateSource::Bundled;
        assert!(source
            .read(VariantKey::Tailwind, "Button.js")
            .unwrap()
            .is_some_and(|c| c.contains("export default Button")));
        assert!(source
            .read(VariantKey::NonTailwindTs, "Button.tsx")
            .unwrap()
            .is_some());
        assert!(source
            .read(VariantKey::TailwindTs, "Button.tsx")
            .unwrap()
            .is_none());
        assert!(source.read(VariantKey::Tailwind, "Card.js").unwrap().is_none());
    }

    #[test]
    fn test_local_source_reads_variant_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("tailwind-ts")).unwrap();
        std::fs::write(dir.path().join("tailwind-ts/Card.tsx"), "card!").unwrap();

        let source = TemplateSource::local(dir.path());
        assert_eq!(
            source.read(VariantKey::TailwindTs, "Card.tsx").unwrap(),
            Some("card!".to_string())
        );
        assert!(source.read(VariantKey::Tailwind, "Card.tsx").unwrap().is_none());
    }

    #[test]
    fn test_explicit_directory_wins() {
        let source = TemplateSource::from_override(Some(PathBuf::from("/tmp/templates")));
        assert_eq!(source, TemplateSource::local("/tmp/templates"));
    }
}
