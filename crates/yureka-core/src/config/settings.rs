//! `yureka.config.json` reading and writing

use super::{ProjectLayout, COMPONENTS_DIR, UI_DIR};
use crate::error::YurekaError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Contents of `components/yureka-ui/yureka.config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YurekaConfig {
    /// CLI version that initialized the project
    pub version: String,

    /// Generated root, relative to the project root
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
}

fn default_components_dir() -> String {
    format!("{}/{}", COMPONENTS_DIR, UI_DIR)
}

impl YurekaConfig {
    pub fn new(cli_version: &str) -> Self {
        Self {
            version: cli_version.to_string(),
            components_dir: default_components_dir(),
        }
    }

    /// Load the config if the project has one
    pub async fn load(layout: &ProjectLayout) -> Result<Option<Self>> {
        let path = layout.config_file();
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| {
                YurekaError::InvalidConfig {
                    path: path.clone(),
                    message: e.to_string(),
                }
                .into()
            })
    }

    pub async fn save(&self, layout: &ProjectLayout) -> Result<()> {
        let path = layout.config_file();
        let mut content =
            serde_json::to_string_pretty(self).context("Failed to serialize yureka config")?;
        content.push('\n');
        fs::write(&path, content)
            .await
            .map_err(|e| YurekaError::write(&path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert!(YurekaConfig::load(&layout).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::create_dir_all(layout.ui_root()).unwrap();

        let config = YurekaConfig::new("0.3.1");
        config.save(&layout).await.unwrap();

        let raw = std::fs::read_to_string(layout.config_file()).unwrap();
        assert!(raw.contains("\"componentsDir\": \"components/yureka-ui\""));
        assert_eq!(YurekaConfig::load(&layout).await.unwrap(), Some(config));
    }

    #[tokio::test]
    async fn test_malformed_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::create_dir_all(layout.ui_root()).unwrap();
        std::fs::write(layout.config_file(), "{ not json").unwrap();

        let err = YurekaConfig::load(&layout).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<YurekaError>(),
            Some(YurekaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_components_dir_defaults_when_absent() {
        let config: YurekaConfig = serde_json::from_str(r#"{ "version": "0.1.0" }"#).unwrap();
        assert_eq!(config.components_dir, "components/yureka-ui");
    }
}
