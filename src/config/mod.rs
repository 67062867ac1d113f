use crate::models::SteamBuildConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the optional override file inside `steam/`.
pub const STEAM_CONFIG_NAME: &str = "steam_build.yaml";

/// Configuration manager for the optional Steam build overrides.
///
/// Looks for `<project root>/steam/steam_build.yaml`. When the file is absent
/// every field stays unset and the manifests carry placeholder ids.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    project_root: Utf8PathBuf,
    steam_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager rooted at the given project directory.
    ///
    /// Nothing is created on disk; the generator owns the `steam/` directory.
    pub fn new<P: AsRef<Utf8Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        Self {
            steam_config_path: project_root.join("steam").join(STEAM_CONFIG_NAME),
            project_root,
        }
    }

    /// Load the Steam build configuration.
    ///
    /// # Returns
    /// The parsed overrides, or [`SteamBuildConfig::default`] if the file doesn't exist
    pub fn load_steam_config(&self) -> Result<SteamBuildConfig> {
        if !self.steam_config_path.exists() {
            tracing::warn!(
                "Steam config file not found at {}, using placeholders",
                self.steam_config_path
            );
            return Ok(SteamBuildConfig::default());
        }

        let settings = config::Config::builder()
            .add_source(
                config::File::from(self.steam_config_path.as_std_path())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .build()
            .with_context(|| format!("Failed to read steam config: {}", self.steam_config_path))?;

        let steam_config: SteamBuildConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse steam config: {}", self.steam_config_path))?;

        tracing::info!("Loaded steam config from {}", self.steam_config_path);
        Ok(steam_config)
    }

    /// Save the Steam build configuration, creating `steam/` if needed.
    pub fn save_steam_config(&self, steam_config: &SteamBuildConfig) -> Result<()> {
        if let Some(parent) = self.steam_config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent))?;
        }

        let yaml_string = serde_yaml_ng::to_string(steam_config)
            .context("Failed to serialize steam config to YAML")?;

        fs::write(&self.steam_config_path, yaml_string)
            .with_context(|| format!("Failed to write steam config: {}", self.steam_config_path))?;

        tracing::info!("Saved steam config to {}", self.steam_config_path);
        Ok(())
    }

    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    pub fn steam_config_path(&self) -> &Utf8Path {
        &self.steam_config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&root);
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();
        let loaded = manager.load_steam_config().unwrap();
        assert_eq!(loaded, SteamBuildConfig::default());
    }

    #[test]
    fn test_new_does_not_touch_disk() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(!manager.project_root().join("steam").exists());
    }

    #[test]
    fn test_save_then_load() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut steam_config = SteamBuildConfig::default();
        steam_config.app_id = Some("480".to_string());
        steam_config.windows.depot_id = Some("481".to_string());
        manager.save_steam_config(&steam_config).unwrap();

        let loaded = manager.load_steam_config().unwrap();
        assert_eq!(loaded.app_id.as_deref(), Some("480"));
        assert_eq!(loaded.windows.depot_id.as_deref(), Some("481"));
        assert_eq!(loaded.mac.depot_id, None);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::create_dir_all(manager.steam_config_path().parent().unwrap()).unwrap();
        fs::write(manager.steam_config_path(), "app_id: [unclosed").unwrap();

        assert!(manager.load_steam_config().is_err());
    }
}
