use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILENAME: &str = "snippet_settings.json";
pub const DEFAULT_SNIPPETS_DIRNAME: &str = "snippets";
pub const BACKUP_DIRNAME: &str = "backsnip";

/// Persistent settings, stored in `<app-dir>/snippet_settings.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Directory holding the snippet files. `None` means the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets_dir: Option<PathBuf>,
}

impl SnipzConfig {
    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(app_dir: P) -> Result<Self> {
        let settings_path = app_dir.as_ref().join(SETTINGS_FILENAME);

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&settings_path).map_err(SnipzError::Io)?;
        let config: SnipzConfig =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(config)
    }

    /// Save settings to the given directory
    pub fn save<P: AsRef<Path>>(&self, app_dir: P) -> Result<()> {
        let app_dir = app_dir.as_ref();

        if !app_dir.exists() {
            fs::create_dir_all(app_dir).map_err(SnipzError::Io)?;
        }

        let settings_path = app_dir.join(SETTINGS_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SnipzError::Serialization)?;
        fs::write(settings_path, content).map_err(SnipzError::Io)?;
        Ok(())
    }

    pub fn snippets_dir_or_default(&self, app_dir: &Path) -> PathBuf {
        self.snippets_dir
            .clone()
            .unwrap_or_else(|| app_dir.join(DEFAULT_SNIPPETS_DIRNAME))
    }
}

/// Fixed locations derived from the app directory.
#[derive(Debug, Clone)]
pub struct SnipzPaths {
    pub app_dir: PathBuf,
}

impl SnipzPaths {
    pub fn new(app_dir: PathBuf) -> Self {
        Self { app_dir }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.app_dir.join(SETTINGS_FILENAME)
    }

    pub fn default_snippets_dir(&self) -> PathBuf {
        self.app_dir.join(DEFAULT_SNIPPETS_DIRNAME)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.app_dir.join(BACKUP_DIRNAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = SnipzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SnipzConfig::default());
        assert_eq!(
            config.snippets_dir_or_default(temp_dir.path()),
            temp_dir.path().join("snippets")
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("app");

        let config = SnipzConfig {
            snippets_dir: Some(PathBuf::from("/somewhere/else")),
        };
        config.save(&app_dir).unwrap();

        let loaded = SnipzConfig::load(&app_dir).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.snippets_dir_or_default(&app_dir),
            PathBuf::from("/somewhere/else")
        );
    }

    #[test]
    fn test_settings_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let config = SnipzConfig {
            snippets_dir: Some(PathBuf::from("/data/snips")),
        };
        config.save(temp_dir.path()).unwrap();

        let raw = fs::read_to_string(temp_dir.path().join(SETTINGS_FILENAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["snippets_dir"], "/data/snips");
    }

    #[test]
    fn test_missing_key_and_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(SETTINGS_FILENAME),
            r#"{"theme": "light"}"#,
        )
        .unwrap();

        let config = SnipzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.snippets_dir, None);
    }

    #[test]
    fn test_malformed_settings_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SETTINGS_FILENAME), "{not json").unwrap();

        assert!(matches!(
            SnipzConfig::load(temp_dir.path()),
            Err(SnipzError::Serialization(_))
        ));
    }

    #[test]
    fn test_paths_layout() {
        let paths = SnipzPaths::new(PathBuf::from("/opt/snipz"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/opt/snipz/snippet_settings.json")
        );
        assert_eq!(
            paths.default_snippets_dir(),
            PathBuf::from("/opt/snipz/snippets")
        );
        assert_eq!(paths.backup_dir(), PathBuf::from("/opt/snipz/backsnip"));
    }
}
