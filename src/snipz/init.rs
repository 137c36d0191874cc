//! # Context Initialization
//!
//! Works out where snipz keeps its files and builds a ready-to-use API.
//!
//! ## The App Directory
//!
//! One directory holds everything that is not a snippet:
//!
//! ```text
//! <app-dir>/
//! ├── snippet_settings.json   # {"snippets_dir": "..."}
//! ├── snippets/               # default store root
//! └── backsnip/               # rolling zip backups
//! ```
//!
//! Resolution order:
//! 1. An explicit override passed to [`initialize`]
//! 2. The `SNIPZ_HOME` environment variable (primarily for testing)
//! 3. The OS data directory from the `directories` crate
//!
//! The store root comes from the settings file and falls back to
//! `<app-dir>/snippets`. It is created if missing.

use crate::api::SnipzApi;
use crate::backup::BackupManager;
use crate::config::{SnipzConfig, SnipzPaths};
use crate::error::{Result, SnipzError};
use crate::store::fs::FileStore;
use crate::store::SnippetStore;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

pub const HOME_ENV: &str = "SNIPZ_HOME";

pub struct SnipzContext {
    pub api: SnipzApi<FileStore>,
}

pub fn resolve_app_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = home_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Api("Could not determine data directory".to_string()))
}

pub fn initialize(home_override: Option<PathBuf>) -> Result<SnipzContext> {
    let app_dir = resolve_app_dir(home_override)?;
    let paths = SnipzPaths::new(app_dir);
    let config = SnipzConfig::load(&paths.app_dir)?;

    let root = config.snippets_dir_or_default(&paths.app_dir);
    debug!("app dir: {}", paths.app_dir.display());
    debug!("snippets dir: {}", root.display());

    let store = FileStore::new(root);
    store.ensure_root()?;
    let backups = BackupManager::new(paths.backup_dir());

    Ok(SnipzContext {
        api: SnipzApi::new(store, backups, paths),
    })
}
