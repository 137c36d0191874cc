//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all snipz operations, whatever UI sits on top.
//!
//! The facade dispatches to `commands/*.rs` and returns their `CmdResult`.
//! It does no printing and holds no business logic.
//!
//! ## Generic Over SnippetStore
//!
//! `SnipzApi<S: SnippetStore>` is generic over the storage backend:
//! - Production: `SnipzApi<FileStore>`
//! - Testing: `SnipzApi<InMemoryStore>`
//!
//! The store root, the backup location and the settings location are all held
//! by the value itself, so independent instances can coexist in one process.

use crate::backup::BackupManager;
use crate::commands;
use crate::config::SnipzPaths;
use crate::error::Result;
use crate::store::SnippetStore;

pub struct SnipzApi<S: SnippetStore> {
    store: S,
    backups: BackupManager,
    paths: SnipzPaths,
}

impl<S: SnippetStore> SnipzApi<S> {
    pub fn new(store: S, backups: BackupManager, paths: SnipzPaths) -> Self {
        Self {
            store,
            backups,
            paths,
        }
    }

    pub fn list_snippets(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn search_snippets(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn create_snippet(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.backups, name)
    }

    pub fn view_snippet(&self, name: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, name)
    }

    pub fn save_snippet(&mut self, name: &str, content: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.backups, name, content)
    }

    pub fn delete_snippet(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn snippet_paths<I: AsRef<str>>(&self, names: &[I]) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, names)
    }

    pub fn dir(&mut self, action: DirAction) -> Result<commands::CmdResult> {
        commands::dir::run(&mut self.store, &self.paths, action)
    }

    pub fn backup_now(&self) -> Result<commands::CmdResult> {
        commands::backup::run(&self.store, &self.backups)
    }

    pub fn list_backups(&self) -> Result<commands::CmdResult> {
        commands::backup::list(&self.backups)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.store, &self.backups)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    pub fn paths(&self) -> &SnipzPaths {
        &self.paths
    }
}

pub use crate::backup::{BackupArchive, BackupOutcome};
pub use crate::commands::dir::DirAction;
pub use crate::commands::search::filter_names;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
