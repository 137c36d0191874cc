//! # Rolling Zip Backups
//!
//! Every snippet-creating or snippet-saving command ends with a backup run:
//!
//! 1. **Snapshot**: all snippets are written into
//!    `<backup_dir>/backsnip_<YYYYMMDD_HHMMSS>.zip`, one flat `<name>.txt` entry each.
//! 2. **Prune**: `*.zip` files in `<backup_dir>` are ordered by modification time
//!    and the oldest are removed until at most `keep` remain.
//!
//! A run never fails. [`BackupManager::run`] folds any error into a
//! [`BackupOutcome`] warning, so the snippet write that triggered it stands
//! regardless of what happens to the backup.
//!
//! The timestamp has one-second resolution. A second snapshot within the same
//! second replaces the first one.

use crate::error::{Result, SnipzError};
use crate::model::file_name_for;
use crate::store::SnippetStore;
use chrono::{DateTime, Local, NaiveDateTime};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const DEFAULT_KEEP: usize = 5;
pub const ARCHIVE_PREFIX: &str = "backsnip_";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What a backup run did. `warning` is set whenever any step failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupOutcome {
    pub archive: Option<PathBuf>,
    pub pruned: usize,
    pub warning: Option<String>,
}

impl BackupOutcome {
    pub fn is_clean(&self) -> bool {
        self.archive.is_some() && self.warning.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupArchive {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

impl BackupArchive {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    keep: usize,
}

impl BackupManager {
    pub fn new(backup_dir: PathBuf) -> Self {
        Self {
            backup_dir,
            keep: DEFAULT_KEEP,
        }
    }

    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    /// Snapshot then prune, using the current local time.
    pub fn run<S: SnippetStore>(&self, store: &S) -> BackupOutcome {
        self.finish(self.snapshot(store))
    }

    pub fn run_at<S: SnippetStore>(&self, store: &S, when: NaiveDateTime) -> BackupOutcome {
        self.finish(self.snapshot_at(store, when))
    }

    pub fn snapshot<S: SnippetStore>(&self, store: &S) -> Result<PathBuf> {
        self.snapshot_at(store, Local::now().naive_local())
    }

    /// Prunes after a good snapshot; a failed snapshot skips pruning.
    fn finish(&self, snapshot: Result<PathBuf>) -> BackupOutcome {
        let mut outcome = BackupOutcome::default();
        match snapshot {
            Ok(archive) => outcome.archive = Some(archive),
            Err(e) => {
                warn!("backup: snapshot failed: {}", e);
                outcome.warning = Some(format!("Backup failed: {}", e));
                return outcome;
            }
        }

        self.record_prune(&mut outcome, self.prune());
        outcome
    }

    /// Folds a prune result into an outcome whose snapshot already succeeded.
    fn record_prune(&self, outcome: &mut BackupOutcome, pruned: Result<usize>) {
        match pruned {
            Ok(n) => outcome.pruned = n,
            Err(e) => {
                warn!("backup: pruning {} failed: {}", self.backup_dir.display(), e);
                outcome.warning = Some(format!("Backup created but pruning failed: {}", e));
            }
        }
    }

    /// Writes every snippet of `store` into a new archive named after `when`.
    pub fn snapshot_at<S: SnippetStore>(&self, store: &S, when: NaiveDateTime) -> Result<PathBuf> {
        self.ensure_dir()?;

        let target = self.backup_dir.join(archive_name(when));
        let tmp_path = self
            .backup_dir
            .join(format!(".backsnip-{}.tmp", Uuid::new_v4()));

        debug!("backup: writing {}", target.display());
        if let Err(e) = self.write_archive(store, &tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SnipzError::Io(e));
        }

        info!("backup: created {}", target.display());
        Ok(target)
    }

    fn write_archive<S: SnippetStore>(&self, store: &S, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(SnipzError::Io)?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for name in store.list()? {
            let bytes = match store.read_bytes(&name) {
                Ok(bytes) => bytes,
                // Removed between listing and reading: nothing left to keep.
                Err(SnipzError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            };
            let entry = file_name_for(&name);
            debug!("backup: adding {}", entry);
            zip.start_file(entry, options)?;
            zip.write_all(&bytes).map_err(SnipzError::Io)?;
        }

        let file = zip.finish()?;
        file.sync_all().map_err(SnipzError::Io)?;
        Ok(())
    }

    /// Removes the oldest archives until at most `keep` remain.
    /// Returns how many were removed.
    pub fn prune(&self) -> Result<usize> {
        let archives = self.archives_oldest_first()?;
        let excess = archives.len().saturating_sub(self.keep);

        for archive in archives.iter().take(excess) {
            debug!("backup: pruning {}", archive.path.display());
            fs::remove_file(&archive.path).map_err(SnipzError::Io)?;
        }
        Ok(excess)
    }

    /// Archives currently in the backup directory, newest first.
    pub fn list(&self) -> Result<Vec<BackupArchive>> {
        let mut archives = self.archives_oldest_first()?;
        archives.reverse();
        Ok(archives)
    }

    fn archives_oldest_first(&self) -> Result<Vec<BackupArchive>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut archives = Vec::new();
        for entry in fs::read_dir(&self.backup_dir).map_err(SnipzError::Io)? {
            let entry = entry.map_err(SnipzError::Io)?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("zip") {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .map_err(SnipzError::Io)?;
            archives.push(BackupArchive {
                path,
                modified: modified.into(),
            });
        }

        // Same-mtime archives fall back to name order, which follows the timestamp.
        archives.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)));
        Ok(archives)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.backup_dir.exists() {
            fs::create_dir_all(&self.backup_dir).map_err(SnipzError::Io)?;
        }
        Ok(())
    }
}

pub fn archive_name(when: NaiveDateTime) -> String {
    format!("{}{}.zip", ARCHIVE_PREFIX, when.format(TIMESTAMP_FORMAT))
}
