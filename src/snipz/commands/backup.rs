use crate::backup::BackupManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::record_backup;

/// Takes a backup on demand, outside of any write.
pub fn run<S: SnippetStore>(store: &S, backups: &BackupManager) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    record_backup(store, backups, &mut result);

    if let Some(outcome) = result.backup.clone() {
        if let Some(archive) = outcome.archive {
            result.add_message(CmdMessage::success(format!(
                "Backup written to {}",
                archive.display()
            )));
            result.paths.push(archive);
        }
        if outcome.pruned > 0 {
            result.add_message(CmdMessage::info(format!(
                "Removed {} old backup(s), keeping the newest {}",
                outcome.pruned,
                backups.keep()
            )));
        }
    }
    Ok(result)
}

/// Lists archives in the backup directory, newest first.
pub fn list(backups: &BackupManager) -> Result<CmdResult> {
    let archives = backups.list()?;
    let mut result = CmdResult::default();
    if archives.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No backups in {}",
            backups.backup_dir().display()
        )));
    }
    Ok(result.with_archives(archives))
}
