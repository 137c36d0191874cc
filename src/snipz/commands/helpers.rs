use crate::backup::BackupManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::store::SnippetStore;

/// Runs a backup and records the outcome, and any warning, on `result`.
pub fn record_backup<S: SnippetStore>(
    store: &S,
    backups: &BackupManager,
    result: &mut CmdResult,
) {
    let outcome = backups.run(store);
    if let Some(warning) = &outcome.warning {
        result.add_message(CmdMessage::warning(warning.clone()));
    }
    result.backup = Some(outcome);
}
