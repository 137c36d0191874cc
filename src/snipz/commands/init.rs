use crate::backup::BackupManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;
use std::fs;

pub fn run<S: SnippetStore>(store: &S, backups: &BackupManager) -> Result<CmdResult> {
    store.ensure_root()?;
    fs::create_dir_all(backups.backup_dir()).map_err(SnipzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized snippet store at {}",
        store.root().display()
    )));
    result.add_message(CmdMessage::info(format!(
        "Backups go to {}",
        backups.backup_dir().display()
    )));
    Ok(result)
}
