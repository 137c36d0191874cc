use crate::backup::BackupManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::validate_name;
use crate::store::SnippetStore;

use super::helpers::record_backup;

pub fn run<S: SnippetStore>(
    store: &mut S,
    backups: &BackupManager,
    name: &str,
) -> Result<CmdResult> {
    validate_name(name)?;
    store.create(name)?;

    let mut result = CmdResult::default().with_listed(vec![name.to_string()]);
    result.add_message(CmdMessage::success(format!("Snippet created: {}", name)));
    record_backup(store, backups, &mut result);
    Ok(result)
}
