use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::validate_name;
use crate::store::SnippetStore;

/// Deletes a snippet. Does not trigger a backup run.
pub fn run<S: SnippetStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    validate_name(name)?;
    let mut result = CmdResult::default();

    match store.delete(name) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!("Deleted {}", name)));
            result.listed.push(name.to_string());
        }
        Err(SnipzError::NotFound(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "Snippet {} does not exist, nothing to delete",
                name
            )));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
