use crate::commands::{CmdMessage, CmdResult};
use crate::config::{SnipzConfig, SnipzPaths};
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum DirAction {
    Show,
    Set(PathBuf),
}

pub fn run<S: SnippetStore>(store: &mut S, paths: &SnipzPaths, action: DirAction) -> Result<CmdResult> {
    match action {
        DirAction::Show => {
            let mut result = CmdResult::default().with_paths(vec![store.root().to_path_buf()]);
            result.add_message(CmdMessage::info(format!(
                "Settings file: {}",
                paths.settings_file().display()
            )));
            Ok(result)
        }
        DirAction::Set(dir) => {
            if dir.as_os_str().is_empty() {
                return Err(SnipzError::Api("No directory selected.".to_string()));
            }
            fs::create_dir_all(&dir).map_err(SnipzError::Io)?;
            let dir = fs::canonicalize(&dir).map_err(SnipzError::Io)?;

            let mut config = SnipzConfig::load(&paths.app_dir)?;
            config.snippets_dir = Some(dir.clone());
            config.save(&paths.app_dir)?;
            store.set_root(dir.clone());

            let mut result = CmdResult::default().with_paths(vec![dir.clone()]);
            result.add_message(CmdMessage::success(format!(
                "Snippets directory changed to: {}",
                dir.display()
            )));
            Ok(result)
        }
    }
}
