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
    content: &str,
) -> Result<CmdResult> {
    validate_name(name)?;
    store.save(name, content)?;

    let path = store.snippet_path(name);
    let mut result = CmdResult::default()
        .with_listed(vec![name.to_string()])
        .with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Saved {} at {}",
        name,
        path.display()
    )));
    record_backup(store, backups, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn setup() -> (TempDir, InMemoryStore, BackupManager) {
        let dir = TempDir::new().unwrap();
        let backups = BackupManager::new(dir.path().join("backsnip"));
        (dir, InMemoryStore::new(), backups)
    }

    #[test]
    fn round_trips_content() {
        let (_dir, mut store, backups) = setup();
        for content in ["", "multi\nline\ntext\n", "ünïcödé ✓ 日本語"] {
            run(&mut store, &backups, "s", content).unwrap();
            let read = view::run(&store, "s").unwrap().content.unwrap();
            assert_eq!(read, content);
        }
    }

    #[test]
    fn creates_missing_snippet() {
        let (_dir, mut store, backups) = setup();
        run(&mut store, &backups, "fresh", "hello").unwrap();
        assert_eq!(store.list().unwrap(), vec!["fresh".to_string()]);
    }

    #[test]
    fn reports_path_and_backup() {
        let (_dir, mut store, backups) = setup();
        let result = run(&mut store, &backups, "todo", "buy milk").unwrap();

        assert_eq!(result.paths, vec![store.snippet_path("todo")]);
        assert!(result.messages[0].content.starts_with("Saved todo at "));
        assert!(result.backup.unwrap().archive.is_some());
    }

    #[test]
    fn backup_failure_does_not_fail_save() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("backsnip");
        std::fs::write(&blocker, "not a dir").unwrap();
        let backups = BackupManager::new(blocker);
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &backups, "todo", "buy milk").unwrap();
        assert_eq!(store.read("todo").unwrap(), "buy milk");
        assert!(result.has_warnings());
        let outcome = result.backup.unwrap();
        assert!(outcome.archive.is_none());
        assert!(outcome.warning.is_some());
    }
}
