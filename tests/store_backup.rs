use chrono::{NaiveDate, NaiveDateTime};
use filetime::{set_file_mtime, FileTime};
use rc_zip_sync::ReadZip;
use snipz::backup::{BackupManager, DEFAULT_KEEP};
use snipz::error::SnipzError;
use snipz::init::initialize;
use snipz::store::fs::FileStore;
use snipz::store::SnippetStore;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore, BackupManager) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("snippets"));
    let backups = BackupManager::new(temp.path().join("backsnip"));
    (temp, store, backups)
}

fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, second)
        .unwrap()
}

fn archive_contents(path: &Path) -> BTreeMap<String, String> {
    let file = File::open(path).unwrap();
    let archive = file.read_zip().unwrap();
    archive
        .entries()
        .map(|entry| {
            let bytes = entry.bytes().unwrap();
            (entry.name.to_string(), String::from_utf8(bytes).unwrap())
        })
        .collect()
}

fn snippet_files(store: &FileStore) -> BTreeMap<String, String> {
    store
        .list()
        .unwrap()
        .into_iter()
        .map(|name| {
            let content = store.read(&name).unwrap();
            (format!("{}.txt", name), content)
        })
        .collect()
}

#[test]
fn test_distinct_snippets_are_independent() {
    let (_temp, mut store, _backups) = setup();
    store.create("one").unwrap();
    store.create("two").unwrap();
    store.save("one", "first").unwrap();
    store.save("two", "second").unwrap();

    let mut names = store.list().unwrap();
    names.sort();
    assert_eq!(names, vec!["one", "two"]);
    assert_eq!(store.read("one").unwrap(), "first");
    assert_eq!(store.read("two").unwrap(), "second");
}

#[test]
fn test_round_trip_fidelity() {
    let (_temp, mut store, _backups) = setup();
    let cases = [
        "",
        "line one\nline two\r\nline three\n",
        "Grüße, 世界! 🦀",
    ];
    for content in cases {
        store.save("s", content).unwrap();
        assert_eq!(store.read("s").unwrap(), content);
    }
}

#[test]
fn test_delete_then_read_is_not_found() {
    let (_temp, mut store, _backups) = setup();
    store.save("gone", "bye").unwrap();
    store.delete("gone").unwrap();

    assert!(store.list().unwrap().is_empty());
    assert!(matches!(store.read("gone"), Err(SnipzError::NotFound(_))));
}

#[test]
fn test_snapshot_is_flat_copy_of_txt_files() {
    let (_temp, mut store, backups) = setup();
    store.save("a", "alpha").unwrap();
    store.save("b", "beta").unwrap();
    fs::write(store.root().join("ignored.md"), "no").unwrap();
    fs::create_dir(store.root().join("nested")).unwrap();
    fs::write(store.root().join("nested").join("deep.txt"), "no").unwrap();

    let archive = backups.snapshot_at(&store, at(0)).unwrap();

    let contents = archive_contents(&archive);
    let expected: BTreeMap<String, String> = [
        ("a.txt".to_string(), "alpha".to_string()),
        ("b.txt".to_string(), "beta".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(contents, expected);
}

#[test]
fn test_snapshot_of_empty_store_is_valid_archive() {
    let (_temp, store, backups) = setup();
    let archive = backups.snapshot_at(&store, at(0)).unwrap();
    assert!(archive_contents(&archive).is_empty());
}

#[test]
fn test_retention_after_k_runs() {
    for k in 0..=8u32 {
        let (_temp, mut store, backups) = setup();
        let mut taken = Vec::new();

        for i in 0..k {
            store.save(&format!("snip{}", i), &format!("v{}", i)).unwrap();
            let outcome = backups.run_at(&store, at(i));
            assert!(outcome.is_clean(), "run {} warned: {:?}", i, outcome.warning);
            taken.push((outcome.archive.unwrap(), snippet_files(&store)));
        }

        let retained = backups.list().unwrap();
        assert_eq!(retained.len(), (k as usize).min(DEFAULT_KEEP), "k = {}", k);

        // Every retained archive is one of the most recent snapshots, with its content intact
        for archive in &retained {
            let (_, expected) = taken
                .iter()
                .find(|(path, _)| path == &archive.path)
                .expect("retained archive was not produced by a run");
            assert_eq!(&archive_contents(&archive.path), expected);
        }
        let newest: Vec<_> = taken
            .iter()
            .rev()
            .take(DEFAULT_KEEP)
            .map(|(p, _)| p.clone())
            .collect();
        for archive in &retained {
            assert!(newest.contains(&archive.path));
        }
    }
}

#[test]
fn test_prune_orders_by_mtime_not_name() {
    let (temp, _store, backups) = setup();
    let dir = temp.path().join("backsnip");
    fs::create_dir_all(&dir).unwrap();

    // Names sort the opposite way to their modification times
    for (i, name) in ["z.zip", "y.zip", "x.zip", "w.zip", "v.zip", "u.zip", "t.zip"]
        .iter()
        .enumerate()
    {
        let path = dir.join(name);
        fs::write(&path, "zip").unwrap();
        set_file_mtime(&path, FileTime::from_unix_time(1_700_000_000 + i as i64, 0)).unwrap();
    }

    assert_eq!(backups.prune().unwrap(), 2);
    assert!(!dir.join("z.zip").exists());
    assert!(!dir.join("y.zip").exists());
    assert!(dir.join("t.zip").exists());

    let names: Vec<_> = backups
        .list()
        .unwrap()
        .iter()
        .map(|a| a.file_name())
        .collect();
    assert_eq!(names, vec!["t.zip", "u.zip", "v.zip", "w.zip", "x.zip"]);
}

#[test]
fn test_custom_keep() {
    let (_temp, mut store, backups) = setup();
    let backups = backups.with_keep(2);
    store.save("a", "1").unwrap();
    for s in 0..4 {
        backups.run_at(&store, at(s));
    }
    assert_eq!(backups.list().unwrap().len(), 2);
}

#[test]
fn test_todo_scenario() {
    let temp = TempDir::new().unwrap();
    let mut ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
    let api = &mut ctx.api;
    let backup_dir = temp.path().join("backsnip");

    assert!(api.list_snippets(None).unwrap().listed.is_empty());

    api.create_snippet("todo").unwrap();
    assert_eq!(api.list_snippets(None).unwrap().listed, vec!["todo"]);
    assert_eq!(
        api.view_snippet("todo").unwrap().content.as_deref(),
        Some("")
    );

    let saved = api.save_snippet("todo", "buy milk").unwrap();
    assert_eq!(
        api.view_snippet("todo").unwrap().content.as_deref(),
        Some("buy milk")
    );
    let archive = saved.backup.unwrap().archive.unwrap();
    assert!(archive.starts_with(&backup_dir));
    assert_eq!(
        archive_contents(&archive).get("todo.txt").map(String::as_str),
        Some("buy milk")
    );

    let before = api.list_backups().unwrap().archives.len();
    let deleted = api.delete_snippet("todo").unwrap();
    assert!(deleted.backup.is_none());
    assert!(api.list_snippets(None).unwrap().listed.is_empty());
    assert_eq!(api.list_backups().unwrap().archives.len(), before);
}
