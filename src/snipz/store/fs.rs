use super::SnippetStore;
use crate::error::{Result, SnipzError};
use crate::model::{file_name_for, SNIPPET_EXT};
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn not_found_as(name: &str, err: std::io::Error) -> SnipzError {
        if err.kind() == ErrorKind::NotFound {
            SnipzError::NotFound(name.to_string())
        } else {
            SnipzError::Io(err)
        }
    }
}

impl SnippetStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn set_root(&mut self, root: PathBuf) {
        self.root = root;
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SnipzError::Io)?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(SnipzError::Io)?;

        for entry in entries {
            let entry = entry.map_err(SnipzError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(SNIPPET_EXT) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => warn!(
                    "store: skipping {}, file name is not valid UTF-8",
                    path.display()
                ),
            }
        }
        Ok(names)
    }

    fn create(&mut self, name: &str) -> Result<()> {
        self.ensure_root()?;

        // create_new makes the existence check and the creation one step
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.snippet_path(name))
        {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(SnipzError::AlreadyExists(name.to_string()))
            }
            Err(e) => Err(SnipzError::Io(e)),
        }
    }

    fn read(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.snippet_path(name)).map_err(|e| Self::not_found_as(name, e))
    }

    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        fs::read(self.snippet_path(name)).map_err(|e| Self::not_found_as(name, e))
    }

    fn save(&mut self, name: &str, content: &str) -> Result<()> {
        self.ensure_root()?;

        let target_path = self.snippet_path(name);

        // Atomic Write
        let tmp_path = self.root.join(format!(".snip-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SnipzError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SnipzError::Io(e));
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        fs::remove_file(self.snippet_path(name)).map_err(|e| Self::not_found_as(name, e))
    }

    fn snippet_path(&self, name: &str) -> PathBuf {
        self.root.join(file_name_for(name))
    }
}
