use super::SnippetStore;
use crate::error::{Result, SnipzError};
use crate::model::{file_name_for, Snippet};
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    root: PathBuf,
    snippets: Vec<Snippet>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            root: PathBuf::from("memory"),
            snippets: Vec::new(),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, name: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.name == name)
    }
}

impl SnippetStore for InMemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn set_root(&mut self, root: PathBuf) {
        self.root = root;
        self.snippets.clear();
    }

    fn ensure_root(&self) -> Result<()> {
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.snippets.iter().map(|s| s.name.clone()).collect())
    }

    fn create(&mut self, name: &str) -> Result<()> {
        if self.find(name).is_some() {
            return Err(SnipzError::AlreadyExists(name.to_string()));
        }
        self.snippets.push(Snippet::new(name, ""));
        Ok(())
    }

    fn read(&self, name: &str) -> Result<String> {
        self.find(name)
            .map(|s| s.content.clone())
            .ok_or_else(|| SnipzError::NotFound(name.to_string()))
    }

    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.read(name).map(String::into_bytes)
    }

    fn save(&mut self, name: &str, content: &str) -> Result<()> {
        match self.snippets.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.content = content.to_string(),
            None => self.snippets.push(Snippet::new(name, content)),
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.name != name);
        if self.snippets.len() == before {
            return Err(SnipzError::NotFound(name.to_string()));
        }
        Ok(())
    }

    fn snippet_path(&self, name: &str) -> PathBuf {
        self.root.join(file_name_for(name))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Snippet {}", i + 1);
                let content = format!("Content for snippet {}", i + 1);
                self.store.save(&name, &content).unwrap();
            }
            self
        }

        pub fn with_snippet(mut self, name: &str, content: &str) -> Self {
            self.store.save(name, content).unwrap();
            self
        }
    }
}
