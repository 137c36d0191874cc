use crate::error::{Result, SnipzError};

/// Extension every snippet file carries. The stem is the snippet name.
pub const SNIPPET_EXT: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub content: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> String {
        file_name_for(&self.name)
    }
}

pub fn file_name_for(name: &str) -> String {
    format!("{}.{}", name, SNIPPET_EXT)
}

/// Rejects names that cannot be used verbatim as a file stem inside the root.
///
/// The name is otherwise kept as typed: no trimming, no escaping.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
    {
        return Err(SnipzError::InvalidName(name.to_string()));
    }
    Ok(())
}
