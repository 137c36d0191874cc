use crate::backup::{BackupArchive, BackupOutcome};
use std::path::PathBuf;

pub mod backup;
pub mod create;
pub mod delete;
pub mod dir;
pub mod helpers;
pub mod init;
pub mod list;
pub mod paths;
pub mod save;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// `backup` is only set by commands that trigger a backup run; a warning there
/// never turns the command itself into a failure.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<String>,
    pub content: Option<String>,
    pub paths: Vec<PathBuf>,
    pub archives: Vec<BackupArchive>,
    pub backup: Option<BackupOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, names: Vec<String>) -> Self {
        self.listed = names;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_archives(mut self, archives: Vec<BackupArchive>) -> Self {
        self.archives = archives;
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
