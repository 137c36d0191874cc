use colored::Colorize;
use snipz::api::{BackupArchive, CmdMessage, CmdResult, MessageLevel};
use std::path::PathBuf;

const ARCHIVE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("No snippets found.");
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

/// Prints content verbatim so `snipz show x > file` reproduces the snippet.
pub(super) fn print_content(result: &CmdResult) {
    if let Some(content) = &result.content {
        print!("{}", content);
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

pub(super) fn print_archives(archives: &[BackupArchive]) {
    for archive in archives {
        println!(
            "{}  {}",
            archive.modified.format(ARCHIVE_TIME_FORMAT).to_string().dimmed(),
            archive.file_name()
        );
    }
}
