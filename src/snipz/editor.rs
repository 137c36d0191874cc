use crate::error::{Result, SnipzError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(SnipzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry flags, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| SnipzError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| SnipzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(SnipzError::Io)
}

/// Opens an editor on `initial` and returns the edited text.
/// The buffer lives in a temporary `.txt` file that is removed afterwards.
pub fn edit_content(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!("snipz_edit_{}.txt", Uuid::new_v4()));

    fs::write(&temp_file, initial).map_err(SnipzError::Io)?;
    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    result
}
