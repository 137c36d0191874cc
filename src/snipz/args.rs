use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", version)]
#[command(about = "Plain-text snippet manager with rolling zip backups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List snippets
    #[command(alias = "ls")]
    List {
        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a new, empty snippet
    #[command(alias = "n")]
    New { name: String },

    /// Print a snippet's content
    #[command(alias = "v")]
    Show { name: String },

    /// Overwrite a snippet's content (reads stdin when CONTENT is omitted)
    Save {
        name: String,

        /// New content
        content: Option<String>,
    },

    /// Edit a snippet in $EDITOR and save it
    #[command(alias = "e")]
    Edit { name: String },

    /// Delete a snippet
    #[command(alias = "rm")]
    Delete { name: String },

    /// Search snippet names (case-insensitive)
    Search { query: String },

    /// Print the file path of one or more snippets
    Path {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Show or change the snippets directory
    Dir {
        /// New snippets directory (if omitted, prints the current one)
        path: Option<PathBuf>,
    },

    /// Take a backup now
    Backup,

    /// List backup archives, newest first
    Backups,

    /// Create the snippets and backup directories
    Init,
}
