//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet library**. Each snippet is a plain text file,
//! `<name>.txt`, in one directory, and every write that creates or saves a snippet
//! leaves a timestamped zip snapshot of that directory behind. The `snipz` binary
//! is one client of this library; nothing below the CLI layer assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, messages, backup side effects                │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                        │
//!                    ▼                        ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage Layer (store/)      │ │  Backups (backup.rs)       │
//! │  - SnippetStore trait        │ │  - snapshot + prune        │
//! │  - FileStore, InMemoryStore  │ │  - reads through the store │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Backups Never Block Writes
//!
//! `create` and `save` finish their write first, then run the backup manager. Any
//! backup failure comes back as a warning on the `CmdResult` (and a `warn!` log
//! line), never as an `Err`. `delete` does not take a backup.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`backup`]: Zip snapshots and retention
//! - [`model`]: `Snippet` and name validation
//! - [`config`]: The settings file and fixed app paths
//! - [`init`]: App directory resolution and context setup
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
