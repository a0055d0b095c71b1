//! Compdb Core - Incremental compilation database capture
//!
//! This library provides the pipeline a compiler-wrapper binary runs before
//! handing control to the real compiler: derive the source files referenced
//! by the invocation, fold them into the on-disk compilation database, and
//! rewrite it under an exclusive file lock.

pub mod config;
pub mod database;
pub mod error;
pub mod invocation;
pub mod merge;
pub mod store;
pub mod update;

pub use config::HookConfig;
pub use database::{CommandEntries, CommandEntry};
pub use error::HookError;
pub use invocation::{
    collect_source_files, effective_arguments, join_path, SourceFile, SourceFileSet,
};
pub use merge::merge_entries;
pub use store::Database;
pub use update::update_database;

/// Result type alias for compdb operations
pub type Result<T> = std::result::Result<T, HookError>;
