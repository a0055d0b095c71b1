//! The per-invocation update pipeline

use crate::config::HookConfig;
use crate::invocation::{collect_source_files, effective_arguments};
use crate::merge::merge_entries;
use crate::store::Database;
use tracing::debug;

/// Record the current invocation into the compilation database.
///
/// Opens and locks the database file, decodes it, folds the invocation in,
/// rewrites it, and returns the effective argument vector (compiler name
/// first) for the subsequent process replacement. The lock spans the whole
/// sequence, so concurrent invocations against the same database serialize.
/// Any error here must abort the run before the compiler is spawned.
pub fn update_database(config: &HookConfig, argv: &[String]) -> crate::Result<Vec<String>> {
    let mut database = Database::open(&config.database_path)?;
    let mut entries = database.read_entries()?;
    let arguments = effective_arguments(&config.compiler, argv);
    let source_files = collect_source_files(&config.workspace_dir, &arguments);
    debug!(
        existing = entries.len(),
        referenced = source_files.len(),
        "merging invocation into compilation database"
    );
    merge_entries(&mut entries, source_files, &arguments, &config.workspace_dir);
    database.rewrite(&entries)?;
    Ok(arguments)
}
