//! Merge logic for folding one invocation into the existing database

use crate::database::{CommandEntries, CommandEntry};
use crate::invocation::{join_path, SourceFileSet};
use std::path::Path;
use tracing::warn;

/// Fold the current invocation into `entries` in place.
///
/// Rules:
/// - An existing entry whose absolute path matches a discovered file gets
///   its `arguments` refreshed; `directory` and `file` stay as they were.
/// - Each discovered file is consumed by its first match, so one run never
///   both updates an entry and appends a duplicate for the same file.
/// - Entries without a `file` field are logged and skipped, never removed.
/// - Every unmatched file is appended as a new entry at the end.
/// - Entries for files this invocation does not reference are untouched;
///   the database only grows or refreshes, it never shrinks.
pub fn merge_entries(
    entries: &mut CommandEntries,
    mut source_files: SourceFileSet,
    arguments: &[String],
    workspace_dir: &Path,
) {
    for entry in entries.iter_mut() {
        let Some(file) = entry.file.as_deref() else {
            warn!(
                entry = %serde_json::to_string(entry).unwrap_or_else(|_| "?".to_string()),
                "compilation database contains an entry without a `file` field"
            );
            continue;
        };
        let base_directory = entry
            .directory
            .as_deref()
            .map(Path::new)
            .unwrap_or(workspace_dir);
        let absolute_path = join_path(base_directory, file);
        if source_files.remove(&absolute_path) {
            entry.arguments = Some(arguments.to_vec());
        }
    }
    for (_, relative_path) in source_files.iter() {
        entries.push(CommandEntry {
            directory: Some(workspace_dir.display().to_string()),
            arguments: Some(arguments.to_vec()),
            file: Some(relative_path.to_string()),
        });
    }
}
