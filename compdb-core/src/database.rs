//! Compilation database model
//!
//! See <https://clang.llvm.org/docs/JSONCompilationDatabase.html> for the
//! format specification.

use serde::{Deserialize, Serialize};

/// One compilation database record.
///
/// None of these fields are optional in a well-formed database, but a single
/// half-written entry must not fail the whole run, so each is modeled as
/// `Option` and validated at merge time instead of decode time. Unknown keys
/// produced by other tools (`command`, `output`) are ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Base directory the entry's arguments are relative to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Full compiler invocation, compiler name first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
    /// Source file path, relative to `directory` or absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Ordered sequence of database records. New files are appended at the end;
/// existing records keep their position.
pub type CommandEntries = Vec<CommandEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_entry() {
        let json = r#"{
            "directory": "/src/tree",
            "arguments": ["clang++", "-c", "a.cc"],
            "file": "a.cc"
        }"#;
        let entry: CommandEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.directory.as_deref(), Some("/src/tree"));
        assert_eq!(
            entry.arguments,
            Some(vec![
                "clang++".to_string(),
                "-c".to_string(),
                "a.cc".to_string()
            ])
        );
        assert_eq!(entry.file.as_deref(), Some("a.cc"));
    }

    #[test]
    fn test_decode_missing_fields() {
        let entry: CommandEntry = serde_json::from_str(r#"{"directory": "/src"}"#).unwrap();
        assert_eq!(entry.directory.as_deref(), Some("/src"));
        assert_eq!(entry.arguments, None);
        assert_eq!(entry.file, None);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        // Databases written by other producers use `command` instead of
        // `arguments`; we must still be able to read around it.
        let json = r#"{"file": "a.cc", "command": "clang++ -c a.cc", "output": "a.o"}"#;
        let entry: CommandEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.file.as_deref(), Some("a.cc"));
        assert_eq!(entry.arguments, None);
    }

    #[test]
    fn test_encode_skips_absent_fields() {
        let entry = CommandEntry {
            file: Some("a.cc".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"file":"a.cc"}"#);
    }

    #[test]
    fn test_entries_roundtrip() {
        let entries: CommandEntries = vec![CommandEntry {
            directory: Some("/src".to_string()),
            arguments: Some(vec!["cc".to_string(), "a.c".to_string()]),
            file: Some("a.c".to_string()),
        }];
        let json = serde_json::to_string(&entries).unwrap();
        let back: CommandEntries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }
}
