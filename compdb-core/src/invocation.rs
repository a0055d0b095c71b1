//! Invocation analysis: effective arguments and referenced source files

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Flags that consume the following token as their argument. The token after
/// any of these is never a source file, even when it does not start with `-`.
pub const FLAGS_WITH_ARGUMENT: [&str; 6] =
    ["-MF", "-include", "-iquote", "-isystem", "-o", "-target"];

/// Resolve `file_name` against `base_directory` unless it is already
/// absolute. An empty base leaves the file name unchanged, and a trailing
/// separator on the base never doubles, so `/a/b` and `/a/b/` resolve the
/// same file to the same path.
pub fn join_path(base_directory: &Path, file_name: &str) -> PathBuf {
    let file = Path::new(file_name);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base_directory.join(file)
    }
}

/// A source file referenced by the current invocation.
///
/// The relative path is kept exactly as given on the command line for
/// serialization into new entries; the absolute path is the identity used
/// for matching against existing entries. Lives only for the duration of one
/// update, never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    relative_path: String,
    absolute_path: PathBuf,
}

impl SourceFile {
    pub fn new(base_directory: &Path, relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let absolute_path = join_path(base_directory, &relative_path);
        Self {
            relative_path,
            absolute_path,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }
}

/// Ordered set of source files keyed by absolute path. The first insertion
/// of a path wins; later duplicates are dropped.
#[derive(Debug, Default)]
pub struct SourceFileSet {
    files: BTreeMap<PathBuf, String>,
}

impl SourceFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: SourceFile) {
        let SourceFile {
            relative_path,
            absolute_path,
        } = file;
        self.files.entry(absolute_path).or_insert(relative_path);
    }

    /// Remove the file with the given absolute path, reporting whether it
    /// was present.
    pub fn remove(&mut self, absolute_path: &Path) -> bool {
        self.files.remove(absolute_path).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Remaining files in absolute-path order, as (absolute, relative) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(abs, rel)| (abs.as_path(), rel.as_str()))
    }
}

/// Build the argument vector recorded in the database and handed to exec:
/// the forwarded arguments with argument zero replaced by the compiler name.
pub fn effective_arguments(compiler: &str, argv: &[String]) -> Vec<String> {
    let mut arguments = Vec::with_capacity(argv.len().max(1));
    arguments.push(compiler.to_string());
    arguments.extend(argv.iter().skip(1).cloned());
    arguments
}

/// Scan the effective arguments for referenced source files.
///
/// Anything that is neither a flag nor the argument of a flag in
/// [`FLAGS_WITH_ARGUMENT`] is treated as a candidate source file. This
/// over-matches on purpose: a positional linker input with no leading dash
/// gets recorded as a file too. Known approximation, kept as-is.
pub fn collect_source_files(base_directory: &Path, arguments: &[String]) -> SourceFileSet {
    let mut files = SourceFileSet::new();
    let mut tokens = arguments.iter().skip(1);
    while let Some(token) = tokens.next() {
        if FLAGS_WITH_ARGUMENT.contains(&token.as_str()) {
            tokens.next();
        } else if !token.starts_with('-') {
            files.insert(SourceFile::new(base_directory, token.as_str()));
        }
    }
    files
}
