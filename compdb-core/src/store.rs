//! Locked access to the on-disk database file

use crate::database::CommandEntries;
use crate::error::HookError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, warn};

/// An open, exclusively locked compilation database file.
///
/// Construction blocks until the advisory lock is granted and the lock is
/// held for the lifetime of the value, so the whole parse-merge-rewrite
/// sequence of one invocation runs under mutual exclusion. Dropping the
/// value releases the lock on every exit path, including early error
/// returns. There is no timeout: a stuck holder stalls all other
/// invocations.
#[derive(Debug)]
pub struct Database {
    file: File,
}

impl Database {
    /// Open or create the database file and take the exclusive lock.
    pub fn open(path: &Path) -> crate::Result<Self> {
        let file = open_options()
            .open(path)
            .map_err(|e| HookError::io("open", e))?;
        file.lock_exclusive().map_err(|e| HookError::io("lock", e))?;
        debug!(path = %path.display(), "locked compilation database");
        Ok(Self { file })
    }

    /// Read and decode the full database contents.
    ///
    /// Read failures propagate; decode failures do not. An unparseable
    /// database (including a freshly created empty file) is treated the
    /// same as an empty one: lost entries regenerate on the next build,
    /// whereas failing the compiler invocation is not recoverable.
    pub fn read_entries(&mut self) -> crate::Result<CommandEntries> {
        let mut contents = Vec::new();
        self.file
            .read_to_end(&mut contents)
            .map_err(|e| HookError::io("read", e))?;
        match serde_json::from_slice(&contents) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                if !contents.is_empty() {
                    warn!(%error, "database content is unparseable, starting from empty");
                }
                Ok(CommandEntries::new())
            }
        }
    }

    /// Replace the file contents with the serialized entries.
    ///
    /// Truncate-then-rewrite: a failure mid-write can leave the file empty
    /// or short. The error aborts the invocation before the compiler is
    /// spawned and the next run recovers via the empty-database fallback.
    pub fn rewrite(&mut self, entries: &CommandEntries) -> crate::Result<()> {
        self.file
            .set_len(0)
            .map_err(|e| HookError::io("truncate", e))?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| HookError::io("seek", e))?;
        let mut json = serde_json::to_string_pretty(entries)?;
        json.push('\n');
        self.file
            .write_all(json.as_bytes())
            .map_err(|e| HookError::io("write", e))?;
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Advisory lock; the kernel would also release it when the
        // descriptor closes.
        let _ = FileExt::unlock(&self.file);
    }
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o664);
    }
    options
}
