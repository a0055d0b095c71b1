//! Configuration for the compiler hook

use crate::error::HookError;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the real compiler executable.
pub const COMPILER_ENV_VAR: &str = "COMPDB_HOOK_COMPILER";

/// Environment variable overriding the workspace directory.
pub const WORKSPACE_DIR_ENV_VAR: &str = "COMPDB_HOOK_WORKSPACE_DIR";

/// Environment variable overriding the database file path.
pub const DATABASE_PATH_ENV_VAR: &str = "COMPDB_HOOK_DATABASE";

/// Compiler used when `COMPDB_HOOK_COMPILER` is unset.
pub const DEFAULT_COMPILER: &str = "clang++";

/// Database file name, per the Clang JSON compilation database convention.
pub const DATABASE_FILE_NAME: &str = "compile_commands.json";

/// Resolved hook configuration.
///
/// Built once at startup and passed by reference into every component, so no
/// other code reads the process environment.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Executable the process image is replaced with after recording.
    pub compiler: String,
    /// Base directory relative source paths are resolved against.
    pub workspace_dir: PathBuf,
    /// Location of the compilation database file.
    pub database_path: PathBuf,
}

impl HookConfig {
    /// Build a configuration from the process environment.
    ///
    /// The workspace directory falls back to the current working directory;
    /// a relative database override is resolved against the workspace.
    pub fn from_env() -> crate::Result<Self> {
        let workspace_dir = match env::var_os(WORKSPACE_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().map_err(|e| HookError::io("getcwd", e))?,
        };
        let compiler =
            env::var(COMPILER_ENV_VAR).unwrap_or_else(|_| DEFAULT_COMPILER.to_string());
        let database_path = match env::var_os(DATABASE_PATH_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                if path.is_absolute() {
                    path
                } else {
                    workspace_dir.join(path)
                }
            }
            None => workspace_dir.join(DATABASE_FILE_NAME),
        };
        Ok(Self {
            compiler,
            workspace_dir,
            database_path,
        })
    }

    /// Build a configuration with explicit values, with the database at its
    /// default location inside the workspace. Lets tests and embedders
    /// inject configuration without environment lookups.
    pub fn with_workspace(compiler: impl Into<String>, workspace_dir: impl Into<PathBuf>) -> Self {
        let workspace_dir = workspace_dir.into();
        let database_path = workspace_dir.join(DATABASE_FILE_NAME);
        Self {
            compiler: compiler.into(),
            workspace_dir,
            database_path,
        }
    }
}
