//! Compiler wrapper that records each invocation into compile_commands.json
//!
//! Installed in place of the real compiler: the invocation is folded into
//! the compilation database first, then this process replaces itself with
//! the configured compiler, forwarding all arguments unchanged.

use compdb_core::{update_database, HookConfig};
use std::process::Command;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout belongs to the compiler.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let config = match HookConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "failed to resolve hook configuration");
            std::process::exit(1);
        }
    };

    // If record-keeping failed, the compiler must not run: the database is
    // the only trace these invocations leave behind.
    let arguments = match update_database(&config, &argv) {
        Ok(arguments) => arguments,
        Err(error) => {
            error!(
                %error,
                database = %config.database_path.display(),
                "failed to update compilation database"
            );
            std::process::exit(1);
        }
    };

    let exec_error = exec_compiler(&config.compiler, &arguments);
    error!(compiler = %config.compiler, error = %exec_error, "failed to exec compiler");
    std::process::exit(1);
}

/// Replace the process image with the compiler. Returns only on failure.
#[cfg(unix)]
fn exec_compiler(compiler: &str, arguments: &[String]) -> std::io::Error {
    use std::os::unix::process::CommandExt;
    Command::new(compiler).args(&arguments[1..]).exec()
}

/// Spawn-and-wait fallback for targets without exec semantics, forwarding
/// the compiler's exit status.
#[cfg(not(unix))]
fn exec_compiler(compiler: &str, arguments: &[String]) -> std::io::Error {
    match Command::new(compiler).args(&arguments[1..]).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(error) => error,
    }
}
