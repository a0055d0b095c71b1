//! Error types for compdb operations

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// An I/O operation failed. The operation name identifies which step of
    /// the pipeline hit the error (`open`, `lock`, `read`, `truncate`,
    /// `seek`, `write`, `getcwd`).
    #[error("{op} failed: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HookError {
    /// Tag an I/O error with the name of the failing operation.
    pub fn io(op: &'static str, source: std::io::Error) -> Self {
        Self::Io { op, source }
    }
}
