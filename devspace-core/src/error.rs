use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// Error taxonomy shared by every crate in the workspace.
///
/// `Configuration` is fatal and raised at construction time only.
/// `Infrastructure` wraps cluster API failures from a backend.
/// `Server` is recovery-scoped: it always names a single runtime and is
/// never fatal to a batch operation.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("{0}")]
    Server(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorkspaceError {
    /// True for errors that indicate the requested thing does not exist,
    /// as opposed to an operational failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkspaceError::NotFound(_))
    }
}
