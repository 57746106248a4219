//! Errors shared by every admin crate
//!
//! Library code returns [`AdminResult`]. The CLI wraps these in `anyhow`
//! with command context, so variants carry the detail a user needs (the
//! offending path, id or value) and nothing else.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------
    /// The schema validator refused an import; `summary` joins its messages
    #[error("Import rejected with {count} error(s): {summary}")]
    ImportRejected { count: usize, summary: String },

    /// A tag outside a closed set (category, article type, status)
    #[error("Invalid {field} value: '{value}'")]
    InvalidChoice { field: String, value: String },

    #[error("Invalid content format: {0}")]
    InvalidContentFormat(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ------------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------------
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Duplicate {kind} id: '{id}' already exists")]
    DuplicateId { kind: String, id: String },

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------
    #[error("Export generation failed: {0}")]
    Generation(String),

    /// Every collection is empty
    #[error("No content to export: load site data or add entries first")]
    NothingToExport,

    /// Target exists and overwriting was not requested
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),

    // ------------------------------------------------------------------------
    // Filesystem
    // ------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    /// Broken invariant, e.g. a poisoned lock
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        AdminError::InvalidChoice {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        AdminError::Generation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AdminError::Internal(msg.into())
    }

    /// Input was refused for what it contains
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AdminError::ImportRejected { .. } | AdminError::InvalidChoice { .. }
        )
    }

    /// A record id did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AdminError::ProductNotFound(_)
                | AdminError::ArticleNotFound(_)
                | AdminError::ProjectNotFound(_)
        )
    }

    /// The filesystem refused a read or write
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            AdminError::FileRead { .. }
                | AdminError::FileWrite { .. }
                | AdminError::DirectoryCreate { .. }
        )
    }
}

pub type AdminResult<T> = Result<T, AdminError>;
