//! Document Store Port - Interface for sandboxed JSON artifact persistence.
//!
//! Documents are addressed by bare file names; implementations own the
//! sandbox root and must reject any name that would resolve outside it.
//! A missing document on read is a normal outcome rather than an error, so
//! callers can narrate it conversationally.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Port for JSON document storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a document, returning a missing sentinel when none exists.
    async fn read(&self, file_name: &str) -> Result<ReadOutcome, DocumentStoreError>;

    /// Serializes `content` and overwrites the document, creating it if
    /// absent. Returns the canonical stored file name.
    async fn write(&self, file_name: &str, content: &Value) -> Result<String, DocumentStoreError>;

    /// Appends `content` to the document.
    ///
    /// A missing document behaves exactly like a write. An existing JSON
    /// array gains one element; any other existing value becomes a
    /// two-element array of `[existing, content]`.
    async fn append(
        &self,
        file_name: &str,
        content: &Value,
    ) -> Result<AppendOutcome, DocumentStoreError>;
}

/// Result of a document read.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// The document exists and parsed as JSON.
    Found { file_name: String, value: Value },
    /// No document with this name exists yet.
    Missing { file_name: String },
}

/// Result of a document append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Canonical stored file name.
    pub file_name: String,
    /// True when no document existed and the append fell back to a write.
    pub created: bool,
}

/// Document store errors.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// The supplied file name was blank after trimming.
    #[error("File name cannot be empty.")]
    EmptyFileName,

    /// The supplied file name contained a directory separator.
    #[error("File name must not include directory separators.")]
    SeparatorInFileName,

    /// The resolved path landed outside the sandbox root.
    #[error("File path escapes the output directory.")]
    PathEscape,

    /// The stored document exists but is not parseable JSON.
    #[error("stored document {file_name} is not valid JSON: {detail}")]
    Corruption { file_name: String, detail: String },

    /// Content could not be serialized for storage.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Underlying filesystem failure.
    #[error("io error: {0}")]
    Io(String),
}

impl DocumentStoreError {
    /// True for errors caused by the supplied file name rather than storage.
    pub fn is_invalid_name(&self) -> bool {
        matches!(
            self,
            DocumentStoreError::EmptyFileName
                | DocumentStoreError::SeparatorInFileName
                | DocumentStoreError::PathEscape
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_classification() {
        assert!(DocumentStoreError::EmptyFileName.is_invalid_name());
        assert!(DocumentStoreError::SeparatorInFileName.is_invalid_name());
        assert!(DocumentStoreError::PathEscape.is_invalid_name());

        assert!(!DocumentStoreError::Io("disk full".to_string()).is_invalid_name());
        assert!(!DocumentStoreError::Corruption {
            file_name: "notes.json".to_string(),
            detail: "trailing garbage".to_string(),
        }
        .is_invalid_name());
    }

    #[test]
    fn name_errors_display_caller_facing_messages() {
        assert_eq!(
            DocumentStoreError::EmptyFileName.to_string(),
            "File name cannot be empty."
        );
        assert_eq!(
            DocumentStoreError::SeparatorInFileName.to_string(),
            "File name must not include directory separators."
        );
        assert_eq!(
            DocumentStoreError::PathEscape.to_string(),
            "File path escapes the output directory."
        );
    }
}
