use std::path::PathBuf;

use thiserror::Error;

use super::language::SourceLanguage;

/// Fatal configuration problems, raised before any file is visited.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("invalid omit entry {0:?}: expected a single directory name")]
    InvalidOmit(String),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// Per-file extraction failures. These never abort a scan.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    #[error("no grammar available for {0}")]
    GrammarUnavailable(SourceLanguage),

    #[error("failed to load grammar: {0}")]
    Language(String),

    #[error("failed to compile query: {0}")]
    Query(String),

    #[error("parser produced no syntax tree")]
    ParseFailed,

    #[error("failed to compile pattern: {0}")]
    Regex(String),
}
