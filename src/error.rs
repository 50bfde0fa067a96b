//! Error types for loading, selecting and summarising book records.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Subject;

/// Why a single input line could not be parsed into a `BookRecord`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing price")]
    MissingPrice,

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("negative price {0}")]
    NegativePrice(f64),

    #[error("missing subject")]
    MissingSubject,

    #[error("missing author")]
    MissingAuthor,

    #[error("missing title")]
    MissingTitle,
}

/// A line that was skipped during loading.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line_number}: {source}: '{line}'")]
pub struct MalformedRecord {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub line: String,
    pub source: RecordError,
}

/// A subject filter that cannot be applied to the loaded records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("invalid subject '{0}' (expected Mathematics, Physics or Chemistry)")]
    InvalidSubject(String),

    #[error("no books found for subject: {0}")]
    SubjectNotFound(Subject),
}

/// Statistics requested over a selection too small to support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no records selected")]
    EmptyDataSet,

    #[error("sample standard deviation needs at least 2 records, got {n}")]
    InsufficientSampleSize { n: usize },
}

/// Errors surfaced by the reporting layer and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
