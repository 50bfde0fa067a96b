//! # book-stats
//!
//! Filter, sort and summarise a flat-file catalog of books.
//!
//! ## Overview
//!
//! Each catalog line holds one book:
//! ```text
//! <price> <subject> <author> <title...>
//! ```
//! Processing runs in three steps:
//! - **Load**: parse every line into a `BookRecord`, skipping and reporting
//!   malformed lines
//! - **Select**: optionally keep one subject, optionally sort by author
//!   (stable, ties keep load order)
//! - **Summarise**: mean, sample standard deviation and standard error of
//!   the mean over the selected prices
//!
//! ## Example
//!
//! ```
//! use book_stats::{apply_pipeline, compute_statistics, load_str};
//!
//! let loaded = load_str(
//!     "10 Physics Feynman Lectures on Physics\n\
//!      20 Chemistry Atkins Physical Chemistry\n\
//!      30 Physics Born Principles of Optics\n",
//! );
//! assert!(loaded.errors.is_empty());
//!
//! let selection = apply_pipeline(&loaded.records, Some("Physics"), true).unwrap();
//! assert_eq!(
//!     selection.display_lines(),
//!     vec![
//!         "30 Physics Born Principles of Optics",
//!         "10 Physics Feynman Lectures on Physics",
//!     ]
//! );
//!
//! let stats = compute_statistics(&selection).unwrap();
//! assert_eq!(stats.mean, 20.0);
//! ```

pub mod error;
pub mod executor;
pub mod loader;
pub mod pipeline;
pub mod prompt;
pub mod record;
pub mod report;
pub mod stage;
pub mod stats;

pub use error::{Error, MalformedRecord, PipelineError, RecordError, StatsError};
pub use executor::{BoxedStage, execute_stages};
pub use loader::{LoadReport, load_and_parse, load_file, load_str};
pub use pipeline::{Selection, apply_pipeline, subject_exists, validate_subject_filter};
pub use prompt::{ask_options, parse_yes_no};
pub use record::{BookRecord, Subject, format_price, format_record, parse_line};
pub use report::{PipelineOptions, Report, run_report};
pub use stage::{AuthorSortStage, SelectionStage, SubjectFilterStage};
pub use stats::{
    StatisticsResult, compute_statistics, mean, sample_standard_deviation,
    standard_error_of_mean, summarize,
};
