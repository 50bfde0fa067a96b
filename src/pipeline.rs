//! Filter/sort pipeline over loaded records.
//!
//! ```text
//!  records ──► FILTER subject (optional) ──► SORT author (optional) ──► Selection
//! ```
//!
//! The selection borrows from the loaded records; nothing is copied or
//! re-parsed from text.

use std::ops::Deref;

use crate::error::PipelineError;
use crate::executor::{BoxedStage, execute_stages};
use crate::record::{BookRecord, Subject, format_record};
use crate::stage::{AuthorSortStage, SubjectFilterStage};

/// The records chosen by a pipeline run, in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    records: Vec<&'a BookRecord>,
}

impl<'a> Selection<'a> {
    pub fn new(records: Vec<&'a BookRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a BookRecord] {
        &self.records
    }

    /// Prices in selection order, for the statistics engine.
    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.price).collect()
    }

    /// Canonical display line of every selected record.
    pub fn display_lines(&self) -> Vec<String> {
        self.records.iter().map(|r| format_record(r)).collect()
    }
}

impl<'a> Deref for Selection<'a> {
    type Target = [&'a BookRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> FromIterator<&'a BookRecord> for Selection<'a> {
    fn from_iter<T: IntoIterator<Item = &'a BookRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Does any loaded record have this subject?
pub fn subject_exists(records: &[BookRecord], subject: Subject) -> bool {
    records.iter().any(|r| r.has_subject(subject))
}

/// Check a user-supplied subject filter against the closed subject set and
/// against the loaded records.
pub fn validate_subject_filter(
    records: &[BookRecord],
    raw: &str,
) -> Result<Subject, PipelineError> {
    let subject: Subject = raw.parse()?;
    if !subject_exists(records, subject) {
        return Err(PipelineError::SubjectNotFound(subject));
    }
    Ok(subject)
}

/// Select records: keep those matching `subject_filter` (if any), then
/// order by author (if requested). Without a sort the load order is kept.
pub fn apply_pipeline<'a>(
    records: &'a [BookRecord],
    subject_filter: Option<&str>,
    sort_by_author: bool,
) -> Result<Selection<'a>, PipelineError> {
    let mut stages: Vec<BoxedStage<'a>> = Vec::new();
    if let Some(raw) = subject_filter {
        let subject = validate_subject_filter(records, raw)?;
        stages.push(Box::new(SubjectFilterStage::new(subject)));
    }
    if sort_by_author {
        stages.push(Box::new(AuthorSortStage::new()));
    }

    let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
    log::debug!("Pipeline stages: {names:?}");

    let selected = execute_stages(records, &mut stages);
    log::info!(
        "Selected {} of {} records",
        selected.len(),
        records.len()
    );
    Ok(Selection::new(selected))
}
