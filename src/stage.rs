//! Record-at-a-time selection stages.
//!
//! Each `SelectionStage` sees one record at a time and returns zero or more
//! records for the next stage. Stages never copy or mutate records; they
//! pass along references into the loaded catalog.

use crate::record::{BookRecord, Subject};

/// A pipeline stage that processes records one at a time.
pub trait SelectionStage<'a> {
    /// Process a single input record, returning zero or more output records.
    fn process(&mut self, record: &'a BookRecord) -> Vec<&'a BookRecord>;

    /// Flush any held records once input is exhausted.
    ///
    /// Stages that need to see every record before emitting (SORT) do their
    /// work here.
    fn flush(&mut self) -> Vec<&'a BookRecord> {
        vec![]
    }

    /// The display name of this stage.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Stage implementations
// ---------------------------------------------------------------------------

/// FILTER subject - keeps records whose subject equals the filter.
pub struct SubjectFilterStage {
    subject: Subject,
}

impl SubjectFilterStage {
    pub fn new(subject: Subject) -> Self {
        Self { subject }
    }
}

impl<'a> SelectionStage<'a> for SubjectFilterStage {
    fn process(&mut self, record: &'a BookRecord) -> Vec<&'a BookRecord> {
        if record.has_subject(self.subject) {
            vec![record]
        } else {
            vec![]
        }
    }

    fn name(&self) -> &str {
        "FILTER"
    }
}

/// SORT author - holds every record, then emits them ordered by author.
///
/// Ordering is plain lexicographic on the author string. Records with equal
/// authors come out in the order they arrived.
#[derive(Default)]
pub struct AuthorSortStage<'a> {
    held: Vec<&'a BookRecord>,
}

impl AuthorSortStage<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> SelectionStage<'a> for AuthorSortStage<'a> {
    fn process(&mut self, record: &'a BookRecord) -> Vec<&'a BookRecord> {
        self.held.push(record);
        vec![]
    }

    fn flush(&mut self) -> Vec<&'a BookRecord> {
        let mut sorted = std::mem::take(&mut self.held);
        // `sort_by` is stable: ties keep arrival order.
        sorted.sort_by(|a, b| a.author.cmp(&b.author));
        sorted
    }

    fn name(&self) -> &str {
        "SORT"
    }
}
