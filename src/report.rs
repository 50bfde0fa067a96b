//! End-to-end run: load, select, summarise, render.

use std::fmt;

use crate::error::{Error, MalformedRecord, StatsError};
use crate::loader::LoadReport;
use crate::pipeline::apply_pipeline;
use crate::stats::{StatisticsResult, compute_statistics};

/// What to select from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Subject to keep; `None` keeps every record.
    pub subject: Option<String>,
    pub sort_by_author: bool,
}

/// Everything the caller prints after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_records: usize,
    pub malformed: Vec<MalformedRecord>,
    /// Canonical display lines of the selection, in selection order.
    pub lines: Vec<String>,
    /// Statistics failures do not discard the rest of the report.
    pub statistics: Result<StatisticsResult, StatsError>,
}

impl Report {
    pub fn selected_records(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of records: {}", self.total_records)?;
        writeln!(
            f,
            "Number of records for the selection: {}",
            self.selected_records()
        )?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        match &self.statistics {
            Ok(stats) => {
                writeln!(f, "Mean price: {:.3}", stats.mean)?;
                writeln!(f, "Standard deviation: {:.3}", stats.standard_deviation)?;
                write!(f, "Standard error of mean: {:.3}", stats.standard_error)
            }
            Err(e) => write!(f, "Statistics unavailable: {e}"),
        }
    }
}

/// Run the selection and statistics over an already loaded catalog.
///
/// Fails only when the subject filter cannot be applied.
pub fn run_report(loaded: LoadReport, options: &PipelineOptions) -> Result<Report, Error> {
    let LoadReport { records, errors } = loaded;
    let selection = apply_pipeline(
        &records,
        options.subject.as_deref(),
        options.sort_by_author,
    )?;

    let statistics = compute_statistics(&selection);
    if let Err(e) = &statistics {
        log::warn!("Statistics not computed: {e}");
    }

    Ok(Report {
        total_records: records.len(),
        malformed: errors,
        lines: selection.display_lines(),
        statistics,
    })
}
