//! Loading a catalog: one record per line, malformed lines skipped and
//! reported alongside the records that did parse.

use std::fs;
use std::path::Path;

use crate::error::{Error, MalformedRecord};
use crate::record::{BookRecord, parse_line};

/// Result of loading a catalog. Partial success is the normal case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Parsed records in input order.
    pub records: Vec<BookRecord>,
    /// Lines that failed to parse, in input order.
    pub errors: Vec<MalformedRecord>,
}

impl LoadReport {
    /// Number of input lines seen, parsed or not.
    pub fn line_count(&self) -> usize {
        self.records.len() + self.errors.len()
    }
}

/// Parse every line, collecting failures instead of stopping at the first.
pub fn load_and_parse<I, S>(lines: I) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(record) => report.records.push(record),
            Err(source) => {
                let malformed = MalformedRecord {
                    line_number: i + 1,
                    line: line.to_string(),
                    source,
                };
                log::warn!("Skipping {malformed}");
                report.errors.push(malformed);
            }
        }
    }
    log::info!(
        "Loaded {} records ({} malformed lines skipped)",
        report.records.len(),
        report.errors.len()
    );
    report
}

/// Load catalog text. A final newline does not add an empty line.
pub fn load_str(text: &str) -> LoadReport {
    load_and_parse(text.lines())
}

/// Read and load a catalog file.
pub fn load_file(path: &Path) -> Result<LoadReport, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_str(&text))
}
