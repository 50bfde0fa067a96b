//! Book records and their one-line text form.
//!
//! A record line looks like:
//! ```text
//! 12.5 Physics Feynman Lectures on Physics
//! ```
//! The first whitespace-delimited token is the price. The rest of the line
//! is split on single spaces into subject, author and title, where the title
//! keeps everything after the author verbatim.

use std::fmt;
use std::str::FromStr;

use crate::error::{PipelineError, RecordError};

/// The closed set of subjects a selection may be filtered on.
///
/// Parsing a record does not check its subject against this set; only
/// filtering does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Mathematics, Subject::Physics, Subject::Chemistry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = PipelineError;

    /// Exact, case-sensitive match against the subject names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| PipelineError::InvalidSubject(s.to_string()))
    }
}

/// One book from the catalog. Built once at load time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub price: f64,
    pub subject: String,
    pub author: String,
    pub title: String,
}

impl BookRecord {
    pub fn new(
        price: f64,
        subject: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            price,
            subject: subject.into(),
            author: author.into(),
            title: title.into(),
        }
    }

    /// Does this record belong to `subject`?
    pub fn has_subject(&self, subject: Subject) -> bool {
        self.subject == subject.as_str()
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_price(self.price),
            self.subject,
            self.author,
            self.title
        )
    }
}

impl FromStr for BookRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Parse one catalog line into a `BookRecord`.
pub fn parse_line(raw: &str) -> Result<BookRecord, RecordError> {
    let line = raw.trim_start();
    if line.trim_end().is_empty() {
        return Err(RecordError::MissingPrice);
    }

    let (price_token, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    let price = parse_price(price_token)?;

    // Exactly one separator follows the price, as between the other fields.
    let (subject, rest) = next_field(rest);
    if subject.is_empty() {
        return Err(RecordError::MissingSubject);
    }
    let (author, title) = next_field(rest);
    if author.is_empty() {
        return Err(RecordError::MissingAuthor);
    }
    if title.trim().is_empty() {
        return Err(RecordError::MissingTitle);
    }

    Ok(BookRecord::new(price, subject, author, title))
}

/// Render a record as its canonical display line.
pub fn format_record(record: &BookRecord) -> String {
    record.to_string()
}

/// Format a price with at most 3 fractional digits, dropping trailing
/// zeros and a bare trailing decimal point.
///
/// `12.0` -> `"12"`, `12.5` -> `"12.5"`, `12.345` -> `"12.345"`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{price:.3}");
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

fn parse_price(token: &str) -> Result<f64, RecordError> {
    let price: f64 = token
        .parse()
        .map_err(|_| RecordError::InvalidPrice(token.to_string()))?;
    if !price.is_finite() {
        return Err(RecordError::InvalidPrice(token.to_string()));
    }
    if price < 0.0 {
        return Err(RecordError::NegativePrice(price));
    }
    Ok(price)
}

/// Split off the next single-space-delimited field.
fn next_field(s: &str) -> (&str, &str) {
    s.split_once(' ').unwrap_or((s, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = parse_line("12.5 Physics Feynman Lectures on Physics").unwrap();
        assert_eq!(record.price, 12.5);
        assert_eq!(record.subject, "Physics");
        assert_eq!(record.author, "Feynman");
        assert_eq!(record.title, "Lectures on Physics");
    }

    #[test]
    fn test_parse_keeps_title_spacing() {
        let record = parse_line("3 Chemistry Atkins Physical  Chemistry ").unwrap();
        assert_eq!(record.title, "Physical  Chemistry ");
    }

    #[test]
    fn test_parse_unknown_subject_allowed() {
        let record = parse_line("7 Biology Darwin Origin").unwrap();
        assert_eq!(record.subject, "Biology");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_line(""), Err(RecordError::MissingPrice));
        assert_eq!(parse_line("   "), Err(RecordError::MissingPrice));
        assert_eq!(
            parse_line("cheap Physics A T"),
            Err(RecordError::InvalidPrice("cheap".to_string()))
        );
        assert_eq!(
            parse_line("inf Physics A T"),
            Err(RecordError::InvalidPrice("inf".to_string()))
        );
        assert_eq!(
            parse_line("-4 Physics A T"),
            Err(RecordError::NegativePrice(-4.0))
        );
        assert_eq!(parse_line("10"), Err(RecordError::MissingSubject));
        assert_eq!(parse_line("10 Physics"), Err(RecordError::MissingAuthor));
        assert_eq!(parse_line("10 Physics Feynman"), Err(RecordError::MissingTitle));
        assert_eq!(parse_line("10 Physics Feynman "), Err(RecordError::MissingTitle));
        assert_eq!(parse_line("10  Physics Feynman T"), Err(RecordError::MissingSubject));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.0), "12");
        assert_eq!(format_price(12.50), "12.5");
        assert_eq!(format_price(12.345), "12.345");
        assert_eq!(format_price(12.340), "12.34");
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(100.0004), "100");
    }

    #[test]
    fn test_format_record() {
        let record = BookRecord::new(12.0, "Mathematics", "Spivak", "Calculus");
        assert_eq!(format_record(&record), "12 Mathematics Spivak Calculus");
        let record = BookRecord::new(12.5, "Physics", "Born", "Principles of Optics");
        assert!(format_record(&record).starts_with("12.5 "));
    }

    #[test]
    fn test_round_trip() {
        let records = [
            BookRecord::new(12.0, "Physics", "A", "T1"),
            BookRecord::new(0.125, "Chemistry", "Pauling", "The Nature of the Chemical Bond"),
            BookRecord::new(99.99, "Mathematics", "Knuth", "Concrete  Mathematics"),
        ];
        for record in records {
            assert_eq!(parse_line(&format_record(&record)).unwrap(), record);
        }
    }

    #[test]
    fn test_subject_from_str() {
        assert_eq!("Physics".parse::<Subject>(), Ok(Subject::Physics));
        assert_eq!("Mathematics".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!(
            "physics".parse::<Subject>(),
            Err(PipelineError::InvalidSubject("physics".to_string()))
        );
        assert_eq!(
            "Biology".parse::<Subject>(),
            Err(PipelineError::InvalidSubject("Biology".to_string()))
        );
    }
}
