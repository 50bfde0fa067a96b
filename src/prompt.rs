//! Interactive question-and-answer mode.
//!
//! Asks whether to filter, which subject, and whether to sort, re-asking
//! until each answer is usable. Generic over the reader and writer so the
//! dialogue can be driven from tests.

use std::io::{self, BufRead, Write};

use crate::error::PipelineError;
use crate::pipeline::validate_subject_filter;
use crate::record::BookRecord;
use crate::report::PipelineOptions;

/// Accept exactly one character, `y` or `n`, in either case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let mut chars = input.trim().chars();
    let answer = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_lowercase(),
        _ => return None,
    };
    match answer {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

/// Read one line; end of input is an error since the question is unanswered.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a valid answer",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a y/n question until answered.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        write!(output, "{question}")?;
        output.flush()?;
        let answer = read_answer(input)?;
        if let Some(yes) = parse_yes_no(&answer) {
            return Ok(yes);
        }
        writeln!(
            output,
            "Invalid input. Please enter 'y' or 'n' (single character only)."
        )?;
    }
}

/// Ask for a subject until one is valid and present in `records`.
pub fn ask_subject<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    records: &[BookRecord],
) -> io::Result<String> {
    loop {
        write!(
            output,
            "Enter subject to filter by (Enter Mathematics, Physics or Chemistry): "
        )?;
        output.flush()?;
        let answer = read_answer(input)?;
        match validate_subject_filter(records, &answer) {
            Ok(subject) => return Ok(subject.to_string()),
            Err(PipelineError::InvalidSubject(_)) => writeln!(
                output,
                "Invalid subject. Please enter Mathematics, Physics, or Chemistry."
            )?,
            Err(PipelineError::SubjectNotFound(subject)) => writeln!(
                output,
                "No books found for subject: {subject}. Please try again."
            )?,
        }
    }
}

/// Run the whole dialogue and return the chosen options.
pub fn ask_options<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    records: &[BookRecord],
) -> io::Result<PipelineOptions> {
    let filter = ask_yes_no(
        input,
        output,
        "Do you want to filter books by subject? ('y' for further choices, 'n' for all subjects): ",
    )?;
    let subject = if filter {
        Some(ask_subject(input, output, records)?)
    } else {
        None
    };
    let sort_by_author = ask_yes_no(
        input,
        output,
        "Do you want to sort the books by author name? (y/n): ",
    )?;
    Ok(PipelineOptions {
        subject,
        sort_by_author,
    })
}
