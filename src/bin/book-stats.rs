//! CLI tool to filter, sort and summarise a book catalog.

use book_stats::prompt::ask_options;
use book_stats::{PipelineOptions, load_file, run_report};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Report price statistics for a catalog of books.
///
/// Each input line is `<price> <subject> <author> <title...>`.
#[derive(Parser)]
#[command(name = "book-stats")]
struct Cli {
    /// Catalog file
    #[arg(default_value = "books_data.dat")]
    input: PathBuf,

    /// Keep only this subject (Mathematics, Physics or Chemistry)
    #[arg(short, long, conflicts_with = "interactive")]
    subject: Option<String>,

    /// Sort the selection by author name
    #[arg(short = 'a', long, conflicts_with = "interactive")]
    sort_by_author: bool,

    /// Ask for the subject and sort order on stdin
    #[arg(short, long)]
    interactive: bool,

    /// Write the report to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show debug logging and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let loaded = match load_file(&cli.input) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    for malformed in &loaded.errors {
        eprintln!("Skipped malformed record at {malformed}");
    }

    let options = if cli.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        match ask_options(&mut stdin.lock(), &mut stdout, &loaded.records) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error reading answer: {e}");
                process::exit(1);
            }
        }
    } else {
        PipelineOptions {
            subject: cli.subject.clone(),
            sort_by_author: cli.sort_by_author,
        }
    };

    if cli.verbose {
        eprintln!("Input:    {}", cli.input.display());
        eprintln!(
            "Output:   {}",
            cli.output
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(stdout)".to_string())
        );
        eprintln!("Subject:  {}", options.subject.as_deref().unwrap_or("(all)"));
        eprintln!("Sort:     {}", if options.sort_by_author { "author" } else { "none" });
    }

    let report = match run_report(loaded, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Selection error: {e}");
            process::exit(1);
        }
    };
    let text = format!("{report}\n");

    if let Some(out_path) = &cli.output {
        if let Some(parent) = out_path.parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{}'", out_path.display());
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &text) {
            eprintln!("Error writing output file '{}': {e}", out_path.display());
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(text.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!(
            "Records:  {} in -> {} selected",
            report.total_records,
            report.selected_records()
        );
    }

    if report.statistics.is_err() {
        process::exit(1);
    }
}
