//! Result and statistics formatting for scan output.

use crate::scan::ScanOutcome;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print the scan result in the standard single-line format:
/// `The longest compound string in <list> is "<word>"`.
///
/// The word is empty quotes when the list contains no compound word.
pub fn print_result(list: &Path, outcome: &ScanOutcome, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);

    write!(
        stdout,
        "The longest compound string in {} is \"",
        list.display()
    )?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{}", outcome.longest)?;
    stdout.reset()?;
    writeln!(stdout, "\"")?;

    Ok(())
}

/// Print the scan statistics block.
pub fn print_stats(outcome: &ScanOutcome) {
    let stats = &outcome.stats;

    println!();
    println!("Scan Statistics");
    println!("===============");
    println!();
    println!("Words scanned:     {}", stats.words_total);
    println!("Unique words:      {}", stats.words_unique);
    println!("Dictionary nodes:  {}", stats.dict_nodes);
    println!("Candidates tested: {}", stats.candidates_tested);
    println!("Longest length:    {}", outcome.longest.len());
    println!("Elapsed:           {} ms", stats.elapsed_ms);
}

/// Print the result as a single JSON document for machine consumption.
pub fn print_json(list: &Path, outcome: &ScanOutcome) -> Result<()> {
    #[derive(Serialize)]
    struct Payload<'a> {
        list: String,
        longest: &'a str,
        length: usize,
        stats: &'a crate::scan::ScanStats,
    }

    let payload = Payload {
        list: list.display().to_string(),
        longest: &outcome.longest,
        length: outcome.longest.len(),
        stats: &outcome.stats,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
