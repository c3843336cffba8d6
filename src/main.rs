use anyhow::Result;
use clap::{Parser, ValueEnum};
use lcw::{output, scan};
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "lcw")]
#[command(about = "Finds the longest compound word in a newline-delimited word list")]
struct Cli {
    /// Word list to scan
    #[arg(default_value = "word.list")]
    list: PathBuf,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Print scan statistics after the result
    #[arg(long)]
    stats: bool,

    /// When to colorize output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Suppress the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let outcome = scan::scan(&cli.list, cli.quiet || cli.json)?;

    if cli.json {
        output::print_json(&cli.list, &outcome)?;
        return Ok(());
    }

    output::print_result(&cli.list, &outcome, cli.color.into())?;
    if cli.stats {
        output::print_stats(&outcome);
    }

    Ok(())
}
