use crate::colors::Color;
use crate::config::{PrintConfig, MAX_VERBOSITY};
use crate::error::PrintError;
use crate::options::PrintOptions;
use crate::printer::Printer;
use crate::slots;
use clap::{ArgAction, Parser};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum Demo {
    #[value(name = "showcase", help = "Tour of colors, numbers, verbosity, warnings, errors and animations")]
    Showcase,
    #[value(name = "progress", help = "Single progress bar")]
    Progress,
    #[value(name = "percent", help = "Percent-complete counter")]
    Percent,
    #[value(name = "multi-bar", help = "Several progress bars redrawn in place")]
    MultiBar,
}

#[derive(Parser, Debug)]
#[command(name = "betterprint")]
#[command(about = "Colorized console output with verbosity levels and mirrored log files")]
#[command(version)]
#[command(after_help = "This program has no warranty. Please use with caution.")]
pub struct Args {
    /// Add timestamp logging to output
    #[arg(long = "log", visible_alias = "date-log")]
    pub log: bool,

    /// File to save output
    #[arg(long, value_name = "FILENAME")]
    pub log_file: Option<PathBuf>,

    /// File to save warnings and errors
    #[arg(long, value_name = "FILENAME")]
    pub error_log_file: Option<PathBuf>,

    /// Don't colorize output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress everything except warnings and errors
    #[arg(long)]
    pub quiet: bool,

    /// 3 level incremental verbosity (-v, -vv, or -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Which demo to run
    #[arg(long, value_enum, default_value = "showcase")]
    pub demo: Demo,

    /// Label color for the percent demo (any color name, e.g. cyan, grey4)
    #[arg(long, value_name = "COLOR", default_value = "black")]
    pub label_color: Color,

    /// Pause between animation frames (e.g. 50ms, 0s)
    #[arg(long, default_value = "50ms", value_parser = humantime::parse_duration)]
    pub delay: Duration,
}

impl Args {
    /// Resolve the printer configuration, capping verbosity at `-vvv`
    pub fn to_config(&self) -> PrintConfig {
        PrintConfig {
            color: !self.no_color,
            timestamps: self.log,
            log_file: self.log_file.clone(),
            error_log_file: self.error_log_file.clone(),
            quiet: self.quiet,
            verbosity: self.verbose.min(MAX_VERBOSITY),
        }
    }
}

/// What to do about a log file that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    Proceed,
    Abort,
}

/// Check the parsed arguments before the program starts printing for real.
///
/// Existing log files are only appended to after the user confirms; any
/// refusal aborts. Requests above `-vvv` produce a warning.
pub fn validate_args<W: Write, R: BufRead>(
    args: &Args,
    printer: &mut Printer<W>,
    input: &mut R,
) -> Result<FileDecision, PrintError> {
    let trace = PrintOptions::verbose(2).file(false);

    printer.emit(
        &slots![
            "Checking if log_file exists and ask if it should be appended.",
            Color::BMagenta
        ],
        &trace,
    )?;
    if let Some(path) = &args.log_file {
        if check_existing(path, printer, input)? == FileDecision::Abort {
            return Ok(FileDecision::Abort);
        }
    }

    printer.emit(
        &slots![
            "Checking error_log_file exists and ask if it should be appended.",
            Color::BMagenta
        ],
        &trace,
    )?;
    if let Some(path) = &args.error_log_file {
        if check_existing(path, printer, input)? == FileDecision::Abort {
            return Ok(FileDecision::Abort);
        }
    }

    if args.verbose > MAX_VERBOSITY {
        printer.emit(
            &slots![
                format!(
                    "Verbosity level {} requested. Using the maximum of {}.",
                    args.verbose, MAX_VERBOSITY
                ),
                Color::Yellow
            ],
            &PrintOptions::warning(),
        )?;
    }

    Ok(FileDecision::Proceed)
}

/// Ask whether an existing file should be appended to, until the answer
/// starts with `y` or `n`. End of input counts as no.
pub fn check_existing<W: Write, R: BufRead>(
    path: &Path,
    printer: &mut Printer<W>,
    input: &mut R,
) -> Result<FileDecision, PrintError> {
    printer.emit(
        &slots![
            format!("Starting check_existing({}).", path.display()),
            Color::BMagenta
        ],
        &PrintOptions::verbose(3).file(false),
    )?;

    if !path.is_file() {
        return Ok(FileDecision::Proceed);
    }

    let console_only = PrintOptions::warning().file(false);
    loop {
        write_prompt(printer, &format!("({}) exists. Append? [Y/N]: ", path.display()))?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            printer.emit(&slots!["Exiting", Color::Yellow], &console_only)?;
            return Ok(FileDecision::Abort);
        }

        let answer = answer.trim();
        match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(FileDecision::Proceed),
            Some('n') => {
                printer.emit(&slots!["Exiting", Color::Yellow], &console_only)?;
                return Ok(FileDecision::Abort);
            }
            _ => {
                printer.emit(
                    &slots![format!("{} is not \"Y\" or \"N\".", answer), Color::Yellow],
                    &console_only,
                )?;
            }
        }
    }
}

// The prompt is shown even in quiet mode, so it bypasses emit
fn write_prompt<W: Write>(printer: &mut Printer<W>, text: &str) -> Result<(), PrintError> {
    let color = printer.config().color;
    let console = printer.console_mut();
    if color {
        write!(console, "{}{}{}", Color::Yellow, text, Color::Reset)?;
    } else {
        write!(console, "{}", text)?;
    }
    console.flush()?;
    Ok(())
}
