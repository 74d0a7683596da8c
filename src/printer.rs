use crate::colors::Color;
use crate::config::{CallCounters, PrintConfig};
use crate::error::PrintError;
use crate::format::{self, Rendered};
use crate::options::PrintOptions;
use crate::segment::{pair_slots, Segment, Slot};
use chrono::{Local, NaiveTime};
use once_cell::sync::Lazy;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Source of wall-clock time for timestamp prefixes
pub type Clock = fn() -> NaiveTime;

fn local_time() -> NaiveTime {
    Local::now().time()
}

/// Formats print calls and routes them to the console and log files.
///
/// The printer owns its configuration and call counters; nothing about a
/// call survives it except the counters and whatever was appended to the
/// log files. Log files are opened in append mode and closed again on
/// every call.
pub struct Printer<W: Write = Stdout> {
    config: PrintConfig,
    counters: CallCounters,
    console: W,
    clock: Clock,
}

impl Printer<Stdout> {
    /// Printer writing to the process's standard output
    pub fn stdout(config: PrintConfig) -> Self {
        Printer::new(config, io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(config: PrintConfig, console: W) -> Self {
        Printer {
            config,
            counters: CallCounters::default(),
            console,
            clock: local_time,
        }
    }

    /// Replace the timestamp clock (fixed times make output reproducible)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Swap in a new configuration; counters keep running
    pub fn set_config(&mut self, config: PrintConfig) {
        self.config = config;
    }

    pub fn counters(&self) -> CallCounters {
        self.counters
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }

    pub fn into_console(self) -> W {
        self.console
    }

    /// Print a flattened `text, color, text, color, ...` list.
    ///
    /// Malformed lists fail before anything is written. Log file failures
    /// are reported on the console and do not fail the call.
    pub fn emit(&mut self, slots: &[Slot], opts: &PrintOptions) -> Result<(), PrintError> {
        self.counters.total += 1;
        let segments = pair_slots(slots)?;
        self.dispatch(&segments, opts)
    }

    /// Same as [`Printer::emit`] for input that is already paired
    pub fn emit_segments(
        &mut self,
        segments: &[Segment],
        opts: &PrintOptions,
    ) -> Result<(), PrintError> {
        self.counters.total += 1;
        if segments.is_empty() {
            return Err(PrintError::NoSegments);
        }
        self.dispatch(segments, opts)
    }

    /// True when the call produces no output at all
    pub fn is_suppressed(&self, opts: &PrintOptions) -> bool {
        opts.severity.is_none()
            && (self.config.quiet || self.config.verbosity < opts.min_verbosity)
    }

    /// Render a call without writing it or touching the counters
    pub fn render(&self, segments: &[Segment], opts: &PrintOptions) -> Rendered {
        format::render(segments, opts, &self.config, &self.counters, (self.clock)())
    }

    fn dispatch(&mut self, segments: &[Segment], opts: &PrintOptions) -> Result<(), PrintError> {
        if self.is_suppressed(opts) {
            return Ok(());
        }

        let rendered = self.render(segments, opts);

        if opts.console {
            self.write_console(&rendered.console, opts.inline, opts.inline && opts.flush)?;
        }

        if opts.file {
            if let Err(e) = self.write_files(&rendered.file, opts) {
                self.report_io_failure(&e)?;
            }
        }

        Ok(())
    }

    fn write_console(&mut self, text: &str, inline: bool, flush: bool) -> io::Result<()> {
        if inline {
            self.console.write_all(text.as_bytes())?;
        } else {
            writeln!(self.console, "{}", text)?;
        }
        if flush {
            self.console.flush()?;
        }
        self.counters.console += 1;
        Ok(())
    }

    fn write_files(&mut self, line: &str, opts: &PrintOptions) -> io::Result<()> {
        if let Some(path) = &self.config.log_file {
            append_line(path, line)?;
            self.counters.log += 1;
        }
        if !opts.severity.is_none() {
            if let Some(path) = &self.config.error_log_file {
                append_line(path, line)?;
                self.counters.error_log += 1;
            }
        }
        Ok(())
    }

    /// Console-only warning for a failed log write. Never goes near the
    /// log files, so a broken log path cannot recurse.
    fn report_io_failure(&mut self, err: &io::Error) -> Result<(), PrintError> {
        let message = format!(
            "exception caught trying to write to {} or {}\n\t{}",
            display_path(self.config.log_file.as_deref()),
            display_path(self.config.error_log_file.as_deref()),
            err
        );
        let segments = [Segment::new(message, Color::Red)];
        let opts = PrintOptions::warning().file(false);
        let rendered = self.render(&segments, &opts);
        self.write_console(&rendered.console, false, false)?;
        Ok(())
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}

/// Append one line to a file, creating it if needed
fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

// Shared printer for callers that don't want to thread one through
static GLOBAL: Lazy<Mutex<Printer<Stdout>>> =
    Lazy::new(|| Mutex::new(Printer::stdout(PrintConfig::default())));

/// Run `f` with exclusive access to the process-wide printer
pub fn with_printer<R>(f: impl FnOnce(&mut Printer<Stdout>) -> R) -> R {
    let mut guard = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Install the configuration used by [`bp`]
pub fn configure(config: PrintConfig) {
    with_printer(|printer| printer.set_config(config));
}

/// Print through the process-wide printer.
///
/// ```no_run
/// use betterprint::{bp, slots, Color, PrintOptions};
///
/// bp(&slots!["Hello ", Color::Red, "world", Color::Reset], &PrintOptions::verbose(2)).unwrap();
/// ```
pub fn bp(slots: &[Slot], opts: &PrintOptions) -> Result<(), PrintError> {
    with_printer(|printer| printer.emit(slots, opts))
}
