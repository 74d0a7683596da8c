/// How serious a printed line is
///
/// Anything other than `None` bypasses verbosity filtering, gets a
/// `WARNING: ` or `ERROR: ` prefix, and is copied to the error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    None,
    Warning,
    Error,
}

impl Severity {
    pub fn is_none(self) -> bool {
        self == Severity::None
    }
}

/// Per-call flags for a single print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Write to the console
    pub console: bool,
    pub severity: Severity,
    /// Allow mirroring to the log files (if configured)
    pub file: bool,
    /// Flush the console immediately; only applies to inline writes
    pub flush: bool,
    /// No trailing newline (progress bars, percent updates)
    pub inline: bool,
    /// Allow the timestamp and `INFO-L<n>: ` prefixes
    pub log_prefix: bool,
    /// Render decimal digits in bright blue
    pub highlight_numbers: bool,
    /// Minimum configured verbosity needed for this line to appear
    pub min_verbosity: u8,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            console: true,
            severity: Severity::None,
            file: true,
            flush: false,
            inline: false,
            log_prefix: true,
            highlight_numbers: true,
            min_verbosity: 0,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a line that only shows at verbosity `level` or above
    pub fn verbose(level: u8) -> Self {
        Self::default().min_verbosity(level)
    }

    pub fn warning() -> Self {
        Self::default().severity(Severity::Warning)
    }

    pub fn error() -> Self {
        Self::default().severity(Severity::Error)
    }

    /// Inline, flushed, unprefixed and kept out of log files
    pub fn progress() -> Self {
        Self::default()
            .inline(true)
            .flush(true)
            .log_prefix(false)
            .file(false)
    }

    pub fn console(mut self, on: bool) -> Self {
        self.console = on;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn file(mut self, on: bool) -> Self {
        self.file = on;
        self
    }

    pub fn flush(mut self, on: bool) -> Self {
        self.flush = on;
        self
    }

    pub fn inline(mut self, on: bool) -> Self {
        self.inline = on;
        self
    }

    pub fn log_prefix(mut self, on: bool) -> Self {
        self.log_prefix = on;
        self
    }

    pub fn highlight_numbers(mut self, on: bool) -> Self {
        self.highlight_numbers = on;
        self
    }

    pub fn min_verbosity(mut self, level: u8) -> Self {
        self.min_verbosity = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = PrintOptions::default();
        assert!(opts.console);
        assert!(opts.file);
        assert!(opts.log_prefix);
        assert!(opts.highlight_numbers);
        assert!(!opts.flush);
        assert!(!opts.inline);
        assert_eq!(opts.severity, Severity::None);
        assert_eq!(opts.min_verbosity, 0);
    }

    #[test]
    fn test_progress_preset() {
        let opts = PrintOptions::progress();
        assert!(opts.inline && opts.flush);
        assert!(!opts.log_prefix);
        assert!(!opts.file);
        assert!(opts.console);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::None.is_none());
        assert!(!Severity::Warning.is_none());
        assert!(Severity::Error > Severity::Warning);
    }
}
