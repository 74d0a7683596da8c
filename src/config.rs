use std::path::PathBuf;

/// Highest verbosity level the printer distinguishes (`-vvv`)
pub const MAX_VERBOSITY: u8 = 3;

/// Process-wide printer settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Emit ANSI colors on the console; when false console output equals file output
    pub color: bool,
    /// Prepend `[HH:MM:SS]-<n>-` to every prefixed line
    pub timestamps: bool,
    pub log_file: Option<PathBuf>,
    /// Receives warnings and errors only, in addition to `log_file`
    pub error_log_file: Option<PathBuf>,
    /// Drop every line that is not a warning or error
    pub quiet: bool,
    pub verbosity: u8,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            color: true,
            timestamps: false,
            log_file: None,
            error_log_file: None,
            quiet: false,
            verbosity: 0,
        }
    }
}

/// Running totals kept by a printer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounters {
    /// Every call, including rejected and suppressed ones
    pub total: u64,
    pub console: u64,
    pub log: u64,
    pub error_log: u64,
}
