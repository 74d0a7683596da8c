//! Pure text assembly for a print call.
//!
//! Every call produces two parallel strings: the console string, which
//! carries ANSI color tokens, and the file string, which is the same text
//! with no escape codes at all. Nothing in here touches I/O.

use crate::colors::Color;
use crate::config::{CallCounters, PrintConfig};
use crate::options::{PrintOptions, Severity};
use crate::segment::Segment;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Color used to highlight digits inside text
pub const NUMBER_COLOR: Color = Color::BBlue;

// CSI sequences: colors, cursor movement, erase
static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("valid ANSI regex"));

// Unicode decimal digits (general category Nd), one at a time
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// The two outputs of a print call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub console: String,
    pub file: String,
}

/// Severity or verbosity prefix for both outputs.
///
/// Severity always wins over the `INFO-L<n>: ` marker. The verbosity marker
/// needs `log_prefix`; severity prefixes do not.
pub fn line_prefix(opts: &PrintOptions) -> Rendered {
    match opts.severity {
        Severity::Warning => Rendered {
            console: format!("{}WARNING: {}", Color::Yellow, Color::Reset),
            file: "WARNING: ".to_string(),
        },
        Severity::Error => Rendered {
            console: format!("{}ERROR: {}", Color::Red, Color::Reset),
            file: "ERROR: ".to_string(),
        },
        Severity::None if opts.min_verbosity > 0 && opts.log_prefix => {
            let info = format!("INFO-L{}: ", opts.min_verbosity);
            Rendered {
                console: info.clone(),
                file: info,
            }
        }
        Severity::None => Rendered::default(),
    }
}

/// Wrap every decimal digit in the number color, switching back to the
/// segment's own `color` after each one (a reset segment resumes with reset).
pub fn highlight_digits(text: &str, color: Color) -> String {
    DECIMAL_DIGIT
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", NUMBER_COLOR, &caps[0], color)
        })
        .into_owned()
}

/// Prefix plus colored segments, before timestamps and color stripping
pub fn assemble(segments: &[Segment], opts: &PrintOptions) -> Rendered {
    let mut rendered = line_prefix(opts);
    for segment in segments {
        let body: Cow<str> = if opts.highlight_numbers {
            Cow::Owned(highlight_digits(&segment.text, segment.color))
        } else {
            Cow::Borrowed(segment.text.as_str())
        };
        rendered.console.push_str(segment.color.code());
        rendered.console.push_str(&body);
        rendered.console.push_str(Color::Reset.code());
        rendered.file.push_str(&segment.text);
    }
    rendered
}

/// `[HH:MM:SS]-<ordinal>-`
pub fn timestamp_prefix(now: NaiveTime, ordinal: u64) -> String {
    format!("{}-{}-", now.format("[%H:%M:%S]"), ordinal)
}

/// Full rendering of one call against the current configuration.
///
/// Timestamps are numbered with the ordinal of the write they belong to:
/// the next console write for the console string and the next log write
/// for the file string.
pub fn render(
    segments: &[Segment],
    opts: &PrintOptions,
    config: &PrintConfig,
    counters: &CallCounters,
    now: NaiveTime,
) -> Rendered {
    let mut rendered = assemble(segments, opts);

    if config.timestamps && opts.log_prefix {
        rendered.console = format!(
            "{}{}",
            timestamp_prefix(now, counters.console + 1),
            rendered.console
        );
        rendered.file = format!("{}{}", timestamp_prefix(now, counters.log + 1), rendered.file);
    }

    if !config.color {
        rendered.console = rendered.file.clone();
    }

    rendered
}

/// Remove ANSI escape sequences from a string
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}
