//! Animated output built on the printer: progress bars, a percent counter,
//! several bars redrawn in place, and a tour of the print options.
//!
//! All animation frames are inline, unprefixed and kept out of log files.

use crate::colors::Color;
use crate::error::PrintError;
use crate::options::{PrintOptions, Severity};
use crate::printer::Printer;
use crate::slots;
use chrono::{Local, Timelike};
use std::io::Write;
use std::thread;
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Move the cursor to the start of the line
const CURSOR_LEFT: &str = "\x1b[1000D";

/// Appearance of a single progress bar
#[derive(Debug, Clone)]
pub struct BarStyle {
    pub symbol: String,
    pub empty: String,
    pub symbol_color: Color,
    pub empty_color: Color,
    pub bracket_color: Color,
    pub width: usize,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle {
            symbol: "━".to_string(),
            empty: "─".to_string(),
            symbol_color: Color::Reset,
            empty_color: Color::Grey1,
            bracket_color: Color::Reset,
            width: 50,
        }
    }
}

impl BarStyle {
    /// Same glyph for done and remaining, in the given color
    pub fn solid(symbol: &str, symbol_color: Color, width: usize) -> Self {
        BarStyle {
            symbol: symbol.to_string(),
            empty: symbol.to_string(),
            symbol_color,
            width,
            ..BarStyle::default()
        }
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Columns available on the attached terminal, 80 when there is none
fn terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        80
    }
}

/// Options for raw frame output: no prefixes, no digit coloring, no files
fn frame() -> PrintOptions {
    PrintOptions::default()
        .log_prefix(false)
        .highlight_numbers(false)
        .file(false)
}

/// Draw an empty bar, then fill it one symbol per tick.
pub fn progress_bar<W: Write>(
    printer: &mut Printer<W>,
    style: &BarStyle,
    delay: Duration,
) -> Result<(), PrintError> {
    printer.emit(
        &slots!["Entering progress_bar", Color::BMagenta],
        &PrintOptions::verbose(3),
    )?;
    printer.emit(
        &slots![
            format!(
                "Creating progress_bar using: {} | {} | {} | {} | {} | {}",
                style.symbol,
                style.empty,
                style.symbol_color.name(),
                style.empty_color.name(),
                style.bracket_color.name(),
                style.width
            ),
            Color::BMagenta
        ],
        &PrintOptions::verbose(1).highlight_numbers(false),
    )?;

    // leave room for the brackets
    let width = style.width.min(terminal_width().saturating_sub(2)).max(1);

    printer.emit(
        &slots![
            "[",
            style.bracket_color,
            style.empty.repeat(width),
            style.empty_color,
            "]",
            style.bracket_color
        ],
        &PrintOptions::progress(),
    )?;
    printer.emit(
        &slots!["\x08".repeat(width + 1), Color::Reset],
        &PrintOptions::progress().flush(false),
    )?;
    for _ in 0..width {
        pause(delay);
        printer.emit(
            &slots![style.symbol.as_str(), style.symbol_color],
            &PrintOptions::progress(),
        )?;
    }
    printer.emit(&slots!["", Color::Reset], &frame())?;

    printer.emit(
        &slots!["Finished with progress_bar.", Color::BMagenta],
        &PrintOptions::verbose(2),
    )
}

/// Rewrite `<pct>% | <text>` in place for `loops` steps.
pub fn percent_complete<W: Write>(
    printer: &mut Printer<W>,
    loops: usize,
    color: Color,
    text: &str,
    delay: Duration,
) -> Result<(), PrintError> {
    let loops = loops.max(1);
    for idx in 0..loops {
        pause(delay);
        let pct = (idx + 1) as f64 / loops as f64 * 100.0;
        printer.emit(
            &slots![format!("{}{:.0}% | {}", CURSOR_LEFT, pct, text), color],
            &PrintOptions::progress().highlight_numbers(false),
        )?;
    }
    printer.emit(&slots!["", Color::Reset], &frame())?;
    printer.emit(
        &slots!["Finished with percent_complete.", Color::BMagenta],
        &PrintOptions::verbose(2),
    )
}

/// Xorshift generator for picking which bar advances next
struct BarPicker(u64);

impl BarPicker {
    fn from_clock() -> Self {
        let nanos = Local::now().nanosecond() as u64;
        // xorshift never leaves zero
        BarPicker(nanos | 1)
    }

    fn pick(&mut self, len: usize) -> usize {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x % len as u64) as usize
    }
}

/// Advance `bar_count` bars at random until all reach 100, redrawing them
/// all in place after every step.
pub fn multi_bar<W: Write>(
    printer: &mut Printer<W>,
    bar_count: usize,
    delay: Duration,
) -> Result<(), PrintError> {
    printer.emit(
        &slots![format!("Create multi_bar using: {}:", bar_count), Color::BMagenta],
        &PrintOptions::verbose(3),
    )?;
    if bar_count == 0 {
        return Ok(());
    }

    let mut progress = vec![0usize; bar_count];
    let mut picker = BarPicker::from_clock();

    printer.emit(&slots!["\n".repeat(bar_count), Color::Black], &frame().inline(true))?;
    loop {
        let unfinished: Vec<usize> = progress
            .iter()
            .enumerate()
            .filter(|(_, v)| **v < 100)
            .map(|(i, _)| i)
            .collect();
        if unfinished.is_empty() {
            break;
        }
        pause(delay);
        let index = unfinished[picker.pick(unfinished.len())];
        progress[index] += 1;

        printer.emit(&slots![CURSOR_LEFT, Color::Black], &frame().inline(true))?;
        printer.emit(
            &slots![format!("\x1b[{}A", bar_count), Color::Black],
            &frame().inline(true),
        )?;
        for done in &progress {
            let filled = done / 2;
            printer.emit(
                &slots![
                    "[",
                    Color::Reset,
                    "━".repeat(filled),
                    Color::Black,
                    "─".repeat(50 - filled),
                    Color::Grey1,
                    "]",
                    Color::Reset
                ],
                &frame(),
            )?;
        }
    }

    printer.emit(
        &slots!["Finished with multi_bar", Color::BMagenta],
        &PrintOptions::verbose(3),
    )
}

/// A tour of the print options: colors, number highlighting, verbosity
/// levels, warnings and errors, with the animations in between.
pub fn showcase<W: Write>(printer: &mut Printer<W>, delay: Duration) -> Result<(), PrintError> {
    let verbosity = printer.config().verbosity;
    let trace = |level: u8| PrintOptions::verbose(level);

    printer.emit(&slots!["Entering showcase().", Color::BMagenta], &trace(3))?;
    printer.emit(
        &slots![
            "This text shows list position 0 with position 1 of default color,",
            Color::Reset,
            " and this text shows list position 2 with position 3 of Red. This uses default settings.",
            Color::Red
        ],
        &PrintOptions::default(),
    )?;

    progress_bar(printer, &BarStyle::solid("ꟷ", Color::Green, 50), delay)?;

    printer.emit(
        &slots![
            "The next 3 print statements show verbosity levels 1-3 in order. Will only be visible if that verbosity level requested",
            Color::Orange
        ],
        &PrintOptions::default(),
    )?;
    for level in 1..=3u8 {
        printer.emit(
            &slots![format!("Verbosity level {}", level), Color::BMagenta],
            &trace(level),
        )?;
    }

    printer.emit(&slots!["Calling multi_bar(4).", Color::BMagenta], &trace(2))?;
    multi_bar(printer, 4, delay / 5)?;

    progress_bar(printer, &BarStyle::solid("═", Color::Brown, 66), delay)?;

    printer.emit(&slots!["The next line is an empty line", Color::Reset], &PrintOptions::default())?;
    printer.emit(&slots!["", Color::Reset], &PrintOptions::default())?;
    printer.emit(
        &slots![
            "This shows numbers with default color: 19 00 ",
            Color::Reset,
            "and this with text and numbers in green: 19 00 -67-",
            Color::Green
        ],
        &PrintOptions::default().highlight_numbers(false),
    )?;

    progress_bar(printer, &BarStyle::default(), delay)?;

    printer.emit(
        &slots![
            "The next 3 lines demonstrate error handling with the text within the \"\" the only part typed. The rest is added by the printer.",
            Color::Reset
        ],
        &PrintOptions::default(),
    )?;
    printer.emit(
        &slots![
            format!(
                "\"This is error #423 with verbosity set to 1. This should show even without verbosity at runtime (verbosity={}) because severity overrides verbosity\"",
                verbosity
            ),
            Color::Red
        ],
        &trace(1).severity(Severity::Error),
    )?;
    printer.emit(
        &slots!["\"This is error #4244 with no number color\"", Color::Red],
        &PrintOptions::error().highlight_numbers(false),
    )?;
    printer.emit(
        &slots!["\"This is error 55, with default color\"", Color::Reset],
        &PrintOptions::error(),
    )?;

    progress_bar(printer, &BarStyle::solid("∞", Color::Black, 47), delay)?;

    printer.emit(
        &slots!["This is Warning #17171 in yellow.", Color::Yellow],
        &PrintOptions::warning(),
    )?;
    printer.emit(
        &slots!["This is warning #15 with no number color", Color::Yellow],
        &PrintOptions::warning().highlight_numbers(false),
    )?;

    printer.emit(&slots!["Calling percent_complete(100).", Color::BMagenta], &trace(2))?;
    percent_complete(printer, 100, Color::Black, "Progress...", delay)?;

    printer.emit(&slots!["Finished with showcase().", Color::Yellow], &trace(2))
}
