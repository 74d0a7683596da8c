// tests/emit_tests.rs - console rendering and dispatch rules
use betterprint::{
    slots, strip_ansi, Color, PrintConfig, PrintError, PrintOptions, Printer, Segment, Severity,
    Slot,
};
use chrono::NaiveTime;

fn quarter_past() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 15, 16).unwrap()
}

fn printer_with(config: PrintConfig) -> Printer<Vec<u8>> {
    Printer::new(config, Vec::new()).with_clock(quarter_past)
}

fn console_text(printer: &Printer<Vec<u8>>) -> String {
    String::from_utf8(printer.console().clone()).unwrap()
}

#[test]
fn test_count_scenario_console_bytes() {
    println!("=== Testing number highlight on a reset segment ===");

    let mut printer = printer_with(PrintConfig::default());
    printer
        .emit(&slots!["Count: 42", Color::Reset], &PrintOptions::default())
        .unwrap();

    let r = Color::Reset.code();
    let b = Color::BBlue.code();
    let expected = format!("{r}Count: {b}4{r}{b}2{r}{r}\n");
    assert_eq!(console_text(&printer), expected);
}

#[test]
fn test_console_and_file_text_agree() {
    println!("=== Testing stripped console text equals file text ===");

    let inputs: Vec<Vec<Slot>> = vec![
        slots!["Hello", Color::Red, " world", Color::Reset, "!", Color::Green],
        slots!["v1.2.3 released on 2024-01-01", Color::Orange],
        slots!["", Color::Reset],
        slots!["tabs\tand 99 bottles", Color::Grey7],
    ];
    let option_sets = vec![
        PrintOptions::default(),
        PrintOptions::verbose(1),
        PrintOptions::warning(),
        PrintOptions::error().highlight_numbers(false),
    ];

    let config = PrintConfig {
        verbosity: 3,
        timestamps: true,
        ..PrintConfig::default()
    };
    for slots in &inputs {
        for opts in &option_sets {
            let printer = printer_with(config.clone());
            let segments = betterprint::pair_slots(slots).unwrap();
            let rendered = printer.render(&segments, opts);
            assert_eq!(strip_ansi(&rendered.console), rendered.file, "{:?} / {:?}", slots, opts);
        }
    }
}

#[test]
fn test_highlight_resumes_segment_color() {
    let mut printer = printer_with(PrintConfig::default());
    printer
        .emit(&slots!["a1", Color::Cyan], &PrintOptions::default())
        .unwrap();
    let expected = format!(
        "{}a{}1{}{}\n",
        Color::Cyan,
        Color::BBlue,
        Color::Cyan,
        Color::Reset
    );
    assert_eq!(console_text(&printer), expected);
}

#[test]
fn test_error_prefix_wins_over_verbosity() {
    println!("=== Testing error prefix with a verbosity requirement ===");

    let mut printer = printer_with(PrintConfig::default());
    let opts = PrintOptions::verbose(3).severity(Severity::Error);
    printer.emit(&slots!["disk", Color::Red], &opts).unwrap();

    let out = console_text(&printer);
    let expected_prefix = format!("{}ERROR: {}", Color::Red, Color::Reset);
    assert!(out.starts_with(&expected_prefix), "got {:?}", out);
    assert!(!out.contains("INFO-L"));
}

#[test]
fn test_info_prefix_for_verbose_lines() {
    let mut printer = printer_with(PrintConfig {
        verbosity: 2,
        color: false,
        ..PrintConfig::default()
    });
    printer
        .emit(&slots!["detail", Color::BMagenta], &PrintOptions::verbose(2))
        .unwrap();
    printer
        .emit(
            &slots!["bare", Color::BMagenta],
            &PrintOptions::verbose(1).log_prefix(false),
        )
        .unwrap();
    assert_eq!(console_text(&printer), "INFO-L2: detail\nbare\n");
}

#[test]
fn test_suppressed_call_only_counts() {
    println!("=== Testing verbosity suppression ===");

    let mut printer = printer_with(PrintConfig {
        verbosity: 1,
        ..PrintConfig::default()
    });
    printer
        .emit(&slots!["hidden", Color::Reset], &PrintOptions::verbose(2))
        .unwrap();

    let counters = printer.counters();
    assert_eq!(console_text(&printer), "");
    assert_eq!(counters.total, 1);
    assert_eq!(counters.console, 0);
    assert_eq!(counters.log, 0);
}

#[test]
fn test_verbosity_at_threshold_prints() {
    let mut printer = printer_with(PrintConfig {
        verbosity: 2,
        color: false,
        ..PrintConfig::default()
    });
    printer
        .emit(&slots!["shown", Color::Reset], &PrintOptions::verbose(2).log_prefix(false))
        .unwrap();
    assert_eq!(console_text(&printer), "shown\n");
}

#[test]
fn test_odd_slot_count_fails_without_output() {
    let mut printer = printer_with(PrintConfig::default());
    let result = printer.emit(
        &slots!["Raise exception with only 3 entries.", Color::Red, "oops"],
        &PrintOptions::default(),
    );
    assert!(matches!(result, Err(PrintError::OddSlotCount { count: 3 })));
    assert_eq!(console_text(&printer), "");
    assert_eq!(printer.counters().console, 0);
}

#[test]
fn test_validation_not_hidden_by_verbosity() {
    // A malformed call fails even when it would have been suppressed
    let mut printer = printer_with(PrintConfig::default());
    let result = printer.emit(
        &[Slot::Color(Color::Red), Slot::Color(Color::Red)],
        &PrintOptions::verbose(3),
    );
    assert!(matches!(result, Err(PrintError::NotText { index: 0, .. })));
}

#[test]
fn test_no_color_console_equals_file_bytes() {
    println!("=== Testing no-color output ===");

    let config = PrintConfig {
        color: false,
        timestamps: true,
        verbosity: 1,
        ..PrintConfig::default()
    };
    let mut printer = printer_with(config);
    let segments = vec![
        Segment::new("step 3 of 7 ", Color::Green),
        Segment::new("done", Color::Brown),
    ];
    let opts = PrintOptions::verbose(1);
    let rendered = printer.render(&segments, &opts);
    assert_eq!(rendered.console, rendered.file);

    printer.emit_segments(&segments, &opts).unwrap();
    assert_eq!(
        console_text(&printer),
        "[14:15:16]-1-INFO-L1: step 3 of 7 done\n"
    );
}

#[test]
fn test_inline_flush_progress_frames() {
    let mut printer = printer_with(PrintConfig {
        color: false,
        timestamps: true,
        ..PrintConfig::default()
    });
    for pct in [10, 20, 30] {
        printer
            .emit(&slots![format!("\r{}%", pct), Color::Reset], &PrintOptions::progress())
            .unwrap();
    }
    printer
        .emit(&slots!["", Color::Reset], &PrintOptions::default().log_prefix(false))
        .unwrap();

    // progress frames carry no timestamp and no newline
    assert_eq!(console_text(&printer), "\r10%\r20%\r30%\n");
    assert_eq!(printer.counters().console, 4);
}

#[test]
fn test_empty_segments_rejected() {
    let mut printer = printer_with(PrintConfig::default());
    assert!(matches!(
        printer.emit_segments(&[], &PrintOptions::default()),
        Err(PrintError::NoSegments)
    ));
    assert_eq!(printer.counters().total, 1);
}
