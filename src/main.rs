use anyhow::Context;
use clap::Parser;
use std::io;

use betterprint::cli::{validate_args, Args, Demo, FileDecision};
use betterprint::demos::{self, BarStyle};
use betterprint::{slots, Color, PrintOptions, Printer};

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<i32> {
    let mut printer = Printer::stdout(args.to_config());

    // log files stay untouched until validate_args has asked about them
    printer.emit(
        &slots!["Calling validate_args():", Color::BMagenta],
        &PrintOptions::verbose(2).file(false),
    )?;
    let decision = validate_args(&args, &mut printer, &mut io::stdin().lock())
        .context("Failed to validate arguments")?;
    if decision == FileDecision::Abort {
        return Ok(1);
    }
    printer.emit(&slots!["Returned from validate_args().", Color::BMagenta], &PrintOptions::verbose(3))?;

    printer.emit(
        &slots![
            format!(
                "{} v{} - colorization module \"Better Print\"\n",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            Color::BBlue
        ],
        &PrintOptions::default(),
    )?;

    match args.demo {
        Demo::Showcase => demos::showcase(&mut printer, args.delay)?,
        Demo::Progress => demos::progress_bar(&mut printer, &BarStyle::default(), args.delay)?,
        Demo::Percent => {
            demos::percent_complete(&mut printer, 100, args.label_color, "Progress...", args.delay)?
        }
        Demo::MultiBar => demos::multi_bar(&mut printer, 4, args.delay)?,
    }

    let counters = printer.counters();
    printer.emit(
        &slots![
            format!(
                "Calls: {} total, {} console, {} log, {} error log",
                counters.total, counters.console, counters.log, counters.error_log
            ),
            Color::BMagenta
        ],
        &PrintOptions::verbose(1),
    )?;

    Ok(0)
}
