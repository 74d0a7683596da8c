// src/lib.rs
pub mod cli;
pub mod colors;
pub mod config;
pub mod demos;
pub mod error;
pub mod format;
pub mod options;
pub mod printer;
pub mod segment;

pub use error::*;

pub use colors::Color;
pub use config::{CallCounters, PrintConfig, MAX_VERBOSITY};
pub use format::{strip_ansi, Rendered};
pub use options::{PrintOptions, Severity};
pub use printer::{bp, configure, with_printer, Printer};
pub use segment::{pair_slots, Segment, Slot};
