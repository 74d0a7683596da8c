#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Better print: slots must come in (text, color) pairs (slot count = {count})")]
    OddSlotCount { count: usize },

    #[error("Better print: slot {index} must be text, found color '{found}'")]
    NotText { index: usize, found: String },

    #[error("Better print: slot {index} must be a color, found text {found:?}")]
    NotColor { index: usize, found: String },

    #[error("Better print: nothing to print (no segments given)")]
    NoSegments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

