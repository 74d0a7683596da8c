use std::fmt;

/// ANSI color tokens for console output
///
/// Palette colors use the 256-color form (`ESC[38;5;<n>m`) so that both the
/// basic and bright variants render identically across terminals. Orange and
/// brown are 24-bit colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Reset,    // All attributes off
    Black,    // 0
    Red,      // 1
    Green,    // 2
    Yellow,   // 3
    Blue,     // 4
    Magenta,  // 5
    Cyan,     // 6
    White,    // 7
    BBlack,   // 8, bright black (dark grey)
    BRed,     // 9
    BGreen,   // 10
    BYellow,  // 11
    BBlue,    // 12, used for number highlighting
    BMagenta, // 13
    BCyan,    // 14
    BWhite,   // 15
    Grey1,    // 255, closest to white
    Grey2,    // 253
    Grey3,    // 251
    Grey4,    // 249
    Grey5,    // 247
    Grey6,    // 245
    Grey7,    // 243
    Grey8,    // 241
    Grey9,    // 239
    Grey10,   // 237
    Grey11,   // 235
    Grey12,   // 233, closest to black
    Orange,   // 24-bit 233;133;33
    Brown,    // 24-bit 118;65;12
}

impl Color {
    /// Every token in table order
    pub const ALL: [Color; 31] = [
        Color::Reset,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BBlack,
        Color::BRed,
        Color::BGreen,
        Color::BYellow,
        Color::BBlue,
        Color::BMagenta,
        Color::BCyan,
        Color::BWhite,
        Color::Grey1,
        Color::Grey2,
        Color::Grey3,
        Color::Grey4,
        Color::Grey5,
        Color::Grey6,
        Color::Grey7,
        Color::Grey8,
        Color::Grey9,
        Color::Grey10,
        Color::Grey11,
        Color::Grey12,
        Color::Orange,
        Color::Brown,
    ];

    /// The escape sequence written to the terminal for this token
    pub fn code(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Black => "\x1b[38;5;0m",
            Color::Red => "\x1b[38;5;1m",
            Color::Green => "\x1b[38;5;2m",
            Color::Yellow => "\x1b[38;5;3m",
            Color::Blue => "\x1b[38;5;4m",
            Color::Magenta => "\x1b[38;5;5m",
            Color::Cyan => "\x1b[38;5;6m",
            Color::White => "\x1b[38;5;7m",
            Color::BBlack => "\x1b[38;5;8m",
            Color::BRed => "\x1b[38;5;9m",
            Color::BGreen => "\x1b[38;5;10m",
            Color::BYellow => "\x1b[38;5;11m",
            Color::BBlue => "\x1b[38;5;12m",
            Color::BMagenta => "\x1b[38;5;13m",
            Color::BCyan => "\x1b[38;5;14m",
            Color::BWhite => "\x1b[38;5;15m",
            Color::Grey1 => "\x1b[38;5;255m",
            Color::Grey2 => "\x1b[38;5;253m",
            Color::Grey3 => "\x1b[38;5;251m",
            Color::Grey4 => "\x1b[38;5;249m",
            Color::Grey5 => "\x1b[38;5;247m",
            Color::Grey6 => "\x1b[38;5;245m",
            Color::Grey7 => "\x1b[38;5;243m",
            Color::Grey8 => "\x1b[38;5;241m",
            Color::Grey9 => "\x1b[38;5;239m",
            Color::Grey10 => "\x1b[38;5;237m",
            Color::Grey11 => "\x1b[38;5;235m",
            Color::Grey12 => "\x1b[38;5;233m",
            Color::Orange => "\x1b[38;2;233;133;33m",
            Color::Brown => "\x1b[38;2;118;65;12m",
        }
    }

    /// Lowercase name as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Color::Reset => "reset",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BBlack => "bblack",
            Color::BRed => "bred",
            Color::BGreen => "bgreen",
            Color::BYellow => "byellow",
            Color::BBlue => "bblue",
            Color::BMagenta => "bmagenta",
            Color::BCyan => "bcyan",
            Color::BWhite => "bwhite",
            Color::Grey1 => "grey1",
            Color::Grey2 => "grey2",
            Color::Grey3 => "grey3",
            Color::Grey4 => "grey4",
            Color::Grey5 => "grey5",
            Color::Grey6 => "grey6",
            Color::Grey7 => "grey7",
            Color::Grey8 => "grey8",
            Color::Grey9 => "grey9",
            Color::Grey10 => "grey10",
            Color::Grey11 => "grey11",
            Color::Grey12 => "grey12",
            Color::Orange => "orange",
            Color::Brown => "brown",
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // "a" is the short alias for reset used throughout older call sites
        if lower == "a" {
            return Ok(Color::Reset);
        }
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

/// Writes the escape sequence, so tokens can be spliced into `format!`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
