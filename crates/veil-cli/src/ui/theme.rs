//! Colors, badges, and sensitive-run delimiters.

/// ANSI escape codes used across the CLI.
///
/// Styling is raw codes behind [`styled`]; there is no color crate to
/// configure and nothing to strip when color is off.
pub mod colors {
    /// Dim text, for labels and advisory lines
    pub const DIM: &str = "\x1b[2m";
    /// Green, success
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow, warning
    pub const YELLOW: &str = "\x1b[33m";
    /// Red, error
    pub const RED: &str = "\x1b[31m";
    /// Cyan, info
    pub const CYAN: &str = "\x1b[36m";
    /// Reverse video, sensitive highlight
    pub const REVERSE: &str = "\x1b[7m";
    /// Back to default
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in an ANSI style when color is enabled, otherwise returns
/// it untouched.
pub fn styled(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Delimiters wrapped around a sensitive run when color is unavailable:
/// guillemets normally, asterisks under `--ascii`.
pub fn sensitive_delimiters(unicode: bool) -> (&'static str, &'static str) {
    if unicode {
        ("\u{00AB}", "\u{00BB}")
    } else {
        ("*", "*")
    }
}

/// Status prefix for one-line messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// The bracketed label, symbolic when unicode is available.
    pub fn label(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    /// ANSI color that goes with this badge.
    pub fn color(self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Warn => colors::YELLOW,
            Self::Err => colors::RED,
            Self::Info => colors::CYAN,
        }
    }
}
