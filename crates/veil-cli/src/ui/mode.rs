//! Output mode selection.

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON, nothing else on stdout
    Json,
    /// Stable `key=value` lines for pipes and logs
    #[default]
    Plain,
    /// Human output with color and spacing, terminals only
    Pretty,
}

impl OutputMode {
    /// Picks the mode for one invocation.
    ///
    /// `--json` always wins. Otherwise pretty output is reserved for a
    /// real terminal, where `TERM=dumb` does not count as one; anything
    /// piped gets plain lines.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            Self::Json
        } else if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }
}
