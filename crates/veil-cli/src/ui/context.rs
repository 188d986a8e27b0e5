//! Terminal environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Resolved display settings for one invocation.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Stdout is a terminal
    pub is_tty: bool,
    /// ANSI styling may be emitted
    pub color: bool,
    /// Unicode symbols may be emitted (off under `--ascii`)
    pub unicode: bool,
    /// Where output is routed
    pub mode: OutputMode,
}

impl UiContext {
    /// Probes the terminal and combines it with the display flags.
    ///
    /// Color requires a terminal and survives only if nothing turns it
    /// off: `--no-color`, the `NO_COLOR` convention, or `TERM=dumb`.
    pub fn from_env(json_flag: bool, no_color_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let dumb_term = matches!(std::env::var("TERM").as_deref(), Ok("dumb"));
        let color = is_tty
            && !dumb_term
            && !no_color_flag
            && std::env::var_os("NO_COLOR").is_none();

        Self {
            is_tty,
            color,
            unicode: !ascii_flag,
            mode: OutputMode::resolve(json_flag, is_tty, dumb_term),
        }
    }

    /// True when prompting is possible: stdin and stdout are both
    /// terminals.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_selects_json_mode() {
        let ctx = UiContext::from_env(true, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_flag_turns_unicode_off() {
        let ctx = UiContext::from_env(false, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_flag_turns_color_off() {
        let ctx = UiContext::from_env(false, true, false);
        assert!(!ctx.color);
    }
}
