//! Terminal presentation for the Veil CLI.
//!
//! Split the way the commands consume it:
//! - **context**: what the terminal supports (TTY, color, unicode)
//! - **mode**: JSON / plain / pretty routing
//! - **theme**: ANSI palette, badges, sensitive-run delimiters
//! - **render**: the line builders commands actually print
//!
//! Handlers build a [`UiContext`] once per invocation and pass it to the
//! render functions; nothing in here touches global state beyond reading
//! environment variables at construction.

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, blank_line, highlight, hint, kv, print_error};
