//! Command handlers for the Veil CLI.

pub mod categories;
pub mod decode;
pub mod encode;
pub mod misc;
pub mod preview;
pub mod session;
