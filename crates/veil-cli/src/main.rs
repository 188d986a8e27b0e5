//! Veil CLI - session-scoped reversible text redaction
//!
//! This is the command-line interface for Veil. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod ui;

use clap::Parser;
use veil_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{categories, decode, encode, misc, preview, session};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();

    let ctx = match AppContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            let ui_ctx = UiContext::from_env(false, cli.no_color, cli.ascii);
            let error_msg = format!("{}", e);
            let hint = extract_error_hint(&error_msg);
            print_error(&ui_ctx, &error_msg, hint.as_deref());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&ctx, &cli) {
        // Get UI context for error formatting
        let ui_ctx = ctx.ui_context(false);

        // Extract hint from error chain if available
        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);

        print_error(&ui_ctx, &error_msg, hint.as_deref());
        std::process::exit(1);
    }
}

/// Extract a hint from an error message if it contains "Hint:" or similar
/// patterns, or provide contextual hints for common error types.
fn extract_error_hint(error: &str) -> Option<String> {
    // Check for explicit hint patterns in error messages
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + 1..].to_string());
    }
    if let Some(idx) = error.find("\nhint:") {
        return Some(error[idx + 1..].to_string());
    }

    // Provide contextual hints for common error patterns
    let error_lower = error.to_lowercase();

    // Nothing to read
    if error_lower.contains("no input provided") {
        return Some(
            "Hint: Pass text as an argument, use --file <path>, or pipe content on stdin."
                .to_string(),
        );
    }

    // Config file problems
    if error_lower.contains("config") && error_lower.contains("toml") {
        return Some("Hint: Fix the TOML syntax, or run with --no-config to skip it.".to_string());
    }

    // Gazetteer or secondary tagger file problems
    if error_lower.contains("gazetteer") || error_lower.contains("secondary tagger") {
        return Some(
            "Hint: Tagger files are JSON objects mapping a category to its words, e.g. {\"Place\": [\"paris\"]}."
                .to_string(),
        );
    }

    // Malformed --secondary value
    if error_lower.contains("expected lang=path") {
        return Some("Hint: Example: --secondary fr=data/fr.json".to_string());
    }

    // Session outside a terminal
    if error_lower.contains("interactive terminal") {
        return Some(
            "Hint: Run `veil session` from a terminal. One-shot commands accept piped input."
                .to_string(),
        );
    }

    // Round trip verification tripped on adjacent text
    if error_lower.contains("round trip verification failed") {
        return Some(
            "Hint: Text directly glued to a sealed span can merge with it. Add whitespace around sensitive words and retry."
                .to_string(),
        );
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Session(args)) => {
            session::handle_session(ctx, args)?;
        }
        Some(Commands::Encode(args)) => {
            encode::handle_encode(ctx, args)?;
        }
        Some(Commands::Decode(args)) => {
            decode::handle_decode(ctx, args)?;
        }
        Some(Commands::Preview(args)) => {
            preview::handle_preview(ctx, args)?;
        }
        Some(Commands::Categories(args)) => {
            categories::handle_categories(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Veil v{}", VERSION);
            println!("\nQuickstart:");
            println!("  veil session");
            println!("  veil encode \"Meet alice@example.com at 3pm\" --verify");
            println!("  veil preview \"Call 555-867-5309 tomorrow\"");
            println!("  veil categories");
            println!("\nRun `veil --help` for full usage.");
        }
    }

    Ok(())
}
