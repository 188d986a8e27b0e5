use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use veil_core::{Policy, VERSION};

use crate::app::{AppContext, SessionState};
use crate::cli::SessionArgs;
use crate::ui::theme::{colors, styled};
use crate::ui::{badge, highlight, hint, print_error, Badge, UiContext};

/// Interactive redaction loop.
///
/// The session key lives exactly as long as this process, so this is the
/// only place where encode and decode are guaranteed to see the same key.
/// Plain lines become the active text; `:` lines are commands. Every
/// policy change re-encodes the active text so the effect is visible
/// immediately.
pub fn handle_session(ctx: &AppContext, args: &SessionArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false);
    if !ui_ctx.is_interactive() {
        anyhow::bail!("veil session requires an interactive terminal");
    }

    let mut session = ctx.session(&args.policy)?;

    println!(
        "{}",
        badge(&ui_ctx, Badge::Info, &format!("Veil session (v{})", VERSION))
    );
    println!(
        "{}",
        hint(&ui_ctx, "Type text to redact it, or :help for commands.")
    );

    let theme = ColorfulTheme::default();
    let mut active_text: Option<String> = None;
    let mut active_encoded: Option<String> = None;

    loop {
        let line = match Input::<String>::with_theme(&theme)
            .with_prompt("veil")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // EOF or interrupt ends the session
            Err(_) => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(rest) = trimmed.strip_prefix(':') else {
            // The line as typed becomes the active text
            active_text = Some(line.clone());
            refresh(&ui_ctx, &session, &active_text, &mut active_encoded);
            continue;
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let argument = parts.next().map(str::trim).unwrap_or("");

        match command {
            "help" | "h" => print_help(),
            "quit" | "q" | "exit" => break,
            "toggle" | "t" => {
                if argument.is_empty() {
                    println!("{}", badge(&ui_ctx, Badge::Warn, "Usage: :toggle <category>"));
                    continue;
                }
                let enabled = session.policy.toggle_category(argument);
                let state = if enabled { "sensitive" } else { "ignored" };
                println!(
                    "{}",
                    badge(&ui_ctx, Badge::Ok, &format!("{} is now {}", argument, state))
                );
                refresh(&ui_ctx, &session, &active_text, &mut active_encoded);
            }
            "add" | "a" => {
                if session.policy.add_custom_word(argument) {
                    println!(
                        "{}",
                        badge(&ui_ctx, Badge::Ok, &format!("Added \"{}\"", argument.trim()))
                    );
                    refresh(&ui_ctx, &session, &active_text, &mut active_encoded);
                } else {
                    println!(
                        "{}",
                        badge(&ui_ctx, Badge::Warn, "Word is empty or already listed")
                    );
                }
            }
            "rm" | "remove" => {
                if session.policy.remove_custom_word(argument) {
                    println!(
                        "{}",
                        badge(&ui_ctx, Badge::Ok, &format!("Removed \"{}\"", argument.trim()))
                    );
                    refresh(&ui_ctx, &session, &active_text, &mut active_encoded);
                } else {
                    println!("{}", badge(&ui_ctx, Badge::Warn, "Word is not listed"));
                }
            }
            "clear" => {
                let count = session.policy.custom_words().len();
                if count == 0 {
                    println!("{}", badge(&ui_ctx, Badge::Info, "Dictionary is already empty"));
                    continue;
                }
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt(format!("Remove {} custom word(s)?", count))
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if confirmed {
                    session.policy.clear_custom_words();
                    println!("{}", badge(&ui_ctx, Badge::Ok, "Dictionary cleared"));
                    refresh(&ui_ctx, &session, &active_text, &mut active_encoded);
                }
            }
            "words" | "w" => {
                let words = session.policy.custom_words();
                if words.is_empty() {
                    println!("{}", badge(&ui_ctx, Badge::Info, "No custom words"));
                } else {
                    println!("Custom words: {}", words.join(", "));
                }
            }
            "categories" | "c" => print_categories(&ui_ctx, &session.policy),
            "decode" | "d" => {
                // Pasted text wins; otherwise decode the active encoded text
                if !argument.is_empty() {
                    println!("{}", session.redactor.decode(argument, &session.key));
                } else {
                    match &active_encoded {
                        Some(encoded) => {
                            println!("{}", session.redactor.decode(encoded, &session.key));
                        }
                        None => println!("{}", badge(&ui_ctx, Badge::Warn, "Nothing encoded yet")),
                    }
                }
            }
            "text" => match &active_text {
                Some(text) => println!("{}", text),
                None => println!("{}", badge(&ui_ctx, Badge::Warn, "No active text")),
            },
            other => {
                println!(
                    "{}",
                    badge(&ui_ctx, Badge::Warn, &format!("Unknown command :{}", other))
                );
                println!("{}", hint(&ui_ctx, "Type :help to list commands."));
            }
        }
    }

    println!(
        "{}",
        badge(
            &ui_ctx,
            Badge::Info,
            "Session ended. Sealed spans from it are now unrecoverable."
        )
    );

    Ok(())
}

/// Re-encode the active text under the current policy and show what was
/// flagged alongside the encoded form.
fn refresh(
    ui_ctx: &UiContext,
    session: &SessionState,
    active_text: &Option<String>,
    active_encoded: &mut Option<String>,
) {
    let Some(text) = active_text else {
        return;
    };
    let segments = session.redactor.preview(text, &session.policy);
    println!("{}", highlight(ui_ctx, &segments));
    match session.redactor.encode(text, &session.policy, &session.key) {
        Ok(encoded) => {
            println!("{}", encoded);
            *active_encoded = Some(encoded);
        }
        Err(e) => print_error(ui_ctx, &format!("{}", e), None),
    }
}

fn print_categories(ui_ctx: &UiContext, policy: &Policy) {
    let mut sensitive = Vec::new();
    let mut ignored = Vec::new();
    for name in veil_core::KNOWN_CATEGORIES {
        if policy.is_enabled(name) {
            sensitive.push(name.to_string());
        } else {
            ignored.push(name.to_string());
        }
    }
    for tag in policy.enabled_categories() {
        if !veil_core::KNOWN_CATEGORIES.contains(&tag) {
            sensitive.push(tag.to_string());
        }
    }

    if sensitive.is_empty() {
        println!("Sensitive: {}", styled("none", colors::DIM, ui_ctx.color));
    } else {
        println!("Sensitive: {}", sensitive.join(", "));
    }
    if !ignored.is_empty() {
        println!(
            "Ignored:   {}",
            styled(&ignored.join(", "), colors::DIM, ui_ctx.color)
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :toggle <category>   flip a category between sensitive and ignored");
    println!("  :add <word>          add a word to the custom dictionary");
    println!("  :rm <word>           remove a word from the custom dictionary");
    println!("  :clear               empty the custom dictionary");
    println!("  :words               show the custom dictionary");
    println!("  :categories          show category states");
    println!("  :decode [text]       decode pasted text, or the current encoded text");
    println!("  :text                show the active plain text");
    println!("  :quit                end the session");
    println!();
    println!("Any other line becomes the active text and is encoded at once.");
}
