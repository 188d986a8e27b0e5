use std::path::Path;

use veil_core::{SessionKey, MARKER};

use crate::app::AppContext;
use crate::cli::DecodeArgs;
use crate::helpers::read_input_text;
use crate::ui::hint;

pub fn handle_decode(ctx: &AppContext, args: &DecodeArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false);
    let text = read_input_text(args.text.as_deref(), args.file.as_deref().map(Path::new))?;

    // A one-shot invocation holds a fresh key, so spans sealed elsewhere
    // stay sealed. Decoding is still total: unreadable spans and plain
    // text pass through unchanged.
    let key = SessionKey::generate()
        .map_err(|e| anyhow::anyhow!("Failed to create session key: {}", e))?;
    let decoded = veil_core::decode(&text, &key);

    println!("{}", decoded);

    if !ctx.quiet && decoded.contains(MARKER) {
        eprintln!(
            "{}",
            hint(
                &ui_ctx,
                "These spans were sealed by another session and cannot be recovered here."
            )
        );
    }

    Ok(())
}
