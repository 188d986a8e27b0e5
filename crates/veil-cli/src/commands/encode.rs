use std::path::Path;

use veil_core::MARKER;

use crate::app::AppContext;
use crate::cli::EncodeArgs;
use crate::helpers::read_input_text;
use crate::ui::{badge, hint, Badge};

pub fn handle_encode(ctx: &AppContext, args: &EncodeArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json);
    let session = ctx.session(&args.policy)?;
    let text = read_input_text(args.text.as_deref(), args.file.as_deref().map(Path::new))?;

    let encoded = session.redactor.encode(&text, &session.policy, &session.key)?;

    let verified = if args.verify {
        let recovered = session.redactor.decode(&encoded, &session.key);
        if recovered != text {
            anyhow::bail!(
                "Round trip verification failed: decoded output differs from the input"
            );
        }
        Some(true)
    } else {
        None
    };

    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "encoded": encoded,
            "redacted": encoded.contains(MARKER),
            "verified": verified,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", encoded);

    if args.verify {
        eprintln!("{}", badge(&ui_ctx, Badge::Ok, "Round trip verified"));
    }
    if !ctx.quiet && encoded.contains(MARKER) {
        eprintln!(
            "{}",
            hint(
                &ui_ctx,
                "Sealed spans die with this process. Use `veil session` to encode and decode interactively."
            )
        );
    }

    Ok(())
}
