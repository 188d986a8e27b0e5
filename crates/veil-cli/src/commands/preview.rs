use std::path::Path;

use crate::app::AppContext;
use crate::cli::PreviewArgs;
use crate::helpers::read_input_text;
use crate::ui::{blank_line, highlight, kv};

pub fn handle_preview(ctx: &AppContext, args: &PreviewArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json);
    let session = ctx.session(&args.policy)?;
    let text = read_input_text(args.text.as_deref(), args.file.as_deref().map(Path::new))?;

    let segments = session.redactor.preview(&text, &session.policy);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    println!("{}", highlight(&ui_ctx, &segments));

    if ui_ctx.mode.is_pretty() {
        let sensitive = segments.iter().filter(|s| s.sensitive).count();
        blank_line(&ui_ctx);
        println!("{}", kv(&ui_ctx, "Sensitive runs", &sensitive.to_string()));
    }

    Ok(())
}
