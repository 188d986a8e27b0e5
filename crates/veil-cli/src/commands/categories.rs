use veil_core::KNOWN_CATEGORIES;

use crate::app::AppContext;
use crate::cli::CategoriesArgs;
use crate::ui::theme::{colors, styled};
use crate::ui::kv;

pub fn handle_categories(ctx: &AppContext, args: &CategoriesArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json);
    let session = ctx.session(&args.policy)?;

    // Known categories in canonical order, then any open-vocabulary tags
    // the policy picked up from --enable or --only.
    let mut names: Vec<String> = KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for tag in session.policy.enabled_categories() {
        if !KNOWN_CATEGORIES.contains(&tag) {
            names.push(tag.to_string());
        }
    }

    let languages: Vec<String> = session
        .redactor
        .registry()
        .languages()
        .map(|l| l.to_string())
        .collect();

    if ui_ctx.mode.is_json() {
        let categories: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "enabled": session.policy.is_enabled(name),
                })
            })
            .collect();
        let value = serde_json::json!({
            "categories": categories,
            "custom_words": session.policy.custom_words(),
            "secondary": languages,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        println!("Categories:");
        for name in &names {
            if session.policy.is_enabled(name) {
                println!("  [x] {}", name);
            } else {
                println!("  [ ] {}", styled(name, colors::DIM, ui_ctx.color));
            }
        }
        let words = session.policy.custom_words();
        let words_value = if words.is_empty() {
            "none".to_string()
        } else {
            words.join(", ")
        };
        println!("{}", kv(&ui_ctx, "Custom words", &words_value));
        if !languages.is_empty() {
            println!("{}", kv(&ui_ctx, "Secondary taggers", &languages.join(", ")));
        }
        return Ok(());
    }

    for name in &names {
        let state = if session.policy.is_enabled(name) {
            "on"
        } else {
            "off"
        };
        println!("{}={}", name.to_lowercase(), state);
    }
    println!("custom_words={}", session.policy.custom_words().join(","));
    if !languages.is_empty() {
        println!("secondary={}", languages.join(","));
    }

    Ok(())
}
