//! Input handling helpers for text, word lists, and tagger specs.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Read the text to operate on: positional argument, `--file`, or stdin.
///
/// Stdin content is passed through byte for byte. Trimming here would
/// change what the encoder sees and break decode round trips, so even a
/// trailing newline from a shell pipe is kept.
pub fn read_input_text(arg: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e));
    }

    if io::stdin().is_terminal() {
        return Err(anyhow::anyhow!("No input provided"));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Load a word list file: one word per line, `#` lines are comments.
pub fn load_words_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read word list {}: {}", path.display(), e))?;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    Ok(words)
}

/// Parse a secondary tagger spec of the form `LANG=PATH`.
pub fn parse_secondary_spec(spec: &str) -> anyhow::Result<(String, PathBuf)> {
    match spec.split_once('=') {
        Some((language, path)) if !language.trim().is_empty() && !path.trim().is_empty() => {
            Ok((language.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(anyhow::anyhow!(
            "Invalid secondary tagger '{}': expected LANG=PATH",
            spec
        )),
    }
}
