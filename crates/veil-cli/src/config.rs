use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk configuration, all sections optional.
///
/// Configuration only shapes the starting policy and tokenizer; it never
/// carries key material. A missing config file is not an error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VeilConfig {
    #[serde(default)]
    pub policy: PolicySection,

    #[serde(default)]
    pub tokenizer: TokenizerSection,

    #[serde(default)]
    pub secondary: Vec<SecondaryEntry>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PolicySection {
    /// Categories to disable at startup
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Custom dictionary words to preload
    #[serde(default)]
    pub words: Vec<String>,

    /// File of custom dictionary words, one per line
    #[serde(default)]
    pub words_file: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TokenizerSection {
    /// Gazetteer JSON files merged into the built-in tokenizer
    #[serde(default)]
    pub gazetteers: Vec<String>,
}

/// One secondary tagger registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct SecondaryEntry {
    /// Language label ("fr", "de", ...)
    pub language: String,

    /// Gazetteer JSON file backing the tagger
    pub path: String,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<VeilConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("veil"));
        }
    }
    Ok(home_dir()?.join(".config").join("veil"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
