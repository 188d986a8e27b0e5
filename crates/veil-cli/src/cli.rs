use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use veil_core::VERSION;

/// Veil - session-scoped, reversible redaction for sensitive text
#[derive(Parser)]
#[command(name = "veil")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (overrides the default location)
    #[arg(long, global = true, env = "VEIL_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Ignore config files entirely
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Policy and pipeline flags shared by the text commands.
#[derive(Args)]
pub struct PolicyArgs {
    /// Disable a category (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub disable: Vec<String>,

    /// Enable a category (repeatable; applied after --disable)
    #[arg(long, value_name = "CATEGORY")]
    pub enable: Vec<String>,

    /// Enable ONLY these categories, disabling the rest (repeatable)
    #[arg(long, value_name = "CATEGORY", conflicts_with_all = ["disable", "enable"])]
    pub only: Vec<String>,

    /// Add a word to the custom dictionary (repeatable)
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Load custom dictionary words from a file (one per line)
    #[arg(long, value_name = "PATH")]
    pub words_file: Option<String>,

    /// Load a gazetteer JSON file for the tokenizer (repeatable)
    #[arg(long, value_name = "PATH")]
    pub gazetteer: Vec<String>,

    /// Register a secondary tagger as LANG=PATH (repeatable)
    #[arg(long, value_name = "LANG=PATH")]
    pub secondary: Vec<String>,
}

/// Arguments for the `session` command
#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the `encode` command
#[derive(Args)]
pub struct EncodeArgs {
    /// Text to encode (falls back to --file, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Decode the output in-process and check it matches the input
    #[arg(long)]
    pub verify: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the `decode` command
#[derive(Args)]
pub struct DecodeArgs {
    /// Text to decode (falls back to --file, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,
}

/// Arguments for the `preview` command
#[derive(Args)]
pub struct PreviewArgs {
    /// Text to preview (falls back to --file, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Output segments as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the `categories` command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive redaction session
    Session(SessionArgs),

    /// Encode text, sealing every sensitive token
    Encode(EncodeArgs),

    /// Decode spans sealed by this same process invocation
    Decode(DecodeArgs),

    /// Show what would be sealed, without encoding anything
    Preview(PreviewArgs),

    /// List categories and the effective policy
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
