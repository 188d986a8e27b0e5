//! Application context shared by all command handlers.
//!
//! `AppContext` resolves global flags and the optional config file once;
//! `SessionState` is the per-invocation bundle of redactor, policy, and
//! session key built from config plus command-line policy flags.

use std::path::{Path, PathBuf};

use veil_core::{Gazetteer, LexicalTokenizer, Policy, Redactor, SessionKey};

use crate::cli::{Cli, PolicyArgs};
use crate::config::{self, VeilConfig};
use crate::helpers;
use crate::ui::UiContext;

/// Resolved global state for one CLI invocation.
pub struct AppContext {
    /// Parsed config file contents (defaults when absent or `--no-config`)
    pub config: VeilConfig,
    /// Where the config was read from, if it was
    pub config_path: Option<PathBuf>,
    /// Whether `--quiet` suppresses advisory stderr output
    pub quiet: bool,
    no_color: bool,
    ascii: bool,
}

impl AppContext {
    /// Build the context from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Fails when an explicitly requested config file cannot be read or
    /// parsed. A missing file at the default location is not an error.
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let (config, config_path) = load_config(cli)?;

        Ok(Self {
            config,
            config_path,
            quiet: cli.quiet,
            no_color: cli.no_color,
            ascii: cli.ascii,
        })
    }

    /// Build the UI context for a command, honoring global display flags.
    pub fn ui_context(&self, json_flag: bool) -> UiContext {
        UiContext::from_env(json_flag, self.no_color, self.ascii)
    }

    /// Assemble the session: redactor, policy, and a fresh key.
    ///
    /// Policy layering, lowest to highest precedence:
    /// 1. every known category enabled
    /// 2. config `[policy]` disabled list and word sources
    /// 3. `--disable` / `--enable` flags
    /// 4. `--only` (replaces the category set entirely)
    ///
    /// # Errors
    ///
    /// Fails when a word list, gazetteer, or secondary tagger file cannot
    /// be loaded, or when key generation fails.
    pub fn session(&self, args: &PolicyArgs) -> anyhow::Result<SessionState> {
        let policy = self.build_policy(args)?;
        let redactor = self.build_redactor(args)?;

        let key = SessionKey::generate()
            .map_err(|e| anyhow::anyhow!("Failed to create session key: {}", e))?;

        Ok(SessionState {
            redactor,
            policy,
            key,
        })
    }

    fn build_policy(&self, args: &PolicyArgs) -> anyhow::Result<Policy> {
        let mut policy = if args.only.is_empty() {
            let mut policy = Policy::new();
            for name in &self.config.policy.disabled {
                policy.disable_category(name);
            }
            for name in &args.disable {
                policy.disable_category(name);
            }
            for name in &args.enable {
                policy.enable_category(name);
            }
            policy
        } else {
            let mut policy = Policy::none();
            for name in &args.only {
                policy.enable_category(name);
            }
            policy
        };

        for word in &self.config.policy.words {
            policy.add_custom_word(word);
        }
        if let Some(path) = &self.config.policy.words_file {
            for word in helpers::load_words_file(Path::new(path))? {
                policy.add_custom_word(&word);
            }
        }
        if let Some(path) = &args.words_file {
            for word in helpers::load_words_file(Path::new(path))? {
                policy.add_custom_word(&word);
            }
        }
        for word in &args.word {
            policy.add_custom_word(word);
        }

        Ok(policy)
    }

    fn build_redactor(&self, args: &PolicyArgs) -> anyhow::Result<Redactor> {
        let mut gazetteer = Gazetteer::new();
        let paths = self
            .config
            .tokenizer
            .gazetteers
            .iter()
            .chain(args.gazetteer.iter());
        for path in paths {
            let loaded = Gazetteer::from_json_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load gazetteer {}: {}", path, e))?;
            gazetteer.merge(loaded);
        }

        let tokenizer = LexicalTokenizer::with_gazetteer(gazetteer);
        let mut redactor = Redactor::with_tokenizer(Box::new(tokenizer));

        // Config secondaries register before flag secondaries; within each
        // source, listing order is lookup order.
        for entry in &self.config.secondary {
            let tagger = Gazetteer::from_json_file(&entry.path).map_err(|e| {
                anyhow::anyhow!("Failed to load secondary tagger {}: {}", entry.path, e)
            })?;
            redactor.register_tagger(entry.language.clone(), Box::new(tagger));
        }
        for spec in &args.secondary {
            let (language, path) = helpers::parse_secondary_spec(spec)?;
            let tagger = Gazetteer::from_json_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load secondary tagger {}: {}", path.display(), e)
            })?;
            redactor.register_tagger(language, Box::new(tagger));
        }

        Ok(redactor)
    }
}

/// Everything a command needs to redact within one process lifetime.
pub struct SessionState {
    /// Tokenizer plus secondary taggers
    pub redactor: Redactor,
    /// Category toggles and custom dictionary
    pub policy: Policy,
    /// Key for sealing and opening spans; dies with the process
    pub key: SessionKey,
}

/// Resolve and read the config file per global flags.
///
/// `--no-config` skips loading entirely. `--config PATH` (or `VEIL_CONFIG`)
/// must name a readable file. Otherwise the default XDG location is used
/// when present and silently skipped when absent.
fn load_config(cli: &Cli) -> anyhow::Result<(VeilConfig, Option<PathBuf>)> {
    if cli.no_config {
        return Ok((VeilConfig::default(), None));
    }

    if let Some(path) = &cli.config {
        let path = PathBuf::from(path);
        let config = config::read_config(&path)?;
        return Ok((config, Some(path)));
    }

    let path = match config::default_config_path() {
        Ok(path) => path,
        Err(_) => return Ok((VeilConfig::default(), None)),
    };
    if !path.exists() {
        return Ok((VeilConfig::default(), None));
    }
    let config = config::read_config(&path)?;
    Ok((config, Some(path)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            config: None,
            no_config: true,
            no_color: true,
            ascii: false,
            quiet: false,
            command: None,
        }
    }

    fn policy_args() -> PolicyArgs {
        PolicyArgs {
            disable: Vec::new(),
            enable: Vec::new(),
            only: Vec::new(),
            word: Vec::new(),
            words_file: None,
            gazetteer: Vec::new(),
            secondary: Vec::new(),
        }
    }

    #[test]
    fn test_default_session_enables_all_categories() {
        let ctx = AppContext::new(&bare_cli()).unwrap();
        let session = ctx.session(&policy_args()).unwrap();

        assert!(session.policy.is_enabled("Person"));
        assert!(session.policy.is_enabled("Email"));
        assert!(session.policy.custom_words().is_empty());
    }

    #[test]
    fn test_disable_flag_narrows_policy() {
        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.disable = vec!["person".to_string()];

        let session = ctx.session(&args).unwrap();
        assert!(!session.policy.is_enabled("Person"));
        assert!(session.policy.is_enabled("Place"));
    }

    #[test]
    fn test_only_replaces_category_set() {
        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.only = vec!["email".to_string(), "Url".to_string()];

        let session = ctx.session(&args).unwrap();
        assert!(session.policy.is_enabled("Email"));
        assert!(session.policy.is_enabled("Url"));
        assert!(!session.policy.is_enabled("Person"));
    }

    #[test]
    fn test_words_from_flags_are_normalized() {
        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.word = vec!["  Gandalf  ".to_string()];

        let session = ctx.session(&args).unwrap();
        assert!(session.policy.contains_word("gandalf"));
    }

    #[test]
    fn test_words_file_feeds_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# project codenames\nmithril\nnarsil\n").unwrap();

        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.words_file = Some(file.path().to_string_lossy().into_owned());

        let session = ctx.session(&args).unwrap();
        assert!(session.policy.contains_word("mithril"));
        assert!(session.policy.contains_word("narsil"));
    }

    #[test]
    fn test_gazetteer_flag_tags_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", r#"{"Place": ["rivendell"]}"#).unwrap();

        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.gazetteer = vec![file.path().to_string_lossy().into_owned()];

        let session = ctx.session(&args).unwrap();
        let tokens = session.redactor.tokenize("visit rivendell");
        let tagged = tokens.iter().find(|t| t.text == "rivendell").unwrap();
        assert!(tagged.has_tag("Place"));
    }

    #[test]
    fn test_secondary_spec_registers_tagger() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", r#"{"Place": ["paris"]}"#).unwrap();

        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.secondary = vec![format!("fr={}", file.path().display())];

        let session = ctx.session(&args).unwrap();
        assert_eq!(session.redactor.registry().len(), 1);
    }

    #[test]
    fn test_bad_gazetteer_path_fails() {
        let ctx = AppContext::new(&bare_cli()).unwrap();
        let mut args = policy_args();
        args.gazetteer = vec!["/nonexistent/veil-gazetteer.json".to_string()];

        assert!(ctx.session(&args).is_err());
    }
}
