//! Env-backed configuration source.
//!
//! Reads the recognized variables on every `config()` call so a changed
//! environment applies to the next operation, per the [`ConfigSource`]
//! contract. Interacts with: BOT_TOKEN, CHAT_ID, TELEGRAM_API_URL,
//! COOLDOWN_SECS, BATCH_SECS, MIN_CHARS, MIN_LINES, PROJECT_NAME.

use anyhow::Result;
use fidipides_core::{ConfigSource, NotifyConfig, DEFAULT_BATCH_SECS, DEFAULT_COOLDOWN_SECS};
use std::env;
use std::str::FromStr;

/// Configuration from environment variables, with optional CLI overrides for
/// the bot token and the project name.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    token_override: Option<String>,
    project_override: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides BOT_TOKEN when `token` is Some (CLI `--token`).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token_override = token;
        self
    }

    /// Overrides PROJECT_NAME when `project` is Some (CLI `--project`).
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project_override = project;
        self
    }

    /// Validates the current environment: TELEGRAM_API_URL must be a valid URL
    /// if set. Call once at startup to fail fast. Credentials are not required
    /// here; they are checked per send, so the watcher can start before they
    /// are configured.
    pub fn validate(&self) -> Result<()> {
        let cfg = self.config();
        if let Some(ref url) = cfg.api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url);
            }
        }
        Ok(())
    }
}

/// Numeric env var with a default; unparsable values fall back to the default.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl ConfigSource for EnvConfig {
    fn config(&self) -> NotifyConfig {
        let bot_token = self
            .token_override
            .clone()
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let chat_id = env::var("CHAT_ID").unwrap_or_default();
        let api_url = env::var("TELEGRAM_API_URL").ok();
        let project_name = self
            .project_override
            .clone()
            .or_else(|| env::var("PROJECT_NAME").ok());

        NotifyConfig {
            bot_token,
            chat_id,
            api_url,
            cooldown_secs: env_or("COOLDOWN_SECS", DEFAULT_COOLDOWN_SECS),
            batch_secs: env_or("BATCH_SECS", DEFAULT_BATCH_SECS),
            min_chars: env_or("MIN_CHARS", 0),
            min_lines: env_or("MIN_LINES", 0),
            project_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_notify_env() {
        for key in [
            "BOT_TOKEN",
            "CHAT_ID",
            "TELEGRAM_API_URL",
            "COOLDOWN_SECS",
            "BATCH_SECS",
            "MIN_CHARS",
            "MIN_LINES",
            "PROJECT_NAME",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_notify_env();

        let cfg = EnvConfig::new().config();

        assert!(cfg.bot_token.is_empty());
        assert!(cfg.chat_id.is_empty());
        assert!(cfg.api_url.is_none());
        assert_eq!(cfg.cooldown_secs, 45);
        assert_eq!(cfg.batch_secs, 30);
        assert_eq!(cfg.min_chars, 0);
        assert_eq!(cfg.min_lines, 0);
        assert!(cfg.project_name.is_none());
    }

    #[test]
    #[serial]
    fn test_config_reads_custom_values() {
        clear_notify_env();
        env::set_var("BOT_TOKEN", "123:abc");
        env::set_var("CHAT_ID", "42");
        env::set_var("COOLDOWN_SECS", "5");
        env::set_var("BATCH_SECS", "2");
        env::set_var("MIN_CHARS", "80");
        env::set_var("MIN_LINES", "3");
        env::set_var("PROJECT_NAME", "demo");

        let cfg = EnvConfig::new().config();

        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.chat_id, "42");
        assert_eq!(cfg.cooldown_secs, 5);
        assert_eq!(cfg.batch_secs, 2);
        assert_eq!(cfg.min_chars, 80);
        assert_eq!(cfg.min_lines, 3);
        assert_eq!(cfg.project_name.as_deref(), Some("demo"));

        clear_notify_env();
    }

    #[test]
    #[serial]
    fn test_config_overrides_win_over_env() {
        clear_notify_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("PROJECT_NAME", "env_project");

        let cfg = EnvConfig::new()
            .with_token(Some("cli_token".to_string()))
            .with_project(Some("cli_project".to_string()))
            .config();

        assert_eq!(cfg.bot_token, "cli_token");
        assert_eq!(cfg.project_name.as_deref(), Some("cli_project"));

        clear_notify_env();
    }

    #[test]
    #[serial]
    fn test_config_is_read_fresh_each_call() {
        clear_notify_env();
        let source = EnvConfig::new();

        env::set_var("BATCH_SECS", "2");
        assert_eq!(source.config().batch_secs, 2);

        env::set_var("BATCH_SECS", "7");
        assert_eq!(source.config().batch_secs, 7);

        clear_notify_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_invalid_api_url() {
        clear_notify_env();
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        assert!(EnvConfig::new().validate().is_err());

        clear_notify_env();
    }

    #[test]
    #[serial]
    fn test_validate_accepts_missing_credentials() {
        clear_notify_env();

        assert!(EnvConfig::new().validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back_to_defaults() {
        clear_notify_env();
        env::set_var("COOLDOWN_SECS", "soon");
        env::set_var("BATCH_SECS", "-3");

        let cfg = EnvConfig::new().config();
        assert_eq!(cfg.cooldown_secs, 45);
        assert_eq!(cfg.batch_secs, 30);

        clear_notify_env();
    }
}
