//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{Res, Void};

/// Default user the bot answers every message from.
fn default_target_user_id() -> String {
    "U08CF634LSH".to_string()
}

/// Configuration for the crayfish-bot application.
///
/// Built once at startup and shared read-only; cloning only bumps a refcount.
#[derive(Debug, Clone)]
pub struct Config {
    /// The shared settings.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// Settings read from the environment and the optional config file.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Slack app-level token used for the socket mode connection (`SLACK_APP_TOKEN`).
    pub slack_app_token: String,
    /// Slack bot token used for API calls (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// The user whose messages always get a reply (`TARGET_USER_ID`).
    #[serde(default = "default_target_user_id")]
    pub target_user_id: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            slack_app_token: String::new(),
            slack_bot_token: String::new(),
            target_user_id: default_target_user_id(),
        }
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional config file.
    ///
    /// File values win over the environment; an explicit path replaces `.hidden/config.toml`.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Checks the values a running bot cannot do without.
    pub fn validate(&self) -> Void {
        if self.slack_app_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Slack app token must be set (`SLACK_APP_TOKEN`)."));
        }

        if self.slack_bot_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Slack bot token must be set (`SLACK_BOT_TOKEN`)."));
        }

        if self.target_user_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Target user ID must not be empty."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ConfigInner {
        ConfigInner {
            slack_app_token: "xapp-test".to_string(),
            slack_bot_token: "xoxb-test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_target_is_the_crayfish() {
        assert_eq!(ConfigInner::default().target_user_id, "U08CF634LSH");
    }

    #[test]
    fn accepts_complete_config() {
        assert!(Config::from(valid()).validate().is_ok());
    }

    #[test]
    fn rejects_missing_tokens() {
        let no_app = ConfigInner {
            slack_app_token: String::new(),
            ..valid()
        };
        let no_bot = ConfigInner {
            slack_bot_token: "  ".to_string(),
            ..valid()
        };

        assert!(Config::from(no_app).validate().unwrap_err().to_string().contains("SLACK_APP_TOKEN"));
        assert!(Config::from(no_bot).validate().unwrap_err().to_string().contains("SLACK_BOT_TOKEN"));
    }

    #[test]
    fn rejects_empty_target_user() {
        let config = ConfigInner {
            target_user_id: String::new(),
            ..valid()
        };

        assert!(Config::from(config).validate().is_err());
    }
}
