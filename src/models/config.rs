use std::env;

use thiserror::Error;

const DEFAULT_ACTIVITY: &str = "over giveaways";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the {0} environment variable is not set")]
    Missing(&'static str),
}

pub struct Config {
    pub discord_token: String,
    pub debug: bool,
    pub activity: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let debug = lookup("DEBUG").is_some_and(|debug| debug == "true");
        let activity = lookup("BOT_ACTIVITY")
            .filter(|activity| !activity.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string());

        Ok(Config {
            discord_token,
            debug,
            activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_token_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])).err(),
            Some(ConfigError::Missing("DISCORD_TOKEN"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])).err(),
            Some(ConfigError::Missing("DISCORD_TOKEN"))
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "token")])).unwrap();
        assert_eq!(config.discord_token, "token");
        assert!(!config.debug);
        assert_eq!(config.activity, DEFAULT_ACTIVITY);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("DEBUG", "true"),
            ("BOT_ACTIVITY", "over Krack Dupes!"),
        ]))
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.activity, "over Krack Dupes!");
    }
}
