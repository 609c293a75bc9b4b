use std::env;

use log::{debug, error, info};

use crate::error::{BotError, Result};

const DEFAULT_COMMAND_PREFIX: &str = "!";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    /// Send an error embed to the channel when a command fails.
    pub notify_command_errors: bool,
}

impl Config {
    /// Load the configuration from the process environment and an optional `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `DISCORD_TOKEN` is missing or an optional variable is malformed.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {e}");
            e
        })?;

        Self::from_lookup(discord_token, |key| env::var(key).ok())
    }

    fn from_lookup<F>(discord_token: String, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let command_prefix = match lookup("COMMAND_PREFIX") {
            Some(prefix) if prefix.trim().is_empty() => {
                return Err(BotError::Config(
                    "COMMAND_PREFIX must not be blank".to_string(),
                ));
            }
            Some(prefix) => prefix.trim().to_string(),
            None => DEFAULT_COMMAND_PREFIX.to_string(),
        };

        let notify_command_errors = match lookup("NOTIFY_COMMAND_ERRORS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                BotError::Config(format!(
                    "NOTIFY_COMMAND_ERRORS must be true or false, got '{raw}'"
                ))
            })?,
            None => false,
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Command prefix: {command_prefix}");
        debug!("Notify command errors: {notify_command_errors}");

        Ok(Self {
            discord_token,
            command_prefix,
            notify_command_errors,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup("token".to_string(), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() -> Result<()> {
        let config = load(&[])?;
        assert_eq!(config.command_prefix, "!");
        assert!(!config.notify_command_errors);
        Ok(())
    }

    #[test]
    fn reads_prefix_and_flag() -> Result<()> {
        let config = load(&[("COMMAND_PREFIX", " $ "), ("NOTIFY_COMMAND_ERRORS", "TRUE")])?;
        assert_eq!(config.command_prefix, "$");
        assert!(config.notify_command_errors);
        Ok(())
    }

    #[test]
    fn blank_prefix_is_rejected() {
        assert!(matches!(
            load(&[("COMMAND_PREFIX", "   ")]),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn malformed_flag_is_rejected() {
        assert!(matches!(
            load(&[("NOTIFY_COMMAND_ERRORS", "maybe")]),
            Err(BotError::Config(_))
        ));
    }
}
