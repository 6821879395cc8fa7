use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{config::ConfigError, AppError};

const GUILD_CONFIG_PATH: &str = "data/config.json";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/homegame.db?mode=rwc";

/// Per-guild configuration from `data/config.json`.
///
/// The file maps external guild ids (as JSON object keys) to the channel pod
/// announcements are posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildConfig {
    pub channel_id: u64,
}

pub struct Config {
    pub discord_token: String,
    pub database_url: String,

    /// Enables verbose store logging when `HOMEGAME_ENVIRONMENT=Development`.
    pub verbose_store_logging: bool,

    guilds: HashMap<u64, GuildConfig>,
}

impl Config {
    /// Loads configuration from the environment and `data/config.json`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Token, database URL, and guild map loaded
    /// - `Err(AppError::ConfigErr)` - Missing `DISCORD_TOKEN` or an unreadable
    ///   or malformed guild configuration file
    pub fn load() -> Result<Self, AppError> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let verbose_store_logging = std::env::var("HOMEGAME_ENVIRONMENT")
            .map(|v| v == "Development")
            .unwrap_or(false);

        let guilds = Self::load_guilds(Path::new(GUILD_CONFIG_PATH))?;

        Ok(Self {
            discord_token,
            database_url,
            verbose_store_logging,
            guilds,
        })
    }

    /// Reads the guild map from a JSON file.
    ///
    /// A missing file is not an error; the bot starts with no configured
    /// guilds and pod creation replies that the server is not set up.
    fn load_guilds(path: &Path) -> Result<HashMap<u64, GuildConfig>, ConfigError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_guilds(&raw).map_err(|e| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn parse_guilds(raw: &str) -> Result<HashMap<u64, GuildConfig>, serde_json::Error> {
        let by_name: HashMap<String, GuildConfig> = serde_json::from_str(raw)?;

        by_name
            .into_iter()
            .map(|(guild_id, config)| {
                let guild_id = guild_id.parse::<u64>().map_err(|e| {
                    serde::de::Error::custom(format!("invalid guild id '{}': {}", guild_id, e))
                })?;
                Ok((guild_id, config))
            })
            .collect()
    }

    /// Returns the configuration for a guild, if present.
    pub fn guild(&self, guild_id: u64) -> Option<&GuildConfig> {
        self.guilds.get(&guild_id)
    }

    /// Returns every configured announcement channel id.
    ///
    /// The expiry sweeper uses this to locate pod messages when the pod row
    /// does not record which guild it belongs to.
    pub fn channel_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.guilds.values().map(|g| g.channel_id)
    }
}
