use std::{fmt, path::PathBuf, time::Duration};

use poise::serenity_prelude::{ActivityData, ChannelId, GuildId};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config could not be read: {0}")]
    Read(::config::ConfigError),

    #[error("config could not be parsed: {0}")]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,

    #[serde(default)]
    pub games: GamesConfig,
}

impl Config {
    /// Reads the TOML file at `path`, overridden by `GAMEBOT__SECTION__KEY`
    /// environment variables.
    pub fn load(path: &str) -> Result<Self, Error> {
        Self::from_builder(
            ::config::Config::builder()
                .add_source(::config::File::new(path, ::config::FileFormat::Toml).required(false)),
        )
    }

    fn from_builder(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, Error> {
        builder
            .add_source(::config::Environment::with_prefix("GAMEBOT").separator("__"))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}

#[derive(Deserialize, Clone)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([redacted])")
    }
}

fn default_prefix() -> String {
    "!".to_owned()
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    token: Token,
    #[serde(default = "default_prefix")]
    prefix: String,
    activity: Option<String>,
    testing_server: Option<GuildId>,
    status_channel: Option<ChannelId>,
}

impl BotConfig {
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn testing_server(&self) -> Option<&GuildId> {
        if self.testing_server.is_none() {
            warn!("no testing server set in config, slash commands will only be registered globally");
        }

        self.testing_server.as_ref()
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            warn!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed_activity = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!(
            "bot.activity parsed as {:?}: {}",
            parsed_activity.kind, parsed_activity.name
        );
        info!("successfully parsed bot activity from config");

        Some(parsed_activity)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GamesConfig {
    pub words: PathBuf,
    pub hot_cold: HotColdConfig,
    pub rps: RpsConfig,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from("./words.txt"),
            hot_cold: HotColdConfig::default(),
            rps: RpsConfig::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct HotColdConfig {
    pub min: i64,
    pub max: i64,
    pub guesses: i64,
}

impl Default for HotColdConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            guesses: 7,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RpsConfig {
    play_window_ms: u64,
}

impl RpsConfig {
    pub const fn play_window(&self) -> Duration {
        Duration::from_millis(self.play_window_ms)
    }
}

impl Default for RpsConfig {
    fn default() -> Self {
        // counted from "GO!"
        Self {
            play_window_ms: 2000,
        }
    }
}
