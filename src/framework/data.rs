use tracing::{info, warn};

use super::config::{Config, GamesConfig, HotColdConfig};
use crate::games::{GameError, Hangman, HotCold, RockPaperScissors, SessionStore, WordsList};

pub mod error;
pub use error::Error as DataError;

pub type Result<T, E = DataError> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct PoiseData {
    pub(crate) config: Config,
    pub(crate) games: GamesData,
}

impl PoiseData {
    pub(crate) fn new() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_file = if let Ok(path) = std::env::var("GAMEBOT_TOML") {
            info!(path, "looking for config file with GAMEBOT_TOML...");
            path
        } else {
            let path = "./gamebot.toml".to_owned();
            warn!(path, "GAMEBOT_TOML env unset, using default path");
            path
        };

        let config = Config::load(&config_file)?;
        info!("config loaded");

        let words = WordsList::load(&config.games.words)?;
        let games = GamesData::new(words, &config.games)?;

        Ok(Self { config, games })
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn games(&self) -> &GamesData {
        &self.games
    }
}

/// Session stores for every game, one per game kind.
#[derive(Debug, Clone)]
pub struct GamesData {
    hangman: SessionStore<Hangman>,
    hot_cold: SessionStore<HotCold>,
    rps: SessionStore<RockPaperScissors>,
    hot_cold_config: HotColdConfig,
}

impl GamesData {
    pub fn new(words: WordsList, config: &GamesConfig) -> Result<Self, GameError> {
        let HotColdConfig { min, max, guesses } = config.hot_cold;
        let play_window = config.rps.play_window();

        // fail at startup rather than on every `hotcold start`
        HotCold::new(min, max, guesses, &mut rand::thread_rng())?;

        Ok(Self {
            hangman: SessionStore::new(move || {
                Hangman::new(words.random_answer(&mut rand::thread_rng()))
            }),
            hot_cold: SessionStore::new(move || {
                HotCold::new(min, max, guesses, &mut rand::thread_rng())
            }),
            rps: SessionStore::new(move || Ok(RockPaperScissors::new(play_window))),
            hot_cold_config: config.hot_cold,
        })
    }

    pub const fn hangman(&self) -> &SessionStore<Hangman> {
        &self.hangman
    }

    pub const fn hot_cold(&self) -> &SessionStore<HotCold> {
        &self.hot_cold
    }

    pub const fn hot_cold_config(&self) -> &HotColdConfig {
        &self.hot_cold_config
    }

    pub const fn rps(&self) -> &SessionStore<RockPaperScissors> {
        &self.rps
    }
}
