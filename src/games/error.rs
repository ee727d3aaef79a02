use poise::serenity_prelude::ChannelId;
use tracing::{debug, error, warn};

use super::GameKind;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GameError {
    #[error("The {0} game is already over")]
    GameOver(GameKind),

    #[error("The {0} game is still being played")]
    GameNotOver(GameKind),

    #[error("The {0} game hasn't started yet")]
    GameNotStarted(GameKind),

    #[error("No {kind} session in progress{}", not_found_hint(.kind))]
    SessionNotFound { kind: GameKind, channel: ChannelId },

    #[error("{} session already in progress", title(.kind))]
    SessionAlreadyExists { kind: GameKind, channel: ChannelId },

    #[error("Invalid guess: \"{guess}\"")]
    InvalidGuess { guess: String },

    #[error("Invalid {kind} game: {reason}")]
    InvalidConstruction { kind: GameKind, reason: &'static str },
}

fn title(kind: &GameKind) -> &'static str {
    kind.title()
}

fn not_found_hint(kind: &GameKind) -> &'static str {
    match kind {
        GameKind::RockPaperScissors => " (maybe you were too slow [or fast?!])",
        _ => "",
    }
}

impl GameError {
    pub fn invalid_guess(guess: impl Into<String>) -> Self {
        Self::InvalidGuess {
            guess: guess.into(),
        }
    }

    /// Emits this error as a tracing event.
    ///
    /// Moves against a finished game should be unreachable while the router
    /// destroys terminal sessions, so those are reported as errors.
    pub fn trace(&self) {
        match self {
            Self::GameOver(kind) | Self::GameNotOver(kind) => {
                error!(%kind, "{self}");
            }
            Self::GameNotStarted(kind) => {
                debug!(%kind, "{self}");
            }
            Self::InvalidConstruction { kind, reason } => {
                warn!(%kind, %reason, "{self}");
            }
            Self::SessionNotFound { kind, channel }
            | Self::SessionAlreadyExists { kind, channel } => {
                debug!(%kind, %channel, "{self}");
            }
            Self::InvalidGuess { guess } => {
                debug!(%guess, "{self}");
            }
        }
    }
}
