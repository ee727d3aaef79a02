use std::fmt;

pub mod chance;

mod error;
pub use error::GameError;

pub mod hangman;
pub use hangman::Hangman;

pub mod hot_cold;
pub use hot_cold::HotCold;

pub mod rps;
pub use rps::RockPaperScissors;

pub mod session;
pub use session::SessionStore;

pub mod words_list;
pub use words_list::WordsList;

pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Hangman,
    HotCold,
    RockPaperScissors,
}

impl GameKind {
    /// Name used at the start of a sentence.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hangman => "Hangman",
            Self::HotCold => "Hot Or Cold",
            Self::RockPaperScissors => "RPS",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hangman => "hangman",
            Self::HotCold => "Hot Or Cold",
            Self::RockPaperScissors => "RPS",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a finished game ended, along with its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<A> {
    Won { answer: A },
    Lost { answer: A },
}

/// A game hosted in a channel session.
///
/// Every engine accepts moves until it reaches a terminal state, after which
/// [`Game::submit`] fails with [`GameError::GameOver`].
pub trait Game: Send + 'static {
    const KIND: GameKind;

    type Move: Send;
    type Outcome: Send;

    fn submit(&mut self, player_move: Self::Move) -> Result<()>;

    fn is_over(&self) -> bool;

    /// `None` while the game is still being played.
    fn outcome(&self) -> Option<Self::Outcome>;

    fn render(&self) -> String;
}
