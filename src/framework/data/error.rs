use crate::{
    framework::config,
    games::{words_list::WordsListError, GameError},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error loading config: {0}")]
    Config(#[from] config::Error),

    #[error("error loading words list: {0}")]
    Words(#[from] WordsListError),

    #[error("error setting up games: {0}")]
    Games(#[from] GameError),
}
