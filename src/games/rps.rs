use std::{fmt, time::Duration};

use tokio::time::Instant;

use super::{Game, GameError, GameKind, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rock => "ROCK",
            Self::Paper => "PAPER",
            Self::Scissors => "SCISSORS",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Results {
    pub choices: Vec<(String, Choice)>,
    pub wins: Vec<(String, String)>,
    pub draws: Vec<(String, String)>,
}

/// A round of rock-paper-scissors open to everyone in a channel.
///
/// A new round takes no choices until [`RockPaperScissors::open`] starts the
/// play window. Choices are then collected until [`RockPaperScissors::close`]
/// is called once the window has elapsed.
#[derive(Clone, Debug)]
pub struct RockPaperScissors {
    opened: Option<Instant>,
    play_window: Duration,
    choices: Vec<(String, Choice)>,
    over: bool,
}

impl RockPaperScissors {
    pub fn new(play_window: Duration) -> Self {
        Self {
            opened: None,
            play_window,
            choices: Vec::new(),
            over: false,
        }
    }

    /// Starts the play window, returning when it closes.
    pub fn open(&mut self) -> Instant {
        let opened = *self.opened.get_or_insert_with(Instant::now);
        opened + self.play_window
    }

    pub fn closes_at(&self) -> Option<Instant> {
        self.opened.map(|opened| opened + self.play_window)
    }

    pub fn is_open(&self) -> bool {
        self.opened.is_some() && !self.over
    }

    pub fn can_choose(&self, user: &str) -> bool {
        self.choice_of(user).is_none()
    }

    pub fn choice_of(&self, user: &str) -> Option<Choice> {
        self.choices
            .iter()
            .find(|(name, _)| name == user)
            .map(|(_, choice)| *choice)
    }

    pub fn make_choice(&mut self, user: impl Into<String>, choice: Choice) -> Result<()> {
        if self.over {
            return Err(GameError::GameOver(GameKind::RockPaperScissors));
        }

        if self.opened.is_none() {
            return Err(GameError::GameNotStarted(GameKind::RockPaperScissors));
        }

        let user = user.into();
        if self.can_choose(&user) {
            self.choices.push((user, choice));
        }

        Ok(())
    }

    pub fn close(&mut self) {
        self.over = true;
    }

    pub const fn is_game_over(&self) -> bool {
        self.over
    }

    pub fn results(&self) -> Result<Results> {
        if !self.over {
            return Err(GameError::GameNotOver(GameKind::RockPaperScissors));
        }

        let mut results = Results {
            choices: self.choices.clone(),
            ..Results::default()
        };

        for (index, (first, first_choice)) in self.choices.iter().enumerate() {
            for (second, second_choice) in &self.choices[index + 1..] {
                if first_choice.beats(*second_choice) {
                    results.wins.push((first.clone(), second.clone()));
                } else if second_choice.beats(*first_choice) {
                    results.wins.push((second.clone(), first.clone()));
                } else {
                    results.draws.push((first.clone(), second.clone()));
                }
            }
        }

        Ok(results)
    }
}

impl Game for RockPaperScissors {
    const KIND: GameKind = GameKind::RockPaperScissors;

    type Move = (String, Choice);
    type Outcome = Results;

    fn submit(&mut self, (user, choice): (String, Choice)) -> Result<()> {
        self.make_choice(user, choice)
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn outcome(&self) -> Option<Results> {
        self.results().ok()
    }

    fn render(&self) -> String {
        match self.choices.len() {
            1 => "1 player has chosen".to_owned(),
            n => format!("{n} players have chosen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::{Choice, Results, RockPaperScissors};
    use crate::games::{GameError, GameKind};

    fn game() -> RockPaperScissors {
        let mut game = RockPaperScissors::new(Duration::from_secs(2));
        game.open();
        game
    }

    #[test]
    fn win_table() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(!Choice::Rock.beats(Choice::Rock));
        assert!(!Choice::Scissors.beats(Choice::Rock));
    }

    #[tokio::test]
    async fn rock_beats_scissors() {
        let mut game = game();
        game.make_choice("alice", Choice::Rock).expect("open");
        game.make_choice("bob", Choice::Scissors).expect("open");
        game.close();

        let results = game.results().expect("closed");

        assert_eq!(results.wins, vec![("alice".to_owned(), "bob".to_owned())]);
        assert!(results.draws.is_empty());
    }

    #[tokio::test]
    async fn losers_listed_second() {
        let mut game = game();
        game.make_choice("alice", Choice::Scissors).expect("open");
        game.make_choice("bob", Choice::Rock).expect("open");
        game.make_choice("carol", Choice::Rock).expect("open");
        game.close();

        assert_eq!(
            game.results().expect("closed"),
            Results {
                choices: vec![
                    ("alice".to_owned(), Choice::Scissors),
                    ("bob".to_owned(), Choice::Rock),
                    ("carol".to_owned(), Choice::Rock),
                ],
                wins: vec![
                    ("bob".to_owned(), "alice".to_owned()),
                    ("carol".to_owned(), "alice".to_owned()),
                ],
                draws: vec![("bob".to_owned(), "carol".to_owned())],
            }
        );
    }

    #[tokio::test]
    async fn one_choice_per_user() {
        let mut game = game();
        game.make_choice("alice", Choice::Paper).expect("open");

        assert!(!game.can_choose("alice"));
        game.make_choice("alice", Choice::Rock).expect("open");

        assert_eq!(game.choice_of("alice"), Some(Choice::Paper));
    }

    #[tokio::test]
    async fn closed_game_rejects_choices() {
        let mut game = game();
        game.close();

        assert_eq!(
            game.make_choice("alice", Choice::Rock),
            Err(GameError::GameOver(GameKind::RockPaperScissors))
        );
    }

    #[tokio::test]
    async fn results_need_a_closed_game() {
        let game = game();

        assert_eq!(
            game.results(),
            Err(GameError::GameNotOver(GameKind::RockPaperScissors))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn window_starts_when_opened() {
        let mut game = RockPaperScissors::new(Duration::from_secs(2));
        assert_eq!(game.closes_at(), None);
        assert!(!game.is_open());

        tokio::time::advance(Duration::from_secs(5)).await;

        let expected = tokio::time::Instant::now() + Duration::from_secs(2);
        assert_eq!(game.open(), expected);
        assert_eq!(game.closes_at(), Some(expected));
        assert!(game.is_open());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(game.open(), expected);
    }

    #[tokio::test]
    async fn choices_wait_for_the_window() {
        let mut game = RockPaperScissors::new(Duration::from_secs(2));

        assert_eq!(
            game.make_choice("alice", Choice::Rock),
            Err(GameError::GameNotStarted(GameKind::RockPaperScissors))
        );
        assert!(game.can_choose("alice"));
    }
}
