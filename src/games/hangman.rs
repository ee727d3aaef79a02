use std::collections::BTreeSet;

use super::{Game, GameError, GameKind, Outcome, Result};

const STAGES: [&str; 7] = [
    r"
    ------
    |/
    |
    |
    |
    |
    |
---------
",
    r"
    ------
    |/   |
    |
    |
    |
    |
    |
---------
",
    r"
    ------
    |/   |
    |    0
    |
    |
    |
    |
---------
",
    r"
    ------
    |/   |
    |    0
    |   \|
    |
    |
    |
---------
",
    r"
    ------
    |/   |
    |    0
    |   \|/
    |
    |
    |
---------
",
    r"
    ------
    |/   |
    |    0
    |   \|/
    |    |
    |   /
    |
---------
",
    r"
    ------
    |/   |
    |    0
    |   \|/
    |    |
    |   / \
    |
---------
",
];

#[derive(Clone, Debug)]
pub struct Hangman {
    answer: String,
    guessed_letters: BTreeSet<char>,
    guessed_words: BTreeSet<String>,
}

impl Hangman {
    pub const MAX_GUESSES: usize = STAGES.len() - 1;

    pub fn new(answer: impl AsRef<str>) -> Result<Self> {
        let answer = answer.as_ref().trim().to_lowercase();

        if answer.is_empty() {
            return Err(GameError::InvalidConstruction {
                kind: GameKind::Hangman,
                reason: "the answer cannot be empty",
            });
        }

        if answer.contains(char::is_whitespace) {
            return Err(GameError::InvalidConstruction {
                kind: GameKind::Hangman,
                reason: "the answer must be a single word",
            });
        }

        Ok(Self {
            answer,
            guessed_letters: BTreeSet::new(),
            guessed_words: BTreeSet::new(),
        })
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn guess(&mut self, letter_or_word: &str) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver(GameKind::Hangman));
        }

        let normalized = letter_or_word.trim().to_lowercase();

        if normalized.is_empty() || normalized.contains(char::is_whitespace) {
            return Err(GameError::invalid_guess(letter_or_word));
        }

        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                self.guessed_letters.insert(letter);
            }
            _ => {
                self.guessed_words.insert(normalized);
            }
        }

        Ok(())
    }

    pub fn wrong_guesses(&self) -> usize {
        let wrong_letters = self
            .guessed_letters
            .iter()
            .filter(|letter| !self.answer.contains(**letter))
            .count();

        let wrong_words = self
            .guessed_words
            .iter()
            .filter(|word| **word != self.answer)
            .count();

        wrong_letters + wrong_words
    }

    pub fn is_game_won(&self) -> bool {
        self.guessed_words.contains(&self.answer)
            || self
                .answer
                .chars()
                .all(|letter| self.guessed_letters.contains(&letter))
    }

    pub fn is_game_lost(&self) -> bool {
        self.wrong_guesses() >= Self::MAX_GUESSES
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_won() || self.is_game_lost()
    }

    fn masked_answer(&self) -> String {
        let revealed = self.is_game_over();

        self.answer
            .chars()
            .map(|letter| {
                if revealed || self.guessed_letters.contains(&letter) {
                    letter.to_string()
                } else {
                    "_".to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn guesses(&self) -> String {
        let mut guesses: Vec<String> = self
            .guessed_letters
            .iter()
            .map(char::to_string)
            .chain(self.guessed_words.iter().cloned())
            .collect();

        guesses.sort();
        guesses.join(", ")
    }
}

impl Game for Hangman {
    const KIND: GameKind = GameKind::Hangman;

    type Move = String;
    type Outcome = Outcome<String>;

    fn submit(&mut self, letter_or_word: String) -> Result<()> {
        self.guess(&letter_or_word)
    }

    fn is_over(&self) -> bool {
        self.is_game_over()
    }

    fn outcome(&self) -> Option<Self::Outcome> {
        let answer = self.answer.clone();

        if self.is_game_won() {
            Some(Outcome::Won { answer })
        } else if self.is_game_lost() {
            Some(Outcome::Lost { answer })
        } else {
            None
        }
    }

    fn render(&self) -> String {
        let figure = STAGES[self.wrong_guesses().min(Self::MAX_GUESSES)];

        format!(
            "{figure}{}\nGuessed: {}",
            self.masked_answer(),
            self.guesses()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Hangman;
    use crate::games::{Game, GameError, GameKind, Outcome};

    fn game(answer: &str) -> Hangman {
        Hangman::new(answer).expect("valid answer")
    }

    #[test]
    fn answer_must_be_one_word() {
        assert!(matches!(
            Hangman::new("ice cream"),
            Err(GameError::InvalidConstruction {
                kind: GameKind::Hangman,
                ..
            })
        ));
        assert_eq!(game("  Sorbet ").answer(), "sorbet");
    }

    #[test]
    fn wrong_guesses_lose() {
        let mut hangman = game("bar");

        for guess in ["x", "y", "z", "q", "w"] {
            hangman.guess(guess).expect("still playing");
            assert!(!hangman.is_game_over());
        }

        hangman.guess("bat").expect("still playing");

        assert_eq!(hangman.wrong_guesses(), Hangman::MAX_GUESSES);
        assert!(hangman.is_game_lost());
        assert!(hangman.is_game_over());
        assert_eq!(
            hangman.outcome(),
            Some(Outcome::Lost {
                answer: "bar".to_owned()
            })
        );
    }

    #[test]
    fn full_word_wins_immediately() {
        let mut hangman = game("bar");
        hangman.guess("x").expect("still playing");
        hangman.guess("bar").expect("still playing");

        assert!(hangman.is_game_won());
    }

    #[test]
    fn all_letters_win() {
        let mut hangman = game("bar");

        for letter in ["b", "a", "r"] {
            assert!(!hangman.is_game_won());
            hangman.guess(letter).expect("still playing");
        }

        assert!(hangman.is_game_won());
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut upper = game("cat");
        let mut lower = game("CAT");

        upper.guess("CAT").expect("still playing");
        lower.guess("cat").expect("still playing");

        assert!(upper.is_game_won());
        assert!(lower.is_game_won());
        assert_eq!(upper.render(), lower.render());
    }

    #[test]
    fn correct_guesses_are_not_wrong() {
        let mut hangman = game("bar");
        hangman.guess("b").expect("still playing");
        hangman.guess("B").expect("still playing");
        hangman.guess("zz").expect("still playing");

        assert_eq!(hangman.wrong_guesses(), 1);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let mut hangman = game("bar");
        hangman.guess("bar").expect("still playing");

        assert_eq!(
            hangman.guess("x"),
            Err(GameError::GameOver(GameKind::Hangman))
        );
    }

    #[test]
    fn rejects_malformed_guesses() {
        let mut hangman = game("bar");

        assert!(matches!(
            hangman.guess("   "),
            Err(GameError::InvalidGuess { .. })
        ));
        assert!(matches!(
            hangman.guess("two words"),
            Err(GameError::InvalidGuess { .. })
        ));
        assert_eq!(hangman.wrong_guesses(), 0);
    }

    #[test]
    fn render_masks_unguessed_letters() {
        let mut hangman = game("bar");
        hangman.guess("a").expect("still playing");
        hangman.guess("z").expect("still playing");
        hangman.guess("foo").expect("still playing");

        let rendered = hangman.render();

        assert!(rendered.contains("|    0"));
        assert!(rendered.ends_with("_ a _\nGuessed: a, foo, z"));
    }

    #[test]
    fn render_reveals_answer_when_over() {
        let mut hangman = game("bar");
        hangman.guess("bar").expect("still playing");

        assert!(hangman.render().ends_with("b a r\nGuessed: bar"));
    }
}
