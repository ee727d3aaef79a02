use std::{fs, io, path::Path, sync::Arc};

use rand::{seq::SliceRandom, Rng};
use tracing::{info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum WordsListError {
    #[error("could not read words list at {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("words list at {0} has no words")]
    Empty(String),
}

/// Candidate hangman answers, shared between sessions.
#[derive(Debug, Clone)]
pub struct WordsList {
    answers: Arc<[String]>,
}

impl WordsList {
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, WordsListError> {
        let display = path.display().to_string();

        let text = fs::read_to_string(path).map_err(|source| WordsListError::Read {
            path: display.clone(),
            source,
        })?;

        let words = Self::parse(&text).ok_or(WordsListError::Empty(display))?;
        info!(words = words.len(), "loaded words list");

        Ok(words)
    }

    /// One word per line; blank lines and lines holding several words are skipped.
    pub fn parse(text: &str) -> Option<Self> {
        Self::new(text.lines().map(str::to_owned))
    }

    pub fn new(words: impl IntoIterator<Item = String>) -> Option<Self> {
        let answers: Vec<String> = words
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty() && !word.contains(char::is_whitespace))
            .collect();

        (!answers.is_empty()).then(|| Self {
            answers: answers.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn random_answer(&self, rng: &mut impl Rng) -> &str {
        self.answers
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::WordsList;

    #[test]
    fn skips_blank_lines() {
        let words = WordsList::parse("Foo\n\n  bar \n").expect("has words");

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn skips_phrases() {
        let words = WordsList::parse("ice cream\nsorbet\n").expect("has words");
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(words.len(), 1);
        assert_eq!(words.random_answer(&mut rng), "sorbet");
        assert!(WordsList::parse("ice cream").is_none());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(WordsList::parse("\n \n").is_none());
    }

    #[test]
    fn answers_come_from_the_list() {
        let words = WordsList::parse("foo\nbar\nbaz").expect("has words");
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let answer = words.random_answer(&mut rng);
            assert!(["foo", "bar", "baz"].contains(&answer));
        }
    }

    #[test]
    fn missing_file() {
        let path = std::path::Path::new("./does/not/exist.txt");
        assert!(WordsList::load(path).is_err());
    }
}
