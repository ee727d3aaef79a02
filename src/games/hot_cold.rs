use rand::Rng;

use super::{Game, GameError, GameKind, Outcome, Result};

#[derive(Clone, Debug)]
pub struct HotCold {
    answer: i64,
    allowed_guesses: usize,
    guesses: Vec<i64>,

    bad_diff: f64,
    okay_diff: f64,
    good_diff: f64,
}

impl HotCold {
    pub fn new(min: i64, max: i64, allowed_guesses: i64, rng: &mut impl Rng) -> Result<Self> {
        if min > max {
            return Err(GameError::InvalidConstruction {
                kind: GameKind::HotCold,
                reason: "the minimum cannot be greater than the maximum",
            });
        }

        if min.min(max).min(allowed_guesses) < 0 {
            return Err(GameError::InvalidConstruction {
                kind: GameKind::HotCold,
                reason: "the bounds and number of guesses cannot be negative",
            });
        }

        let answer = rng.gen_range(min..=max);
        Ok(Self::with_answer(answer, min, max, allowed_guesses as usize))
    }

    fn with_answer(answer: i64, min: i64, max: i64, allowed_guesses: usize) -> Self {
        let range = (max - min) as f64;

        Self {
            answer,
            allowed_guesses,
            guesses: Vec::with_capacity(allowed_guesses),
            bad_diff: range * 0.5,
            okay_diff: range * 0.1,
            good_diff: range * 0.05,
        }
    }

    pub const fn answer(&self) -> i64 {
        self.answer
    }

    pub fn guess(&mut self, number: i64) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver(GameKind::HotCold));
        }

        self.guesses.push(number);
        Ok(())
    }

    pub fn is_game_won(&self) -> bool {
        self.guesses.contains(&self.answer)
    }

    pub fn is_game_lost(&self) -> bool {
        self.guesses.len() >= self.allowed_guesses
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_won() || self.is_game_lost()
    }

    pub fn guesses_left(&self) -> usize {
        self.allowed_guesses.saturating_sub(self.guesses.len())
    }

    fn diff(&self, guess: i64) -> f64 {
        (guess - self.answer).abs() as f64
    }

    fn temperature(&self, diff: f64) -> Temperature {
        if diff <= self.good_diff {
            Temperature::VeryHot
        } else if diff <= self.okay_diff {
            Temperature::Hot
        } else if diff <= self.bad_diff {
            Temperature::Cold
        } else {
            Temperature::VeryCold
        }
    }

    fn trend(&self) -> Option<Trend> {
        let [.., previous, last] = self.guesses.as_slice() else {
            return None;
        };

        let (previous, last) = (self.diff(*previous), self.diff(*last));

        if last < previous {
            Some(Trend::Hotter)
        } else if last > previous {
            Some(Trend::Colder)
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Temperature {
    VeryHot,
    Hot,
    Cold,
    VeryCold,
}

impl Temperature {
    const fn label(self) -> &'static str {
        match self {
            Self::VeryHot => "Very hot",
            Self::Hot => "Hot",
            Self::Cold => "Cold",
            Self::VeryCold => "Very cold",
        }
    }

    const fn is_hot(self) -> bool {
        matches!(self, Self::VeryHot | Self::Hot)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Trend {
    Hotter,
    Colder,
}

impl Trend {
    // the conjunction flips depending on whether the news is good
    const fn qualifier(self, temperature: Temperature) -> &'static str {
        match (self, temperature.is_hot()) {
            (Self::Hotter, true) => " and getting hotter",
            (Self::Colder, true) => " but getting colder",
            (Self::Hotter, false) => " but getting hotter",
            (Self::Colder, false) => " and getting colder",
        }
    }
}

impl Game for HotCold {
    const KIND: GameKind = GameKind::HotCold;

    type Move = i64;
    type Outcome = Outcome<i64>;

    fn submit(&mut self, number: i64) -> Result<()> {
        self.guess(number)
    }

    fn is_over(&self) -> bool {
        self.is_game_over()
    }

    fn outcome(&self) -> Option<Self::Outcome> {
        let answer = self.answer;

        if self.is_game_won() {
            Some(Outcome::Won { answer })
        } else if self.is_game_lost() {
            Some(Outcome::Lost { answer })
        } else {
            None
        }
    }

    fn render(&self) -> String {
        let Some(last) = self.guesses.last() else {
            return "{No guesses made}".to_owned();
        };

        let temperature = self.temperature(self.diff(*last));
        let qualifier = self
            .trend()
            .map_or("", |trend| trend.qualifier(temperature));

        format!(
            "{}{qualifier} ({} guesses left)",
            temperature.label(),
            self.guesses_left()
        )
    }
}
