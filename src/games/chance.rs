use std::{fmt, num::NonZeroU32};

use rand::Rng;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChanceError {
    #[error("a die needs at least one side")]
    NoFaces,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Die {
    faces: NonZeroU32,
}

impl Die {
    pub const DEFAULT_FACES: u32 = 6;

    pub fn new(faces: u32) -> Result<Self, ChanceError> {
        NonZeroU32::new(faces)
            .map(|faces| Self { faces })
            .ok_or(ChanceError::NoFaces)
    }

    // convenience version of [`roll_with`] that doesn't use a cached Rng
    pub fn roll(&self) -> u32 {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(1..=self.faces.get())
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACES).unwrap_or(Self {
            faces: NonZeroU32::MIN,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    pub fn flip() -> Self {
        Self::flip_with(&mut rand::thread_rng())
    }

    pub fn flip_with(rng: &mut impl Rng) -> Self {
        if rng.gen() {
            Self::Heads
        } else {
            Self::Tails
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heads => "Heads",
            Self::Tails => "Tails",
        })
    }
}
