use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
    pub min_half_turns: u32,
    pub max_half_turns: u32,
    /// Rotation is wound back to zero once it passes this many degrees
    pub reset_after_degrees: u64,
}

impl Default for CoinConfig {
    fn default() -> Self {
        CoinConfig {
            min_half_turns: 5,
            max_half_turns: 6,
            reset_after_degrees: 360_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    pub fn letter(self) -> char {
        match self {
            Face::Heads => 'H',
            Face::Tails => 'T',
        }
    }
}

/// A coin that spins a random number of half turns per flip.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    config: CoinConfig,
    degrees: u64,
    face: Face,
    flips: u64,
}

impl CoinFlip {
    /// `max_half_turns` below `min_half_turns` is raised to match it.
    pub fn new(mut config: CoinConfig) -> Self {
        config.max_half_turns = config.max_half_turns.max(config.min_half_turns);
        CoinFlip {
            config,
            degrees: 0,
            face: Face::Tails,
            flips: 0,
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn degrees(&self) -> u64 {
        self.degrees
    }

    pub fn flips(&self) -> u64 {
        self.flips
    }

    pub fn flip<R: Rng>(&mut self, rng: &mut R) -> Face {
        let half_turns =
            rng.random_range(self.config.min_half_turns..=self.config.max_half_turns);
        self.turn(half_turns)
    }

    /// Rotate by `half_turns` * 180 degrees and settle on a face
    pub fn turn(&mut self, half_turns: u32) -> Face {
        if self.degrees > self.config.reset_after_degrees {
            self.degrees = 0;
        }
        self.degrees += u64::from(half_turns) * 180;
        self.face = if (self.degrees / 180) % 2 == 0 {
            Face::Heads
        } else {
            Face::Tails
        };
        self.flips += 1;
        debug!(half_turns, degrees = self.degrees, face = ?self.face, "coin flipped");
        self.face
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new(CoinConfig::default())
    }
}
