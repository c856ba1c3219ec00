use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelConfig {
    /// Fewest passes before the parcel is unwrapped (inclusive)
    pub min_passes: u32,
    /// Upper bound on passes (exclusive)
    pub max_passes: u32,
}

impl Default for ParcelConfig {
    fn default() -> Self {
        ParcelConfig {
            min_passes: 4,
            max_passes: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelState {
    Idle,
    /// Passes remaining before the music stops; always > 0
    Passing(u32),
    Unwrapped,
}

/// Pass the Parcel: a hidden countdown of passes, the holder when it hits
/// zero wins.
#[derive(Debug, Clone)]
pub struct PassTheParcel {
    config: ParcelConfig,
    state: ParcelState,
}

impl PassTheParcel {
    /// A round always takes at least one pass: `min_passes` is raised to 1
    /// and an empty `min_passes..max_passes` range collapses to `min_passes`.
    pub fn new(mut config: ParcelConfig) -> Self {
        config.min_passes = config.min_passes.max(1);
        config.max_passes = config.max_passes.max(config.min_passes + 1);
        PassTheParcel {
            config,
            state: ParcelState::Idle,
        }
    }

    pub fn state(&self) -> ParcelState {
        self.state
    }

    pub fn passes_remaining(&self) -> Option<u32> {
        match self.state {
            ParcelState::Passing(n) => Some(n),
            ParcelState::Unwrapped => Some(0),
            ParcelState::Idle => None,
        }
    }

    /// Pick a random number of passes and start the round
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.state != ParcelState::Idle {
            return false;
        }
        let passes = rng.random_range(self.config.min_passes..self.config.max_passes);
        debug!(passes, "parcel round started");
        self.state = ParcelState::Passing(passes);
        true
    }

    pub fn pass_on(&mut self) -> bool {
        match self.state {
            ParcelState::Passing(1) => {
                info!("parcel unwrapped");
                self.state = ParcelState::Unwrapped;
                true
            }
            ParcelState::Passing(n) => {
                self.state = ParcelState::Passing(n - 1);
                true
            }
            _ => false,
        }
    }

    pub fn play_again(&mut self) -> bool {
        if self.state != ParcelState::Unwrapped {
            return false;
        }
        self.state = ParcelState::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.state = ParcelState::Idle;
    }
}

impl Default for PassTheParcel {
    fn default() -> Self {
        Self::new(ParcelConfig::default())
    }
}
