//! The smaller party games. Each one is a self-contained state machine that
//! takes its randomness from the caller.

pub mod coin;
pub mod parcel;
pub mod pin;
pub mod wheel;

pub use coin::{CoinConfig, CoinFlip, Face};
pub use parcel::{ParcelConfig, ParcelState, PassTheParcel};
pub use pin::{distance, PinConfig, PinPhase, PinTheTail, Point, ScoreEntry};
pub use wheel::{segment_label, ChocolateWheel, WheelConfig};
