use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub segment_count: usize,
    /// Smallest spin in whole degrees (inclusive)
    pub min_spin: u32,
    /// Largest spin in whole degrees (exclusive)
    pub max_spin: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        WheelConfig {
            segment_count: 36,
            min_spin: 1080,
            max_spin: 1440,
        }
    }
}

/// Label of segment `index`, following the wheel's paint scheme.
pub fn segment_label(index: usize) -> &'static str {
    if index % 36 == 0 {
        "peachpuff"
    } else if index % 12 == 0 {
        "pink"
    } else if index % 8 == 0 {
        "palegreen"
    } else if index % 6 == 0 {
        "lightcyan"
    } else if index % 2 == 0 {
        "powderblue"
    } else {
        "thistle"
    }
}

/// A prize wheel with a fixed pointer at the top.
///
/// The angle is the clockwise rotation of the wheel. Segment 0 starts at the
/// top and segments are laid out clockwise.
#[derive(Debug, Clone)]
pub struct ChocolateWheel {
    config: WheelConfig,
    angle: f64,
    spins: u64,
}

impl ChocolateWheel {
    /// The wheel always has at least one segment, and an empty
    /// `min_spin..max_spin` range collapses to `min_spin`.
    pub fn new(mut config: WheelConfig) -> Self {
        config.segment_count = config.segment_count.max(1);
        config.max_spin = config.max_spin.max(config.min_spin.saturating_add(1));
        let angle = -(360.0 / config.segment_count as f64) / 2.0;
        ChocolateWheel {
            config,
            angle,
            spins: 0,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.config.segment_count
    }

    pub fn degrees_each(&self) -> f64 {
        360.0 / self.config.segment_count as f64
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn spins(&self) -> u64 {
        self.spins
    }

    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> usize {
        let degrees = rng.random_range(self.config.min_spin..self.config.max_spin);
        self.rotate(f64::from(degrees))
    }

    /// Rotate clockwise and return the segment now under the pointer
    pub fn rotate(&mut self, degrees: f64) -> usize {
        self.angle += degrees;
        self.spins += 1;
        let landed = self.landed_segment();
        debug!(degrees, angle = self.angle, landed, "wheel spun");
        landed
    }

    /// Index of the segment under the pointer
    pub fn landed_segment(&self) -> usize {
        let under_pointer = (-self.angle).rem_euclid(360.0);
        let index = (under_pointer / self.degrees_each()).floor() as usize;
        index.min(self.config.segment_count - 1)
    }

    pub fn landed_label(&self) -> &'static str {
        segment_label(self.landed_segment())
    }
}

impl Default for ChocolateWheel {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_segment_labels() {
        assert_eq!(segment_label(0), "peachpuff");
        assert_eq!(segment_label(12), "pink");
        assert_eq!(segment_label(24), "pink");
        assert_eq!(segment_label(16), "palegreen");
        assert_eq!(segment_label(6), "lightcyan");
        assert_eq!(segment_label(4), "powderblue");
        assert_eq!(segment_label(7), "thistle");
    }

    #[test]
    fn test_starts_centred_on_first_segment() {
        let wheel = ChocolateWheel::default();
        assert!((wheel.angle() + 5.0).abs() < 1e-9);
        assert_eq!(wheel.landed_segment(), 0);
        assert_eq!(wheel.landed_label(), "peachpuff");
    }

    #[test]
    fn test_clockwise_rotation_brings_up_last_segments() {
        let mut wheel = ChocolateWheel::default();
        // Angle 5: the pointer sits at wheel-local 355, the last segment
        assert_eq!(wheel.rotate(10.0), 35);
        // Angle 1085: wheel-local 355 again after three full turns
        assert_eq!(wheel.rotate(1080.0), 35);
        // Angle 1100: wheel-local 340
        assert_eq!(wheel.rotate(15.0), 34);
        assert_eq!(wheel.spins(), 3);
    }

    #[test]
    fn test_spin_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut wheel = ChocolateWheel::default();
        let mut previous = wheel.angle();
        for _ in 0..20 {
            let landed = wheel.spin(&mut rng);
            assert!(landed < 36);
            let delta = wheel.angle() - previous;
            assert!((1080.0..1440.0).contains(&delta), "unexpected spin {delta}");
            previous = wheel.angle();
        }
    }

    #[test]
    fn test_degenerate_config_is_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut wheel = ChocolateWheel::new(WheelConfig {
            segment_count: 0,
            min_spin: 90,
            max_spin: 90,
        });
        assert_eq!(wheel.segment_count(), 1);
        assert_eq!(wheel.landed_segment(), 0);

        let start = wheel.angle();
        assert_eq!(wheel.spin(&mut rng), 0);
        assert!((wheel.angle() - start - 90.0).abs() < 1e-9);
    }
}
