use std::cmp::Ordering;
use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    pub field_width: u16,
    pub field_height: u16,
    /// Keeps the target this far away from every edge
    pub padding: u16,
}

impl Default for PinConfig {
    fn default() -> Self {
        PinConfig {
            field_width: 60,
            field_height: 16,
            padding: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Point { x, y }
    }
}

/// Straight-line distance between two points, rounded down
pub fn distance(target: Point, actual: Point) -> u32 {
    let dx = f64::from(target.x) - f64::from(actual.x);
    let dy = f64::from(target.y) - f64::from(actual.y);
    (dx * dx + dy * dy).sqrt().floor() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    SignUp,
    Playing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: String,
    pub score: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct PinTheTail {
    config: PinConfig,
    players: Vec<String>,
    markers: HashMap<String, Point>,
    target: Point,
    phase: PinPhase,
    current_player: Option<String>,
}

impl PinTheTail {
    pub fn new<R: Rng>(config: PinConfig, rng: &mut R) -> Self {
        let target = random_target(&config, rng);
        PinTheTail {
            config,
            players: Vec::new(),
            markers: HashMap::new(),
            target,
            phase: PinPhase::SignUp,
            current_player: None,
        }
    }

    pub fn config(&self) -> &PinConfig {
        &self.config
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn marker(&self, player: &str) -> Option<Point> {
        self.markers.get(player).copied()
    }

    pub fn markers(&self) -> impl Iterator<Item = (&str, Point)> {
        self.markers.iter().map(|(name, point)| (name.as_str(), *point))
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    pub fn current_player(&self) -> Option<&str> {
        self.current_player.as_deref()
    }

    /// Sign up a player. Blank and duplicate names are ignored, as is anyone
    /// arriving once the round is done. Late arrivals mid-round still get a
    /// turn after everyone ahead of them.
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.phase == PinPhase::Done {
            return false;
        }
        if self.players.iter().any(|p| p == name) {
            return false;
        }
        debug!(player = name, "player added");
        self.players.push(name.to_string());
        true
    }

    pub fn remove_player(&mut self, name: &str) -> bool {
        if self.phase == PinPhase::Playing {
            return false;
        }
        let before = self.players.len();
        self.players.retain(|p| p != name);
        self.markers.remove(name);
        before != self.players.len()
    }

    pub fn start(&mut self) -> bool {
        if self.phase != PinPhase::SignUp || self.players.is_empty() {
            return false;
        }
        info!(players = self.players.len(), "pin the tail started");
        self.phase = PinPhase::Playing;
        self.advance();
        true
    }

    /// Pin the current player's marker at `point` and hand over to the next
    /// player still waiting for a turn.
    pub fn pin(&mut self, point: Point) -> bool {
        let Some(player) = self.current_player.take() else {
            return false;
        };
        debug!(player = %player, x = point.x, y = point.y, "marker pinned");
        self.markers.insert(player, point);
        self.advance();
        true
    }

    fn advance(&mut self) {
        let next = self
            .players
            .iter()
            .find(|p| !self.markers.contains_key(p.as_str()))
            .cloned();

        if next.is_none() {
            info!("pin the tail finished");
            self.phase = PinPhase::Done;
        }
        self.current_player = next;
    }

    /// Clear everyone out and hide a new target
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = PinTheTail::new(self.config.clone(), rng);
    }

    /// Every player with their distance from the target. Closest first, ties
    /// alphabetical ignoring case, players yet to pin last.
    pub fn scoreboard(&self) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self
            .players
            .iter()
            .map(|player| ScoreEntry {
                player: player.clone(),
                score: self.marker(player).map(|m| distance(self.target, m)),
            })
            .collect();

        // Stable sort keeps unscored players in sign-up order
        entries.sort_by(|a, b| match (a.score, b.score) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| by_name(&a.player, &b.player)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        entries
    }
}

fn by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn random_target<R: Rng>(config: &PinConfig, rng: &mut R) -> Point {
    Point {
        x: padded(config.field_width, config.padding, rng),
        y: padded(config.field_height, config.padding, rng),
    }
}

fn padded<R: Rng>(extent: u16, padding: u16, rng: &mut R) -> u16 {
    let low = padding;
    let high = extent.saturating_sub(padding);
    if low >= high {
        extent / 2
    } else {
        rng.random_range(low..high)
    }
}
