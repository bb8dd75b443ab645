use rand::Rng;
use serde::{Deserialize, Serialize};

/// The six battle stats. The same struct doubles as a base-stat template
/// (from species data) and as a derived stat block on a creature instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

/// Largest individual value a single stat can carry.
pub const MAX_IV: u16 = 31;

impl Stats {
    /// Draw one individual value per stat, each uniform in [0, 31].
    /// IVs are fixed at creature creation and never change afterwards.
    pub fn random_ivs<R: Rng + ?Sized>(rng: &mut R) -> Stats {
        Stats {
            hp: rng.random_range(0..=MAX_IV),
            attack: rng.random_range(0..=MAX_IV),
            defense: rng.random_range(0..=MAX_IV),
            special_attack: rng.random_range(0..=MAX_IV),
            special_defense: rng.random_range(0..=MAX_IV),
            speed: rng.random_range(0..=MAX_IV),
        }
    }
}

/// Derive a creature's battle stats from its species base stats, its
/// individual values, and its level.
///
/// Non-HP stats: `(2*base + iv) * level / 100 + 5`
/// HP:           `(2*base + iv) * level / 100 + level + 10`
///
/// Pure and deterministic. Level-up re-invokes this with the stored IVs;
/// the caller is responsible for propagating the HP delta into the
/// creature's health record.
pub fn derive_stats(base: &Stats, ivs: &Stats, level: u8) -> Stats {
    let level = level as u32;
    let calc = |base: u16, iv: u16| -> u16 { ((2 * base as u32 + iv as u32) * level / 100 + 5) as u16 };

    Stats {
        hp: ((2 * base.hp as u32 + ivs.hp as u32) * level / 100 + level + 10) as u16,
        attack: calc(base.attack, ivs.attack),
        defense: calc(base.defense, ivs.defense),
        special_attack: calc(base.special_attack, ivs.special_attack),
        special_defense: calc(base.special_defense, ivs.special_defense),
        speed: calc(base.speed, ivs.speed),
    }
}

const MIN_MULTIPLIER: f32 = 0.25;
const MAX_MULTIPLIER: f32 = 4.0;

/// Volatile in-battle stat multipliers. Reset when the creature switches
/// out or the battle ends; never persisted across encounters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifiers {
    pub attack: f32,
    pub defense: f32,
    pub special_attack: f32,
    pub special_defense: f32,
    pub speed: f32,
}

impl Default for StatModifiers {
    fn default() -> Self {
        StatModifiers {
            attack: 1.0,
            defense: 1.0,
            special_attack: 1.0,
            special_defense: 1.0,
            speed: 1.0,
        }
    }
}

impl StatModifiers {
    /// Scale a multiplier, clamped to [0.25, 4.0].
    fn scale(current: f32, factor: f32) -> f32 {
        (current * factor).clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
    }

    pub fn scale_attack(&mut self, factor: f32) {
        self.attack = Self::scale(self.attack, factor);
    }

    pub fn scale_defense(&mut self, factor: f32) {
        self.defense = Self::scale(self.defense, factor);
    }

    pub fn scale_special_attack(&mut self, factor: f32) {
        self.special_attack = Self::scale(self.special_attack, factor);
    }

    pub fn scale_special_defense(&mut self, factor: f32) {
        self.special_defense = Self::scale(self.special_defense, factor);
    }

    pub fn scale_speed(&mut self, factor: f32) {
        self.speed = Self::scale(self.speed, factor);
    }

    /// Return every multiplier to neutral.
    pub fn reset(&mut self) {
        *self = StatModifiers::default();
    }
}
