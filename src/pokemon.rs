use crate::health::Health;
use crate::items::Berry;
use crate::move_data::get_move_max_pp;
use crate::moves::Move;
use crate::rng::TurnRng;
use crate::species::Species;
use crate::stats::{derive_stats, StatModifiers, Stats};
use crate::status::{StatusCondition, StatusManager};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A move slot: which move, and how many uses remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub move_: Move,
    pub pp: u8,
}

impl MoveInstance {
    /// Fresh slot at max PP.
    pub fn new(move_: Move) -> Self {
        MoveInstance {
            move_,
            pp: get_move_max_pp(move_),
        }
    }

    pub fn max_pp(&self) -> u8 {
        get_move_max_pp(self.move_)
    }

    /// Spend one use. Returns false when the slot is empty.
    pub fn use_move(&mut self) -> bool {
        if self.pp > 0 {
            self.pp -= 1;
            true
        } else {
            false
        }
    }

    pub fn restore_pp(&mut self, amount: u8) {
        self.pp = (self.pp + amount).min(self.max_pp());
    }
}

/// What one per-turn status tick did to a creature. Consumed by the
/// battle session to emit events; the creature itself has no event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTickOutcome {
    /// The primary condition expired and the slot is now empty.
    PrimaryExpired { status: &'static str },
    /// A condition dealt damage through the take-damage path.
    StatusDamage {
        status: &'static str,
        damage: u16,
        remaining: u16,
    },
    /// Status damage dropped the creature to zero HP.
    FaintedFromStatus { status: &'static str },
    /// A secondary condition expired and was removed.
    SecondaryExpired { status: &'static str },
}

/// A live creature: an instance of a species at some level, with derived
/// stats, health, status state, move slots, and volatile battle
/// multipliers. Species templates stay immutable; everything mutable
/// about a creature lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    /// Species display name (no nicknames yet).
    pub name: String,
    /// Key into the species catalog.
    pub species_id: u16,
    pub level: u8,
    pub experience: u32,
    pub friendship: u8,
    /// Individual values, fixed at creation. Each field is in [0, 31].
    pub ivs: Stats,
    pub stats: Stats,
    pub health: Health,
    pub status: StatusManager,
    pub moves: [Option<MoveInstance>; 4],
    pub modifiers: StatModifiers,
    pub held_item: Option<Berry>,
}

impl PokemonInst {
    /// Build a creature from species data with explicit IVs. When
    /// `moves` is None the four most recently learnable moves at this
    /// level are derived from the species learnset.
    pub fn new(species: &Species, level: u8, ivs: Stats, moves: Option<Vec<Move>>) -> Self {
        let stats = derive_stats(&species.base_stats, &ivs, level);
        let moves = moves.unwrap_or_else(|| species.moves_known_at(level));

        let mut move_slots = [const { None }; 4];
        for (i, move_) in moves.into_iter().take(4).enumerate() {
            move_slots[i] = Some(MoveInstance::new(move_));
        }

        PokemonInst {
            name: species.name.clone(),
            species_id: species.id,
            level,
            experience: 0,
            friendship: 70,
            ivs,
            stats,
            health: Health::new_full(stats.hp),
            status: StatusManager::new(),
            moves: move_slots,
            modifiers: StatModifiers::default(),
            held_item: None,
        }
    }

    /// Build a creature with freshly rolled IVs from the given source.
    pub fn new_random<R: Rng + ?Sized>(species: &Species, level: u8, rng: &mut R) -> Self {
        Self::new(species, level, Stats::random_ivs(rng), None)
    }

    pub fn is_fainted(&self) -> bool {
        self.health.is_fainted()
    }

    pub fn is_asleep(&self) -> bool {
        self.status.has_primary("Sleep")
    }

    /// First occupied move slot, if any.
    pub fn first_move(&self) -> Option<Move> {
        self.moves
            .iter()
            .flatten()
            .map(|instance| instance.move_)
            .next()
    }

    pub fn knows_moves(&self) -> bool {
        self.first_move().is_some()
    }

    pub fn move_instance_mut(&mut self, move_: Move) -> Option<&mut MoveInstance> {
        self.moves
            .iter_mut()
            .flatten()
            .find(|instance| instance.move_ == move_)
    }

    /// Creature-level damage operation: clamp health down and, when the
    /// creature drops to zero, install Fainted as primary, overwriting
    /// whatever condition was there. Returns true when the hit fainted
    /// the creature.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.health.decrease(amount);
        if self.health.is_fainted() {
            self.status.set_primary(StatusCondition::Fainted);
            true
        } else {
            false
        }
    }

    /// Attempt to install a status condition.
    ///
    /// Fainted is terminal and blocks everything. A condition with the
    /// same name as the current primary is a no-op: a second poison
    /// attempt neither refreshes nor restacks the stored chance. Poison
    /// entry additionally rolls against its chance; other conditions
    /// install directly. Returns true when the primary slot changed.
    pub fn try_inflict_status(&mut self, status: StatusCondition, rng: &mut TurnRng) -> bool {
        if self.status.has_primary("Fainted") {
            return false;
        }
        if self.status.primary_name() == Some(status.name()) {
            return false;
        }

        let installs = match status {
            StatusCondition::Poison { chance } => rng.next_outcome("poison infliction chance") < chance,
            _ => true,
        };

        if installs {
            self.status.set_primary(status);
        }
        installs
    }

    /// Run one round of the status machine: primary first, then
    /// secondary conditions in reverse index order so removal during
    /// iteration is safe. Condition damage goes through `take_damage`,
    /// so a poison tick that empties the health bar installs Fainted
    /// exactly like a hit would.
    pub fn tick_statuses(&mut self) -> Vec<StatusTickOutcome> {
        let mut outcomes = Vec::new();

        if let Some(mut condition) = self.status.primary.take() {
            let tick = condition.tick(self.health.max);
            if tick.damage > 0 {
                let fainted = self.take_damage(tick.damage);
                outcomes.push(StatusTickOutcome::StatusDamage {
                    status: condition.name(),
                    damage: tick.damage,
                    remaining: self.health.current,
                });
                if fainted {
                    outcomes.push(StatusTickOutcome::FaintedFromStatus {
                        status: condition.name(),
                    });
                }
            }
            if !tick.still_active {
                outcomes.push(StatusTickOutcome::PrimaryExpired {
                    status: condition.name(),
                });
            } else if self.status.primary.is_none() {
                // take_damage may have installed Fainted; keep that.
                self.status.primary = Some(condition);
            }
        }

        let mut secondary = std::mem::take(&mut self.status.secondary);
        for index in (0..secondary.len()).rev() {
            let tick = secondary[index].tick(self.health.max);
            if tick.damage > 0 {
                let fainted = self.take_damage(tick.damage);
                outcomes.push(StatusTickOutcome::StatusDamage {
                    status: secondary[index].name(),
                    damage: tick.damage,
                    remaining: self.health.current,
                });
                if fainted {
                    outcomes.push(StatusTickOutcome::FaintedFromStatus {
                        status: secondary[index].name(),
                    });
                }
            }
            if !tick.still_active {
                let expired = secondary.remove(index);
                outcomes.push(StatusTickOutcome::SecondaryExpired {
                    status: expired.name(),
                });
            }
        }
        self.status.secondary = secondary;

        outcomes
    }

    /// Gain a level and re-derive stats from the stored IVs. Current HP
    /// rises by exactly the amount max HP grew (clamped at the new max):
    /// leveling heals by the growth, never to full.
    pub fn level_up(&mut self, species: &Species) {
        debug_assert_eq!(species.id, self.species_id);
        self.level = self.level.saturating_add(1);
        let old_max = self.stats.hp;
        self.stats = derive_stats(&species.base_stats, &self.ivs, self.level);
        self.health.raise_max(self.stats.hp);
        self.health.increase(self.stats.hp.saturating_sub(old_max));
    }

    // --- Effective in-battle stats (derived stat x volatile multiplier) ---

    pub fn effective_attack(&self) -> u16 {
        scale_stat(self.stats.attack, self.modifiers.attack)
    }

    pub fn effective_defense(&self) -> u16 {
        scale_stat(self.stats.defense, self.modifiers.defense)
    }

    pub fn effective_special_attack(&self) -> u16 {
        scale_stat(self.stats.special_attack, self.modifiers.special_attack)
    }

    pub fn effective_special_defense(&self) -> u16 {
        scale_stat(self.stats.special_defense, self.modifiers.special_defense)
    }

    pub fn effective_speed(&self) -> u16 {
        scale_stat(self.stats.speed, self.modifiers.speed)
    }

    /// Use the held consumable on self, if any. The item is consumed
    /// only when its effect succeeds; on failure it stays held.
    pub fn use_held_item(&mut self) -> Result<(), crate::errors::ItemError> {
        use crate::items::Item;

        let berry = match self.held_item.take() {
            Some(berry) => berry,
            None => return Err(crate::errors::ItemError::NoItemHeld),
        };
        match berry.use_on(self) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.held_item = Some(berry);
                Err(err)
            }
        }
    }

    /// Test support: pin current HP to an exact value.
    pub fn set_hp(&mut self, hp: u16) {
        self.health.current = hp.min(self.health.max);
    }
}

fn scale_stat(stat: u16, multiplier: f32) -> u16 {
    (stat as f32 * multiplier).round() as u16
}
