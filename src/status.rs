use serde::{Deserialize, Serialize};

/// Persistent status conditions. A closed union: every site that adds
/// condition behavior matches exhaustively on these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    /// Wears off after `turns` ticks; the holder cannot act while asleep.
    Sleep { turns: u8 },
    /// `chance` is the infliction probability in percent, kept on the
    /// installed condition so cures and displays can report it.
    Poison { chance: u8 },
    /// Terminal. Cleared only by a revival effect.
    Fainted,
}

/// What a single per-turn tick of one condition produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTick {
    /// False means the condition expired on this tick and must be removed.
    pub still_active: bool,
    /// Damage to route through the holder's take-damage operation.
    pub damage: u16,
}

impl StatusCondition {
    /// Name used for mutual-exclusion checks and display.
    pub fn name(&self) -> &'static str {
        match self {
            StatusCondition::Sleep { .. } => "Sleep",
            StatusCondition::Poison { .. } => "Poison",
            StatusCondition::Fainted => "Fainted",
        }
    }

    /// Advance this condition by one turn.
    ///
    /// Sleep decrements its counter and expires once it reaches zero.
    /// Poison never expires on its own and deals max_hp/8 (min 1) per
    /// turn. Fainted is terminal and does nothing.
    pub fn tick(&mut self, max_hp: u16) -> StatusTick {
        match self {
            StatusCondition::Sleep { turns } => {
                *turns = turns.saturating_sub(1);
                StatusTick {
                    still_active: *turns > 0,
                    damage: 0,
                }
            }
            StatusCondition::Poison { .. } => StatusTick {
                still_active: true,
                damage: (max_hp / 8).max(1),
            },
            StatusCondition::Fainted => StatusTick {
                still_active: true,
                damage: 0,
            },
        }
    }
}

/// Per-creature condition state: one primary slot plus any number of
/// secondary conditions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusManager {
    pub primary: Option<StatusCondition>,
    pub secondary: Vec<StatusCondition>,
}

impl StatusManager {
    pub fn new() -> Self {
        StatusManager::default()
    }

    pub fn primary_name(&self) -> Option<&'static str> {
        self.primary.as_ref().map(|condition| condition.name())
    }

    pub fn has_primary(&self, name: &str) -> bool {
        self.primary_name() == Some(name)
    }

    pub fn set_primary(&mut self, condition: StatusCondition) {
        self.primary = Some(condition);
    }

    pub fn clear_primary(&mut self) {
        self.primary = None;
    }

    pub fn add_secondary(&mut self, condition: StatusCondition) {
        self.secondary.push(condition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_expires_exactly_on_nth_tick() {
        let mut sleep = StatusCondition::Sleep { turns: 3 };
        assert!(sleep.tick(100).still_active);
        assert!(sleep.tick(100).still_active);
        let last = sleep.tick(100);
        assert!(!last.still_active);
    }

    #[test]
    fn test_sleep_one_turn_expires_immediately() {
        let mut sleep = StatusCondition::Sleep { turns: 1 };
        assert!(!sleep.tick(100).still_active);
    }

    #[test]
    fn test_poison_tick_persists_and_damages() {
        let mut poison = StatusCondition::Poison { chance: 30 };
        let tick = poison.tick(80);
        assert!(tick.still_active);
        assert_eq!(tick.damage, 10);
        // Chance payload untouched by ticking.
        assert_eq!(poison, StatusCondition::Poison { chance: 30 });
    }

    #[test]
    fn test_poison_tick_deals_at_least_one() {
        let mut poison = StatusCondition::Poison { chance: 100 };
        assert_eq!(poison.tick(5).damage, 1);
    }

    #[test]
    fn test_fainted_is_inert_and_active() {
        let mut fainted = StatusCondition::Fainted;
        for _ in 0..10 {
            let tick = fainted.tick(100);
            assert!(tick.still_active);
            assert_eq!(tick.damage, 0);
        }
    }

    #[test]
    fn test_manager_name_lookups() {
        let mut manager = StatusManager::new();
        assert_eq!(manager.primary_name(), None);
        manager.set_primary(StatusCondition::Poison { chance: 30 });
        assert!(manager.has_primary("Poison"));
        assert!(!manager.has_primary("Sleep"));
        manager.clear_primary();
        assert_eq!(manager.primary_name(), None);
    }
}
