use serde::{Deserialize, Serialize};
use std::fmt;

/// Every move known to the engine. Templates live in `move_data`; this
/// enum is the key used in learnsets, move slots, and battle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    // Normal
    Tackle,
    Scratch,
    QuickAttack,
    Growl,
    TailWhip,
    SwordsDance,
    Harden,
    Sing,
    // Poison
    PoisonSting,
    PoisonPowder,
    // Fire
    Ember,
    // Water
    WaterGun,
    // Electric
    ThunderShock,
    // Grass
    VineWhip,
    // Psychic
    Agility,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::move_data::get_move_data(*self).name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_registry_name() {
        assert_eq!(Move::QuickAttack.to_string(), "Quick Attack");
        assert_eq!(Move::Tackle.to_string(), "Tackle");
        assert_eq!(Move::PoisonSting.to_string(), "Poison Sting");
    }
}
