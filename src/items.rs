use crate::errors::{ItemError, ItemResult};
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};

/// A usable item. `use_on` either changes the target and succeeds, or
/// fails and changes nothing — callers rely on that to only consume
/// items on success.
pub trait Item {
    fn name(&self) -> &str;

    /// Apply the item's ordinary effect to a creature.
    fn use_on(&self, target: &mut PokemonInst) -> ItemResult<()>;

    fn is_consumable(&self) -> bool {
        true
    }

    /// Capability probe: items that can revive fainted creatures return
    /// themselves here. Everything else refuses fainted targets.
    fn as_revival(&self) -> Option<&dyn RevivalItem> {
        None
    }
}

/// The revival capability, distinct from ordinary healing: valid only
/// on fainted creatures.
pub trait RevivalItem: Item {
    fn revive(&self, target: &mut PokemonInst) -> ItemResult<()>;
}

/// Ordinary healing shared by berries and potions: refuses fainted and
/// already-full targets, otherwise restores up to `amount`.
fn heal_target(target: &mut PokemonInst, amount: u16) -> ItemResult<()> {
    if target.is_fainted() {
        return Err(ItemError::TargetFainted);
    }
    if target.health.is_full() {
        return Err(ItemError::AlreadyFullHealth);
    }
    target.health.increase(amount);
    Ok(())
}

/// A holdable, consumable healing berry. This is the one item kind a
/// creature can carry into battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub name: String,
    pub heal_amount: u16,
}

impl Berry {
    pub fn oran() -> Berry {
        Berry {
            name: "Oran Berry".to_string(),
            heal_amount: 10,
        }
    }

    pub fn sitrus() -> Berry {
        Berry {
            name: "Sitrus Berry".to_string(),
            heal_amount: 30,
        }
    }
}

impl Item for Berry {
    fn name(&self) -> &str {
        &self.name
    }

    fn use_on(&self, target: &mut PokemonInst) -> ItemResult<()> {
        heal_target(target, self.heal_amount)
    }
}

/// Bag healing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub heal_amount: u16,
}

impl Potion {
    pub fn new() -> Potion {
        Potion { heal_amount: 20 }
    }
}

impl Default for Potion {
    fn default() -> Self {
        Potion::new()
    }
}

impl Item for Potion {
    fn name(&self) -> &str {
        "Potion"
    }

    fn use_on(&self, target: &mut PokemonInst) -> ItemResult<()> {
        heal_target(target, self.heal_amount)
    }
}

/// The revival item: clears the Fainted status and restores current HP
/// to exactly half of max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revive;

impl Item for Revive {
    fn name(&self) -> &str {
        "Revive"
    }

    fn use_on(&self, target: &mut PokemonInst) -> ItemResult<()> {
        self.revive(target)
    }

    fn as_revival(&self) -> Option<&dyn RevivalItem> {
        Some(self)
    }
}

impl RevivalItem for Revive {
    fn revive(&self, target: &mut PokemonInst) -> ItemResult<()> {
        if !target.is_fainted() {
            return Err(ItemError::TargetNotFainted);
        }
        target.status.clear_primary();
        target.health.increase(target.health.max / 2);
        Ok(())
    }
}
