use crate::errors::{EngineResult, ItemError, RosterError, RosterResult};
use crate::items::Item;
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};

pub const TEAM_SIZE: usize = 6;

/// A gym badge or comparable achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub earned: bool,
}

/// A trainer: an ordered team of up to six creatures (slot 0 is the
/// active one), a bag of items, and earned badges.
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub team: [Option<PokemonInst>; TEAM_SIZE],
    pub items: Vec<Box<dyn Item>>,
    pub badges: Vec<Badge>,
}

impl Trainer {
    pub fn new(id: String, name: String, team: Vec<PokemonInst>) -> Self {
        let mut slots = [const { None }; TEAM_SIZE];
        for (i, pokemon) in team.into_iter().take(TEAM_SIZE).enumerate() {
            slots[i] = Some(pokemon);
        }
        Trainer {
            id,
            name,
            team: slots,
            items: Vec::new(),
            badges: Vec::new(),
        }
    }

    /// The creature in slot 0, which is the one that battles.
    pub fn active_pokemon(&self) -> Option<&PokemonInst> {
        self.team[0].as_ref()
    }

    pub fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        self.team[0].as_mut()
    }

    /// Place a creature in the first free slot.
    pub fn add_pokemon(&mut self, pokemon: PokemonInst) -> RosterResult<()> {
        for slot in self.team.iter_mut() {
            if slot.is_none() {
                *slot = Some(pokemon);
                return Ok(());
            }
        }
        Err(RosterError::TeamFull)
    }

    /// Swap the active creature with the one in `index`. The outgoing
    /// active's volatile multipliers are reset, matching what a
    /// switch-out means in battle.
    pub fn swap_active_pokemon(&mut self, index: usize) -> RosterResult<()> {
        if index == 0 || index >= TEAM_SIZE {
            return Err(RosterError::InvalidSlot(index));
        }
        if self.team[index].is_none() {
            return Err(RosterError::EmptySlot(index));
        }
        if let Some(active) = self.team[0].as_mut() {
            active.modifiers.reset();
        }
        self.team.swap(0, index);
        Ok(())
    }

    /// Take a creature off the team.
    pub fn remove_pokemon(&mut self, index: usize) -> RosterResult<PokemonInst> {
        if index >= TEAM_SIZE {
            return Err(RosterError::InvalidSlot(index));
        }
        self.team[index].take().ok_or(RosterError::EmptySlot(index))
    }

    pub fn add_item(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    /// Use a bag item on a team member. Fainted targets are routed
    /// through the revival capability when the item carries one and
    /// refused otherwise. The item is consumed only when its effect
    /// succeeded.
    pub fn use_item(&mut self, item_index: usize, team_index: usize) -> EngineResult<()> {
        let item = self
            .items
            .get(item_index)
            .ok_or(ItemError::NoSuchItem(item_index))?;
        let target = self
            .team
            .get_mut(team_index)
            .ok_or(RosterError::InvalidSlot(team_index))?
            .as_mut()
            .ok_or(RosterError::EmptySlot(team_index))?;

        let result = if target.is_fainted() {
            match item.as_revival() {
                Some(revival) => revival.revive(target),
                None => Err(ItemError::TargetFainted),
            }
        } else {
            item.use_on(target)
        };
        let consumable = item.is_consumable();
        result?;

        if consumable {
            self.items.remove(item_index);
        }
        Ok(())
    }

    pub fn award_badge(&mut self, badge: Badge) {
        self.badges.push(badge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use crate::items::{Berry, Potion, Revive};
    use crate::moves::Move;
    use crate::species::test_support::sample_species;
    use crate::stats::Stats;
    use pretty_assertions::assert_eq;

    fn test_pokemon() -> PokemonInst {
        PokemonInst::new(&sample_species(), 20, Stats::default(), Some(vec![Move::Tackle]))
    }

    fn test_trainer() -> Trainer {
        Trainer::new("t1".to_string(), "Koga".to_string(), vec![test_pokemon()])
    }

    #[test]
    fn test_add_until_full() {
        let mut trainer = test_trainer();
        for _ in 0..5 {
            trainer.add_pokemon(test_pokemon()).expect("room left");
        }
        assert_eq!(
            trainer.add_pokemon(test_pokemon()),
            Err(RosterError::TeamFull)
        );
    }

    #[test]
    fn test_swap_active_resets_outgoing_modifiers() {
        let mut trainer = test_trainer();
        trainer.add_pokemon(test_pokemon()).unwrap();

        trainer
            .active_pokemon_mut()
            .unwrap()
            .modifiers
            .scale_attack(2.0);
        trainer.swap_active_pokemon(1).expect("slot 1 occupied");

        // The creature now in slot 1 was the boosted active; its
        // multipliers went back to neutral on the way out.
        assert_eq!(trainer.team[1].as_ref().unwrap().modifiers.attack, 1.0);
    }

    #[test]
    fn test_swap_rejects_bad_slots() {
        let mut trainer = test_trainer();
        assert_eq!(trainer.swap_active_pokemon(0), Err(RosterError::InvalidSlot(0)));
        assert_eq!(trainer.swap_active_pokemon(9), Err(RosterError::InvalidSlot(9)));
        assert_eq!(trainer.swap_active_pokemon(3), Err(RosterError::EmptySlot(3)));
    }

    #[test]
    fn test_remove_pokemon_empties_the_slot() {
        let mut trainer = test_trainer();
        let removed = trainer.remove_pokemon(0).expect("slot 0 occupied");
        assert_eq!(removed.name, "Ekans");
        assert_eq!(trainer.remove_pokemon(0), Err(RosterError::EmptySlot(0)));
    }

    #[test]
    fn test_use_item_consumes_on_success_only() {
        let mut trainer = test_trainer();
        trainer.add_item(Box::new(Potion::new()));

        // Full health: failure, potion stays in the bag.
        let err = trainer.use_item(0, 0).unwrap_err();
        assert!(matches!(err, EngineError::Item(ItemError::AlreadyFullHealth)));
        assert_eq!(trainer.items.len(), 1);

        // Damaged: success, potion gone.
        trainer.active_pokemon_mut().unwrap().health.decrease(15);
        trainer.use_item(0, 0).expect("heal should work");
        assert!(trainer.items.is_empty());
    }

    #[test]
    fn test_use_item_capability_checks_fainted_targets() {
        let mut trainer = test_trainer();
        trainer.add_item(Box::new(Berry::oran()));
        trainer.add_item(Box::new(Revive));

        let max = trainer.active_pokemon().unwrap().health.max;
        trainer.active_pokemon_mut().unwrap().take_damage(max);

        // Ordinary healing refuses the fainted target and is kept.
        let err = trainer.use_item(0, 0).unwrap_err();
        assert!(matches!(err, EngineError::Item(ItemError::TargetFainted)));
        assert_eq!(trainer.items.len(), 2);

        // The revival item goes through its capability and is consumed.
        trainer.use_item(1, 0).expect("revive should work");
        assert_eq!(trainer.items.len(), 1);
        let active = trainer.active_pokemon().unwrap();
        assert_eq!(active.health.current, max / 2);
        assert_eq!(active.status.primary, None);
    }

    #[test]
    fn test_use_item_rejects_bad_indices() {
        let mut trainer = test_trainer();
        let err = trainer.use_item(0, 0).unwrap_err();
        assert!(matches!(err, EngineError::Item(ItemError::NoSuchItem(0))));

        trainer.add_item(Box::new(Potion::new()));
        let err = trainer.use_item(0, 4).unwrap_err();
        assert!(matches!(err, EngineError::Roster(RosterError::EmptySlot(4))));
    }
}
