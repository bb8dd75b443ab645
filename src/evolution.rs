use crate::errors::{EvolutionError, EvolutionResult};
use crate::pokedex::PokedexRepository;
use crate::pokemon::PokemonInst;
use crate::stats::derive_stats;
use serde::{Deserialize, Serialize};

/// Evolution stones usable as triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionStone {
    FireStone,
    WaterStone,
    ThunderStone,
    LeafStone,
    MoonStone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Day,
    Night,
}

/// External circumstances an evolution check runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionContext {
    pub time: TimeOfDay,
    /// Stone being offered to the creature right now, if any.
    pub offered_stone: Option<EvolutionStone>,
}

/// How one evolution stage triggers. A closed union so new trigger
/// kinds are added here and matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    Level { required_level: u8 },
    Friendship {
        required_friendship: u8,
        required_time: TimeOfDay,
    },
    Stone { stone: EvolutionStone },
}

impl EvolutionMethod {
    pub fn can_evolve(&self, pokemon: &PokemonInst, ctx: &EvolutionContext) -> bool {
        match self {
            EvolutionMethod::Level { required_level } => pokemon.level >= *required_level,
            EvolutionMethod::Friendship {
                required_friendship,
                required_time,
            } => pokemon.friendship >= *required_friendship && ctx.time == *required_time,
            EvolutionMethod::Stone { stone } => ctx.offered_stone == Some(*stone),
        }
    }
}

/// One outgoing edge of a species' evolution graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub evolves_into: u16,
    pub method: EvolutionMethod,
}

impl PokemonInst {
    /// Evolve into the first stage whose conditions hold, resolving the
    /// target species through the catalog. Stats are re-derived for the
    /// new species at the current level and current HP rises by the max
    /// HP delta. Unmet conditions and unknown target ids are recoverable
    /// errors; the creature is untouched on failure.
    pub fn evolve(
        &mut self,
        pokedex: &dyn PokedexRepository,
        ctx: &EvolutionContext,
    ) -> EvolutionResult<()> {
        let current = pokedex
            .species_by_id(self.species_id)
            .ok_or(EvolutionError::UnknownSpecies(self.species_id))?;

        for stage in &current.evolution_stages {
            if !stage.method.can_evolve(self, ctx) {
                continue;
            }

            let target = pokedex
                .species_by_id(stage.evolves_into)
                .ok_or(EvolutionError::UnknownSpecies(stage.evolves_into))?;

            let old_max = self.stats.hp;
            self.species_id = target.id;
            self.name = target.name.clone();
            self.stats = derive_stats(&target.base_stats, &self.ivs, self.level);
            self.health.raise_max(self.stats.hp);
            self.health.increase(self.stats.hp.saturating_sub(old_max));
            return Ok(());
        }

        Err(EvolutionError::ConditionsNotMet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::Pokedex;
    use crate::species::test_support::sample_species;
    use crate::species::Species;
    use crate::stats::Stats;
    use crate::types::PokemonType;

    fn arbok() -> Species {
        Species {
            id: 24,
            name: "Arbok".to_string(),
            types: vec![PokemonType::Poison],
            base_stats: Stats {
                hp: 60,
                attack: 95,
                defense: 69,
                special_attack: 65,
                special_defense: 79,
                speed: 80,
            },
            base_exp_yield: 157,
            learnset: Default::default(),
            evolution_stages: vec![],
        }
    }

    fn day_context() -> EvolutionContext {
        EvolutionContext {
            time: TimeOfDay::Day,
            offered_stone: None,
        }
    }

    #[test]
    fn test_level_evolution_rebinds_species_and_stats() {
        let pokedex = Pokedex::from_species(vec![sample_species(), arbok()]).unwrap();
        let mut pokemon = PokemonInst::new(&sample_species(), 22, Stats::default(), None);
        let old_max = pokemon.health.max;

        pokemon.evolve(&pokedex, &day_context()).expect("should evolve");

        assert_eq!(pokemon.species_id, 24);
        assert_eq!(pokemon.name, "Arbok");
        assert!(pokemon.health.max > old_max);
        // Healed by exactly the max HP growth.
        assert_eq!(
            pokemon.health.current,
            old_max + (pokemon.health.max - old_max)
        );
    }

    #[test]
    fn test_unmet_conditions_leave_creature_untouched() {
        let pokedex = Pokedex::from_species(vec![sample_species(), arbok()]).unwrap();
        let mut pokemon = PokemonInst::new(&sample_species(), 10, Stats::default(), None);
        let before = pokemon.clone();

        let err = pokemon.evolve(&pokedex, &day_context()).unwrap_err();
        assert_eq!(err, EvolutionError::ConditionsNotMet);
        assert_eq!(pokemon, before);
    }

    #[test]
    fn test_unknown_target_species_is_an_error() {
        // Catalog without Arbok: the stage points at a missing id.
        let pokedex = Pokedex::from_species(vec![sample_species()]).unwrap();
        let mut pokemon = PokemonInst::new(&sample_species(), 30, Stats::default(), None);

        let err = pokemon.evolve(&pokedex, &day_context()).unwrap_err();
        assert_eq!(err, EvolutionError::UnknownSpecies(24));
    }

    #[test]
    fn test_friendship_evolution_needs_both_bond_and_time() {
        let method = EvolutionMethod::Friendship {
            required_friendship: 150,
            required_time: TimeOfDay::Night,
        };
        let mut pokemon = PokemonInst::new(&sample_species(), 10, Stats::default(), None);

        let night = EvolutionContext {
            time: TimeOfDay::Night,
            offered_stone: None,
        };
        assert!(!method.can_evolve(&pokemon, &night), "bond too weak");

        pokemon.friendship = 200;
        assert!(method.can_evolve(&pokemon, &night));
        assert!(
            !method.can_evolve(&pokemon, &day_context()),
            "wrong time of day"
        );
    }

    #[test]
    fn test_stone_evolution_requires_matching_stone() {
        let mut species = sample_species();
        species.evolution_stages = vec![EvolutionStage {
            evolves_into: 24,
            method: EvolutionMethod::Stone {
                stone: EvolutionStone::MoonStone,
            },
        }];
        let pokedex = Pokedex::from_species(vec![species.clone(), arbok()]).unwrap();
        let mut pokemon = PokemonInst::new(&species, 5, Stats::default(), None);

        let ctx = EvolutionContext {
            time: TimeOfDay::Day,
            offered_stone: Some(EvolutionStone::ThunderStone),
        };
        assert_eq!(
            pokemon.evolve(&pokedex, &ctx),
            Err(EvolutionError::ConditionsNotMet)
        );

        let ctx = EvolutionContext {
            time: TimeOfDay::Day,
            offered_stone: Some(EvolutionStone::MoonStone),
        };
        assert!(pokemon.evolve(&pokedex, &ctx).is_ok());
        assert_eq!(pokemon.name, "Arbok");
    }
}
