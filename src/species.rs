use crate::errors::StorageResult;
use crate::evolution::EvolutionStage;
use crate::moves::Move;
use crate::stats::Stats;
use crate::types::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Immutable species template. Creature instances keep the id and
/// resolve the template through the catalog when they need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: Stats,
    pub base_exp_yield: u16,
    /// Level -> moves learned on reaching that level.
    #[serde(default)]
    pub learnset: BTreeMap<u8, Vec<Move>>,
    #[serde(default)]
    pub evolution_stages: Vec<EvolutionStage>,
}

impl Species {
    /// Moves a freshly created creature of this species knows at
    /// `level`: everything learnable up to that level, capped to the
    /// four most recently learned.
    pub fn moves_known_at(&self, level: u8) -> Vec<Move> {
        let mut learned: Vec<Move> = self
            .learnset
            .range(..=level)
            .flat_map(|(_, moves)| moves.iter().copied())
            .collect();

        if learned.len() > 4 {
            learned.split_off(learned.len() - 4)
        } else {
            learned
        }
    }

    /// Load one species from a RON file.
    pub fn load_from_ron(path: &Path) -> StorageResult<Species> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Load every `*.ron` species file under `<data_path>/pokemon/`,
    /// sorted by id.
    pub fn load_all(data_path: &Path) -> StorageResult<Vec<Species>> {
        let pokemon_dir = data_path.join("pokemon");
        let mut species = Vec::new();

        for entry in fs::read_dir(&pokemon_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                species.push(Species::load_from_ron(&path)?);
            }
        }

        species.sort_by_key(|s| s.id);
        Ok(species)
    }
}
