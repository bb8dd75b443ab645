use crate::errors::{EngineResult, PokedexError, PokedexResult, StorageResult};
use crate::species::Species;
use crate::storage::{self, FileIo};
use crate::types::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// The species catalog capability the rest of the system consumes.
pub trait PokedexRepository {
    fn species_by_id(&self, id: u16) -> Option<&Species>;
    fn search_by_name_prefix(&self, prefix: &str) -> Vec<&Species>;
    fn search_by_type(&self, pokemon_type: PokemonType) -> Vec<&Species>;
    fn add_species(&mut self, species: Species) -> PokedexResult<()>;
}

/// Indexed species catalog. Only the species list is persisted; the
/// indices are rebuilt after every load or insertion.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Pokedex {
    species: Vec<Species>,
    #[serde(skip)]
    by_id: HashMap<u16, usize>,
    /// Ordered by name so prefix searches are a range scan.
    #[serde(skip)]
    by_name: BTreeMap<String, usize>,
    #[serde(skip)]
    by_type: HashMap<PokemonType, Vec<usize>>,
}

impl Pokedex {
    /// Build a catalog from a species list, rejecting duplicate ids.
    pub fn from_species(species: Vec<Species>) -> PokedexResult<Pokedex> {
        let mut pokedex = Pokedex {
            species,
            ..Default::default()
        };
        pokedex.build_indices()?;
        Ok(pokedex)
    }

    /// Load every species RON file under `<data_path>/pokemon/`.
    pub fn load_from_dir(data_path: &Path) -> EngineResult<Pokedex> {
        let species = Species::load_all(data_path)?;
        Ok(Pokedex::from_species(species)?)
    }

    /// Persist the species list as JSON.
    pub fn save_json(&self, io: &mut dyn FileIo, path: &Path) -> StorageResult<()> {
        storage::save_to_json(io, self, path)
    }

    /// Load a catalog from JSON and rebuild its indices.
    pub fn load_json(io: &dyn FileIo, path: &Path) -> EngineResult<Pokedex> {
        let pokedex: Pokedex = storage::load_from_json(io, path)?;
        Ok(Pokedex::from_species(pokedex.species)?)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    fn build_indices(&mut self) -> PokedexResult<()> {
        self.by_id.clear();
        self.by_name.clear();
        self.by_type.clear();

        for (index, species) in self.species.iter().enumerate() {
            if self.by_id.insert(species.id, index).is_some() {
                return Err(PokedexError::DuplicateSpecies(species.id));
            }
            self.by_name.insert(species.name.clone(), index);
            for pokemon_type in &species.types {
                self.by_type.entry(*pokemon_type).or_default().push(index);
            }
        }
        Ok(())
    }
}

impl PokedexRepository for Pokedex {
    fn species_by_id(&self, id: u16) -> Option<&Species> {
        self.by_id.get(&id).map(|&index| &self.species[index])
    }

    fn search_by_name_prefix(&self, prefix: &str) -> Vec<&Species> {
        self.by_name
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(_, &index)| &self.species[index])
            .collect()
    }

    fn search_by_type(&self, pokemon_type: PokemonType) -> Vec<&Species> {
        self.by_type
            .get(&pokemon_type)
            .map(|indices| indices.iter().map(|&index| &self.species[index]).collect())
            .unwrap_or_default()
    }

    fn add_species(&mut self, species: Species) -> PokedexResult<()> {
        if self.by_id.contains_key(&species.id) {
            return Err(PokedexError::DuplicateSpecies(species.id));
        }
        self.species.push(species);
        self.build_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stats;
    use pretty_assertions::assert_eq;

    fn species(id: u16, name: &str, types: &[PokemonType]) -> Species {
        Species {
            id,
            name: name.to_string(),
            types: types.to_vec(),
            base_stats: Stats::default(),
            base_exp_yield: 50,
            learnset: Default::default(),
            evolution_stages: vec![],
        }
    }

    fn sample_pokedex() -> Pokedex {
        Pokedex::from_species(vec![
            species(25, "Pikachu", &[PokemonType::Electric]),
            species(23, "Ekans", &[PokemonType::Poison]),
            species(1, "Bulbasaur", &[PokemonType::Grass, PokemonType::Poison]),
            species(39, "Jigglypuff", &[PokemonType::Normal]),
        ])
        .expect("no duplicate ids")
    }

    #[test]
    fn test_lookup_by_id() {
        let pokedex = sample_pokedex();
        assert_eq!(pokedex.species_by_id(25).map(|s| s.name.as_str()), Some("Pikachu"));
        assert_eq!(pokedex.species_by_id(150), None);
    }

    #[test]
    fn test_name_prefix_search() {
        let pokedex = sample_pokedex();
        let hits: Vec<&str> = pokedex
            .search_by_name_prefix("Pi")
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Pikachu"]);

        assert!(pokedex.search_by_name_prefix("Zz").is_empty());
        // Empty prefix matches everything, in name order.
        assert_eq!(pokedex.search_by_name_prefix("").len(), 4);
    }

    #[test]
    fn test_type_search_spans_dual_types() {
        let pokedex = sample_pokedex();
        let poison: Vec<&str> = pokedex
            .search_by_type(PokemonType::Poison)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(poison, vec!["Ekans", "Bulbasaur"]);
        assert!(pokedex.search_by_type(PokemonType::Dragon).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut pokedex = sample_pokedex();
        let err = pokedex
            .add_species(species(25, "NotPikachu", &[PokemonType::Normal]))
            .unwrap_err();
        assert_eq!(err, PokedexError::DuplicateSpecies(25));
        assert_eq!(pokedex.len(), 4);
    }

    #[test]
    fn test_add_species_updates_indices() {
        let mut pokedex = sample_pokedex();
        pokedex
            .add_species(species(24, "Arbok", &[PokemonType::Poison]))
            .expect("new id");
        assert_eq!(pokedex.species_by_id(24).map(|s| s.name.as_str()), Some("Arbok"));
        assert_eq!(pokedex.search_by_type(PokemonType::Poison).len(), 3);
    }

    #[test]
    fn test_json_round_trip_rebuilds_indices() {
        use crate::storage::MockFileIo;

        let pokedex = sample_pokedex();
        let mut io = MockFileIo::new();
        let path = Path::new("pokedex.json");
        pokedex.save_json(&mut io, path).expect("save");

        let loaded = Pokedex::load_json(&io, path).expect("load");
        assert_eq!(loaded.len(), 4);
        // Indices work after load even though they are never serialized.
        assert_eq!(loaded.species_by_id(23).map(|s| s.name.as_str()), Some("Ekans"));
        assert_eq!(loaded.search_by_name_prefix("Jig").len(), 1);
    }
}
