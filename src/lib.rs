//! Pokemon Arena Battle Engine
//!
//! A turn-based combat engine for two actors, each fielding one active
//! creature with typed attacks, clamped health, and persistent status
//! conditions, plus the collaborator subsystems around it: a species
//! catalog, JSON persistence, items, trainers, and evolution.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod evolution;
pub mod health;
pub mod items;
pub mod move_data;
pub mod moves;
pub mod pokedex;
pub mod pokemon;
pub mod rng;
pub mod species;
pub mod stats;
pub mod status;
pub mod storage;
pub mod trainer;
pub mod types;

// --- PUBLIC API RE-EXPORTS ---

// Core battle session and the actor abstraction.
pub use battle::{
    default_damage_formula, Battle, BattleAction, BattleEvent, BattleOutcome, Battler,
    DamageFormula, EventBus, WildPokemon,
};

// Core runtime types for creatures.
pub use health::Health;
pub use pokemon::{MoveInstance, PokemonInst};
pub use stats::{derive_stats, StatModifiers, Stats};
pub use status::{StatusCondition, StatusManager};

// Move and species data access.
pub use move_data::{get_move_data, get_move_max_pp, MoveCategory, MoveData};
pub use moves::Move;
pub use pokedex::{Pokedex, PokedexRepository};
pub use species::Species;
pub use types::PokemonType;

// Randomness seam.
pub use rng::TurnRng;

// Collaborator subsystems.
pub use evolution::{EvolutionContext, EvolutionMethod, EvolutionStage, EvolutionStone, TimeOfDay};
pub use items::{Berry, Item, Potion, Revive, RevivalItem};
pub use storage::{load_from_json, save_to_json, FileIo, MockFileIo, OsFileIo};
pub use trainer::{Badge, Trainer};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, EngineError, EngineResult, EvolutionError, ItemError, PokedexError,
    RosterError, StorageError,
};
