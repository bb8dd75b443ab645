use std::fmt;

/// Top-level error type for the arena engine. Every subsystem error
/// converts into this for callers that want one catch-all.
#[derive(Debug)]
pub enum EngineError {
    Battle(BattleError),
    Item(ItemError),
    Roster(RosterError),
    Evolution(EvolutionError),
    Pokedex(PokedexError),
    Storage(StorageError),
}

/// Battle construction and resolution errors. All recoverable; battle
/// logic has no fatal conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// An actor entered battle with no active creature.
    NoActivePokemon(String),
    /// An actor's active creature knows no moves. Guarded at
    /// construction so it can never surface mid-round.
    NoMovesKnown(String),
}

/// Item usage errors. The item is never consumed when one of these is
/// returned, and the target is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Ordinary healing refused: the target is fainted and the item
    /// carries no revival capability.
    TargetFainted,
    /// Revival refused: the target is not fainted.
    TargetNotFainted,
    /// Healing refused: the target is already at full health.
    AlreadyFullHealth,
    /// No item in the requested bag slot.
    NoSuchItem(usize),
    /// The creature holds no consumable.
    NoItemHeld,
}

/// Trainer roster manipulation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Slot index outside the six-creature team.
    InvalidSlot(usize),
    /// The requested slot holds no creature.
    EmptySlot(usize),
    /// All six slots are occupied.
    TeamFull,
}

/// Evolution trigger errors. No state is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    /// No evolution stage's conditions are satisfied.
    ConditionsNotMet,
    /// A stage points at a species id the catalog does not know.
    UnknownSpecies(u16),
}

/// Species catalog errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// A species with this id is already registered.
    DuplicateSpecies(u16),
    /// No species with this id is registered.
    UnknownSpecies(u16),
}

/// Persistence errors wrapping the underlying io/serialization causes.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Ron(ron::error::SpannedError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Battle(err) => write!(f, "battle error: {}", err),
            EngineError::Item(err) => write!(f, "item error: {}", err),
            EngineError::Roster(err) => write!(f, "roster error: {}", err),
            EngineError::Evolution(err) => write!(f, "evolution error: {}", err),
            EngineError::Pokedex(err) => write!(f, "pokedex error: {}", err),
            EngineError::Storage(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::NoActivePokemon(battler) => {
                write!(f, "{} has no active Pokemon", battler)
            }
            BattleError::NoMovesKnown(battler) => {
                write!(f, "{}'s active Pokemon knows no moves", battler)
            }
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::TargetFainted => write!(f, "target is fainted"),
            ItemError::TargetNotFainted => write!(f, "target is not fainted"),
            ItemError::AlreadyFullHealth => write!(f, "target is already at full health"),
            ItemError::NoSuchItem(index) => write!(f, "no item in bag slot {}", index),
            ItemError::NoItemHeld => write!(f, "no held item"),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::InvalidSlot(index) => write!(f, "invalid team slot: {}", index),
            RosterError::EmptySlot(index) => write!(f, "team slot {} is empty", index),
            RosterError::TeamFull => write!(f, "team is full"),
        }
    }
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionError::ConditionsNotMet => write!(f, "no evolution conditions met"),
            EvolutionError::UnknownSpecies(id) => {
                write!(f, "species with id {} does not exist", id)
            }
        }
    }
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::DuplicateSpecies(id) => {
                write!(f, "species with id {} already exists", id)
            }
            PokedexError::UnknownSpecies(id) => write!(f, "no species with id {}", id),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "io error: {}", err),
            StorageError::Json(err) => write!(f, "json error: {}", err),
            StorageError::Ron(err) => write!(f, "ron error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for BattleError {}
impl std::error::Error for ItemError {}
impl std::error::Error for RosterError {}
impl std::error::Error for EvolutionError {}
impl std::error::Error for PokedexError {}
impl std::error::Error for StorageError {}

impl From<BattleError> for EngineError {
    fn from(err: BattleError) -> Self {
        EngineError::Battle(err)
    }
}

impl From<ItemError> for EngineError {
    fn from(err: ItemError) -> Self {
        EngineError::Item(err)
    }
}

impl From<RosterError> for EngineError {
    fn from(err: RosterError) -> Self {
        EngineError::Roster(err)
    }
}

impl From<EvolutionError> for EngineError {
    fn from(err: EvolutionError) -> Self {
        EngineError::Evolution(err)
    }
}

impl From<PokedexError> for EngineError {
    fn from(err: PokedexError) -> Self {
        EngineError::Pokedex(err)
    }
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::Storage(err)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Json(err)
    }
}

impl From<ron::error::SpannedError> for StorageError {
    fn from(err: ron::error::SpannedError) -> Self {
        StorageError::Ron(err)
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
pub type BattleResult<T> = Result<T, BattleError>;
pub type ItemResult<T> = Result<T, ItemError>;
pub type RosterResult<T> = Result<T, RosterError>;
pub type EvolutionResult<T> = Result<T, EvolutionError>;
pub type PokedexResult<T> = Result<T, PokedexError>;
pub type StorageResult<T> = Result<T, StorageError>;
