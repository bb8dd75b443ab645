use crate::moves::Move;
use crate::pokemon::PokemonInst;
use crate::status::StatusCondition;
use crate::types::PokemonType;
use serde::{Deserialize, Serialize};

/// Damage class of a move. Non-damaging moves carry power 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
}

/// A pure side effect applied on hit, in template order: first argument
/// is the user, second the target.
pub type MoveEffect = fn(&mut PokemonInst, &mut PokemonInst);

/// Immutable move template. One static instance per `Move` variant,
/// resolved through `get_move_data`.
#[derive(Debug, Clone, Copy)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub power: u16,
    pub max_pp: u8,
    /// Hit chance in percent; a roll in [0, 100) below this value hits.
    pub accuracy: u8,
    /// Higher tiers resolve before lower ones regardless of speed.
    pub priority: i8,
    pub effects: &'static [MoveEffect],
    pub status_effect: Option<StatusCondition>,
}

impl MoveData {
    /// Damage-class moves are the ones that invoke the damage formula.
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

// --- Side-effect functions ---

fn raise_user_attack(user: &mut PokemonInst, _target: &mut PokemonInst) {
    user.modifiers.scale_attack(2.0);
}

fn raise_user_defense(user: &mut PokemonInst, _target: &mut PokemonInst) {
    user.modifiers.scale_defense(2.0);
}

fn raise_user_speed(user: &mut PokemonInst, _target: &mut PokemonInst) {
    user.modifiers.scale_speed(2.0);
}

fn lower_target_attack(_user: &mut PokemonInst, target: &mut PokemonInst) {
    target.modifiers.scale_attack(0.5);
}

fn lower_target_defense(_user: &mut PokemonInst, target: &mut PokemonInst) {
    target.modifiers.scale_defense(0.5);
}

// --- Templates ---

const NO_EFFECTS: &[MoveEffect] = &[];
const GROWL_EFFECTS: &[MoveEffect] = &[lower_target_attack];
const TAIL_WHIP_EFFECTS: &[MoveEffect] = &[lower_target_defense];
const SWORDS_DANCE_EFFECTS: &[MoveEffect] = &[raise_user_attack];
const HARDEN_EFFECTS: &[MoveEffect] = &[raise_user_defense];
const AGILITY_EFFECTS: &[MoveEffect] = &[raise_user_speed];

const TACKLE: MoveData = MoveData {
    name: "Tackle",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 50,
    max_pp: 35,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const SCRATCH: MoveData = MoveData {
    name: "Scratch",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 40,
    max_pp: 35,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const QUICK_ATTACK: MoveData = MoveData {
    name: "Quick Attack",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 40,
    max_pp: 30,
    accuracy: 100,
    priority: 1,
    effects: NO_EFFECTS,
    status_effect: None,
};

const GROWL: MoveData = MoveData {
    name: "Growl",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 0,
    max_pp: 40,
    accuracy: 100,
    priority: 0,
    effects: GROWL_EFFECTS,
    status_effect: None,
};

const TAIL_WHIP: MoveData = MoveData {
    name: "Tail Whip",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 0,
    max_pp: 30,
    accuracy: 100,
    priority: 0,
    effects: TAIL_WHIP_EFFECTS,
    status_effect: None,
};

const SWORDS_DANCE: MoveData = MoveData {
    name: "Swords Dance",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 0,
    max_pp: 20,
    accuracy: 100,
    priority: 0,
    effects: SWORDS_DANCE_EFFECTS,
    status_effect: None,
};

const HARDEN: MoveData = MoveData {
    name: "Harden",
    move_type: PokemonType::Normal,
    category: MoveCategory::Physical,
    power: 0,
    max_pp: 30,
    accuracy: 100,
    priority: 0,
    effects: HARDEN_EFFECTS,
    status_effect: None,
};

const SING: MoveData = MoveData {
    name: "Sing",
    move_type: PokemonType::Normal,
    category: MoveCategory::Special,
    power: 0,
    max_pp: 15,
    accuracy: 55,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: Some(StatusCondition::Sleep { turns: 2 }),
};

const POISON_STING: MoveData = MoveData {
    name: "Poison Sting",
    move_type: PokemonType::Poison,
    category: MoveCategory::Physical,
    power: 15,
    max_pp: 35,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: Some(StatusCondition::Poison { chance: 30 }),
};

const POISON_POWDER: MoveData = MoveData {
    name: "Poison Powder",
    move_type: PokemonType::Poison,
    category: MoveCategory::Physical,
    power: 0,
    max_pp: 35,
    accuracy: 75,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: Some(StatusCondition::Poison { chance: 100 }),
};

const EMBER: MoveData = MoveData {
    name: "Ember",
    move_type: PokemonType::Fire,
    category: MoveCategory::Special,
    power: 40,
    max_pp: 25,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const WATER_GUN: MoveData = MoveData {
    name: "Water Gun",
    move_type: PokemonType::Water,
    category: MoveCategory::Special,
    power: 40,
    max_pp: 25,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const THUNDER_SHOCK: MoveData = MoveData {
    name: "Thunder Shock",
    move_type: PokemonType::Electric,
    category: MoveCategory::Special,
    power: 40,
    max_pp: 30,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const VINE_WHIP: MoveData = MoveData {
    name: "Vine Whip",
    move_type: PokemonType::Grass,
    category: MoveCategory::Physical,
    power: 45,
    max_pp: 25,
    accuracy: 100,
    priority: 0,
    effects: NO_EFFECTS,
    status_effect: None,
};

const AGILITY: MoveData = MoveData {
    name: "Agility",
    move_type: PokemonType::Psychic,
    category: MoveCategory::Special,
    power: 0,
    max_pp: 30,
    accuracy: 100,
    priority: 0,
    effects: AGILITY_EFFECTS,
    status_effect: None,
};

/// Resolve a move to its immutable template. Total over the enum, so a
/// new variant fails to compile until it gets a template.
pub fn get_move_data(move_: Move) -> &'static MoveData {
    match move_ {
        Move::Tackle => &TACKLE,
        Move::Scratch => &SCRATCH,
        Move::QuickAttack => &QUICK_ATTACK,
        Move::Growl => &GROWL,
        Move::TailWhip => &TAIL_WHIP,
        Move::SwordsDance => &SWORDS_DANCE,
        Move::Harden => &HARDEN,
        Move::Sing => &SING,
        Move::PoisonSting => &POISON_STING,
        Move::PoisonPowder => &POISON_POWDER,
        Move::Ember => &EMBER,
        Move::WaterGun => &WATER_GUN,
        Move::ThunderShock => &THUNDER_SHOCK,
        Move::VineWhip => &VINE_WHIP,
        Move::Agility => &AGILITY,
    }
}

/// Max PP for a move, straight from its template.
pub fn get_move_max_pp(move_: Move) -> u8 {
    get_move_data(move_).max_pp
}
