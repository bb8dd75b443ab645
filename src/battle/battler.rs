use crate::battle::events::{ActionFailureReason, BattleEvent, EventBus};
use crate::battle::{perform_attack, DamageFormula};
use crate::move_data::get_move_data;
use crate::moves::Move;
use crate::pokemon::PokemonInst;
use crate::rng::TurnRng;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One intended action for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    Attack { move_: Move },
    UseItem { item_index: usize },
    SwitchPokemon { team_index: usize },
    Flee,
}

/// Action kind without payload, used for outcome reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    UseItem,
    SwitchPokemon,
    Flee,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Attack => write!(f, "attack"),
            ActionKind::UseItem => write!(f, "use an item"),
            ActionKind::SwitchPokemon => write!(f, "switch Pokemon"),
            ActionKind::Flee => write!(f, "flee"),
        }
    }
}

impl BattleAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            BattleAction::Attack { .. } => ActionKind::Attack,
            BattleAction::UseItem { .. } => ActionKind::UseItem,
            BattleAction::SwitchPokemon { .. } => ActionKind::SwitchPokemon,
            BattleAction::Flee => ActionKind::Flee,
        }
    }

    /// Priority tier used for turn ordering. Only attacks carry a move
    /// tier; everything else resolves at the neutral tier.
    pub fn priority(&self) -> i8 {
        match self {
            BattleAction::Attack { move_ } => get_move_data(*move_).priority,
            _ => 0,
        }
    }
}

/// What executing an action amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Executed,
    /// The action kind is reserved but not wired up yet.
    NotImplemented { kind: ActionKind },
    Failed { reason: ActionFailureReason },
}

/// An entity that selects and executes one action per round. The battle
/// session only ever talks through this interface; it never inspects
/// the concrete actor.
pub trait Battler {
    fn name(&self) -> &str;

    /// Pick this round's action. Called before either side executes, so
    /// no information about the opponent's choice is available.
    fn choose_action(&self) -> BattleAction;

    /// Carry out an action against the opponent's active creature.
    fn execute_action(
        &mut self,
        action: &BattleAction,
        opponent: &mut PokemonInst,
        rng: &mut TurnRng,
        damage_formula: DamageFormula,
        events: &mut EventBus,
    ) -> ActionOutcome;

    fn active_pokemon(&self) -> Option<&PokemonInst>;

    fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst>;
}

/// A lone wild creature. No team, no switching, no items.
pub struct WildPokemon {
    name: String,
    pub pokemon: PokemonInst,
}

impl WildPokemon {
    pub fn new(pokemon: PokemonInst) -> Self {
        WildPokemon {
            name: format!("Wild {}", pokemon.name),
            pokemon,
        }
    }
}

impl Battler for WildPokemon {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&self) -> BattleAction {
        // Always the first move slot. A smarter policy plugs in here.
        match self.pokemon.first_move() {
            Some(move_) => BattleAction::Attack { move_ },
            None => BattleAction::Flee,
        }
    }

    fn execute_action(
        &mut self,
        action: &BattleAction,
        opponent: &mut PokemonInst,
        rng: &mut TurnRng,
        damage_formula: DamageFormula,
        events: &mut EventBus,
    ) -> ActionOutcome {
        match action {
            BattleAction::Attack { move_ } => perform_attack(
                &self.name,
                &mut self.pokemon,
                *move_,
                opponent,
                rng,
                damage_formula,
                events,
            ),
            other => {
                let kind = other.kind();
                events.push(BattleEvent::ActionNotImplemented {
                    battler: self.name.clone(),
                    kind,
                });
                ActionOutcome::NotImplemented { kind }
            }
        }
    }

    fn active_pokemon(&self) -> Option<&PokemonInst> {
        Some(&self.pokemon)
    }

    fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        Some(&mut self.pokemon)
    }
}

impl Battler for Trainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&self) -> BattleAction {
        // Same placeholder policy as a wild creature: first move of the
        // active team member.
        match self.active_pokemon().and_then(|pokemon| pokemon.first_move()) {
            Some(move_) => BattleAction::Attack { move_ },
            None => BattleAction::Flee,
        }
    }

    fn execute_action(
        &mut self,
        action: &BattleAction,
        opponent: &mut PokemonInst,
        rng: &mut TurnRng,
        damage_formula: DamageFormula,
        events: &mut EventBus,
    ) -> ActionOutcome {
        match action {
            BattleAction::Attack { move_ } => {
                let name = self.name.clone();
                let user = match self.active_pokemon_mut() {
                    Some(pokemon) => pokemon,
                    None => {
                        events.push(BattleEvent::ActionFailed {
                            battler: name,
                            reason: ActionFailureReason::IsFainted,
                        });
                        return ActionOutcome::Failed {
                            reason: ActionFailureReason::IsFainted,
                        };
                    }
                };
                perform_attack(&name, user, *move_, opponent, rng, damage_formula, events)
            }
            // Reserved for later policy work. Each kind stays a distinct
            // outcome so callers can tell them apart.
            BattleAction::UseItem { .. } | BattleAction::SwitchPokemon { .. } | BattleAction::Flee => {
                let kind = action.kind();
                events.push(BattleEvent::ActionNotImplemented {
                    battler: self.name.clone(),
                    kind,
                });
                ActionOutcome::NotImplemented { kind }
            }
        }
    }

    fn active_pokemon(&self) -> Option<&PokemonInst> {
        Trainer::active_pokemon(self)
    }

    fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        Trainer::active_pokemon_mut(self)
    }
}
