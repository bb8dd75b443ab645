pub mod battler;
pub mod events;

#[cfg(test)]
mod tests;

use crate::errors::{BattleError, BattleResult};
use crate::move_data::{get_move_data, MoveCategory, MoveData};
use crate::moves::Move;
use crate::pokemon::{PokemonInst, StatusTickOutcome};
use crate::rng::TurnRng;

pub use battler::{ActionKind, ActionOutcome, BattleAction, Battler, WildPokemon};
pub use events::{ActionFailureReason, BattleEvent, BattleOutcome, EventBus};

/// Computes the damage of one successful hit. Injected so callers pick
/// the formula; the engine only guarantees it is invoked exactly once
/// per damaging hit and that the result goes through the target's
/// take-damage operation.
pub type DamageFormula = fn(&MoveData, &PokemonInst, &PokemonInst) -> u16;

/// Default formula: the classic `(2L/5 + 2) * power * atk/def / 50 + 2`
/// shape, over the effective (multiplier-scaled) stats of the damage
/// class the move belongs to.
pub fn default_damage_formula(data: &MoveData, user: &PokemonInst, target: &PokemonInst) -> u16 {
    let (attack, defense) = match data.category {
        MoveCategory::Physical => (user.effective_attack(), target.effective_defense()),
        MoveCategory::Special => (
            user.effective_special_attack(),
            target.effective_special_defense(),
        ),
    };

    let level_factor = 2 * user.level as u32 / 5 + 2;
    let base = level_factor * data.power as u32 * attack as u32 / defense.max(1) as u32;
    (base / 50 + 2).min(u16::MAX as u32) as u16
}

/// Resolve one move use: accuracy roll, then on a hit the template's
/// side effects in order, the status attempt, and for damage-class
/// moves one damage-formula invocation fed through take-damage. A miss
/// does nothing at all — no partial effects, no status attempt.
pub fn execute_move(
    move_: Move,
    user: &mut PokemonInst,
    target: &mut PokemonInst,
    rng: &mut TurnRng,
    damage_formula: DamageFormula,
    events: &mut EventBus,
) {
    let data = get_move_data(move_);

    let roll = rng.next_outcome("accuracy check");
    if roll >= data.accuracy {
        events.push(BattleEvent::MoveMissed {
            attacker: user.name.clone(),
            move_used: move_,
        });
        return;
    }

    for effect in data.effects {
        effect(user, target);
    }

    if let Some(status) = data.status_effect {
        if target.try_inflict_status(status, rng) {
            events.push(BattleEvent::StatusInflicted {
                target: target.name.clone(),
                status: status.name().to_string(),
            });
        }
    }

    if data.is_damaging() {
        let damage = damage_formula(data, user, target);
        let fainted = target.take_damage(damage);
        events.push(BattleEvent::DamageDealt {
            target: target.name.clone(),
            damage,
            remaining_hp: target.health.current,
        });
        if fainted {
            events.push(BattleEvent::PokemonFainted {
                pokemon: target.name.clone(),
            });
        }
    }
}

/// Shared attack path for every battler kind: spend PP, then run the
/// move. Unknown and empty slots are observable failures, not panics.
pub(crate) fn perform_attack(
    attacker_name: &str,
    user: &mut PokemonInst,
    move_: Move,
    target: &mut PokemonInst,
    rng: &mut TurnRng,
    damage_formula: DamageFormula,
    events: &mut EventBus,
) -> ActionOutcome {
    let has_pp = match user.move_instance_mut(move_) {
        Some(instance) => instance.use_move(),
        None => {
            events.push(BattleEvent::ActionFailed {
                battler: attacker_name.to_string(),
                reason: ActionFailureReason::UnknownMove,
            });
            return ActionOutcome::Failed {
                reason: ActionFailureReason::UnknownMove,
            };
        }
    };
    if !has_pp {
        events.push(BattleEvent::ActionFailed {
            battler: attacker_name.to_string(),
            reason: ActionFailureReason::NoPpRemaining,
        });
        return ActionOutcome::Failed {
            reason: ActionFailureReason::NoPpRemaining,
        };
    }

    events.push(BattleEvent::MoveUsed {
        battler: attacker_name.to_string(),
        pokemon: user.name.clone(),
        move_used: move_,
    });
    execute_move(move_, user, target, rng, damage_formula, events);
    ActionOutcome::Executed
}

/// One encounter between two actors. Borrows both for its lifetime;
/// creature data is owned by the actors and outlives the session.
pub struct Battle<'a> {
    battler1: &'a mut dyn Battler,
    battler2: &'a mut dyn Battler,
    damage_formula: DamageFormula,
    events: EventBus,
    turn_number: u32,
    running: bool,
}

impl<'a> Battle<'a> {
    /// Pair two actors for an encounter. Fails up front when an actor
    /// has no active creature or its active creature knows no moves, so
    /// those cannot surface as faults mid-round.
    pub fn new(
        battler1: &'a mut dyn Battler,
        battler2: &'a mut dyn Battler,
    ) -> BattleResult<Battle<'a>> {
        check_ready(&*battler1)?;
        check_ready(&*battler2)?;

        Ok(Battle {
            battler1,
            battler2,
            damage_formula: default_damage_formula,
            events: EventBus::new(),
            turn_number: 1,
            running: true,
        })
    }

    /// Swap in a different damage formula (tests use flat policies).
    pub fn with_damage_formula(mut self, damage_formula: DamageFormula) -> Battle<'a> {
        self.damage_formula = damage_formula;
        self
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Loop rounds until the termination predicate holds.
    pub fn run(&mut self, rng: &mut TurnRng) -> BattleOutcome {
        loop {
            if let Some(outcome) = self.resolve_turn(rng) {
                return outcome;
            }
        }
    }

    /// Resolve a single round. Returns the outcome once the battle is
    /// over, None while it continues.
    ///
    /// Round order: status ticks for both sides first (so a creature
    /// whose sleep expires right now still acts), then simultaneous
    /// action selection, then ordered execution. The second actor only
    /// acts if its active creature survived the first action.
    pub fn resolve_turn(&mut self, rng: &mut TurnRng) -> Option<BattleOutcome> {
        if !self.running {
            return self.try_finish();
        }

        self.events.push(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });

        tick_statuses(&mut *self.battler1, &mut self.events);
        tick_statuses(&mut *self.battler2, &mut self.events);
        if let Some(outcome) = self.try_finish() {
            return Some(outcome);
        }

        let action1 = self.battler1.choose_action();
        let action2 = self.battler2.choose_action();

        let (first, first_action, second, second_action) =
            if self.battler1_acts_first(&action1, &action2) {
                (&mut *self.battler1, action1, &mut *self.battler2, action2)
            } else {
                (&mut *self.battler2, action2, &mut *self.battler1, action1)
            };

        execute_round_action(first, &first_action, second, rng, self.damage_formula, &mut self.events);

        // An already-fainted creature cannot act.
        let second_stands = second
            .active_pokemon()
            .map(|pokemon| !pokemon.is_fainted())
            .unwrap_or(false);
        if second_stands {
            execute_round_action(second, &second_action, first, rng, self.damage_formula, &mut self.events);
        }

        self.turn_number += 1;
        self.try_finish()
    }

    /// Turn ordering, in strict priority: higher move priority tier
    /// first; then higher current effective speed; a full tie goes to
    /// battler 1 (stable, so tests can rely on it).
    fn battler1_acts_first(&self, action1: &BattleAction, action2: &BattleAction) -> bool {
        let (tier1, tier2) = (action1.priority(), action2.priority());
        if tier1 != tier2 {
            return tier1 > tier2;
        }

        let speed1 = active_speed(&*self.battler1);
        let speed2 = active_speed(&*self.battler2);
        if speed1 != speed2 {
            return speed1 > speed2;
        }

        true
    }

    /// Termination predicate: the battle ends when either side's active
    /// creature is fainted. On the transition the session resets both
    /// actives' volatile multipliers and records the outcome.
    fn try_finish(&mut self) -> Option<BattleOutcome> {
        let down1 = side_down(&*self.battler1);
        let down2 = side_down(&*self.battler2);

        let outcome = match (down1, down2) {
            (false, false) => return None,
            (true, true) => BattleOutcome::Draw,
            (true, false) => BattleOutcome::Battler2Win,
            (false, true) => BattleOutcome::Battler1Win,
        };

        if self.running {
            self.running = false;
            if let Some(pokemon) = self.battler1.active_pokemon_mut() {
                pokemon.modifiers.reset();
            }
            if let Some(pokemon) = self.battler2.active_pokemon_mut() {
                pokemon.modifiers.reset();
            }
            self.events.push(BattleEvent::BattleEnded { outcome });
        }
        Some(outcome)
    }
}

fn check_ready(battler: &dyn Battler) -> BattleResult<()> {
    let active = battler
        .active_pokemon()
        .ok_or_else(|| BattleError::NoActivePokemon(battler.name().to_string()))?;
    if !active.knows_moves() {
        return Err(BattleError::NoMovesKnown(battler.name().to_string()));
    }
    Ok(())
}

fn active_speed(battler: &dyn Battler) -> u16 {
    battler
        .active_pokemon()
        .map(|pokemon| pokemon.effective_speed())
        .unwrap_or(0)
}

fn side_down(battler: &dyn Battler) -> bool {
    battler
        .active_pokemon()
        .map(|pokemon| pokemon.is_fainted())
        .unwrap_or(true)
}

/// Gate and delegate one actor's action for the round. Sleeping and
/// fainted creatures cannot act; the skip is a named, observable event.
fn execute_round_action(
    actor: &mut dyn Battler,
    action: &BattleAction,
    opponent: &mut dyn Battler,
    rng: &mut TurnRng,
    damage_formula: DamageFormula,
    events: &mut EventBus,
) {
    if let Some(reason) = action_block_reason(&*actor) {
        events.push(BattleEvent::ActionFailed {
            battler: actor.name().to_string(),
            reason,
        });
        return;
    }

    let target = match opponent.active_pokemon_mut() {
        Some(pokemon) => pokemon,
        None => return,
    };
    actor.execute_action(action, target, rng, damage_formula, events);
}

fn action_block_reason(actor: &dyn Battler) -> Option<ActionFailureReason> {
    match actor.active_pokemon() {
        None => Some(ActionFailureReason::IsFainted),
        Some(pokemon) if pokemon.is_fainted() => Some(ActionFailureReason::IsFainted),
        Some(pokemon) if pokemon.is_asleep() => Some(ActionFailureReason::IsAsleep),
        _ => None,
    }
}

/// Run one creature's status machine and translate the outcomes into
/// battle events.
fn tick_statuses(battler: &mut dyn Battler, events: &mut EventBus) {
    let pokemon = match battler.active_pokemon_mut() {
        Some(pokemon) => pokemon,
        None => return,
    };
    let pokemon_name = pokemon.name.clone();

    for outcome in pokemon.tick_statuses() {
        match outcome {
            StatusTickOutcome::PrimaryExpired { status }
            | StatusTickOutcome::SecondaryExpired { status } => {
                events.push(BattleEvent::StatusExpired {
                    target: pokemon_name.clone(),
                    status: status.to_string(),
                });
            }
            StatusTickOutcome::StatusDamage {
                status,
                damage,
                remaining,
            } => {
                events.push(BattleEvent::StatusDamage {
                    target: pokemon_name.clone(),
                    status: status.to_string(),
                    damage,
                    remaining_hp: remaining,
                });
            }
            StatusTickOutcome::FaintedFromStatus { .. } => {
                events.push(BattleEvent::PokemonFainted {
                    pokemon: pokemon_name.clone(),
                });
            }
        }
    }
}
