use crate::battle::battler::ActionKind;
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Why an actor's chosen action did not execute this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionFailureReason {
    IsAsleep,
    IsFainted,
    NoPpRemaining,
    UnknownMove,
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Battler1Win,
    Battler2Win,
    Draw,
}

/// Everything observable that happens during battle resolution. The
/// session pushes these onto its bus instead of printing; callers decide
/// what to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
    },
    MoveUsed {
        battler: String,
        pokemon: String,
        move_used: Move,
    },
    MoveMissed {
        attacker: String,
        move_used: Move,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    StatusInflicted {
        target: String,
        status: String,
    },
    StatusExpired {
        target: String,
        status: String,
    },
    StatusDamage {
        target: String,
        status: String,
        damage: u16,
        remaining_hp: u16,
    },
    PokemonFainted {
        pokemon: String,
    },
    ActionFailed {
        battler: String,
        reason: ActionFailureReason,
    },
    /// A reserved action kind was chosen. Distinct from doing nothing by
    /// design, so callers and tests can tell the two apart.
    ActionNotImplemented {
        battler: String,
        kind: ActionKind,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Human-readable text for the event, or None for events that are
    /// only interesting to machines.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::MoveUsed {
                battler,
                pokemon,
                move_used,
            } => Some(format!("{}'s {} used {}!", battler, pokemon, move_used)),
            BattleEvent::MoveMissed { attacker, .. } => {
                Some(format!("{}'s attack missed!", attacker))
            }
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target, damage))
            }
            BattleEvent::StatusInflicted { target, status } => match status.as_str() {
                "Sleep" => Some(format!("{} fell asleep!", target)),
                "Poison" => Some(format!("{} was poisoned!", target)),
                _ => Some(format!("{} was affected by {}!", target, status)),
            },
            BattleEvent::StatusExpired { target, status } => match status.as_str() {
                "Sleep" => Some(format!("{} woke up!", target)),
                _ => Some(format!("{} is no longer affected by {}!", target, status)),
            },
            BattleEvent::StatusDamage {
                target,
                status,
                damage,
                ..
            } => Some(format!(
                "{} is hurt by {}! ({} damage)",
                target,
                status.to_lowercase(),
                damage
            )),
            BattleEvent::PokemonFainted { pokemon } => Some(format!("{} fainted!", pokemon)),
            BattleEvent::ActionFailed { battler, reason } => {
                let text = match reason {
                    ActionFailureReason::IsAsleep => "is fast asleep.",
                    ActionFailureReason::IsFainted => "has fainted and cannot act!",
                    ActionFailureReason::NoPpRemaining => "has no PP left for that move!",
                    ActionFailureReason::UnknownMove => "doesn't know that move!",
                };
                Some(format!("{}'s Pokemon {}", battler, text))
            }
            BattleEvent::ActionNotImplemented { battler, kind } => {
                Some(format!("{} tried to {}, but nothing happened.", battler, kind))
            }
            BattleEvent::BattleEnded { outcome } => Some(match outcome {
                BattleOutcome::Battler1Win => "Battler 1 has won the battle!".to_string(),
                BattleOutcome::Battler2Win => "Battler 2 has won the battle!".to_string(),
                BattleOutcome::Draw => "The battle ended in a draw!".to_string(),
            }),
        }
    }
}

/// Ordered record of battle events.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Print every event in debug form, indented.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print the human-readable battle log, skipping silent events.
    pub fn print_formatted(&self) {
        for event in &self.events {
            if let Some(text) = event.format() {
                println!("  {}", text);
            }
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
