use crate::health::Health;
use crate::move_data::MoveData;
use crate::moves::Move;
use crate::pokemon::{MoveInstance, PokemonInst};
use crate::rng::TurnRng;
use crate::stats::{StatModifiers, Stats};
use crate::status::StatusManager;

/// Build a creature with exact battle stats, bypassing species
/// derivation so scenarios can pin speeds and HP directly.
pub fn test_pokemon(name: &str, max_hp: u16, speed: u16, moves: Vec<Move>) -> PokemonInst {
    let mut move_slots = [const { None }; 4];
    for (i, move_) in moves.into_iter().take(4).enumerate() {
        move_slots[i] = Some(MoveInstance::new(move_));
    }

    PokemonInst {
        name: name.to_string(),
        species_id: 0,
        level: 50,
        experience: 0,
        friendship: 70,
        ivs: Stats::default(),
        stats: Stats {
            hp: max_hp,
            attack: 60,
            defense: 50,
            special_attack: 60,
            special_defense: 50,
            speed,
        },
        health: Health::new_full(max_hp),
        status: StatusManager::new(),
        moves: move_slots,
        modifiers: StatModifiers::default(),
        held_item: None,
    }
}

/// Flat damage policy: every hit deals the move's power. Scenario tests
/// use this so expected health values are exact.
pub fn flat_power_damage(data: &MoveData, _user: &PokemonInst, _target: &PokemonInst) -> u16 {
    data.power
}

/// Scripted rolls that always land: every accuracy and chance check
/// passes (0 is below every threshold used in these tests).
pub fn always_hit_rng(draws: usize) -> TurnRng {
    TurnRng::new_for_test(vec![0; draws])
}

/// Names of the battlers that got a move off, in execution order.
pub fn move_order(events: &[crate::battle::BattleEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            crate::battle::BattleEvent::MoveUsed { battler, .. } => Some(battler.clone()),
            _ => None,
        })
        .collect()
}
