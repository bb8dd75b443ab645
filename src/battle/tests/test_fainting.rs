use crate::battle::tests::common::{always_hit_rng, flat_power_damage, move_order, test_pokemon};
use crate::battle::{
    ActionFailureReason, ActionOutcome, Battle, BattleAction, BattleEvent, BattleOutcome, Battler,
    EventBus, WildPokemon,
};
use crate::errors::ItemError;
use crate::items::{Item, Potion, Revive, RevivalItem};
use crate::moves::Move;
use crate::status::StatusCondition;
use pretty_assertions::assert_eq;

#[test]
fn test_fainted_creature_reports_and_refuses_ordinary_healing() {
    // Knock the tank out in battle, then try to patch it up with an
    // ordinary potion: the heal must fail and change nothing.
    let mut dasher = WildPokemon::new(test_pokemon("Dasher", 100, 90, vec![Move::Tackle]));
    let mut tank = WildPokemon::new(test_pokemon("Tank", 40, 45, vec![Move::Scratch]));

    let mut battle = Battle::new(&mut dasher, &mut tank)
        .expect("both ready")
        .with_damage_formula(flat_power_damage);
    let outcome = battle.run(&mut always_hit_rng(4));
    assert_eq!(outcome, BattleOutcome::Battler1Win);

    assert!(tank.pokemon.is_fainted());
    assert_eq!(tank.pokemon.status.primary, Some(StatusCondition::Fainted));

    let err = Potion::new().use_on(&mut tank.pokemon).unwrap_err();
    assert_eq!(err, ItemError::TargetFainted);
    assert_eq!(tank.pokemon.health.current, 0);
    assert_eq!(tank.pokemon.status.primary, Some(StatusCondition::Fainted));
}

#[test]
fn test_revival_restores_half_max_and_clears_fainted() {
    let mut pokemon = test_pokemon("Tank", 50, 45, vec![Move::Scratch]);
    pokemon.take_damage(50);
    assert!(pokemon.is_fainted());

    Revive.revive(&mut pokemon).expect("revival is valid on fainted");

    assert_eq!(pokemon.health.current, 25);
    assert_eq!(pokemon.status.primary, None);
    assert!(!pokemon.is_fainted());
}

#[test]
fn test_second_actor_is_skipped_after_a_lethal_first_hit() {
    let mut dasher = WildPokemon::new(test_pokemon("Dasher", 100, 90, vec![Move::QuickAttack]));
    let mut fragile = WildPokemon::new(test_pokemon("Fragile", 35, 45, vec![Move::Tackle]));

    let mut battle = Battle::new(&mut dasher, &mut fragile)
        .expect("both ready")
        .with_damage_formula(flat_power_damage);
    battle.resolve_turn(&mut always_hit_rng(2));

    // The fragile side fainted to the first hit and never moved.
    assert_eq!(
        move_order(battle.events().events()),
        vec!["Wild Dasher".to_string()]
    );
    assert_eq!(dasher.pokemon.health.current, 100);
}

#[test]
fn test_mutual_poison_collapse_is_a_draw() {
    // Both actives are one tick from fainting; the round-start ticks
    // take them down together and the session calls it a draw.
    let mut one_pokemon = test_pokemon("One", 100, 60, vec![Move::Tackle]);
    one_pokemon
        .status
        .set_primary(StatusCondition::Poison { chance: 30 });
    one_pokemon.set_hp(1);
    let mut two_pokemon = test_pokemon("Two", 100, 60, vec![Move::Tackle]);
    two_pokemon
        .status
        .set_primary(StatusCondition::Poison { chance: 30 });
    two_pokemon.set_hp(1);

    let mut one = WildPokemon::new(one_pokemon);
    let mut two = WildPokemon::new(two_pokemon);

    let mut battle = Battle::new(&mut one, &mut two)
        .expect("both ready")
        .with_damage_formula(flat_power_damage);
    let outcome = battle.resolve_turn(&mut always_hit_rng(2));

    assert_eq!(outcome, Some(BattleOutcome::Draw));
    assert!(move_order(battle.events().events()).is_empty());
    assert!(battle.events().events().contains(&BattleEvent::BattleEnded {
        outcome: BattleOutcome::Draw
    }));
}

#[test]
fn test_empty_move_slot_is_an_observable_failure() {
    let mut drained_pokemon = test_pokemon("Drained", 100, 90, vec![Move::Tackle]);
    drained_pokemon.moves[0].as_mut().unwrap().pp = 0;
    let mut drained = WildPokemon::new(drained_pokemon);
    let mut target = test_pokemon("Target", 100, 45, vec![Move::Scratch]);
    let mut events = EventBus::new();

    let outcome = drained.execute_action(
        &BattleAction::Attack { move_: Move::Tackle },
        &mut target,
        &mut always_hit_rng(2),
        flat_power_damage,
        &mut events,
    );

    assert_eq!(
        outcome,
        ActionOutcome::Failed {
            reason: ActionFailureReason::NoPpRemaining
        }
    );
    assert_eq!(target.health.current, 100);
    assert!(events.events().contains(&BattleEvent::ActionFailed {
        battler: "Wild Drained".to_string(),
        reason: ActionFailureReason::NoPpRemaining,
    }));
}
