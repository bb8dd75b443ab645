use pokemon_arena::battle::{Battle, WildPokemon};
use pokemon_arena::pokedex::{Pokedex, PokedexRepository};
use pokemon_arena::pokemon::PokemonInst;
use pokemon_arena::rng::TurnRng;
use pokemon_arena::trainer::Trainer;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let pokedex = match Pokedex::load_from_dir(Path::new("data")) {
        Ok(pokedex) => pokedex,
        Err(err) => {
            eprintln!("Error loading species data: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded {} species", pokedex.len());

    let (Some(pikachu_species), Some(ekans_species)) =
        (pokedex.species_by_id(25), pokedex.species_by_id(23))
    else {
        eprintln!("Demo species missing from the data directory");
        return ExitCode::FAILURE;
    };

    let mut iv_rng = rand::rng();
    let pikachu = PokemonInst::new_random(pikachu_species, 20, &mut iv_rng);
    let ekans = PokemonInst::new_random(ekans_species, 18, &mut iv_rng);

    let mut red = Trainer::new("red".to_string(), "Red".to_string(), vec![pikachu]);
    let mut wild = WildPokemon::new(ekans);

    let mut battle = match Battle::new(&mut red, &mut wild) {
        Ok(battle) => battle,
        Err(err) => {
            eprintln!("Could not start the battle: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("A wild Ekans appeared!");
    let outcome = battle.run(&mut TurnRng::new_random());
    battle.events().print_formatted();
    println!("Outcome: {:?}", outcome);

    ExitCode::SUCCESS
}
