use clap::{Parser, Subcommand};
use log::*;
use rand::RngCore;
use rand_mt::Mt64;

use cardwright::engine::deck::Deck;
use cardwright::engine::observable::ObservableGameState;
use cardwright::engine::state::GameState;
use cardwright::players::mcts::MctsStrategy;
use cardwright::players::random::RandomStrategy;
use cardwright::players::Strategy;
use cardwright::runner::GameDriver;
use cardwright::search::SearchConfig;

#[derive(Parser)]
struct Cli {
    /// Fixed seed, for reproducible deals and searches.
    #[clap(long, value_parser, default_value_t = 0x42)]
    seed: u64,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deals a hand and prints the IS-MCTS recommendation for it.
    #[clap(arg_required_else_help = false)]
    Move {
        #[clap(long, short = 'i', value_parser, default_value_t = 1000)]
        iterations: u32,

        #[clap(long, value_parser, default_value_t = cardwright::search::DEFAULT_EXPLORATION_WEIGHT)]
        exploration_weight: f64,
    },

    /// Plays full games with the IS-MCTS strategy and reports totals,
    /// compared against a uniformly-random baseline.
    Benchmark {
        #[clap(long, short = 'n', value_parser, default_value_t = 20)]
        games: u32,

        #[clap(long, short = 'i', value_parser, default_value_t = 500)]
        iterations: u32,
    },
}

fn run_move(seed: u64, iterations: u32, exploration_weight: f64) {
    let mut rng = Mt64::new(seed);
    let deck = Deck::new_random(&mut rng);
    let state = GameState::new(deck);
    let observable = ObservableGameState::from_game_state(&state, vec![]);

    println!("Hand: {}", state.hand());
    println!("Field: {}", state.field());

    let mut strategy = MctsStrategy::new(
        SearchConfig {
            iterations,
            exploration_weight,
            verbose: true,
        },
        rng.next_u64(),
    );
    match strategy.recommend_move(&observable) {
        Some((card, slot)) => println!("Recommended move: play {card} on slot {slot}"),
        None => println!("No legal move available."),
    }
}

fn run_benchmark(seed: u64, games: u32, iterations: u32) {
    let mut rng = Mt64::new(seed);

    let mut mcts_points = 0i64;
    let mut random_points = 0i64;

    for n in 0..games {
        let deck = Deck::new_random(&mut rng);
        let mut mcts = MctsStrategy::new(
            SearchConfig {
                iterations,
                ..SearchConfig::default()
            },
            rng.next_u64(),
        );
        let mcts_result = GameDriver::play_game(deck.clone(), &mut mcts);
        mcts_points += mcts_result.total_points as i64;

        let mut random = RandomStrategy::new(rng.next_u64());
        let random_result = GameDriver::play_game(deck, &mut random);
        random_points += random_result.total_points as i64;

        debug!(
            "game {n}: ismcts={:?} random={:?}",
            mcts_result, random_result
        );
    }

    println!("Played {games} games ({iterations} iterations each).");
    println!(
        "IS-MCTS average total points: {:.2}",
        mcts_points as f64 / games as f64
    );
    println!(
        "Random average total points:  {:.2}",
        random_points as f64 / games as f64
    );
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Move {
            iterations,
            exploration_weight,
        } => run_move(args.seed, iterations, exploration_weight),
        Commands::Benchmark { games, iterations } => run_benchmark(args.seed, games, iterations),
    }
}
