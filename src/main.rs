use std::env;
use std::path::PathBuf;

use klondike_solitaire::{winnable_fraction, DrawCount, Game, Settings, Solver};

fn settings_path() -> PathBuf {
    env::temp_dir().join("klondike_settings.json")
}

fn main() {
    let mut seed: Option<u64> = None;
    let mut draw_count: Option<DrawCount> = None;
    let mut solve = false;
    let mut stats: Option<usize> = None;
    let mut max_states: usize = 200_000;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if arg == "--solve" {
            solve = true;
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            seed = value.parse().ok();
        } else if let Some(value) = arg.strip_prefix("--draw=") {
            draw_count = value
                .parse::<u8>()
                .ok()
                .and_then(|n| DrawCount::try_from(n).ok());
            if draw_count.is_none() {
                eprintln!("--draw takes 1 or 3");
                return;
            }
        } else if let Some(value) = arg.strip_prefix("--stats=") {
            stats = value.parse().ok();
        } else if let Some(value) = arg.strip_prefix("--max-states=") {
            max_states = value.parse().unwrap_or(max_states);
        } else {
            eprintln!(
                "usage: klondike [--seed=N] [--draw=1|3] [--solve] [--stats=N] [--max-states=N]"
            );
            return;
        }
    }

    let settings = Settings::load(&settings_path()).unwrap_or_default();
    let draw_count = draw_count.unwrap_or(settings.draw_count);

    if let Some(samples) = stats {
        println!(
            "Sampling {} deals (draw {}, budget {} states per deal)...",
            samples,
            draw_count.count(),
            max_states
        );
        let fraction = winnable_fraction(samples, draw_count, max_states);
        println!("Winnable: {:.1}%", fraction * 100.0);
        return;
    }

    let game = match seed {
        Some(seed) => Game::new_seeded(draw_count, seed),
        None => Game::new(draw_count),
    };
    if solve {
        let mut solver = Solver::new(game, max_states);
        let report = solver.is_solvable();
        // The board itself moved into the solver; report on its copy.
        println!("{}", solver.original_game());
        println!(
            "Winnable: {} ({} states explored{})",
            report.winnable,
            report.explored_states,
            if report.hit_state_limit {
                ", state budget hit"
            } else {
                ""
            }
        );
    } else {
        println!("{}", game);
        println!("Legal moves:");
        for mv in &game.valid_moves() {
            println!("  {}", mv.pretty_string(&game));
        }
    }
}
