use std::collections::HashSet;

use rayon::prelude::*;

use crate::game::{DrawCount, Game};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub winnable: bool,
    pub explored_states: usize,
    pub hit_state_limit: bool,
}

/// Depth-first search over game states with loop detection. The
/// heuristic engine makes no winnability promises, so this is the tool
/// for asking "was that deal ever winnable at all" after the fact.
pub struct Solver {
    original_game: Game,
    visited_game_states: HashSet<Game>,
    states_to_visit: Vec<Game>,
    max_states: usize,
}

impl Solver {
    pub fn new(game: Game, max_states: usize) -> Self {
        Self {
            original_game: game.clone(),
            visited_game_states: HashSet::new(),
            states_to_visit: vec![game],
            max_states,
        }
    }

    pub fn original_game(&self) -> &Game {
        &self.original_game
    }

    pub fn is_solvable(&mut self) -> SolveReport {
        while let Some(state) = self.states_to_visit.pop() {
            if !self.visited_game_states.insert(state.clone()) {
                continue;
            }
            if state.is_won() {
                return SolveReport {
                    winnable: true,
                    explored_states: self.visited_game_states.len(),
                    hit_state_limit: false,
                };
            }
            if self.visited_game_states.len() >= self.max_states {
                return SolveReport {
                    winnable: false,
                    explored_states: self.visited_game_states.len(),
                    hit_state_limit: true,
                };
            }

            for valid_move in &state.valid_moves() {
                let next_state = state.handle_move(valid_move);
                if !self.visited_game_states.contains(&next_state) {
                    self.states_to_visit.push(next_state);
                }
            }
        }
        SolveReport {
            winnable: false,
            explored_states: self.visited_game_states.len(),
            hit_state_limit: false,
        }
    }
}

/// Fraction of `samples` random deals the bounded search can win.
/// Deals run in parallel; each gets its own state budget.
pub fn winnable_fraction(samples: usize, draw_count: DrawCount, max_states: usize) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    let wins = (0..samples)
        .into_par_iter()
        .filter(|_| {
            Solver::new(Game::new(draw_count), max_states)
                .is_solvable()
                .winnable
        })
        .count();
    wins as f64 / samples as f64
}
