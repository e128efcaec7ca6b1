pub mod card;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;
pub mod pile;
pub mod rules;
pub mod settings;
pub mod solver;
pub mod tests;

pub use card::{Card, Suit};
pub use error::{EngineError, Reference};
pub use game::{DrawCount, DrawOutcome, Game, MoveOutcome};
pub use moves::{CardPosition, Move, PileRef};
pub use pile::Pile;
pub use settings::{HandPreference, Settings};
pub use solver::{winnable_fraction, SolveReport, Solver};
