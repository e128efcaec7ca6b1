use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::card::{new_deck, shuffle, shuffle_seeded, Card};
use crate::error::EngineError;
use crate::moves::{foundation_in_range, tableau_in_range, CardPosition, Move, PileRef};
use crate::pile::{deal, Pile, NUM_FOUNDATIONS, NUM_TABLEAUS};
use crate::rules::{can_place_on_foundation, can_place_on_tableau};
use crate::tests::is_valid_game_state;

/// How many cards one stock draw turns over.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawCount {
    #[default]
    One,
    Three,
}

impl DrawCount {
    pub fn count(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

impl From<DrawCount> for u8 {
    fn from(draw_count: DrawCount) -> Self {
        draw_count.count() as u8
    }
}

impl TryFrom<u8> for DrawCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawCount::One),
            3 => Ok(DrawCount::Three),
            other => Err(format!("draw count must be 1 or 3, got {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The number of cards that actually moved to the waste (can be
    /// short of the draw count when the stock runs dry mid-draw).
    Drew(usize),
    StockExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Well-formed but illegal; the state was not touched.
    Rejected,
}

/// The whole board. All 52 cards live in exactly one of these piles at
/// every point between operations.
#[derive(Derivative, Clone, Debug, Default, Serialize, Deserialize)]
#[derivative(Hash, PartialEq, Eq)]
pub struct Game {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; NUM_FOUNDATIONS],
    pub(crate) tableaus: [Pile; NUM_TABLEAUS],
    draw_count: DrawCount,
    // Presentation counter; two boards that differ only here are the
    // same position as far as search is concerned.
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    moves_made: u32,
}

impl Game {
    /// Fresh shuffled deal.
    pub fn new(draw_count: DrawCount) -> Self {
        let mut deck = new_deck();
        shuffle(&mut deck);
        Self::from_deck(deck, draw_count)
    }

    /// Deterministic deal for a given seed.
    pub fn new_seeded(draw_count: DrawCount, seed: u64) -> Self {
        let mut deck = new_deck();
        shuffle_seeded(&mut deck, seed);
        Self::from_deck(deck, draw_count)
    }

    fn from_deck(deck: Vec<Card>, draw_count: DrawCount) -> Self {
        let (tableaus, stock) = deal(deck);
        let game = Self {
            stock,
            waste: Pile::new(),
            foundations: Default::default(),
            tableaus,
            draw_count,
            moves_made: 0,
        };
        debug_assert!(is_valid_game_state(&game));
        game
    }

    pub fn draw_count(&self) -> DrawCount {
        self.draw_count
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Pile; NUM_TABLEAUS] {
        &self.tableaus
    }

    /// Turns up to `draw_count` cards from the stock onto the waste, in
    /// stock order, all face-up. Empty stock is a signalled no-op.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.stock.is_empty() {
            return DrawOutcome::StockExhausted;
        }
        let mut drawn = 0;
        for _ in 0..self.draw_count.count() {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.face_up = true;
            self.waste.push(card);
            drawn += 1;
        }
        DrawOutcome::Drew(drawn)
    }

    /// Reverses the waste back into a face-down stock. Only meaningful
    /// when the stock is empty; anything else is a no-op.
    pub fn recycle(&mut self) -> bool {
        if !self.stock.is_empty() || self.waste.is_empty() {
            return false;
        }
        while let Some(mut card) = self.waste.pop() {
            card.face_up = false;
            self.stock.push(card);
        }
        true
    }

    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|foundation| foundation.len() == 13)
    }

    /// Resolves a source locator to its movable card and run length, or
    /// `None` when the locator is real but not a move source (the stock,
    /// or a face-down tableau card). Malformed locators are errors.
    pub(crate) fn peek_source(
        &self,
        from: CardPosition,
    ) -> Result<Option<(Card, usize)>, EngineError> {
        let not_found = || EngineError::ReferenceNotFound(from.into());
        match from {
            CardPosition::Stock => Ok(None),
            CardPosition::Waste => {
                let card = self.waste.peek().ok_or_else(not_found)?;
                Ok(Some((*card, 1)))
            }
            CardPosition::Foundation(idx) => {
                if !foundation_in_range(idx) {
                    return Err(not_found());
                }
                let card = self.foundations[idx as usize].peek().ok_or_else(not_found)?;
                Ok(Some((*card, 1)))
            }
            CardPosition::Tableau((tableau_idx, card_idx)) => {
                if !tableau_in_range(tableau_idx) {
                    return Err(not_found());
                }
                let tableau = &self.tableaus[tableau_idx as usize];
                let card = tableau.get(card_idx as usize).ok_or_else(not_found)?;
                if !card.face_up {
                    return Ok(None);
                }
                Ok(Some((*card, tableau.len() - card_idx as usize)))
            }
        }
    }

    /// Validated move of a card (or a face-up tableau run) to an explicit
    /// destination. Illegal moves leave the state untouched and come back
    /// as `Rejected`; only a locator that resolves to nothing is an error.
    pub fn attempt_move(
        &mut self,
        from: CardPosition,
        to: PileRef,
    ) -> Result<MoveOutcome, EngineError> {
        let Some((card, run_len)) = self.peek_source(from)? else {
            return Ok(MoveOutcome::Rejected);
        };

        let legal = match to {
            PileRef::Foundation(idx) => {
                if !foundation_in_range(idx) {
                    return Err(EngineError::ReferenceNotFound(to.into()));
                }
                // A foundation takes exactly one card at a time.
                run_len == 1 && can_place_on_foundation(card, &self.foundations[idx as usize])
            }
            PileRef::Tableau(idx) => {
                if !tableau_in_range(idx) {
                    return Err(EngineError::ReferenceNotFound(to.into()));
                }
                let same_pile = matches!(from, CardPosition::Tableau((t, _)) if t == idx);
                !same_pile && can_place_on_tableau(card, &self.tableaus[idx as usize])
            }
        };
        if !legal {
            return Ok(MoveOutcome::Rejected);
        }

        // peek_source resolved these, so the pops cannot miss.
        let moved: Vec<Card> = match from {
            CardPosition::Stock => unreachable!("stock is never a move source"),
            CardPosition::Waste => vec![self.waste.pop().unwrap()],
            CardPosition::Foundation(idx) => vec![self.foundations[idx as usize].pop().unwrap()],
            CardPosition::Tableau((tableau_idx, card_idx)) => {
                let tableau = &mut self.tableaus[tableau_idx as usize];
                let moved = tableau.take_from(card_idx as usize);
                tableau.flip_top_face_up();
                moved
            }
        };
        match to {
            PileRef::Foundation(idx) => self.foundations[idx as usize].extend(moved),
            PileRef::Tableau(idx) => self.tableaus[idx as usize].extend(moved),
        }
        self.moves_made += 1;
        Ok(MoveOutcome::Moved)
    }

    /// Single-click move: resolve the destination with the best-move
    /// heuristic, then go through the same validated path.
    pub fn auto_move(&mut self, from: CardPosition) -> Result<MoveOutcome, EngineError> {
        match self.find_best_move(from)? {
            Some(to) => self.attempt_move(from, to),
            None => Ok(MoveOutcome::Rejected),
        }
    }

    /// Applies a `Move` to a clone of this state; solver stepping.
    pub fn handle_move(&self, mv: &Move) -> Game {
        let mut next = self.clone();
        match (mv.from, mv.to) {
            (CardPosition::Stock, CardPosition::Waste) => {
                next.draw();
            }
            (CardPosition::Waste, CardPosition::Stock) => {
                next.recycle();
            }
            (from, CardPosition::Foundation(idx)) => {
                let _ = next.attempt_move(from, PileRef::Foundation(idx));
            }
            (from, CardPosition::Tableau((tableau_idx, _))) => {
                let _ = next.attempt_move(from, PileRef::Tableau(tableau_idx));
            }
            _ => {}
        }
        next
    }
}
