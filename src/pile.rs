use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::card::{Card, NUM_CARDS_DECK};

pub const NUM_TABLEAUS: usize = 7;
pub const NUM_FOUNDATIONS: usize = 4;

/// An ordered stack of cards, top = last element. Capacity is the whole
/// deck, so pushes inside the engine cannot overflow (the 52-card
/// conservation invariant bounds every pile).
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile(pub ArrayVec<Card, NUM_CARDS_DECK>);

impl Pile {
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn get(&self, idx: usize) -> Option<&Card> {
        self.0.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// Removes and returns the cards from `start` to the top, preserving
    /// their order.
    pub fn take_from(&mut self, start: usize) -> Vec<Card> {
        self.0.drain(start..).collect()
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    /// Flips the top card face-up if there is one and it is face-down.
    /// Returns true if a flip happened.
    pub fn flip_top_face_up(&mut self) -> bool {
        match self.0.last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Index of the first card of the face-up suffix, or `len()` if every
    /// card is face-down (or the pile is empty).
    pub fn face_up_start(&self) -> usize {
        self.0
            .iter()
            .position(|card| card.face_up)
            .unwrap_or(self.0.len())
    }
}

/// Triangular Klondike deal: outer round i hands one card to each tableau
/// j in i..7, so tableau i ends with i+1 cards. The last card dealt to
/// each tableau is face-up; the 24 leftovers become the face-down stock.
pub fn deal(mut deck: Vec<Card>) -> ([Pile; NUM_TABLEAUS], Pile) {
    let mut tableaus: [Pile; NUM_TABLEAUS] = Default::default();
    for i in 0..NUM_TABLEAUS {
        for tableau in tableaus[i..].iter_mut() {
            let mut card = deck.pop().unwrap();
            card.face_up = false;
            tableau.push(card);
        }
    }
    for tableau in &mut tableaus {
        tableau.flip_top_face_up();
    }

    let mut stock = Pile::new();
    stock.extend(deck);
    (tableaus, stock)
}
