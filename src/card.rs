use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const NUM_CARDS_DECK: usize = 52;

pub const RANK_ACE: u8 = 1;
pub const RANK_KING: u8 = 13;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// A single card. Identity is (suit, rank); `face_up` is pile state that
/// travels with the card. Exactly 52 identities exist per game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    /// 1 = Ace .. 13 = King.
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((RANK_ACE..=RANK_KING).contains(&rank));
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn is_red(self) -> bool {
        self.suit.is_red()
    }

    pub fn is_ace(self) -> bool {
        self.rank == RANK_ACE
    }

    pub fn is_king(self) -> bool {
        self.rank == RANK_KING
    }

    pub fn same_identity(self, other: Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

pub fn pretty_string(card: Card) -> String {
    format!("{}{}", rank_label(card.rank), card.suit.symbol())
}

pub fn are_card_ranks_sequential(bottom: Card, top: Card) -> bool {
    top.rank == bottom.rank + 1
}

pub fn are_card_colors_different(card1: Card, card2: Card) -> bool {
    card1.is_red() != card2.is_red()
}

/// The full 52-card deck, every card face-down, unshuffled.
pub fn new_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(NUM_CARDS_DECK);
    for suit in Suit::ALL {
        for rank in RANK_ACE..=RANK_KING {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Fisher-Yates via rand; unbiased given the source.
pub fn shuffle(deck: &mut [Card]) {
    deck.shuffle(&mut thread_rng());
}

/// Deterministic permutation for a given seed.
pub fn shuffle_seeded(deck: &mut [Card], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}
