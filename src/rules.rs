//! The two legality predicates. Every mutation in the engine, manual or
//! automatic, goes through exactly one of these.

use crate::card::{are_card_colors_different, are_card_ranks_sequential, Card};
use crate::pile::Pile;

/// Empty foundation takes an Ace; otherwise same suit, next rank up.
pub fn can_place_on_foundation(card: Card, foundation: &Pile) -> bool {
    match foundation.peek() {
        None => card.is_ace(),
        Some(top) => card.suit == top.suit && are_card_ranks_sequential(*top, card),
    }
}

/// Empty tableau takes a King; otherwise opposite color, next rank down.
pub fn can_place_on_tableau(card: Card, tableau: &Pile) -> bool {
    match tableau.peek() {
        None => card.is_king(),
        Some(top) => are_card_colors_different(card, *top) && are_card_ranks_sequential(card, *top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn pile_of(cards: &[Card]) -> Pile {
        let mut pile = Pile::new();
        pile.extend(cards.iter().copied());
        pile
    }

    #[test]
    fn ace_goes_on_empty_foundation_only() {
        let empty = Pile::new();
        assert!(can_place_on_foundation(Card::new(Suit::Spades, 1), &empty));
        assert!(!can_place_on_foundation(Card::new(Suit::Spades, 2), &empty));
    }

    #[test]
    fn foundation_requires_same_suit_and_next_rank() {
        let topped_by_ace_spades = pile_of(&[Card::new(Suit::Spades, 1)]);
        assert!(can_place_on_foundation(
            Card::new(Suit::Spades, 2),
            &topped_by_ace_spades
        ));
        // Wrong suit, even though the color matches.
        assert!(!can_place_on_foundation(
            Card::new(Suit::Clubs, 2),
            &topped_by_ace_spades
        ));
        let topped_by_ace_hearts = pile_of(&[Card::new(Suit::Hearts, 1)]);
        assert!(!can_place_on_foundation(
            Card::new(Suit::Spades, 2),
            &topped_by_ace_hearts
        ));
        // Rank must be exactly one up.
        assert!(!can_place_on_foundation(
            Card::new(Suit::Spades, 3),
            &topped_by_ace_spades
        ));
    }

    #[test]
    fn king_goes_on_empty_tableau_only() {
        let empty = Pile::new();
        assert!(can_place_on_tableau(Card::new(Suit::Hearts, 13), &empty));
        assert!(!can_place_on_tableau(Card::new(Suit::Hearts, 12), &empty));
    }

    #[test]
    fn tableau_requires_alternating_color_descending() {
        let topped_by_six_spades = pile_of(&[Card::new(Suit::Spades, 6)]);
        assert!(can_place_on_tableau(
            Card::new(Suit::Hearts, 5),
            &topped_by_six_spades
        ));
        let topped_by_six_diamonds = pile_of(&[Card::new(Suit::Diamonds, 6)]);
        assert!(!can_place_on_tableau(
            Card::new(Suit::Hearts, 5),
            &topped_by_six_diamonds
        ));
        // Descending only.
        assert!(!can_place_on_tableau(
            Card::new(Suit::Hearts, 7),
            &topped_by_six_spades
        ));
    }
}
