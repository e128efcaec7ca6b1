use std::collections::HashSet;

use crate::card::{Suit, NUM_CARDS_DECK};
use crate::game::Game;

/// Conservation check: every one of the 52 identities in exactly one
/// pile. Asserted when a game is dealt; move operations stay usable on
/// hand-built partial boards, so the tests check this explicitly after
/// mutating instead.
pub fn is_valid_game_state(game: &Game) -> bool {
    let mut identities: HashSet<(Suit, u8)> = HashSet::new();
    let all_piles = game
        .stock()
        .iter()
        .chain(game.waste().iter())
        .chain(game.foundations().iter().flat_map(|pile| pile.iter()))
        .chain(game.tableaus().iter().flat_map(|pile| pile.iter()));

    let mut num_cards = 0;
    for card in all_piles {
        num_cards += 1;
        if !identities.insert((card.suit, card.rank)) {
            return false;
        }
    }
    num_cards == NUM_CARDS_DECK
}

#[cfg(test)]
mod integration {
    use super::*;
    use crate::game::{DrawCount, DrawOutcome, Game};
    use crate::moves::CardPosition;

    #[test]
    fn invariant_survives_a_full_stock_cycle() {
        let mut game = Game::new_seeded(DrawCount::Three, 8);
        while game.draw() != DrawOutcome::StockExhausted {
            assert!(is_valid_game_state(&game));
        }
        assert!(game.recycle());
        assert!(is_valid_game_state(&game));
        assert_eq!(game.stock().len(), 24);
    }

    #[test]
    fn invariant_survives_a_burst_of_auto_moves() {
        let mut game = Game::new_seeded(DrawCount::One, 4242);
        // Hammer the engine with click-everything behavior for a while;
        // whatever lands or is rejected, conservation must hold.
        for _ in 0..50 {
            game.draw();
            let _ = game.auto_move(CardPosition::Waste);
            for tableau_idx in 0..7u8 {
                let len = game.tableaus()[tableau_idx as usize].len();
                if len > 0 {
                    let _ = game.auto_move(CardPosition::Tableau((tableau_idx, (len - 1) as u8)));
                }
            }
            if game.stock().is_empty() {
                game.recycle();
            }
            assert!(is_valid_game_state(&game));
        }
    }

    #[test]
    fn default_board_is_not_a_valid_state() {
        // An empty aggregate is useful scaffolding for tests but fails
        // the conservation check, as it should.
        assert!(!is_valid_game_state(&Game::default()));
    }
}
