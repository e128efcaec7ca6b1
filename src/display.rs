//! Terminal snapshot of a board. Strictly a read of game state; nothing
//! here flips or moves a card.

use std::fmt;

use colored::Colorize;

use crate::card::{pretty_string, Card};
use crate::game::Game;

const FACE_DOWN_MARKER: &str = "XX";

fn card_cell(card: &Card) -> String {
    if !card.face_up {
        return FACE_DOWN_MARKER.dimmed().to_string();
    }
    let label = pretty_string(*card);
    if card.is_red() {
        label.red().to_string()
    } else {
        label.normal().to_string()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--------- Foundations ---------")?;
        self.foundations().iter().try_for_each(|foundation| {
            write!(
                f,
                "[{}]\t",
                foundation.peek().map_or_else(|| " ".to_string(), card_cell)
            )
        })?;
        writeln!(f)?;
        writeln!(f, "--------- Tableaus ------------")?;
        self.tableaus().iter().try_for_each(|tableau| {
            tableau
                .iter()
                .try_for_each(|card| write!(f, "{}\t", card_cell(card)))?;
            writeln!(f)
        })?;
        writeln!(f, "--------- Stock ---------------")?;
        writeln!(f, "{} face-down", self.stock().len())?;
        writeln!(f, "--------- Waste ---------------")?;
        self.waste()
            .iter()
            .try_for_each(|card| write!(f, "{} ", card_cell(card)))?;
        writeln!(f)
    }
}
