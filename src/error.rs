use std::error::Error;
use std::fmt;

use crate::moves::{CardPosition, PileRef};

/// A locator handed to the engine that does not resolve to anything:
/// an out-of-range pile or card index, or a reference into an empty pile.
/// Distinct from an illegal-but-well-formed move, which is a silent
/// `MoveOutcome::Rejected`; a `ReferenceNotFound` means the caller has a
/// bug, not that the player tried a bad move.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Reference {
    Card(CardPosition),
    Pile(PileRef),
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EngineError {
    ReferenceNotFound(Reference),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ReferenceNotFound(Reference::Card(pos)) => {
                write!(f, "card reference not found: {:?}", pos)
            }
            EngineError::ReferenceNotFound(Reference::Pile(pile)) => {
                write!(f, "pile reference not found: {:?}", pile)
            }
        }
    }
}

impl Error for EngineError {}

impl From<CardPosition> for Reference {
    fn from(pos: CardPosition) -> Self {
        Reference::Card(pos)
    }
}

impl From<PileRef> for Reference {
    fn from(pile: PileRef) -> Self {
        Reference::Pile(pile)
    }
}
