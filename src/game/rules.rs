//! Placement predicates. Every transition and every `can_*` helper routes
//! through these; the rules are never re-derived at a call site.

use super::Card;

pub fn can_place_on_foundation(pile: &[Card], card: Card) -> bool {
    match pile.last() {
        None => card.rank == 1,
        Some(top) => top.suit == card.suit && card.rank == top.rank + 1,
    }
}

pub fn can_place_on_tableau(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 13,
        Some(top) => {
            top.face_up && top.color_red() != card.color_red() && top.rank == card.rank + 1
        }
    }
}

/// A movable unit: strictly descending by one, alternating colors. Length
/// zero or one is trivially valid. Face-up status is the caller's concern.
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let a = pair[0];
        let b = pair[1];
        a.color_red() != b.color_red() && a.rank == b.rank + 1
    })
}
