use crate::game::{Card, KlondikeGame, Suit};

pub fn can_auto_move_waste_to_foundation(game: &KlondikeGame) -> bool {
    let Some(card) = game.waste_top() else {
        return false;
    };
    game.accepting_foundation(card).is_some() && is_safe_auto_foundation(game, card)
}

pub fn can_auto_move_tableau_to_foundation(game: &KlondikeGame, src: usize) -> bool {
    let Some(card) = game.tableau_top(src) else {
        return false;
    };
    card.face_up
        && game.accepting_foundation(card).is_some()
        && is_safe_auto_foundation(game, card)
}

/// A card is safe to send up automatically when no tableau build can still
/// need it: aces and twos always, otherwise once both opposite-color suits
/// have reached one rank below it on the foundations.
pub fn is_safe_auto_foundation(game: &KlondikeGame, card: Card) -> bool {
    if card.rank <= 2 {
        return true;
    }

    match card.suit {
        Suit::Hearts | Suit::Diamonds => {
            game.foundation_rank_for_suit(Suit::Clubs) >= card.rank - 1
                && game.foundation_rank_for_suit(Suit::Spades) >= card.rank - 1
        }
        Suit::Clubs | Suit::Spades => {
            game.foundation_rank_for_suit(Suit::Hearts) >= card.rank - 1
                && game.foundation_rank_for_suit(Suit::Diamonds) >= card.rank - 1
        }
    }
}
