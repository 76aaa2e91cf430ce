//! Deck construction and shuffling. Randomness is always injected so callers
//! can supply a seeded generator for deterministic deals.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::{Card, Suit};

/// All 52 cards, one per (suit, rank) pair, face-down.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card {
                suit,
                rank,
                face_up: false,
            });
        }
    }
    deck
}

/// Uniform permutation of `cards` (Fisher-Yates). The input is not mutated.
pub fn shuffle(cards: &[Card], rng: &mut impl Rng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
