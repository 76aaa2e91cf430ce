use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::deck;

use super::*;

impl KlondikeGame {
    pub fn new_shuffled(rules: GameRules) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(rng.gen(), rules)
    }

    /// Classic triangular deal: column i takes i hidden cards and one face-up
    /// card, the remaining 24 become the face-down stock.
    pub fn new_with_seed(seed: u64, rules: GameRules) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = deck::shuffle(&deck::standard_deck(), &mut rng);

        let mut game = Self {
            rules,
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: std::array::from_fn(|_| Vec::new()),
            tableau: std::array::from_fn(|_| Vec::new()),
            moves: 0,
            recycles: 0,
            won: false,
        };

        let mut draw = deck.into_iter();
        for col in 0..7 {
            for row in 0..=col {
                let mut card = draw.next().expect("full deck has enough cards");
                card.face_up = row == col;
                game.tableau[col].push(card);
            }
        }

        for card in draw {
            game.stock.push(card);
        }

        game
    }

    /// Same table with a different draw mode; mid-game switches are allowed.
    pub fn with_draw_mode(&self, draw_mode: DrawMode) -> Self {
        let mut next = self.clone();
        next.rules.draw_mode = draw_mode;
        next
    }
}
