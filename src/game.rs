mod moves;
pub mod rules;
mod session_codec;
mod setup;
mod types;


pub use self::types::{
    rank_label, Card, CardId, DrawMode, DrawResult, GameRules, MoveSource, RecycleLimit, Suit,
};

/// The whole table as one value: piles, rule options, and counters. Every
/// transition takes a game and returns a new game; an illegal request comes
/// back equal to the input in piles and counters. Once `won` latches, all
/// transitions are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KlondikeGame {
    rules: GameRules,
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    tableau: [Vec<Card>; 7],
    moves: u32,
    recycles: u32,
    won: bool,
}

impl KlondikeGame {
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    /// Up to `n` waste cards ending with the top card, oldest first.
    pub fn waste_top_n(&self, n: usize) -> Vec<Card> {
        if n == 0 {
            return Vec::new();
        }
        let mut cards: Vec<Card> = self.waste.iter().rev().take(n).copied().collect();
        cards.reverse();
        cards
    }

    pub fn foundations(&self) -> &[Vec<Card>; 4] {
        &self.foundations
    }

    pub fn foundation_top(&self, idx: usize) -> Option<Card> {
        self.foundations.get(idx).and_then(|pile| pile.last().copied())
    }

    /// Rank reached by `suit` on the foundations, 0 if none. Foundations are
    /// bound to a suit by their contents, so this scans for the pile holding
    /// the suit.
    pub fn foundation_rank_for_suit(&self, suit: Suit) -> u8 {
        self.foundations
            .iter()
            .filter_map(|pile| pile.last())
            .find(|top| top.suit == suit)
            .map(|top| top.rank)
            .unwrap_or(0)
    }

    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// First foundation pile that accepts `card`, if any.
    pub fn accepting_foundation(&self, card: Card) -> Option<usize> {
        self.foundations
            .iter()
            .position(|pile| rules::can_place_on_foundation(pile, card))
    }

    pub fn tableau(&self) -> &[Vec<Card>; 7] {
        &self.tableau
    }

    pub fn tableau_top(&self, col: usize) -> Option<Card> {
        self.tableau.get(col).and_then(|pile| pile.last().copied())
    }

    pub fn tableau_len(&self, col: usize) -> Option<usize> {
        self.tableau.get(col).map(Vec::len)
    }

    pub fn tableau_card(&self, col: usize, index: usize) -> Option<Card> {
        self.tableau
            .get(col)
            .and_then(|pile| pile.get(index))
            .copied()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
impl KlondikeGame {
    pub(crate) fn from_piles(
        rules: GameRules,
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; 4],
        tableau: [Vec<Card>; 7],
    ) -> Self {
        Self {
            rules,
            stock,
            waste,
            foundations,
            tableau,
            moves: 0,
            recycles: 0,
            won: false,
        }
    }
}
