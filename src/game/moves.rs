use super::*;

impl KlondikeGame {
    /// Draw `rules.draw_mode` cards face-up onto the waste, or recycle the
    /// waste face-down back into the stock once the stock is exhausted.
    /// Recycling stops when the configured limit is reached; with both piles
    /// empty this is a no-op.
    pub fn deal_from_stock(&self) -> Self {
        let mut next = self.clone();
        if next.won {
            return next;
        }

        if !next.stock.is_empty() {
            for _ in 0..next.rules.draw_mode.count() {
                let Some(mut card) = next.stock.pop() else {
                    break;
                };
                card.face_up = true;
                next.waste.push(card);
            }
            next.moves += 1;
            return next;
        }

        if next.waste.is_empty() || !next.rules.recycle_limit.allows(next.recycles) {
            return next;
        }

        while let Some(mut card) = next.waste.pop() {
            card.face_up = false;
            next.stock.push(card);
        }
        next.recycles += 1;
        if next.rules.recycle_counts_as_move {
            next.moves += 1;
        }
        next
    }

    /// Move the waste top or a tableau top card onto a foundation pile.
    pub fn move_to_foundation(&self, source: MoveSource, foundation: usize) -> Self {
        let mut next = self.clone();
        if next.won || foundation >= next.foundations.len() {
            return next;
        }

        match source {
            MoveSource::Waste => {
                let Some(card) = next.waste.last().copied() else {
                    return next;
                };
                if !rules::can_place_on_foundation(&next.foundations[foundation], card) {
                    return next;
                }
                next.waste.pop();
                next.foundations[foundation].push(card);
            }
            MoveSource::Tableau { col, start } => {
                if col >= next.tableau.len() || start + 1 != next.tableau[col].len() {
                    return next;
                }
                let Some(card) = next.tableau[col].last().copied() else {
                    return next;
                };
                if !card.face_up
                    || !rules::can_place_on_foundation(&next.foundations[foundation], card)
                {
                    return next;
                }
                next.tableau[col].pop();
                next.flip_exposed_card(col);
                next.foundations[foundation].push(card);
            }
            MoveSource::Foundation { .. } => return next,
        }

        next.moves += 1;
        next.refresh_won();
        next
    }

    /// Move a single waste card, a contiguous face-up tableau run, or a
    /// foundation top card onto a tableau column.
    pub fn move_to_tableau(&self, source: MoveSource, dst: usize) -> Self {
        let mut next = self.clone();
        if next.won || dst >= next.tableau.len() {
            return next;
        }

        match source {
            MoveSource::Waste => {
                let Some(card) = next.waste.last().copied() else {
                    return next;
                };
                if !rules::can_place_on_tableau(next.tableau[dst].last(), card) {
                    return next;
                }
                next.waste.pop();
                next.tableau[dst].push(card);
            }
            MoveSource::Tableau { col, start } => {
                if col == dst || col >= next.tableau.len() {
                    return next;
                }
                let source_pile = &next.tableau[col];
                if start >= source_pile.len() {
                    return next;
                }
                let run = &source_pile[start..];
                if !run.iter().all(|card| card.face_up) || !rules::is_valid_run(run) {
                    return next;
                }
                let first = run[0];
                if !rules::can_place_on_tableau(next.tableau[dst].last(), first) {
                    return next;
                }
                let moved = next.tableau[col].split_off(start);
                next.tableau[dst].extend(moved);
                next.flip_exposed_card(col);
            }
            MoveSource::Foundation { idx } => {
                if idx >= next.foundations.len() {
                    return next;
                }
                let Some(card) = next.foundations[idx].last().copied() else {
                    return next;
                };
                if !rules::can_place_on_tableau(next.tableau[dst].last(), card) {
                    return next;
                }
                next.foundations[idx].pop();
                next.tableau[dst].push(card);
            }
        }

        next.moves += 1;
        next
    }

    /// Repeatedly move waste-top and tableau-top cards to accepting
    /// foundations until no card moves. Each pass sends at least one card
    /// out of play, so the loop is bounded by the 52-card deck.
    pub fn auto_complete(&self) -> Self {
        let mut next = self.clone();
        while let Some((source, foundation)) = next.next_foundation_move() {
            next = next.move_to_foundation(source, foundation);
        }
        next
    }

    fn next_foundation_move(&self) -> Option<(MoveSource, usize)> {
        if self.won {
            return None;
        }
        if let Some(card) = self.waste.last().copied() {
            if let Some(foundation) = self.accepting_foundation(card) {
                return Some((MoveSource::Waste, foundation));
            }
        }
        for (col, pile) in self.tableau.iter().enumerate() {
            let Some(card) = pile.last().copied() else {
                continue;
            };
            if !card.face_up {
                continue;
            }
            if let Some(foundation) = self.accepting_foundation(card) {
                return Some((
                    MoveSource::Tableau {
                        col,
                        start: pile.len() - 1,
                    },
                    foundation,
                ));
            }
        }
        None
    }

    /// The endgame is decided once the stock and waste are empty and every
    /// tableau card is face-up: all remaining runs unwind onto the
    /// foundations without further choices.
    pub fn can_finish(&self) -> bool {
        !self.won
            && self.stock.is_empty()
            && self.waste.is_empty()
            && self.tableau.iter().flatten().all(|card| card.face_up)
            && self.foundation_count() < 52
    }

    /// Cosmetic bulk completion of a decided game. Does not touch the move
    /// counter; a no-op unless `can_finish`.
    pub fn finish_game(&self) -> Self {
        let mut next = self.clone();
        if !next.can_finish() {
            return next;
        }
        loop {
            let mut moved = false;
            for col in 0..next.tableau.len() {
                let Some(card) = next.tableau[col].last().copied() else {
                    continue;
                };
                if let Some(foundation) = next.accepting_foundation(card) {
                    next.tableau[col].pop();
                    next.foundations[foundation].push(card);
                    moved = true;
                }
            }
            if !moved {
                break;
            }
        }
        next.refresh_won();
        next
    }

    /// Whether any single card still has a legal home: waste-top or
    /// tableau-top to a foundation, or tableau-top to another column.
    /// Multi-card runs and remaining stock are deliberately not considered;
    /// game-over policy on top of this is the caller's call.
    pub fn has_possible_moves(&self) -> bool {
        if let Some(card) = self.waste.last().copied() {
            if self.accepting_foundation(card).is_some() {
                return true;
            }
        }
        for (col, pile) in self.tableau.iter().enumerate() {
            let Some(card) = pile.last().copied() else {
                continue;
            };
            if !card.face_up {
                continue;
            }
            if self.accepting_foundation(card).is_some() {
                return true;
            }
            for dst in 0..self.tableau.len() {
                if dst != col && rules::can_place_on_tableau(self.tableau[dst].last(), card) {
                    return true;
                }
            }
        }
        false
    }

    /// A column must never end a transition with hidden cards and nothing
    /// visible; this runs at the single point a visible stack loses its top.
    fn flip_exposed_card(&mut self, col: usize) {
        if let Some(card) = self.tableau[col].last_mut() {
            card.face_up = true;
        }
    }

    fn refresh_won(&mut self) {
        if self.foundation_count() == 52 {
            self.won = true;
        }
    }
}
