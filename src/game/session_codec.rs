use super::*;

impl KlondikeGame {
    /// Compact single-line snapshot of the whole table, suitable for one
    /// key-value store entry.
    pub fn encode_for_session(&self) -> String {
        let limit = match self.rules.recycle_limit {
            RecycleLimit::Unlimited => "inf".to_string(),
            RecycleLimit::Limited(max) => max.to_string(),
        };
        let parts = [
            format!("draw={}", self.rules.draw_mode.count()),
            format!("limit={limit}"),
            format!("rmove={}", u8::from(self.rules.recycle_counts_as_move)),
            format!("moves={}", self.moves),
            format!("recycles={}", self.recycles),
            format!("won={}", u8::from(self.won)),
            format!("stock={}", encode_pile(&self.stock)),
            format!("waste={}", encode_pile(&self.waste)),
            format!("f0={}", encode_pile(&self.foundations[0])),
            format!("f1={}", encode_pile(&self.foundations[1])),
            format!("f2={}", encode_pile(&self.foundations[2])),
            format!("f3={}", encode_pile(&self.foundations[3])),
            format!("t0={}", encode_pile(&self.tableau[0])),
            format!("t1={}", encode_pile(&self.tableau[1])),
            format!("t2={}", encode_pile(&self.tableau[2])),
            format!("t3={}", encode_pile(&self.tableau[3])),
            format!("t4={}", encode_pile(&self.tableau[4])),
            format!("t5={}", encode_pile(&self.tableau[5])),
            format!("t6={}", encode_pile(&self.tableau[6])),
        ];
        parts.join(";")
    }

    pub fn decode_from_session(data: &str) -> Option<Self> {
        let mut fields = std::collections::HashMap::<&str, &str>::new();
        for part in data.split(';') {
            let (key, value) = part.split_once('=')?;
            fields.insert(key, value);
        }

        let draw_mode = DrawMode::from_count(fields.get("draw")?.parse::<u8>().ok()?)?;
        let recycle_limit = match *fields.get("limit")? {
            "inf" => RecycleLimit::Unlimited,
            raw => RecycleLimit::Limited(raw.parse::<u32>().ok()?),
        };
        let recycle_counts_as_move = match *fields.get("rmove")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        let moves = fields.get("moves")?.parse::<u32>().ok()?;
        let recycles = fields.get("recycles")?.parse::<u32>().ok()?;
        let won = match *fields.get("won")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };

        let stock = decode_pile(fields.get("stock")?)?;
        let waste = decode_pile(fields.get("waste")?)?;
        let foundations = [
            decode_pile(fields.get("f0")?)?,
            decode_pile(fields.get("f1")?)?,
            decode_pile(fields.get("f2")?)?,
            decode_pile(fields.get("f3")?)?,
        ];
        let tableau = [
            decode_pile(fields.get("t0")?)?,
            decode_pile(fields.get("t1")?)?,
            decode_pile(fields.get("t2")?)?,
            decode_pile(fields.get("t3")?)?,
            decode_pile(fields.get("t4")?)?,
            decode_pile(fields.get("t5")?)?,
            decode_pile(fields.get("t6")?)?,
        ];

        let foundations_count: usize = foundations.iter().map(Vec::len).sum();
        let tableau_count: usize = tableau.iter().map(Vec::len).sum();
        if stock.len() + waste.len() + foundations_count + tableau_count != 52 {
            return None;
        }

        Some(Self {
            rules: GameRules {
                draw_mode,
                recycle_limit,
                recycle_counts_as_move,
            },
            stock,
            waste,
            foundations,
            tableau,
            moves,
            recycles,
            won,
        })
    }
}

fn encode_pile(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(|card| {
            format!(
                "{}{}{}",
                card.suit.short(),
                card.rank,
                if card.face_up { 'U' } else { 'D' }
            )
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn decode_pile(encoded: &str) -> Option<Vec<Card>> {
    if encoded == "-" {
        return Some(Vec::new());
    }
    encoded.split('.').map(decode_card).collect()
}

fn decode_card(token: &str) -> Option<Card> {
    let suit = match token.chars().next()? {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        _ => return None,
    };
    let face_up = match token.chars().last()? {
        'U' => true,
        'D' => false,
        _ => return None,
    };
    if token.len() < 3 {
        return None;
    }
    let rank = token[1..token.len() - 1].parse::<u8>().ok()?;
    if !(1..=13).contains(&rank) {
        return None;
    }
    Some(Card {
        suit,
        rank,
        face_up,
    })
}
