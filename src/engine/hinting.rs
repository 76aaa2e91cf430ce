use crate::engine::commands::EngineCommand;
use crate::engine::foundation_safety;
use crate::game::{KlondikeGame, MoveSource};

#[derive(Debug, Clone)]
pub struct HintSuggestion {
    pub message: String,
    pub command: EngineCommand,
}

/// Hint candidates in descending usefulness: foundation moves first, then
/// run moves that reveal a hidden card or free a column, then waste
/// placements, then drawing. With `safe_only`, foundation hints are limited
/// to cards the tableau can no longer need.
pub fn enumerate_hint_candidates(game: &KlondikeGame, safe_only: bool) -> Vec<HintSuggestion> {
    let mut candidates = Vec::new();

    if let Some(card) = game.waste_top() {
        if let Some(foundation) = game.accepting_foundation(card) {
            if !safe_only || foundation_safety::is_safe_auto_foundation(game, card) {
                candidates.push(HintSuggestion {
                    message: format!("Move {} from the waste to a foundation.", card.label()),
                    command: EngineCommand::MoveToFoundation {
                        source: MoveSource::Waste,
                        foundation,
                    },
                });
            }
        }
    }

    for (col, pile) in game.tableau().iter().enumerate() {
        let Some(card) = pile.last().copied() else {
            continue;
        };
        if !card.face_up {
            continue;
        }
        if let Some(foundation) = game.accepting_foundation(card) {
            if !safe_only || foundation_safety::is_safe_auto_foundation(game, card) {
                candidates.push(HintSuggestion {
                    message: format!("Move {} from column {} to a foundation.", card.label(), col + 1),
                    command: EngineCommand::MoveToFoundation {
                        source: MoveSource::Tableau {
                            col,
                            start: pile.len() - 1,
                        },
                        foundation,
                    },
                });
            }
        }
    }

    for (col, pile) in game.tableau().iter().enumerate() {
        let Some(start) = pile.iter().position(|card| card.face_up) else {
            continue;
        };
        let first = pile[start];
        for dst in 0..game.tableau().len() {
            if dst == col {
                continue;
            }
            let dst_top = game.tableau()[dst].last();
            if !crate::game::rules::can_place_on_tableau(dst_top, first) {
                continue;
            }
            // Parking a king that sits alone on another empty column goes nowhere.
            if start == 0 && dst_top.is_none() {
                continue;
            }
            let reveal = if start > 0 { " and reveal a card" } else { "" };
            candidates.push(HintSuggestion {
                message: format!(
                    "Move the run starting at {} from column {} to column {}{}.",
                    first.label(),
                    col + 1,
                    dst + 1,
                    reveal,
                ),
                command: EngineCommand::MoveToTableau {
                    source: MoveSource::Tableau { col, start },
                    dst,
                },
            });
            break;
        }
    }

    if let Some(card) = game.waste_top() {
        for dst in 0..game.tableau().len() {
            if crate::game::rules::can_place_on_tableau(game.tableau()[dst].last(), card) {
                candidates.push(HintSuggestion {
                    message: format!(
                        "Move {} from the waste to column {}.",
                        card.label(),
                        dst + 1
                    ),
                    command: EngineCommand::MoveToTableau {
                        source: MoveSource::Waste,
                        dst,
                    },
                });
                break;
            }
        }
    }

    if game.stock_len() > 0
        || (game.waste_len() > 0 && game.rules().recycle_limit.allows(game.recycles()))
    {
        candidates.push(HintSuggestion {
            message: "Deal from the stock.".to_string(),
            command: EngineCommand::DealFromStock,
        });
    }

    candidates
}
