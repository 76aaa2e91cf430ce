//! Thin façade over the pure rules core.
//!
//! UI code calls these helpers instead of touching transitions directly.
//! Commands go in, a fresh state and a change summary come out; invalid
//! requests are absorbed as unchanged states, never errors.

use tracing::{debug, info};

use crate::engine::commands::{CommandOutcome, EngineCommand};
use crate::engine::foundation_safety;
use crate::game::{Card, CardId, DrawResult, KlondikeGame, MoveSource};

pub fn execute_command(
    game: &KlondikeGame,
    command: EngineCommand,
) -> (KlondikeGame, CommandOutcome) {
    let next = match command {
        EngineCommand::DealFromStock => game.deal_from_stock(),
        EngineCommand::MoveToFoundation { source, foundation } => {
            game.move_to_foundation(source, foundation)
        }
        EngineCommand::MoveToTableau { source, dst } => game.move_to_tableau(source, dst),
        EngineCommand::AutoComplete => game.auto_complete(),
        EngineCommand::FinishGame => game.finish_game(),
    };

    let changed = next != *game;
    let draw_result = match command {
        EngineCommand::DealFromStock => Some(if !changed {
            DrawResult::NoOp
        } else if game.stock_len() > 0 {
            DrawResult::DrewFromStock
        } else {
            DrawResult::RecycledWaste
        }),
        _ => None,
    };
    let won = next.is_won() && !game.is_won();

    debug!(?command, changed, "engine command");
    if won {
        info!(moves = next.moves(), "game won");
    }

    (next, CommandOutcome {
        changed,
        draw_result,
        won,
    })
}

/// Where a card currently sits, expressed as a move source. Buried waste and
/// foundation cards have no legal move, so only pile tops are reported for
/// those; tableau cards are reported at any face-up depth.
pub fn locate(game: &KlondikeGame, card: CardId) -> Option<MoveSource> {
    if game.waste_top().map(Card::id) == Some(card) {
        return Some(MoveSource::Waste);
    }
    for (col, pile) in game.tableau().iter().enumerate() {
        for (start, candidate) in pile.iter().enumerate() {
            if candidate.face_up && candidate.id() == card {
                return Some(MoveSource::Tableau { col, start });
            }
        }
    }
    for idx in 0..game.foundations().len() {
        if game.foundation_top(idx).map(Card::id) == Some(card) {
            return Some(MoveSource::Foundation { idx });
        }
    }
    None
}

/// Double-click routing: the command that sends `card` to an accepting
/// foundation, if it is movable (a pile top) and, under `safe_only`, cannot
/// still be needed in the tableau.
pub fn auto_foundation_command(
    game: &KlondikeGame,
    card: CardId,
    safe_only: bool,
) -> Option<EngineCommand> {
    let source = locate(game, card)?;
    let top = match source {
        MoveSource::Waste => game.waste_top()?,
        MoveSource::Tableau { col, start } => {
            if start + 1 != game.tableau_len(col)? {
                return None;
            }
            game.tableau_top(col)?
        }
        MoveSource::Foundation { .. } => return None,
    };
    let foundation = game.accepting_foundation(top)?;
    if safe_only && !foundation_safety::is_safe_auto_foundation(game, top) {
        return None;
    }
    Some(EngineCommand::MoveToFoundation { source, foundation })
}
