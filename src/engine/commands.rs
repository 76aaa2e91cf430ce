use crate::game::{DrawResult, MoveSource};

/// The full move surface a presentation adapter can request. Sources are
/// tagged pile references; validation happens once, inside the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    DealFromStock,
    MoveToFoundation { source: MoveSource, foundation: usize },
    MoveToTableau { source: MoveSource, dst: usize },
    AutoComplete,
    FinishGame,
}

/// What a command did: the discrete notifications (move made, game won) the
/// host forwards to collaborators such as analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub changed: bool,
    pub draw_result: Option<DrawResult>,
    pub won: bool,
}

impl CommandOutcome {
    pub const fn unchanged() -> Self {
        Self {
            changed: false,
            draw_result: None,
            won: false,
        }
    }
}
