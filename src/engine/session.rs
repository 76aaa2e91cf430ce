use std::collections::HashMap;

use rand::Rng;

use crate::engine::boundary;
use crate::engine::commands::{CommandOutcome, EngineCommand};
use crate::engine::store::KeyValueStore;
use crate::game::{GameRules, KlondikeGame, MoveSource};

pub const SESSION_KEY: &str = "cardfelt.session";

/// One sitting at the table: the game value, the transient selection, and
/// the clock the host's timer drives. Single owner, single writer; commands
/// run to completion before control returns.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: KlondikeGame,
    seed: u64,
    selected: Option<MoveSource>,
    elapsed_seconds: u32,
    timer_started: bool,
}

impl GameSession {
    pub fn new_shuffled(rules: GameRules) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(rng.gen(), rules)
    }

    pub fn new_with_seed(seed: u64, rules: GameRules) -> Self {
        Self {
            game: KlondikeGame::new_with_seed(seed, rules),
            seed,
            selected: None,
            elapsed_seconds: 0,
            timer_started: false,
        }
    }

    pub fn game(&self) -> &KlondikeGame {
        &self.game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn selected(&self) -> Option<MoveSource> {
        self.selected
    }

    /// Runs a command against the current game. A change starts the timer
    /// and drops the selection; the outcome carries the notifications the
    /// host forwards.
    pub fn execute(&mut self, command: EngineCommand) -> CommandOutcome {
        let (next, outcome) = boundary::execute_command(&self.game, command);
        if outcome.changed {
            self.timer_started = true;
            self.selected = None;
        }
        self.game = next;
        outcome
    }

    /// Remembers a source for a later click-move. Only sources that point at
    /// something pickable are kept.
    pub fn select(&mut self, source: MoveSource) -> bool {
        let valid = match source {
            MoveSource::Waste => self.game.waste_top().is_some(),
            MoveSource::Tableau { col, start } => self
                .game
                .tableau_card(col, start)
                .map(|card| card.face_up)
                .unwrap_or(false),
            MoveSource::Foundation { idx } => self.game.foundation_top(idx).is_some(),
        };
        self.selected = valid.then_some(source);
        valid
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn move_selected_to_foundation(&mut self, foundation: usize) -> CommandOutcome {
        let Some(source) = self.selected else {
            return CommandOutcome::unchanged();
        };
        self.execute(EngineCommand::MoveToFoundation { source, foundation })
    }

    pub fn move_selected_to_tableau(&mut self, dst: usize) -> CommandOutcome {
        let Some(source) = self.selected else {
            return CommandOutcome::unchanged();
        };
        self.execute(EngineCommand::MoveToTableau { source, dst })
    }

    /// Advances the clock by one second. The engine never reads a wall
    /// clock; the host's timer calls this while a started game is unwon.
    pub fn tick_second(&mut self) {
        if self.timer_started && !self.game.is_won() {
            self.elapsed_seconds += 1;
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "v=1\nseed={}\nelapsed={}\ntimer={}\ngame={}",
            self.seed,
            self.elapsed_seconds,
            u8::from(self.timer_started),
            self.game.encode_for_session(),
        )
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let mut fields = HashMap::<&str, &str>::new();
        for line in raw.lines() {
            let (key, value) = line.split_once('=')?;
            fields.insert(key.trim(), value.trim());
        }

        if *fields.get("v")? != "1" {
            return None;
        }
        let seed = fields.get("seed")?.parse::<u64>().ok()?;
        let elapsed_seconds = fields.get("elapsed")?.parse::<u32>().ok()?;
        let timer_started = match *fields.get("timer")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        let game = KlondikeGame::decode_from_session(fields.get("game")?)?;

        Some(Self {
            game,
            seed,
            selected: None,
            elapsed_seconds,
            timer_started,
        })
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(SESSION_KEY, self.encode());
    }

    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        Self::decode(&store.get(SESSION_KEY)?)
    }

    pub fn discard(store: &mut dyn KeyValueStore) {
        store.remove(SESSION_KEY);
    }
}
