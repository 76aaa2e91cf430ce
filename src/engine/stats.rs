use serde::{Deserialize, Serialize};

use crate::engine::store::KeyValueStore;

pub const STATS_KEY: &str = "cardfelt.stats";

/// Running win/loss record, persisted as one JSON object under one store
/// key. `games_started` can exceed won + lost: abandoned deals stay
/// unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStatistics {
    pub games_started: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub total_moves: u64,
    pub best_time_seconds: Option<u32>,
    pub fewest_moves: Option<u32>,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl GameStatistics {
    pub fn record_start(&mut self) {
        self.games_started += 1;
    }

    pub fn record_win(&mut self, elapsed_seconds: u32, moves: u32) {
        self.games_won += 1;
        self.total_moves += u64::from(moves);
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
        self.best_time_seconds = Some(match self.best_time_seconds {
            Some(best) => best.min(elapsed_seconds),
            None => elapsed_seconds,
        });
        self.fewest_moves = Some(match self.fewest_moves {
            Some(best) => best.min(moves),
            None => moves,
        });
    }

    pub fn record_loss(&mut self, moves: u32) {
        self.games_lost += 1;
        self.total_moves += u64::from(moves);
        self.current_streak = 0;
    }

    pub fn win_rate(&self) -> f64 {
        let finished = self.games_won + self.games_lost;
        if finished == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(finished)
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(STATS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(raw) = serde_json::to_string(self) {
            store.set(STATS_KEY, raw);
        }
    }
}
