use serde::{Deserialize, Serialize};

use crate::engine::store::KeyValueStore;
use crate::game::{DrawMode, GameRules, RecycleLimit};

pub const SETTINGS_KEY: &str = "cardfelt.settings";

/// User-facing options, persisted as one JSON object under one store key.
/// Unknown fields are ignored and missing ones default, so older blobs keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub draw_count: u8,
    /// `None` means unlimited stock recycles.
    pub recycle_limit: Option<u32>,
    pub recycle_counts_as_move: bool,
    pub auto_flip_exposed: bool,
    pub double_click_to_foundation: bool,
    pub safe_auto_moves: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            draw_count: 1,
            recycle_limit: None,
            recycle_counts_as_move: false,
            auto_flip_exposed: true,
            double_click_to_foundation: true,
            safe_auto_moves: false,
        }
    }
}

impl GameSettings {
    /// The subset that changes transition semantics. An out-of-range draw
    /// count falls back to single draw.
    pub fn rules(&self) -> GameRules {
        GameRules {
            draw_mode: DrawMode::from_count(self.draw_count).unwrap_or(DrawMode::One),
            recycle_limit: self
                .recycle_limit
                .map_or(RecycleLimit::Unlimited, RecycleLimit::Limited),
            recycle_counts_as_move: self.recycle_counts_as_move,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(SETTINGS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(raw) = serde_json::to_string(self) {
            store.set(SETTINGS_KEY, raw);
        }
    }
}
