/* lib.rs
 *
 * Copyright 2026 emviolet
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

//! Headless Klondike solitaire rules engine.
//!
//! The core is one immutable value, [`game::KlondikeGame`], advanced only by
//! pure transitions; illegal requests come back as unchanged states instead
//! of errors. The [`engine`] layer adds what a host UI needs around that:
//! a command boundary, hints, a render projection, and persistence for
//! sessions, settings, and statistics over a flat key-value store.

pub mod deck;
pub mod engine;
pub mod game;

pub use crate::engine::commands::{CommandOutcome, EngineCommand};
pub use crate::game::{
    Card, CardId, DrawMode, DrawResult, GameRules, KlondikeGame, MoveSource, RecycleLimit, Suit,
};
