//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamp-driven frames, no wall clock reads
//! - Seeded RNG only
//! - Stable iteration order (insertion order, culled back-to-front)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{item_below_floor, item_hits_basket};
pub use state::{
    Basket, BasketRect, GameEvent, GamePhase, GameState, Item, ItemKind, ItemSprite, Snapshot,
};
pub use tick::{TickInput, tick};
