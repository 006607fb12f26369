//! Per-frame simulation advance
//!
//! One invocation per display refresh. Order within a frame is fixed:
//! spawn, then move/collide/cull, then basket update, then the termination
//! check. Collision resolution must see this frame's post-move item
//! positions and the pre-update basket position.

use glam::Vec2;
use rand::Rng;

use super::collision::{item_below_floor, item_hits_basket};
use super::state::{GameEvent, GamePhase, GameState, Item, ItemKind};
use crate::consts::*;

/// Input signals for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Absolute pointer target for the basket center x (one-shot; the glue
    /// clears it after the frame that consumes it)
    pub target_x: Option<f32>,
    /// Held-key state
    pub left: bool,
    pub right: bool,
}

/// Advance the session by one frame. No-op unless the session is active.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> GameEvent {
    if state.phase != GamePhase::Active {
        return GameEvent::Continue;
    }

    state.time_frames += 1;

    // Spawn: one item per interval crossing. A frame delayed past several
    // intervals still spawns a single item.
    if now_ms - state.last_spawn_ms > SPAWN_INTERVAL_MS {
        spawn_item(state);
        state.last_spawn_ms = now_ms;
    }

    // Move
    for item in &mut state.items {
        item.pos.y += item.speed;
    }

    // Collide & cull, back to front so removals don't skip entries.
    // A caught item skips the out-of-bounds test.
    let mut i = state.items.len();
    while i > 0 {
        i -= 1;
        let item = &state.items[i];
        if item_hits_basket(item, &state.basket) {
            match item.kind {
                ItemKind::Fruit => state.score += 1,
                ItemKind::Bomb => state.lives -= 1,
            }
            state.items.remove(i);
        } else if item_below_floor(item, state.canvas_height) {
            // A missed fruit costs a life; a missed bomb is free
            if item.kind == ItemKind::Fruit {
                state.lives -= 1;
            }
            state.items.remove(i);
        }
    }

    // Basket update: an absolute pointer target wins over held keys
    if let Some(target) = input.target_x {
        state.basket.x = target - state.basket.width / 2.0;
    } else {
        if input.left {
            state.basket.x -= state.basket.speed;
        }
        if input.right {
            state.basket.x += state.basket.speed;
        }
    }
    state.basket.clamp_x(state.canvas_width);

    // Termination check
    if state.lives <= 0 {
        state.phase = GamePhase::GameOver;
        log::info!("game over after {} frames, final score {}", state.time_frames, state.score);
        return GameEvent::GameOver {
            final_score: state.score,
        };
    }

    GameEvent::Continue
}

/// Create one falling item with randomized kind, position and speed
fn spawn_item(state: &mut GameState) {
    let kind = if state.rng.random_bool(BOMB_CHANCE) {
        ItemKind::Bomb
    } else {
        ItemKind::Fruit
    };
    // Degenerate canvases leave no room to randomize; spawn on the centerline
    let x = if state.canvas_width > 2.0 * ITEM_RADIUS {
        state
            .rng
            .random_range(ITEM_RADIUS..state.canvas_width - ITEM_RADIUS)
    } else {
        state.canvas_width / 2.0
    };
    let speed = state.rng.random_range(ITEM_MIN_SPEED..ITEM_MAX_SPEED);
    let id = state.next_entity_id();
    state.items.push(Item {
        id,
        pos: Vec2::new(x, -2.0 * ITEM_RADIUS),
        radius: ITEM_RADIUS,
        speed,
        kind,
    });
}
