//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Page loaded, no session started yet
    Idle,
    /// Active gameplay
    Active,
    /// Session ended, final score available for display
    GameOver,
}

/// What a falling item does when caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Fruit,
    Bomb,
}

/// A falling item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed in pixels per frame
    pub speed: f32,
    pub kind: ItemKind,
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    pub x: f32,
    /// Fixed after init
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per frame while a key is held
    pub speed: f32,
}

impl Basket {
    /// Centered at the default position near the canvas bottom
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            x: (canvas_width - BASKET_WIDTH) / 2.0,
            y: canvas_height - BASKET_BOTTOM_OFFSET,
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
            speed: BASKET_SPEED,
        }
    }

    /// Keep the basket fully inside the play area
    pub fn clamp_x(&mut self, canvas_width: f32) {
        self.x = self.x.clamp(0.0, (canvas_width - self.width).max(0.0));
    }
}

/// Result of advancing one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Continue,
    GameOver { final_score: u32 },
}

/// Basket rectangle for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BasketRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Item circle for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub kind: ItemKind,
}

/// Per-frame renderable snapshot. The renderer and HUD consume only this;
/// they never reach into `GameState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub basket: BasketRect,
    pub items: Vec<ItemSprite>,
    pub score: u32,
    pub lives: i32,
    pub phase: GamePhase,
}

/// Complete session state (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn position/speed/kind
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score, increments on fruit catch
    pub score: u32,
    /// Lives, decrements on bomb catch or missed fruit; session ends at <= 0
    pub lives: i32,
    /// Timestamp of the last spawn (ms, same clock as tick timestamps)
    pub last_spawn_ms: f64,
    /// Play area geometry, queried once at init
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Player basket
    pub basket: Basket,
    /// Live items in spawn order
    pub items: Vec<Item>,
    /// Frames advanced since session start
    pub time_frames: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new idle state with the given seed and play area size
    pub fn new(seed: u64, canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            last_spawn_ms: 0.0,
            canvas_width,
            canvas_height,
            basket: Basket::new(canvas_width, canvas_height),
            items: Vec::new(),
            time_frames: 0,
            next_id: 1,
        }
    }

    /// Clear all session state: score, lives, items, basket position, and
    /// the spawn cursor. Leaves the phase and RNG untouched.
    pub fn reset(&mut self, now_ms: f64) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.items.clear();
        self.basket = Basket::new(self.canvas_width, self.canvas_height);
        self.last_spawn_ms = now_ms;
        self.time_frames = 0;
    }

    /// Begin a session: reset and enter the Active phase
    pub fn start(&mut self, now_ms: f64) {
        self.reset(now_ms);
        self.phase = GamePhase::Active;
        log::info!("session started (seed {})", self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Produce the renderable snapshot for this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            basket: BasketRect {
                x: self.basket.x,
                y: self.basket.y,
                width: self.basket.width,
                height: self.basket.height,
            },
            items: self
                .items
                .iter()
                .map(|i| ItemSprite {
                    x: i.pos.x,
                    y: i.pos.y,
                    radius: i.radius,
                    kind: i.kind,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_centered_at_init() {
        let state = GameState::new(1, 480.0, 640.0);
        assert_eq!(state.basket.x, (480.0 - BASKET_WIDTH) / 2.0);
        assert_eq!(state.basket.y, 640.0 - BASKET_BOTTOM_OFFSET);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_basket_clamp() {
        let mut basket = Basket::new(480.0, 640.0);
        basket.x = -50.0;
        basket.clamp_x(480.0);
        assert_eq!(basket.x, 0.0);

        basket.x = 1000.0;
        basket.clamp_x(480.0);
        assert_eq!(basket.x, 480.0 - basket.width);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut state = GameState::new(7, 480.0, 640.0);
        state.score = 12;
        state.lives = 1;
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            pos: glam::Vec2::new(100.0, 100.0),
            radius: ITEM_RADIUS,
            speed: 3.0,
            kind: ItemKind::Fruit,
        });

        state.reset(500.0);
        let first = (state.score, state.lives, state.items.len(), state.basket.x);
        state.reset(500.0);
        let second = (state.score, state.lives, state.items.len(), state.basket.x);

        assert_eq!(first, second);
        assert_eq!(first, (0, STARTING_LIVES, 0, (480.0 - BASKET_WIDTH) / 2.0));
        assert_eq!(state.last_spawn_ms, 500.0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(3, 480.0, 640.0);
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            pos: glam::Vec2::new(42.0, 17.0),
            radius: ITEM_RADIUS,
            speed: 2.5,
            kind: ItemKind::Bomb,
        });
        state.score = 4;

        let snap = state.snapshot();
        assert_eq!(snap.score, 4);
        assert_eq!(snap.lives, STARTING_LIVES);
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items[0].kind, ItemKind::Bomb);
        assert_eq!(snap.items[0].x, 42.0);
        assert_eq!(snap.basket.width, BASKET_WIDTH);
    }
}
