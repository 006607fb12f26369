//! Catch Nano - a falling-fruit catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `renderer`: Canvas 2D rendering (browser only)
//! - `settings`: Player preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fallback play area size; the real size is read from the canvas at init
    pub const DEFAULT_CANVAS_WIDTH: f32 = 480.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 640.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 80.0;
    pub const BASKET_HEIGHT: f32 = 20.0;
    /// Distance from the canvas bottom to the basket top
    pub const BASKET_BOTTOM_OFFSET: f32 = 40.0;
    /// Horizontal movement per frame while an arrow key is held
    pub const BASKET_SPEED: f32 = 6.0;

    /// Item defaults
    pub const ITEM_RADIUS: f32 = 10.0;
    /// Fall speed in pixels per frame, uniform in [MIN, MAX)
    pub const ITEM_MIN_SPEED: f32 = 2.0;
    pub const ITEM_MAX_SPEED: f32 = 4.0;
    /// Probability that a spawned item is a bomb
    pub const BOMB_CHANCE: f64 = 0.2;

    /// Milliseconds between item spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Lives at session start
    pub const STARTING_LIVES: i32 = 3;
}
