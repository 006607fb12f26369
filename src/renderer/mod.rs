//! Canvas 2D rendering
//!
//! Draws the per-frame snapshot produced by the simulation. No game logic
//! lives here: the renderer only consumes basket/item geometry, so the sim
//! can run headless under tests or the native binary.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{ItemKind, Snapshot};

const BASKET_COLOR: &str = "#4CAF50";
const FRUIT_COLOR: &str = "#f1c40f";
const BOMB_COLOR: &str = "#e74c3c";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Catch flash intensity, decays each frame
    flash: f32,
    reduced_motion: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, reduced_motion: bool) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            flash: 0.0,
            reduced_motion,
        })
    }

    /// Play area size in canvas pixels
    pub fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Trigger a brief full-screen flash on a fruit catch
    pub fn trigger_flash(&mut self) {
        if !self.reduced_motion {
            self.flash = 1.0;
        }
    }

    pub fn render(&mut self, snap: &Snapshot) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        // Items under the basket so a caught item never pops over it
        for item in &snap.items {
            let color = match item.kind {
                ItemKind::Fruit => FRUIT_COLOR,
                ItemKind::Bomb => BOMB_COLOR,
            };
            self.ctx.set_fill_style_str(color);
            self.ctx.begin_path();
            self.ctx
                .arc(
                    item.x as f64,
                    item.y as f64,
                    item.radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
            self.ctx.fill();
        }

        let b = &snap.basket;
        self.ctx.set_fill_style_str(BASKET_COLOR);
        self.ctx
            .fill_rect(b.x as f64, b.y as f64, b.width as f64, b.height as f64);

        if self.flash > 0.01 {
            self.ctx.set_global_alpha(self.flash as f64 * 0.25);
            self.ctx.set_fill_style_str("#ffffff");
            self.ctx.fill_rect(0.0, 0.0, w, h);
            self.ctx.set_global_alpha(1.0);
            self.flash *= 0.85;
        } else {
            self.flash = 0.0;
        }
    }
}
