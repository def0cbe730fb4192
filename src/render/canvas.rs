//! Canvas 2D backend
//!
//! Executes a display list against the page's canvas element. Kept dumb on
//! purpose: all decisions about what to draw live in `scene`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{Shape, css_color};

/// Thin wrapper around a 2D rendering context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one frame
    pub fn draw(&self, shapes: &[Shape]) {
        for shape in shapes {
            match shape {
                Shape::Rect { pos, size, color } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx
                        .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Line { from, to, color } => {
                    self.ctx.set_stroke_style_str(&css_color(*color));
                    self.ctx.set_line_width(1.0);
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.stroke();
                }
            }
        }
    }
}
