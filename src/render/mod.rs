//! Rendering pipeline
//!
//! Split in two: `scene` builds a display list purely from simulation state,
//! and the wasm-only `canvas` backend executes it against a 2D context.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{Color, Shape, build_scene, css_color};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
