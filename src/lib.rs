//! Robo Grid - a programmable grid robot toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (instruction queue, animator, grid evaluation)
//! - `render`: Display-list renderer with a Canvas 2D backend
//! - `settings`: Display preferences

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the 30 ms instruction timer)
    pub const SIM_DT: f32 = 0.03;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 440.0;
    pub const CANVAS_HEIGHT: f32 = 440.0;

    /// Grid cell size in pixels
    pub const CELL_SIZE: f32 = 40.0;
    /// Grid dimensions in cells
    pub const GRID_COLS: usize = 11;
    pub const GRID_ROWS: usize = 11;

    /// Robot defaults
    pub const ROBOT_SIZE: f32 = 20.0;

    /// Animation ticks per instruction; one instruction spans one full cell
    pub const ANIM_STEPS: u32 = 5;
    /// Pixel displacement applied on each animated tick
    pub const STEP_PX: f32 = CELL_SIZE / ANIM_STEPS as f32;

    /// Hazard cells placed on a generated board
    pub const HAZARD_COUNT: u32 = 8;
}

/// Top-left pixel of a grid cell
#[inline]
pub fn cell_origin(col: usize, row: usize) -> Vec2 {
    Vec2::new(col as f32 * consts::CELL_SIZE, row as f32 * consts::CELL_SIZE)
}

/// Center pixel of a grid cell
#[inline]
pub fn cell_center(col: usize, row: usize) -> Vec2 {
    cell_origin(col, row) + Vec2::splat(consts::CELL_SIZE / 2.0)
}
