//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod instruction;
pub mod state;
pub mod tick;

pub use grid::{Cell, Grid, Verdict, evaluate};
pub use instruction::{Direction, Instruction, Program};
pub use state::{Animation, Robot, RunPhase, SimState, TRAIL_LENGTH};
pub use tick::{FixedStep, TickInput, tick};
