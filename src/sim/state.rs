//! Simulation state and core types
//!
//! Everything a run needs lives on one owning struct, passed explicitly to
//! the tick loop and the renderer. No globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::instruction::{Direction, Instruction, Program};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Accepting instructions, nothing executing yet
    Idle,
    /// Draining the program queue
    Running,
    /// Program exhausted with no win/lose determination
    Stopped,
    /// Program completed on the goal cell
    Won,
    /// Robot landed on a hazard cell
    Lost,
}

impl RunPhase {
    /// Whether this phase halts the tick loop
    pub fn is_settled(&self) -> bool {
        !matches!(self, RunPhase::Running)
    }

    /// Whether Run may (re)start from this phase
    pub fn can_start(&self) -> bool {
        matches!(self, RunPhase::Idle | RunPhase::Stopped)
    }
}

/// In-flight animation for the current instruction; dropped at zero steps
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Animation {
    /// Pixel displacement applied once per tick
    pub step: Vec2,
    /// Ticks left before the instruction is complete
    pub remaining: u32,
}

impl Animation {
    pub fn new(instruction: &Instruction) -> Self {
        Self {
            step: instruction.step,
            remaining: instruction.steps,
        }
    }
}

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 24;

/// The robot marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    /// Top-left corner in canvas pixels
    pub pos: Vec2,
    pub size: f32,
    /// Recent positions for rendering (newest first)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                CANVAS_WIDTH / 2.0 - ROBOT_SIZE / 2.0,
                CANVAS_HEIGHT / 2.0 - ROBOT_SIZE / 2.0,
            ),
            size: ROBOT_SIZE,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }
}

impl Robot {
    /// Center point, used for grid cell lookups
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Grid cell under the robot's center
    pub fn cell(&self, grid: &Grid) -> (usize, usize) {
        grid.cell_index_at(self.center())
    }

    /// Record current position to trail (call each animated tick)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    /// Clear trail (on run start)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Keep the robot on the canvas; moves past an edge pin to it
    pub fn clamp_to_canvas(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, CANVAS_WIDTH - self.size);
        self.pos.y = self.pos.y.clamp(0.0, CANVAS_HEIGHT - self.size);
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Board seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: RunPhase,
    /// The robot
    pub robot: Robot,
    /// Not-yet-started instructions
    pub program: Program,
    /// The instruction currently executing, if any
    pub current: Option<Instruction>,
    /// Steps left on the current instruction
    pub animation: Option<Animation>,
    /// The board; read-only during a run
    pub grid: Grid,
}

impl SimState {
    /// A state with the standard board generated from `seed`
    pub fn new(seed: u64) -> Self {
        let center = Robot::default().center();
        let start = (
            (center.x / CELL_SIZE) as usize,
            (center.y / CELL_SIZE) as usize,
        );
        let grid = Grid::generate(GRID_COLS, GRID_ROWS, HAZARD_COUNT, seed, start);
        Self::with_grid(seed, grid)
    }

    /// A state over an explicit board (used by tests and plain no-goal play)
    pub fn with_grid(seed: u64, grid: Grid) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: RunPhase::Idle,
            robot: Robot::default(),
            program: Program::new(),
            current: None,
            animation: None,
            grid,
        }
    }

    /// Append a move to the program
    pub fn enqueue(&mut self, direction: Direction) {
        self.program.enqueue(direction);
        log::debug!(
            "queued {} ({} pending)",
            direction.label(),
            self.program.len()
        );
    }

    /// Begin draining the queue. Ignored after a win or loss; use
    /// [`SimState::reset`] to play again.
    pub fn start_run(&mut self) {
        if self.phase.can_start() {
            log::info!("running");
            self.robot.clear_trail();
            self.phase = RunPhase::Running;
        }
    }

    /// Fresh state with a newly generated board
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
        log::info!("board reset with seed {seed}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_starts_at_canvas_center_cell() {
        let robot = Robot::default();
        let grid = Grid::empty(GRID_COLS, GRID_ROWS);
        assert_eq!(robot.cell(&grid), (5, 5));
    }

    #[test]
    fn test_clamp_pins_to_edges() {
        let mut robot = Robot::default();
        robot.pos = Vec2::new(-12.0, 500.0);
        robot.clamp_to_canvas();
        assert_eq!(robot.pos, Vec2::new(0.0, CANVAS_HEIGHT - robot.size));
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut robot = Robot::default();
        for i in 0..(TRAIL_LENGTH * 2) {
            robot.pos.x = i as f32;
            robot.record_trail();
        }
        assert_eq!(robot.trail.len(), TRAIL_LENGTH);
        // Newest first
        assert_eq!(robot.trail[0].x, (TRAIL_LENGTH * 2 - 1) as f32);
    }

    #[test]
    fn test_start_run_is_ignored_after_loss() {
        let mut state = SimState::with_grid(0, Grid::empty(GRID_COLS, GRID_ROWS));
        state.phase = RunPhase::Lost;
        state.start_run();
        assert_eq!(state.phase, RunPhase::Lost);
    }

    #[test]
    fn test_reset_regenerates_board() {
        let mut state = SimState::new(1);
        state.enqueue(Direction::Left);
        state.phase = RunPhase::Won;
        state.reset(2);
        assert_eq!(state.phase, RunPhase::Idle);
        assert!(state.program.is_empty());
        assert_eq!(state.seed, 2);
    }
}
