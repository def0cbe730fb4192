//! Fixed timestep simulation tick
//!
//! One tick: animate-or-dequeue, then evaluate the cell the robot stopped
//! on. Rendering is driven by the caller from the same state.

use super::grid::{Verdict, evaluate};
use super::instruction::Direction;
use super::state::{Animation, RunPhase, SimState};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Input commands for a single tick (one-shot, cleared by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start draining the queue (Run button)
    pub run: bool,
    /// Append a move to the program (direction buttons)
    pub queue: Option<Direction>,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    if let Some(direction) = input.queue {
        state.enqueue(direction);
    }
    if input.run {
        state.start_run();
    }

    if state.phase != RunPhase::Running {
        return;
    }
    state.time_ticks += 1;

    // Nothing in flight: pull the next instruction, or settle the run.
    if state.animation.is_none() {
        match state.program.dequeue_next() {
            Some(instruction) => {
                state.animation = Some(Animation::new(&instruction));
                state.current = Some(instruction);
            }
            None => {
                state.current = None;
                state.phase = match evaluate(&state.grid, state.robot.center(), true) {
                    Some(Verdict::Won) => RunPhase::Won,
                    Some(Verdict::Lost) => RunPhase::Lost,
                    None => RunPhase::Stopped,
                };
                log::info!("program finished: {:?}", state.phase);
                return;
            }
        }
    }

    // Apply exactly one animation step.
    if let Some(animation) = state.animation.as_mut() {
        state.robot.pos += animation.step;
        state.robot.clamp_to_canvas();
        state.robot.record_trail();
        animation.remaining -= 1;

        if animation.remaining == 0 {
            state.animation = None;
            state.current = None;
            // A finished move can end the run on a marked cell.
            match evaluate(&state.grid, state.robot.center(), state.program.is_empty()) {
                Some(Verdict::Lost) => {
                    state.phase = RunPhase::Lost;
                    log::info!("robot hit a hazard at {:?}", state.robot.cell(&state.grid));
                }
                Some(Verdict::Won) => {
                    state.phase = RunPhase::Won;
                    log::info!("robot reached the goal");
                }
                None => {}
            }
        }
    }
}

/// Fixed-rate tick scheduler
///
/// Converts wall-clock frame deltas into whole simulation ticks, capped per
/// frame to prevent spiral of death. Jitter in frame timing never changes
/// how far a given number of ticks moves the robot; it only changes how many
/// ticks a frame is granted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks owed for a frame that took `dt` seconds
    pub fn advance(&mut self, dt: f32) -> u32 {
        // A stalled tab is clamped rather than fast-forwarded
        self.accumulator += dt.min(0.25);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
