//! Move instructions and the FIFO program queue
//!
//! A program is an ordered list of directional moves. Instructions are
//! immutable once built and leave the queue the moment execution starts.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ANIM_STEPS, STEP_PX};

/// The four moves a program can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Display label, as shown in the program list
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit displacement in canvas space (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// One queued move: a per-step pixel delta applied `steps` times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub direction: Direction,
    /// Pixel displacement applied on each animated tick
    pub step: Vec2,
    /// Ticks the move takes to complete
    pub steps: u32,
}

impl Instruction {
    /// The standard one-cell move in a direction
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            step: direction.unit() * STEP_PX,
            steps: ANIM_STEPS,
        }
    }

    /// Total displacement once fully executed
    pub fn total_displacement(&self) -> Vec2 {
        self.step * self.steps as f32
    }
}

/// FIFO queue of not-yet-started instructions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    queue: VecDeque<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move to the tail of the program
    pub fn enqueue(&mut self, direction: Direction) {
        self.queue.push_back(Instruction::new(direction));
    }

    /// Remove and return the head, or `None` when the program is exhausted
    pub fn dequeue_next(&mut self) -> Option<Instruction> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Pending instructions in execution order
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.queue.iter()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_SIZE;

    #[test]
    fn test_enqueue_preserves_order() {
        let mut program = Program::new();
        program.enqueue(Direction::Right);
        program.enqueue(Direction::Up);
        program.enqueue(Direction::Right);

        let labels: Vec<_> = program.iter().map(|i| i.direction.label()).collect();
        assert_eq!(labels, vec!["right", "up", "right"]);

        assert_eq!(program.dequeue_next().unwrap().direction, Direction::Right);
        assert_eq!(program.dequeue_next().unwrap().direction, Direction::Up);
        assert_eq!(program.dequeue_next().unwrap().direction, Direction::Right);
        assert!(program.dequeue_next().is_none());
    }

    #[test]
    fn test_instruction_spans_one_cell() {
        for dir in Direction::ALL {
            let instr = Instruction::new(dir);
            let total = instr.total_displacement();
            assert_eq!(total, dir.unit() * CELL_SIZE);
        }
    }

    #[test]
    fn test_dequeue_empty_signals_none() {
        let mut program = Program::new();
        assert!(program.is_empty());
        assert!(program.dequeue_next().is_none());
    }
}
