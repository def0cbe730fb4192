//! Board cells and the win/lose evaluator
//!
//! The grid is placed once at startup from a seeded RNG and stays read-only
//! for the rest of the run. Evaluation is a pure function of the robot's
//! pixel position and the grid contents.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::CELL_SIZE;

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Hazard,
    Goal,
}

/// Fixed-size board, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty board (the plain toy with no win/lose cells)
    pub fn empty(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows],
        }
    }

    /// Place one goal and up to `hazards` hazard cells from a seeded RNG.
    ///
    /// The robot's starting cell is kept empty so a run can always begin.
    /// The same seed always produces the same board.
    pub fn generate(cols: usize, rows: usize, hazards: u32, seed: u64, start: (usize, usize)) -> Self {
        let mut grid = Self::empty(cols, rows);
        let mut rng = Pcg32::seed_from_u64(seed);

        // Leave room for the goal and the start cell
        let hazards = (hazards as usize).min(cols * rows - 2);

        loop {
            let cell = (rng.random_range(0..cols), rng.random_range(0..rows));
            if cell != start {
                grid.set(cell.0, cell.1, Cell::Goal);
                break;
            }
        }

        let mut placed = 0;
        while placed < hazards {
            let cell = (rng.random_range(0..cols), rng.random_range(0..rows));
            if cell != start && grid.cell(cell.0, cell.1) == Cell::Empty {
                grid.set(cell.0, cell.1, Cell::Hazard);
                placed += 1;
            }
        }

        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Grid cell containing a pixel point, clamped to the board
    pub fn cell_index_at(&self, point: Vec2) -> (usize, usize) {
        let col = ((point.x / CELL_SIZE).floor() as i64).clamp(0, self.cols as i64 - 1);
        let row = ((point.y / CELL_SIZE).floor() as i64).clamp(0, self.rows as i64 - 1);
        (col as usize, row as usize)
    }

    /// Contents of the cell under a pixel point
    pub fn cell_at_point(&self, point: Vec2) -> Cell {
        let (col, row) = self.cell_index_at(point);
        self.cell(col, row)
    }

    /// All cells with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (((i % self.cols), (i / self.cols)), cell))
    }

    /// The goal cell, if the board has one
    pub fn goal(&self) -> Option<(usize, usize)> {
        self.iter()
            .find(|&(_, cell)| cell == Cell::Goal)
            .map(|(pos, _)| pos)
    }
}

/// Outcome signalled by the evaluator when the run must halt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Won,
    Lost,
}

/// Decide whether the run halts where the robot sits.
///
/// A hazard loses immediately; the goal only wins once the program is
/// exhausted. Anywhere else no determination is made.
pub fn evaluate(grid: &Grid, robot_center: Vec2, queue_empty: bool) -> Option<Verdict> {
    match grid.cell_at_point(robot_center) {
        Cell::Hazard => Some(Verdict::Lost),
        Cell::Goal if queue_empty => Some(Verdict::Won),
        _ => None,
    }
}
