//! Display-list construction for 2D primitives
//!
//! Pure translation from simulation state to drawing commands; nothing here
//! touches the platform, so every frame is testable.

use glam::Vec2;

use crate::cell_origin;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Cell, SimState};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
pub const GRID_LINE: Color = [1.0, 1.0, 1.0, 0.1];
pub const ROBOT: Color = [0.0, 0.0, 1.0, 1.0];
pub const HAZARD: Color = [0.85, 0.2, 0.16, 1.0];
pub const GOAL: Color = [0.16, 0.78, 0.43, 1.0];
pub const TRAIL: Color = [0.25, 0.45, 1.0, 1.0];

/// One drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { pos: Vec2, size: Vec2, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
}

/// Build the full frame for the current state, background first
pub fn build_scene(state: &SimState, settings: &Settings) -> Vec<Shape> {
    let mut shapes = Vec::new();

    shapes.push(Shape::Rect {
        pos: Vec2::ZERO,
        size: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        color: BACKGROUND,
    });

    // Marked cells under the grid lines
    for ((col, row), cell) in state.grid.iter() {
        let color = match cell {
            Cell::Hazard => HAZARD,
            Cell::Goal => GOAL,
            Cell::Empty => continue,
        };
        shapes.push(Shape::Rect {
            pos: cell_origin(col, row),
            size: Vec2::splat(CELL_SIZE),
            color,
        });
    }

    if settings.show_grid {
        // Half-pixel offset keeps 1px strokes crisp
        for i in 0..GRID_ROWS {
            let t = i as f32 * CELL_SIZE + 0.5;
            shapes.push(Shape::Line {
                from: Vec2::new(0.0, t),
                to: Vec2::new(CANVAS_WIDTH, t),
                color: GRID_LINE,
            });
            shapes.push(Shape::Line {
                from: Vec2::new(t, 0.0),
                to: Vec2::new(t, CANVAS_HEIGHT),
                color: GRID_LINE,
            });
        }
    }

    if settings.show_trail {
        shapes.extend(robot_trail(&state.robot.trail, state.robot.size));
    }

    shapes.push(Shape::Rect {
        pos: state.robot.pos,
        size: Vec2::splat(state.robot.size),
        color: ROBOT,
    });

    shapes
}

/// Fading rectangles along the robot's recent path (newest first)
fn robot_trail(trail: &[Vec2], robot_size: f32) -> Vec<Shape> {
    let len = trail.len() as f32;
    trail
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &pos)| {
            let age = i as f32 / len;
            let alpha = (1.0 - age) * 0.35;
            let size = robot_size * (1.0 - age * 0.5);
            let inset = (robot_size - size) / 2.0;
            Shape::Rect {
                pos: pos + Vec2::splat(inset),
                size: Vec2::splat(size),
                color: [TRAIL[0], TRAIL[1], TRAIL[2], alpha],
            }
        })
        .collect()
}

/// CSS rgba() string for a color
pub fn css_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (color[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        color[3].clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Grid;

    fn test_state() -> SimState {
        SimState::with_grid(0, Grid::empty(GRID_COLS, GRID_ROWS))
    }

    #[test]
    fn test_background_comes_first() {
        let scene = build_scene(&test_state(), &Settings::default());
        match &scene[0] {
            Shape::Rect { pos, size, color } => {
                assert_eq!(*pos, Vec2::ZERO);
                assert_eq!(*size, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));
                assert_eq!(*color, BACKGROUND);
            }
            other => panic!("expected background rect, got {other:?}"),
        }
    }

    #[test]
    fn test_robot_drawn_last_at_its_position() {
        let state = test_state();
        let scene = build_scene(&state, &Settings::default());
        match scene.last().unwrap() {
            Shape::Rect { pos, color, .. } => {
                assert_eq!(*pos, state.robot.pos);
                assert_eq!(*color, ROBOT);
            }
            other => panic!("expected robot rect, got {other:?}"),
        }
    }

    #[test]
    fn test_marked_cells_match_grid() {
        let mut state = test_state();
        state.grid.set(1, 1, Cell::Hazard);
        state.grid.set(2, 3, Cell::Hazard);
        state.grid.set(9, 9, Cell::Goal);

        let scene = build_scene(&state, &Settings::default());
        let hazards = scene
            .iter()
            .filter(|s| matches!(s, Shape::Rect { color, .. } if *color == HAZARD))
            .count();
        let goals = scene
            .iter()
            .filter(|s| matches!(s, Shape::Rect { color, .. } if *color == GOAL))
            .count();
        assert_eq!(hazards, 2);
        assert_eq!(goals, 1);
    }

    #[test]
    fn test_grid_lines_follow_setting() {
        let state = test_state();
        let lines = |settings: &Settings| {
            build_scene(&state, settings)
                .iter()
                .filter(|s| matches!(s, Shape::Line { .. }))
                .count()
        };

        let on = Settings::default();
        assert_eq!(lines(&on), GRID_ROWS * 2);

        let off = Settings {
            show_grid: false,
            ..Settings::default()
        };
        assert_eq!(lines(&off), 0);
    }

    #[test]
    fn test_css_color_formatting() {
        assert_eq!(css_color([0.0, 0.0, 1.0, 1.0]), "rgba(0, 0, 255, 1)");
        assert_eq!(css_color([1.0, 1.0, 1.0, 0.1]), "rgba(255, 255, 255, 0.1)");
    }
}
