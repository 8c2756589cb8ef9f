//! Screen-space geometry for one frame
//!
//! Rebuilt from scratch every tick in every phase, so a resize mid-run only
//! needs a new [`Viewport`].

use glam::Vec2;

use super::projection::{ProjectionMode, Viewport, project};
use super::state::GameState;

/// Projected primitives handed to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Vertical grid lines, then horizontal ones
    pub lines: Vec<[Vec2; 2]>,
    /// Tile quads in track order
    pub tiles: Vec<[Vec2; 4]>,
    pub ship: [Vec2; 3],
}

pub fn build_frame(state: &GameState, viewport: &Viewport, mode: ProjectionMode) -> Frame {
    let tuning = &state.tuning;
    let scroll = &state.scroll;
    let start = tuning.lane_start();
    let vertical = tuning.vertical_lines;

    let mut lines = Vec::with_capacity(vertical as usize + tuning.horizontal_lines as usize);

    for index in start..start + vertical {
        let x = scroll.line_x_from_index(index as f32, viewport);
        lines.push([
            project(mode, Vec2::new(x, 0.0), viewport),
            project(mode, Vec2::new(x, viewport.height), viewport),
        ]);
    }

    let xmin = scroll.line_x_from_index(start as f32, viewport);
    let xmax = scroll.line_x_from_index((start + vertical - 1) as f32, viewport);
    for index in 0..tuning.horizontal_lines {
        let y = scroll.line_y_from_index(index as f32, viewport);
        lines.push([
            project(mode, Vec2::new(xmin, y), viewport),
            project(mode, Vec2::new(xmax, y), viewport),
        ]);
    }

    let tiles = state
        .track
        .cells()
        .iter()
        .take(tuning.number_tiles)
        .map(|&cell| scroll.tile_corners(cell, viewport, mode))
        .collect();

    let ship = state
        .ship(viewport)
        .points
        .map(|p| project(mode, p, viewport));

    Frame { lines, tiles, ship }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(3, Tuning::default()).unwrap()
    }

    #[test]
    fn test_frame_counts() {
        let frame = build_frame(&state(), &Viewport::default(), ProjectionMode::Perspective);
        assert_eq!(frame.lines.len(), 8 + 15);
        assert_eq!(frame.tiles.len(), 16);
    }

    #[test]
    fn test_vertical_lines_meet_at_vanishing_point() {
        let vp = Viewport::default();
        let frame = build_frame(&state(), &vp, ProjectionMode::Perspective);
        let focal = vp.perspective_point();
        for line in &frame.lines[..8] {
            assert!(line[0].y.abs() < 1e-3);
            assert!((line[1] - focal).length() < 1e-3);
        }
    }

    #[test]
    fn test_flat_frame_is_unprojected() {
        let vp = Viewport::default();
        let state = state();
        let frame = build_frame(&state, &vp, ProjectionMode::Flat);
        assert_eq!(frame.ship, state.ship(&vp).points);
        let first = state.scroll.tile_bounds(state.track.cells()[0], &vp);
        assert_eq!(frame.tiles[0][0], first.min);
        assert_eq!(frame.tiles[0][2], first.max);
    }

    #[test]
    fn test_resize_rescales_geometry() {
        let state = state();
        let small = build_frame(&state, &Viewport::new(450.0, 200.0), ProjectionMode::Flat);
        let large = build_frame(&state, &Viewport::new(900.0, 400.0), ProjectionMode::Flat);
        for (a, b) in small.ship.iter().zip(large.ship.iter()) {
            assert!((*a * 2.0 - *b).length() < 1e-3);
        }
    }
}
