//! Forward and lateral scrolling
//!
//! The ship never moves: the grid scrolls toward it (`offset_y`) and drifts
//! sideways under it (`offset_x`). Both offsets are in pixels and are
//! recomputed against the viewport every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::TileBounds;
use super::projection::{ProjectionMode, Viewport, project};
use super::track::TileCell;
use crate::consts::REFERENCE_FPS;
use crate::tuning::Tuning;

/// Current steering input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

impl Steer {
    /// Drift direction of the world under the ship
    pub fn drift_sign(&self) -> f32 {
        match self {
            Steer::None => 0.0,
            // The grid slides right so the ship appears to move left
            Steer::Left => 1.0,
            Steer::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Sub-row forward progress in pixels, always below one row spacing
    pub offset_y: f32,
    /// Accumulated lateral drift in pixels
    pub offset_x: f32,
    /// Row currently at the camera plane
    pub row: u32,
    pub steer: Steer,

    lane_spacing: f32,
    row_spacing: f32,
    speed_y: f32,
    speed_x: f32,
}

impl ScrollState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            offset_y: 0.0,
            offset_x: 0.0,
            row: 0,
            steer: Steer::None,
            lane_spacing: tuning.vertical_lines_spacing,
            row_spacing: tuning.horizontal_lines_spacing,
            speed_y: tuning.speed_y,
            speed_x: tuning.speed_x,
        }
    }

    pub fn reset(&mut self) {
        self.offset_y = 0.0;
        self.offset_x = 0.0;
        self.row = 0;
        self.steer = Steer::None;
    }

    /// Lateral speed in percent of width per reference frame
    pub fn speed_x(&self) -> f32 {
        self.speed_x * self.steer.drift_sign()
    }

    #[inline]
    pub fn lane_spacing_px(&self, viewport: &Viewport) -> f32 {
        self.lane_spacing * viewport.width
    }

    #[inline]
    pub fn row_spacing_px(&self, viewport: &Viewport) -> f32 {
        self.row_spacing * viewport.height
    }

    /// Advance by `dt` seconds, calling `on_row` once per row boundary crossed
    ///
    /// Speeds are per reference frame, so `dt` is rescaled to a frame count
    /// first. Drift is applied after the forward scroll and is never snapped
    /// to the lane grid.
    pub fn advance(&mut self, dt: f32, viewport: &Viewport, mut on_row: impl FnMut(u32)) {
        let time_factor = dt.max(0.0) * REFERENCE_FPS;

        let speed_y = self.speed_y * viewport.height / 100.0;
        self.offset_y += speed_y * time_factor;

        let spacing_y = self.row_spacing_px(viewport);
        if spacing_y > 0.0 {
            while self.offset_y >= spacing_y {
                self.offset_y -= spacing_y;
                self.row += 1;
                on_row(self.row);
            }
        }

        let speed_x = self.speed_x() * viewport.width / 100.0;
        self.offset_x += speed_x * time_factor;
    }

    /// Screen x of vertical grid line `index` (lane `index` starts here)
    pub fn line_x_from_index(&self, index: f32, viewport: &Viewport) -> f32 {
        let central_line_x = viewport.perspective_point().x;
        central_line_x + (index - 0.5) * self.lane_spacing_px(viewport) + self.offset_x
    }

    /// Track-space y of horizontal grid line `index` counted from the camera row
    pub fn line_y_from_index(&self, index: f32, viewport: &Viewport) -> f32 {
        index * self.row_spacing_px(viewport) - self.offset_y
    }

    /// Track-space position of a tile's near-left corner
    pub fn tile_origin(&self, lane: i32, row: u32, viewport: &Viewport) -> Vec2 {
        let depth = row as f32 - self.row as f32;
        Vec2::new(
            self.line_x_from_index(lane as f32, viewport),
            self.line_y_from_index(depth, viewport),
        )
    }

    /// Unprojected bounds of a tile, used for collisions
    pub fn tile_bounds(&self, cell: TileCell, viewport: &Viewport) -> TileBounds {
        TileBounds {
            min: self.tile_origin(cell.lane, cell.row, viewport),
            max: self.tile_origin(cell.lane + 1, cell.row + 1, viewport),
        }
    }

    /// Projected tile quad: near-left, far-left, far-right, near-right
    pub fn tile_corners(&self, cell: TileCell, viewport: &Viewport, mode: ProjectionMode) -> [Vec2; 4] {
        let TileBounds { min, max } = self.tile_bounds(cell, viewport);
        [
            project(mode, Vec2::new(min.x, min.y), viewport),
            project(mode, Vec2::new(min.x, max.y), viewport),
            project(mode, Vec2::new(max.x, max.y), viewport),
            project(mode, Vec2::new(max.x, min.y), viewport),
        ]
    }

    /// Lane whose center is nearest the screen center
    pub fn lane_under_center(&self, viewport: &Viewport) -> i32 {
        let spacing = self.lane_spacing_px(viewport);
        if spacing <= 0.0 {
            return 0;
        }
        (-self.offset_x / spacing + 0.5).floor() as i32
    }
}
