//! Single vanishing-point projection
//!
//! Track space is a flat plane where `x` is the lateral screen position and
//! `y` is the distance from the camera plane, both in pixels. Projection
//! squeezes that plane toward the perspective point so the tunnel narrows
//! and rises into one spot on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PERSPECTIVE_POINT_Y_PERCENT};

/// Exponent applied to the normalized remaining depth
const DEPTH_FALLOFF_POWER: i32 = 4;

/// How track space is mapped to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectionMode {
    /// Identity mapping (top-down debug view)
    Flat,
    #[default]
    Perspective,
}

impl ProjectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Flat => "Flat",
            ProjectionMode::Perspective => "Perspective",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" | "2d" => Some(ProjectionMode::Flat),
            "perspective" | "3d" => Some(ProjectionMode::Perspective),
            _ => None,
        }
    }
}

/// Current drawable area, supplied fresh every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The vanishing point: horizontally centered, three quarters up
    #[inline]
    pub fn perspective_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height * PERSPECTIVE_POINT_Y_PERCENT)
    }
}

/// Project a track-space point with the given mode
#[inline]
pub fn project(mode: ProjectionMode, point: Vec2, viewport: &Viewport) -> Vec2 {
    match mode {
        ProjectionMode::Flat => project_flat(point),
        ProjectionMode::Perspective => project_perspective(point, viewport),
    }
}

#[inline]
pub fn project_flat(point: Vec2) -> Vec2 {
    point
}

/// Project a track-space point toward the viewport's perspective point
///
/// Depth `y` is first scaled so that the full viewport height maps onto the
/// perspective point's height. Anything at or beyond that depth lands exactly
/// on the vanishing point; `y = 0` is returned without compression.
pub fn project_perspective(point: Vec2, viewport: &Viewport) -> Vec2 {
    let focal = viewport.perspective_point();
    if focal.y <= 0.0 || viewport.height <= 0.0 {
        return point;
    }

    let lin_y = (point.y * focal.y / viewport.height).min(focal.y);
    let factor = depth_factor(lin_y, focal.y);

    Vec2::new(
        focal.x + (point.x - focal.x) * factor,
        focal.y - factor * focal.y,
    )
}

/// Remaining-depth factor: 1 at the camera plane, 0 at the vanishing point
#[inline]
fn depth_factor(lin_y: f32, focal_y: f32) -> f32 {
    ((focal_y - lin_y) / focal_y).max(0.0).powi(DEPTH_FALLOFF_POWER)
}
