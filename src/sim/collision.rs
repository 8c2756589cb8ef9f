//! Ship versus track collision
//!
//! Coarse point-in-box test in unprojected track space: the ship survives
//! while any of its three corners sits on a tracked tile.

use glam::Vec2;

use super::projection::Viewport;
use super::track::TileCell;
use crate::tuning::Tuning;

/// Axis-aligned tile bounds in track space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl TileBounds {
    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Ship triangle in track space: left base, nose, right base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipFootprint {
    pub points: [Vec2; 3],
}

impl ShipFootprint {
    /// The ship sits centered near the bottom edge, sized from the viewport
    pub fn from_viewport(viewport: &Viewport, tuning: &Tuning) -> Self {
        let center_x = viewport.width / 2.0;
        let base_y = tuning.ship_base_y_percent * viewport.height;
        let half_width = tuning.ship_width_percent * viewport.width / 2.0;
        let ship_height = tuning.ship_height_percent * viewport.height;

        Self {
            points: [
                Vec2::new(center_x - half_width, base_y),
                Vec2::new(center_x, base_y + ship_height),
                Vec2::new(center_x + half_width, base_y),
            ],
        }
    }

    pub fn overlaps(&self, bounds: &TileBounds) -> bool {
        self.points.iter().any(|p| bounds.contains(*p))
    }
}

/// Find the first tile holding the ship up
///
/// Tiles are scanned in generation order. The first tile lying more than one
/// row beyond `current_row` ends the scan with no support, even if a later
/// tile would have matched.
pub fn find_support(
    ship: &ShipFootprint,
    cells: &[TileCell],
    current_row: u32,
    bounds: impl Fn(TileCell) -> TileBounds,
) -> Option<TileCell> {
    for &cell in cells {
        if cell.row > current_row + 1 {
            return None;
        }
        if ship.overlaps(&bounds(cell)) {
            return Some(cell);
        }
    }
    None
}

/// `true` while the ship is over the track
pub fn check_ship_collision(
    ship: &ShipFootprint,
    cells: &[TileCell],
    current_row: u32,
    bounds: impl Fn(TileCell) -> TileBounds,
) -> bool {
    find_support(ship, cells, current_row, bounds).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scroll::ScrollState;

    fn setup() -> (Viewport, ScrollState, ShipFootprint) {
        let vp = Viewport::default();
        let tuning = Tuning::default();
        (vp, ScrollState::new(&tuning), ShipFootprint::from_viewport(&vp, &tuning))
    }

    #[test]
    fn test_ship_footprint_shape() {
        let (_, _, ship) = setup();
        let expected = [Vec2::new(405.0, 16.0), Vec2::new(450.0, 30.0), Vec2::new(495.0, 16.0)];
        for (p, e) in ship.points.iter().zip(expected) {
            assert!((*p - e).length() < 1e-3, "{p:?} != {e:?}");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let b = TileBounds { min: Vec2::ZERO, max: Vec2::new(10.0, 10.0) };
        assert!(b.contains(Vec2::new(10.0, 0.0)));
        assert!(!b.contains(Vec2::new(10.01, 5.0)));
    }

    #[test]
    fn test_ship_on_center_tile_is_safe() {
        let (vp, scroll, ship) = setup();
        let cells = [TileCell::new(0, 0)];
        let bounds = |c| scroll.tile_bounds(c, &vp);
        assert!(check_ship_collision(&ship, &cells, 0, bounds));
        assert_eq!(find_support(&ship, &cells, 0, bounds), Some(TileCell::new(0, 0)));
    }

    #[test]
    fn test_ship_beside_track_falls() {
        let (vp, scroll, ship) = setup();
        let cells = [TileCell::new(2, 0), TileCell::new(2, 1)];
        assert!(!check_ship_collision(&ship, &cells, 0, |c| scroll.tile_bounds(c, &vp)));
    }

    #[test]
    fn test_empty_track_falls() {
        let (vp, scroll, ship) = setup();
        assert!(!check_ship_collision(&ship, &[], 0, |c| scroll.tile_bounds(c, &vp)));
    }

    #[test]
    fn test_far_tile_first_aborts_scan() {
        let (vp, scroll, ship) = setup();
        // (0, 0) would hold the ship, but a far tile is examined first
        let cells = [TileCell::new(0, 2), TileCell::new(0, 0)];
        assert!(!check_ship_collision(&ship, &cells, 0, |c| scroll.tile_bounds(c, &vp)));
    }

    #[test]
    fn test_next_row_tile_is_within_window() {
        let (vp, mut scroll, ship) = setup();
        // Scrolled far enough that row 1 has reached the ship's base
        scroll.offset_y = 50.0;
        let cells = [TileCell::new(0, 1)];
        assert!(check_ship_collision(&ship, &cells, 0, |c| scroll.tile_bounds(c, &vp)));
    }

    #[test]
    fn test_lateral_drift_moves_tiles_out_from_under_ship() {
        let (vp, mut scroll, ship) = setup();
        let cells = [TileCell::new(0, 0)];
        scroll.offset_x = 300.0;
        assert!(!check_ship_collision(&ship, &cells, 0, |c| scroll.tile_bounds(c, &vp)));
        scroll.offset_x = 200.0;
        // Right base corner still over the tile
        assert!(check_ship_collision(&ship, &cells, 0, |c| scroll.tile_bounds(c, &vp)));
    }
}
