//! Idle/demo steering
//!
//! Follows the path one row ahead: stay put while the lane under the ship
//! continues on the next row, otherwise slide toward the nearest lane that
//! does.

use super::projection::Viewport;
use super::scroll::Steer;
use super::state::GameState;
use super::tick::Intent;

/// Lane the ship should be over
pub fn target_lane(state: &GameState, viewport: &Viewport) -> i32 {
    let current = state.scroll.lane_under_center(viewport);
    let next_row = state.current_row() + 1;

    state
        .track
        .lanes_at(next_row)
        .min_by_key(|lane| (lane - current).abs())
        .unwrap_or(current)
}

/// Steering that moves the ship toward [`target_lane`]
pub fn desired_steer(state: &GameState, viewport: &Viewport) -> Steer {
    let spacing = state.scroll.lane_spacing_px(viewport);
    // Ship is centered over `lane` when the grid has drifted by -lane * spacing
    let target_offset = -(target_lane(state, viewport) as f32) * spacing;
    let error = target_offset - state.scroll.offset_x;

    // Close enough once within one tick of drift
    let tolerance = state.tuning.speed_x * viewport.width / 100.0;
    if error.abs() <= tolerance {
        Steer::None
    } else if error > 0.0 {
        Steer::Left
    } else {
        Steer::Right
    }
}

/// Intents that turn the `current` steer into the `desired` one
pub fn steer_intents(current: Steer, desired: Steer) -> Vec<Intent> {
    if current == desired {
        return Vec::new();
    }

    let mut intents = Vec::with_capacity(2);
    match current {
        Steer::Left => intents.push(Intent::SteerLeftStop),
        Steer::Right => intents.push(Intent::SteerRightStop),
        Steer::None => {}
    }
    match desired {
        Steer::Left => intents.push(Intent::SteerLeftStart),
        Steer::Right => intents.push(Intent::SteerRightStart),
        Steer::None => {}
    }
    intents
}
