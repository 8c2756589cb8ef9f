//! Per-tick simulation step
//!
//! Order within a tick: scroll forward (pruning and extending the track on
//! every row crossed), drift sideways, then test the ship against the track.

use serde::{Deserialize, Serialize};

use super::collision::check_ship_collision;
use super::projection::Viewport;
use super::scroll::Steer;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    SteerLeftStart,
    SteerLeftStop,
    SteerRightStart,
    SteerRightStop,
    StartOrRestart,
}

/// Apply one intent immediately
///
/// Steering is accepted in every phase but only drifts while running. A stop
/// only releases the direction it names.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::SteerLeftStart => state.scroll.steer = Steer::Left,
        Intent::SteerRightStart => state.scroll.steer = Steer::Right,
        Intent::SteerLeftStop => {
            if state.scroll.steer == Steer::Left {
                state.scroll.steer = Steer::None;
            }
        }
        Intent::SteerRightStop => {
            if state.scroll.steer == Steer::Right {
                state.scroll.steer = Steer::None;
            }
        }
        Intent::StartOrRestart => match state.phase {
            GamePhase::NotStarted | GamePhase::GameOver => state.start_or_restart(),
            GamePhase::Running => {}
        },
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, dt: f32, viewport: &Viewport) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let GameState {
        scroll,
        track,
        rng,
        events,
        score_text,
        ..
    } = &mut *state;
    scroll.advance(dt, viewport, |row| {
        *score_text = crate::score_text(row);
        track.generate(row, &mut *rng);
        events.push(GameEvent::RowAdvanced { row });
        log::debug!("Row {}", row);
    });

    let ship = state.ship(viewport);
    let row = state.current_row();
    let safe = check_ship_collision(&ship, state.track.cells(), row, |cell| {
        state.scroll.tile_bounds(cell, viewport)
    });

    if !safe {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            run: state.runs,
            row,
        });
        log::info!("GAME OVER at row {}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::sim::track::TileCell;
    use crate::tuning::Tuning;

    fn running() -> GameState {
        let mut state = GameState::new(12345, Tuning::default()).unwrap();
        apply_intent(&mut state, Intent::StartOrRestart);
        state.drain_events();
        state
    }

    #[test]
    fn test_title_screen_is_frozen() {
        let vp = Viewport::default();
        let mut state = GameState::new(12345, Tuning::default()).unwrap();
        apply_intent(&mut state, Intent::SteerLeftStart);
        for _ in 0..120 {
            tick(&mut state, TICK_DT, &vp);
        }
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.scroll.offset_y, 0.0);
        assert_eq!(state.scroll.offset_x, 0.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_start_only_from_idle_phases() {
        let mut state = running();
        assert_eq!(state.phase, GamePhase::Running);
        state.scroll.row = 3;
        apply_intent(&mut state, Intent::StartOrRestart);
        // Ignored mid-run: no reset, no event
        assert_eq!(state.current_row(), 3);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_straight_prefill_survives_and_scores() {
        let vp = Viewport::default();
        let mut state = running();
        // 60px rows at 3.2px/tick: 10 rows take under 200 ticks
        for _ in 0..190 {
            tick(&mut state, TICK_DT, &vp);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.current_row(), 10);
        assert_eq!(state.score_text, "SCORE:10");
        assert_eq!(state.track.len(), 16);
        assert!(state.track.cells().iter().all(|c| c.row >= 10));

        let rows: Vec<u32> = state
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::RowAdvanced { row } => Some(row),
                _ => None,
            })
            .collect();
        assert_eq!(rows, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_tile_ends_run_once() {
        let vp = Viewport::default();
        let mut state = running();
        state.track.set_cells(vec![TileCell::new(3, 0), TileCell::new(3, 1)]);

        tick(&mut state, TICK_DT, &vp);
        assert_eq!(state.phase, GamePhase::GameOver);
        tick(&mut state, TICK_DT, &vp);
        tick(&mut state, TICK_DT, &vp);

        let overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_steering_off_the_prefill_falls() {
        let vp = Viewport::default();
        let mut state = running();
        apply_intent(&mut state, Intent::SteerRightStart);
        // 27px/tick off a lone lane 0: gone in well under a second
        for _ in 0..40 {
            tick(&mut state, TICK_DT, &vp);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_stop_releases_only_matching_direction() {
        let mut state = running();
        apply_intent(&mut state, Intent::SteerLeftStart);
        apply_intent(&mut state, Intent::SteerRightStart);
        apply_intent(&mut state, Intent::SteerLeftStop);
        assert_eq!(state.steer(), Steer::Right);
        apply_intent(&mut state, Intent::SteerRightStop);
        assert_eq!(state.steer(), Steer::None);
    }

    #[test]
    fn test_restart_resets_run() {
        let vp = Viewport::default();
        let mut state = running();
        for _ in 0..100 {
            tick(&mut state, TICK_DT, &vp);
        }
        state.phase = GamePhase::GameOver;
        apply_intent(&mut state, Intent::SteerLeftStart);
        apply_intent(&mut state, Intent::StartOrRestart);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.scroll.offset_y, 0.0);
        assert_eq!(state.steer(), Steer::None);
        assert_eq!(state.score_text, "SCORE:0");
        assert_eq!(state.track.cells()[0], TileCell::new(0, 0));
    }

    #[test]
    fn test_determinism() {
        let vp = Viewport::default();
        let mut a = running();
        let mut b = running();
        for i in 0..600 {
            let intent = if (i / 30) % 2 == 0 {
                Intent::SteerLeftStart
            } else {
                Intent::SteerLeftStop
            };
            for state in [&mut a, &mut b] {
                apply_intent(state, intent);
                tick(state, TICK_DT, &vp);
            }
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.current_row(), b.current_row());
        assert_eq!(a.track.cells(), b.track.cells());
    }
}
