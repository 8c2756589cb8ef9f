//! Game state and core simulation types
//!
//! Everything that changes during a run lives in [`GameState`] and is only
//! touched from the tick and intent handlers.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::ShipFootprint;
use super::projection::Viewport;
use super::scroll::{ScrollState, Steer};
use super::track::Track;
use crate::settings::ConfigError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, tunnel frozen
    #[default]
    NotStarted,
    /// Scrolling and colliding
    Running,
    /// Fell off the track; waits for a restart
    GameOver,
}

/// Things that happened during a tick, drained by the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began; `restart` is set when it follows a game over
    RunStarted { run: u32, restart: bool },
    /// The camera reached a new row
    RowAdvanced { row: u32 },
    /// The ship left the track
    GameOver { run: u32, row: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the generator was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub scroll: ScrollState,
    pub track: Track,
    /// HUD line, refreshed on every row advance
    pub score_text: String,
    /// Runs started so far
    pub runs: u32,
    /// Ticks simulated while running
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state ready on the title screen
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let mut state = Self {
            seed,
            phase: GamePhase::NotStarted,
            scroll: ScrollState::new(&tuning),
            track: Track::new(&tuning)?,
            score_text: crate::score_text(0),
            runs: 0,
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.reset();

        Ok(state)
    }

    /// Zero scroll, rebuild the track and clear the score
    ///
    /// Leaves the phase alone. The generated tail past the pre-fill comes
    /// from the shared generator.
    pub fn reset(&mut self) {
        self.scroll.reset();
        self.track.reset(&mut self.rng);
        self.score_text = crate::score_text(0);
    }

    /// Begin a run from the title screen or after a game over
    pub fn start_or_restart(&mut self) {
        let restart = self.phase == GamePhase::GameOver;
        self.reset();
        self.runs += 1;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::RunStarted {
            run: self.runs,
            restart,
        });
        log::info!("Run {} started", self.runs);
    }

    /// Row the camera is on
    #[inline]
    pub fn current_row(&self) -> u32 {
        self.scroll.row
    }

    pub fn steer(&self) -> Steer {
        self.scroll.steer
    }

    pub fn ship(&self, viewport: &Viewport) -> ShipFootprint {
        ShipFootprint::from_viewport(viewport, &self.tuning)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::track::TileCell;

    #[test]
    fn test_new_state_waits_on_title() {
        let state = GameState::new(1, Tuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.score_text, "SCORE:0");
        assert_eq!(state.track.len(), 16);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let tuning = Tuning {
            number_tiles: 0,
            ..Default::default()
        };
        assert!(GameState::new(1, tuning).is_err());
    }

    #[test]
    fn test_reset_twice_matches_reset_once() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        state.scroll.offset_x = 40.0;
        state.scroll.offset_y = 12.0;
        state.scroll.row = 9;
        state.score_text = "SCORE:9".into();

        state.reset();
        let once = (state.scroll.clone(), state.score_text.clone(), state.track.cells().to_vec());
        state.reset();
        let twice = (state.scroll.clone(), state.score_text.clone(), state.track.cells().to_vec());

        assert_eq!(once, twice);
        assert_eq!(state.scroll.offset_x, 0.0);
        assert_eq!(state.scroll.offset_y, 0.0);
        assert_eq!(state.current_row(), 0);
        // 15 pre-filled cells leave room for exactly one straight continuation
        let expected: Vec<TileCell> = (0..16).map(|r| TileCell::new(0, r)).collect();
        assert_eq!(state.track.cells(), expected.as_slice());
    }

    #[test]
    fn test_start_then_restart_events() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        state.start_or_restart();
        state.phase = GamePhase::GameOver;
        state.start_or_restart();

        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::RunStarted { run: 1, restart: false },
                GameEvent::RunStarted { run: 2, restart: true },
            ]
        );
        assert!(state.drain_events().is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }
}
