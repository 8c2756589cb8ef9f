//! Galaxy Runner - an endless tunnel runner
//!
//! Core modules:
//! - `sim`: Simulation (projection, track generation, scrolling, collisions, game state)
//! - `game`: Game controller wiring the simulation to audio, timers and HUD text
//! - `renderer`: Flattening projected geometry into GPU-ready vertex lists
//! - `audio`: Sound clip catalogue and playback backend seam
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{ConfigError, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate the scroll speeds are expressed against
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Fixed tick used by the native loop
    pub const TICK_DT: f32 = 1.0 / REFERENCE_FPS;

    /// Default window size
    pub const DEFAULT_WIDTH: f32 = 900.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    /// Vanishing point height as a fraction of the viewport height
    pub const PERSPECTIVE_POINT_Y_PERCENT: f32 = 0.75;

    /// Grid lines running into the distance (lane window is one narrower)
    pub const VERTICAL_NUMBER_LINES: i32 = 8;
    /// Lane spacing as a fraction of viewport width
    pub const VERTICAL_LINES_SPACING: f32 = 0.4;

    /// Grid lines across the track
    pub const HORIZONTAL_NUMBER_LINES: u32 = 15;
    /// Row spacing as a fraction of viewport height
    pub const HORIZONTAL_LINES_SPACING: f32 = 0.15;

    /// Forward scroll, percent of viewport height per reference frame
    pub const SPEED_OFFSET_Y: f32 = 0.8;
    /// Lateral drift, percent of viewport width per reference frame
    pub const SPEED_X: f32 = 3.0;

    /// Tracked tile cells
    pub const NUMBER_TILES: usize = 16;
    /// Straight run at lane 0 laid down before generation starts
    pub const NUMBER_PRE_FILL_TILES: usize = 15;

    /// Ship triangle, as fractions of the viewport
    pub const SHIP_WIDTH_PERCENT: f32 = 0.1;
    pub const SHIP_BASE_Y_PERCENT: f32 = 0.04;
    pub const SHIP_HEIGHT_PERCENT: f32 = 0.035;

    /// Seconds between the impact sound and the game over voice line
    pub const GAME_OVER_VOICE_DELAY: f32 = 1.5;
}

/// Leftmost lane the generator may use for a grid of `vertical_lines` lines
#[inline]
pub fn lane_window_start(vertical_lines: i32) -> i32 {
    -(vertical_lines / 2) + 1
}

/// Rightmost lane the generator may use for a grid of `vertical_lines` lines
#[inline]
pub fn lane_window_end(vertical_lines: i32) -> i32 {
    lane_window_start(vertical_lines) + vertical_lines - 2
}

/// Format the HUD score line
#[inline]
pub fn score_text(row: u32) -> String {
    format!("SCORE:{}", row)
}
