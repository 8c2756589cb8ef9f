//! Data-driven game balance
//!
//! Every gameplay constant in one serializable struct. Defaults mirror
//! [`crate::consts`]; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::ConfigError;

/// Relative odds of each outcome of the three-way branch draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchWeights {
    pub straight: u32,
    pub right: u32,
    pub left: u32,
}

impl Default for BranchWeights {
    fn default() -> Self {
        Self {
            straight: 1,
            right: 1,
            left: 1,
        }
    }
}

impl BranchWeights {
    pub fn total(&self) -> u32 {
        self.straight.saturating_add(self.right).saturating_add(self.left)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vertical grid lines; the generator uses `vertical_lines - 1` lanes
    pub vertical_lines: i32,
    /// Lane width as a fraction of viewport width
    pub vertical_lines_spacing: f32,
    pub horizontal_lines: u32,
    /// Row depth as a fraction of viewport height
    pub horizontal_lines_spacing: f32,

    /// Forward scroll (% of height per reference frame)
    pub speed_y: f32,
    /// Lateral drift while steering (% of width per reference frame)
    pub speed_x: f32,

    pub number_tiles: usize,
    pub pre_fill_tiles: usize,
    pub branch_weights: BranchWeights,

    pub ship_width_percent: f32,
    pub ship_base_y_percent: f32,
    pub ship_height_percent: f32,

    /// Seconds before the game over voice line
    pub game_over_voice_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            vertical_lines: VERTICAL_NUMBER_LINES,
            vertical_lines_spacing: VERTICAL_LINES_SPACING,
            horizontal_lines: HORIZONTAL_NUMBER_LINES,
            horizontal_lines_spacing: HORIZONTAL_LINES_SPACING,

            speed_y: SPEED_OFFSET_Y,
            speed_x: SPEED_X,

            number_tiles: NUMBER_TILES,
            pre_fill_tiles: NUMBER_PRE_FILL_TILES,
            branch_weights: BranchWeights::default(),

            ship_width_percent: SHIP_WIDTH_PERCENT,
            ship_base_y_percent: SHIP_BASE_Y_PERCENT,
            ship_height_percent: SHIP_HEIGHT_PERCENT,

            game_over_voice_delay: GAME_OVER_VOICE_DELAY,
        }
    }
}

impl Tuning {
    /// Leftmost generated lane
    pub fn lane_start(&self) -> i32 {
        crate::lane_window_start(self.vertical_lines)
    }

    /// Rightmost generated lane
    pub fn lane_end(&self) -> i32 {
        crate::lane_window_end(self.vertical_lines)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertical_lines < 3 {
            return Err(ConfigError::Invalid(format!(
                "vertical_lines must be at least 3, got {}",
                self.vertical_lines
            )));
        }
        if self.number_tiles == 0 {
            return Err(ConfigError::Invalid("number_tiles must be positive".into()));
        }
        if self.pre_fill_tiles > self.number_tiles {
            return Err(ConfigError::Invalid(format!(
                "pre_fill_tiles ({}) exceeds number_tiles ({})",
                self.pre_fill_tiles, self.number_tiles
            )));
        }
        if self.vertical_lines_spacing <= 0.0 || self.horizontal_lines_spacing <= 0.0 {
            return Err(ConfigError::Invalid("line spacings must be positive".into()));
        }
        if self.speed_y < 0.0 || self.speed_x < 0.0 {
            return Err(ConfigError::Invalid("speeds must not be negative".into()));
        }
        if self.branch_weights.total() == 0 {
            return Err(ConfigError::Invalid("branch weights must not all be zero".into()));
        }
        if self.game_over_voice_delay < 0.0 {
            return Err(ConfigError::Invalid("voice delay must not be negative".into()));
        }
        Ok(())
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.lane_start(), -3);
        assert_eq!(tuning.lane_end(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "speed_y": 1.2, "number_tiles": 20 }"#).unwrap();
        assert_eq!(tuning.speed_y, 1.2);
        assert_eq!(tuning.number_tiles, 20);
        assert_eq!(tuning.vertical_lines, VERTICAL_NUMBER_LINES);
    }

    #[test]
    fn test_rejects_prefill_larger_than_track() {
        let err = Tuning::from_json(r#"{ "number_tiles": 4, "pre_fill_tiles": 5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_weights() {
        let json = r#"{ "branch_weights": { "straight": 0, "right": 0, "left": 0 } }"#;
        assert!(matches!(Tuning::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_narrow_grid() {
        assert!(Tuning::from_json(r#"{ "vertical_lines": 2 }"#).is_err());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }
}
