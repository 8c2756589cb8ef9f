//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform
//! dependencies:
//! - One seeded RNG per game state
//! - Geometry recomputed from the viewport every tick
//! - Stable iteration order (tiles kept in generation order)

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod projection;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{ShipFootprint, TileBounds, check_ship_collision, find_support};
pub use geometry::{Frame, build_frame};
pub use projection::{ProjectionMode, Viewport, project, project_flat, project_perspective};
pub use scroll::{ScrollState, Steer};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Intent, apply_intent, tick};
pub use track::{Branch, BranchSampler, LaneWindow, TileCell, Track};
