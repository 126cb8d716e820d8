//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (owned by `GameState`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, circle_rect_collision, reflect_velocity};
pub use level::{PALETTE, build_level, rows_for_level};
pub use rect::Rect;
pub use snapshot::{Hud, Snapshot};
pub use state::{Ball, BallState, Brick, Color, GameEvent, GameState, Paddle, Particle};
pub use tick::{TickInput, tick};
