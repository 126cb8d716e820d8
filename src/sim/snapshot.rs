//! Immutable per-tick view for the render collaborator
//!
//! The simulation never draws. After each tick the shell takes a
//! [`Snapshot`] and hands it to whatever does the actual pixel work; the
//! borrowed slices keep it copy-free and read-only.

use glam::Vec2;

use super::state::{Ball, Brick, GameState, Paddle, Particle};

/// HUD scalars for text overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// True while the ball rides the paddle (drives the launch prompt)
    pub ball_stuck: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub ball: &'a Ball,
    pub paddle: &'a Paddle,
    pub bricks: &'a [Brick],
    pub particles: &'a [Particle],
    pub hud: Hud,
    /// Jittered camera offset in pixels
    pub shake_offset: Vec2,
}

impl GameState {
    /// Borrow the current frame's render data
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ball: &self.ball,
            paddle: &self.paddle,
            bricks: &self.bricks,
            particles: &self.particles,
            hud: Hud {
                score: self.score,
                lives: self.lives,
                level: self.level,
                ball_stuck: self.ball.is_stuck(),
            },
            shake_offset: self.shake_offset,
        }
    }
}
