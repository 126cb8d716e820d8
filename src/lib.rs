//! Neon Breakout - an arcade brick-breaker core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game flow)
//! - `audio`: Procedural tone synthesis and the playback boundary
//! - `settings`: In-memory presentation/audio preferences
//!
//! Display, input polling, and audio device I/O are external collaborators:
//! the shell feeds decoded commands in via [`sim::TickInput`], hands the
//! per-tick [`sim::Snapshot`] to a renderer, and routes drained
//! [`sim::GameEvent`]s to an [`audio::AudioSink`].

pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const PLAY_WIDTH: f32 = 600.0;
    pub const PLAY_HEIGHT: f32 = 400.0;

    /// Paddle defaults - rides a fixed lane near the bottom edge
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_Y: f32 = PLAY_HEIGHT - 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Minimum (and launch) ball speed
    pub const BALL_BASE_SPEED: f32 = 260.0;
    /// Maximum ball speed the difficulty ramp may reach
    pub const BALL_MAX_SPEED: f32 = 520.0;
    /// Speed added per cleared level
    pub const SPEED_PER_LEVEL: f32 = 15.0;
    /// Speed added per point of score
    pub const SPEED_PER_POINT: f32 = 0.02;
    /// Horizontal english applied on launch (uniform in +/- this bound)
    pub const LAUNCH_VX_MAX: f32 = 80.0;

    /// Brick grid defaults
    pub const BASE_BRICK_ROWS: u32 = 6;
    pub const MAX_BRICK_ROWS: u32 = 9;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_MARGIN: f32 = 4.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Top of the brick grid
    pub const BRICK_TOP: f32 = 50.0;
    /// Horizontal field margin on each side of the grid
    pub const FIELD_MARGIN_X: f32 = 20.0;
    /// Score awarded per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Session defaults
    pub const START_LIVES: u8 = 3;

    /// Particle burst per destroyed brick
    pub const PARTICLES_PER_BRICK: usize = 14;
    /// Downward acceleration on particles (pixels/s^2)
    pub const PARTICLE_GRAVITY: f32 = 60.0;

    /// Camera shake intensity on paddle contact
    pub const SHAKE_PADDLE: f32 = 0.08;
    /// Camera shake intensity floor on brick destruction
    pub const SHAKE_BRICK: f32 = 0.06;
    /// Shake decay rate (intensity/s)
    pub const SHAKE_DECAY: f32 = 2.6;
    /// Pixel amplitude of the jittered shake offset at intensity 1.0
    pub const SHAKE_AMPLITUDE: f32 = 6.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
