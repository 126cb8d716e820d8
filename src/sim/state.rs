//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by [`GameState`].
//! Entities never reference each other: the tick loop detects collisions by
//! iterating the collections and resolves them by direct mutation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level;
use super::rect::Rect;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Ball lifecycle state
///
/// Loss is transient: the tick that sees the ball cross the bottom boundary
/// decrements lives and immediately re-enters `Stuck` (or resets the whole
/// session), so it never appears as a stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Riding the paddle, physics suspended, waiting for a launch command
    Stuck,
    /// Free motion
    Free,
}

/// Maximum number of trail positions to store (rendering only)
pub const TRAIL_LENGTH: usize = 14;

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
    /// Recent positions, newest last (not part of simulation state)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0),
            vel: Vec2::new(0.0, -BALL_BASE_SPEED),
            radius: BALL_RADIUS,
            state: BallState::Stuck,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    #[inline]
    pub fn is_stuck(&self) -> bool {
        self.state == BallState::Stuck
    }

    /// Current speed (velocity magnitude)
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Rescale velocity to the target speed, preserving direction
    pub fn set_speed(&mut self, target: f32) {
        let current = self.vel.length();
        if current == 0.0 {
            self.vel = Vec2::new(0.0, -target);
        } else {
            self.vel *= target / current;
        }
    }

    /// Record current position to the trail (call each tick while free)
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }

    /// Pin the ball to the paddle's top center and suspend physics
    pub fn stick_to(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), PADDLE_Y - self.radius - 1.0);
        self.vel = Vec2::new(0.0, -BALL_BASE_SPEED);
        self.state = BallState::Stuck;
        self.trail.clear();
    }

    /// Launch from the stuck state: mild random horizontal english, strong
    /// fixed upward component
    pub fn launch(&mut self, rng: &mut Pcg32) {
        if self.state == BallState::Stuck {
            let vx = rng.random_range(-LAUNCH_VX_MAX..=LAUNCH_VX_MAX);
            self.vel = Vec2::new(vx, -BALL_BASE_SPEED);
            self.state = BallState::Free;
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle, driven purely by the external pointer coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge; y, width, and height are fixed constants
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (PLAY_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    /// Collision rectangle at the fixed paddle lane
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + PADDLE_WIDTH / 2.0
    }

    /// Center the paddle on the pointer, clamped to the playfield
    pub fn track_pointer(&mut self, pointer_x: f32) {
        self.x = (pointer_x - PADDLE_WIDTH / 2.0).clamp(0.0, PLAY_WIDTH - PADDLE_WIDTH);
    }
}

/// RGB color tag (visual only, chosen per brick row)
pub type Color = [u8; 3];

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub alive: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            alive: true,
        }
    }
}

/// Maximum particles (oldest evicted first when exceeded)
pub const MAX_PARTICLES: usize = 256;

/// Particle spawn speed band (pixels/s)
pub const PARTICLE_SPEED_MIN: f32 = 40.0;
pub const PARTICLE_SPEED_MAX: f32 = 200.0;
/// Particle life budget range (seconds)
pub const PARTICLE_LIFE_MIN: f32 = 0.25;
pub const PARTICLE_LIFE_MAX: f32 = 0.6;

/// A short-lived emissive point for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Remaining life in seconds; pruned the tick this reaches zero
    pub life: f32,
}

impl Particle {
    /// Spawn with a uniform random direction, speed, and life budget
    pub fn spawn(rng: &mut Pcg32, pos: Vec2, color: Color) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
        }
    }
}

/// Events emitted during a tick for external collaborators, drained by the
/// shell after each `tick` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A feedback sound should be played
    Sound(SoundEffect),
}

fn session_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic for a given seed + input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG - the only source of randomness in the simulation
    #[serde(skip, default = "session_rng")]
    pub(crate) rng: Pcg32,
    /// Remaining lives
    pub lives: u8,
    /// Score, monotonically non-decreasing within a session
    pub score: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Camera shake intensity, decays over time
    pub screen_shake: f32,
    /// Jittered pixel offset for the renderer, refreshed while shaking
    #[serde(skip)]
    pub shake_offset: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Active brick batch
    pub bricks: Vec<Brick>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Events emitted by the current tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let paddle = Paddle::default();
        let mut ball = Ball::new();
        ball.stick_to(&paddle);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: START_LIVES,
            score: 0,
            level: 1,
            time_ticks: 0,
            screen_shake: 0.0,
            shake_offset: Vec2::ZERO,
            ball,
            paddle,
            bricks: level::build_level(level::rows_for_level(1)),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Full session reset: counters to initial values, bricks regenerated at
    /// base difficulty, particles cleared, ball re-pinned to the paddle.
    /// The event queue is left alone so sounds emitted earlier in the same
    /// tick still reach the audio collaborator.
    pub fn reset_session(&mut self) {
        self.lives = START_LIVES;
        self.score = 0;
        self.level = 1;
        self.bricks = level::build_level(level::rows_for_level(1));
        self.particles.clear();
        self.screen_shake = 0.0;
        self.shake_offset = Vec2::ZERO;
        self.ball.stick_to(&self.paddle);
        log::info!("session reset (seed {})", self.seed);
    }

    /// Queue a sound-trigger event for the audio collaborator
    pub fn emit_sound(&mut self, effect: SoundEffect) {
        self.events.push(GameEvent::Sound(effect));
    }

    /// Spawn a particle burst at a brick's center in the brick's color
    pub fn spawn_burst(&mut self, pos: Vec2, color: Color) {
        for _ in 0..PARTICLES_PER_BRICK {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let particle = Particle::spawn(&mut self.rng, pos, color);
            self.particles.push(particle);
        }
    }
}
