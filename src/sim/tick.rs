//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the whole game by `dt`: input resolution,
//! ball physics, collision response, life/level transitions, particle decay,
//! and camera shake. The shell drains `state.events` after each call and is
//! responsible for checking the quit command before the next one.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::collision::{circle_rect_collision, reflect_velocity};
use super::level;
use super::state::{BallState, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::lerp;

/// Input commands for a single tick (already decoded by the shell)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal pointer coordinate driving the paddle
    pub pointer_x: Option<f32>,
    /// Launch the stuck ball (edge-triggered)
    pub launch: bool,
    /// Hard session reset (edge-triggered)
    pub restart: bool,
    /// End the whole session; consumed by the shell's loop, not by `tick`
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    if input.restart {
        state.reset_session();
    }

    if let Some(pointer_x) = input.pointer_x {
        state.paddle.track_pointer(pointer_x);
    }

    match state.ball.state {
        BallState::Stuck => {
            state.ball.stick_to(&state.paddle);
            if input.launch {
                state.ball.launch(&mut state.rng);
                state.emit_sound(SoundEffect::Launch);
            }
        }
        BallState::Free => {
            advance_ball(state, dt);
            resolve_wall_collisions(state);

            if state.ball.pos.y - state.ball.radius > PLAY_HEIGHT {
                handle_ball_lost(state);
            } else {
                resolve_paddle_collision(state);
                resolve_brick_collision(state);
                check_level_clear(state);
            }
        }
    }

    update_particles(state, dt);
    update_shake(state, dt);
}

/// Renormalize speed to the difficulty target, then integrate position
///
/// The ramp replaces the velocity magnitude outright (direction preserved);
/// acceleration is never integrated, so the speed can neither run away nor
/// drop below the base.
fn advance_ball(state: &mut GameState, dt: f32) {
    let target = (BALL_BASE_SPEED
        + (state.level - 1) as f32 * SPEED_PER_LEVEL
        + state.score as f32 * SPEED_PER_POINT)
        .clamp(BALL_BASE_SPEED, BALL_MAX_SPEED);
    state.ball.set_speed(target);

    state.ball.record_trail();
    let step = state.ball.vel * dt;
    state.ball.pos += step;
}

/// Bounce off the left, right, and top boundaries
///
/// The bottom boundary is never a bounce - crossing it loses the ball.
fn resolve_wall_collisions(state: &mut GameState) {
    let ball = &mut state.ball;
    let mut hit_wall = false;

    if ball.pos.x - ball.radius <= 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
        hit_wall = true;
    } else if ball.pos.x + ball.radius >= PLAY_WIDTH {
        ball.pos.x = PLAY_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
        hit_wall = true;
    }
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        hit_wall = true;
    }

    if hit_wall {
        state.emit_sound(SoundEffect::WallHit);
    }
}

/// Life decrement on loss; session reset once lives run out
fn handle_ball_lost(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.emit_sound(SoundEffect::BallLost);
    log::info!("ball lost, {} lives remain", state.lives);

    if state.lives == 0 {
        state.reset_session();
    } else {
        state.ball.stick_to(&state.paddle);
    }
}

/// Paddle contact applies english, not plain reflection
///
/// The contact offset across the paddle maps linearly to a launch angle in
/// [-135 deg, -45 deg], straight-up at dead center, at max(base, current)
/// speed.
fn resolve_paddle_collision(state: &mut GameState) {
    // Only a descending ball can bounce off the paddle
    if state.ball.vel.y <= 0.0 {
        return;
    }

    let result = circle_rect_collision(state.ball.pos, state.ball.radius, &state.paddle.rect());
    if !result.hit {
        return;
    }

    let half_width = PADDLE_WIDTH * 0.5;
    let offset = ((state.ball.pos.x - state.paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let angle = lerp(
        -std::f32::consts::PI * 0.75,
        -std::f32::consts::PI * 0.25,
        (offset + 1.0) / 2.0,
    );
    let speed = state.ball.speed().max(BALL_BASE_SPEED);
    state.ball.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    // Nudge clear of the paddle to avoid re-trapping
    state.ball.pos.y -= result.penetration + 0.5;

    state.emit_sound(SoundEffect::PaddleHit);
    state.screen_shake = SHAKE_PADDLE;
}

/// Resolve at most one brick collision per tick
///
/// Candidates are visited in a fresh random permutation each tick so that
/// simultaneous overlaps carry no directional bias; storage order is never
/// disturbed. The single-sample test means a fast ball can tunnel a thin
/// brick - an accepted limitation, not corrected here.
fn resolve_brick_collision(state: &mut GameState) {
    let mut order: Vec<usize> = (0..state.bricks.len()).collect();
    order.shuffle(&mut state.rng);

    for idx in order {
        if !state.bricks[idx].alive {
            continue;
        }
        let result =
            circle_rect_collision(state.ball.pos, state.ball.radius, &state.bricks[idx].rect);
        if !result.hit {
            continue;
        }

        let brick = &mut state.bricks[idx];
        brick.alive = false;
        let center = brick.rect.center();
        let color = brick.color;

        state.score += BRICK_SCORE;
        state.ball.vel = reflect_velocity(state.ball.vel, result.normal);
        state.ball.pos += result.normal * (result.penetration + 0.6);

        state.emit_sound(SoundEffect::BrickBreak);
        state.screen_shake = state.screen_shake.max(SHAKE_BRICK);
        state.spawn_burst(center, color);

        // Only one brick may be destroyed per tick
        break;
    }
}

/// Once every brick in the batch is dead, advance to a denser level
fn check_level_clear(state: &mut GameState) {
    if state.bricks.iter().any(|b| b.alive) {
        return;
    }

    state.level += 1;
    state.emit_sound(SoundEffect::LevelClear);
    let rows = level::rows_for_level(state.level);
    log::info!("level {} cleared, next grid has {} rows", state.level - 1, rows);
    state.bricks = level::build_level(rows);
    state.ball.stick_to(&state.paddle);
}

/// Integrate particles, then drop the ones whose life ran out this tick
fn update_particles(state: &mut GameState, dt: f32) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
        particle.life -= dt;
    }
    state.particles.retain(|p| p.life > 0.0);
}

/// Refresh the jittered shake offset and decay the intensity
fn update_shake(state: &mut GameState, dt: f32) {
    if state.screen_shake > 0.0 {
        let amplitude = SHAKE_AMPLITUDE * state.screen_shake;
        state.shake_offset = Vec2::new(
            state.rng.random_range(-1.0..=1.0f32) * amplitude,
            state.rng.random_range(-1.0..=1.0f32) * amplitude,
        );
        state.screen_shake = (state.screen_shake - dt * SHAKE_DECAY).max(0.0);
    } else {
        state.shake_offset = Vec2::ZERO;
    }
}
