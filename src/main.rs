//! Neon Breakout headless shell
//!
//! Drives the deterministic core with a scripted auto-paddle, standing in
//! for the window/input/audio collaborators. A windowed shell replaces the
//! scripted input with decoded pointer/button commands, hands each tick's
//! snapshot to a renderer, and attaches a real [`AudioSink`] - the
//! simulation side stays byte-for-byte the same.
//!
//! Set `BREAKOUT_REALTIME=1` to gate the loop at the 60 Hz tick rate, and
//! `BREAKOUT_DUMP_STATE=1` to print the final session state as JSON.

use std::time::{Duration, Instant};

use neon_breakout::Settings;
use neon_breakout::audio::{AudioManager, AudioSink};
use neon_breakout::consts::*;
use neon_breakout::sim::{GameEvent, GameState, TickInput, tick};

/// One minute of simulated play
const DEMO_TICKS: u64 = 60 * 60;
/// Tick at which the scripted session launches the ball
const LAUNCH_TICK: u64 = 30;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    // Headless: no audio device, the manager silently drops triggers
    let sink: Option<Box<dyn AudioSink>> = None;
    let mut audio = AudioManager::new(sink);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);

    let seed = 0xC0FFEE;
    let mut state = GameState::new(seed);
    log::info!("starting demo session, seed {seed:#x}");

    let realtime = std::env::var_os("BREAKOUT_REALTIME").is_some();
    let tick_period = Duration::from_secs_f32(SIM_DT);
    let mut sounds_played: u64 = 0;

    for tick_index in 0..DEMO_TICKS {
        let frame_start = Instant::now();

        // Scripted collaborator: the pointer shadows the ball, launching
        // shortly after every re-stick
        let input = TickInput {
            pointer_x: Some(state.ball.pos.x),
            launch: state.ball.is_stuck() && tick_index % 120 == LAUNCH_TICK % 120,
            ..Default::default()
        };
        // Quit is a shell concern, checked once per tick before simulating
        if input.quit {
            break;
        }
        tick(&mut state, &input, SIM_DT);

        for &event in &state.events {
            match event {
                GameEvent::Sound(effect) => {
                    log::debug!("tick {tick_index}: sound {effect:?}");
                    audio.play(effect);
                    sounds_played += 1;
                }
            }
        }

        let snapshot = state.snapshot();
        if tick_index % 600 == 0 {
            log::info!(
                "tick {tick_index}: score {} lives {} level {} bricks alive {}",
                snapshot.hud.score,
                snapshot.hud.lives,
                snapshot.hud.level,
                snapshot.bricks.iter().filter(|b| b.alive).count(),
            );
        }

        if realtime {
            if let Some(rest) = tick_period.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    log::info!(
        "demo finished: score {} level {} lives {} ({sounds_played} sound triggers)",
        state.score,
        state.level,
        state.lives,
    );

    if std::env::var_os("BREAKOUT_DUMP_STATE").is_some() {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }
}
